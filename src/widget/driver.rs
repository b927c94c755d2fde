use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use super::carousel::Carousel;

pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(4);

/// Input the mounted carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// The viewport changed to this width.
    Resize(u32),
    Previous,
    Next,
    GoTo(usize),
    /// Pointer entered (`true`) or left (`false`) a card.
    Hover(bool),
}

/// A mounted carousel: owns the auto-advance timer and the event loop.
///
/// Dropping the handle unmounts the carousel and stops its timer.
pub struct CarouselHandle {
    events: mpsc::UnboundedSender<CarouselEvent>,
    position: watch::Receiver<Carousel>,
    task: JoinHandle<()>,
}

/// Start driving `carousel` on the current tokio runtime.
pub fn mount(carousel: Carousel, period: Duration) -> CarouselHandle {
    let (events, event_rx) = mpsc::unbounded_channel();
    let (position_tx, position) = watch::channel(carousel);
    let task = tokio::spawn(run(carousel, period, event_rx, position_tx));
    debug!(cards = carousel.len(), ?period, "carousel mounted");

    CarouselHandle {
        events,
        position,
        task,
    }
}

impl CarouselHandle {
    /// Queue an event. Returns `false` once the carousel is gone.
    pub fn send(&self, event: CarouselEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// The latest published position.
    pub fn position(&self) -> Carousel {
        *self.position.borrow()
    }

    /// Wait for the next position change.
    pub async fn changed(&mut self) -> Option<Carousel> {
        self.position.changed().await.ok()?;
        Some(*self.position.borrow_and_update())
    }

    /// A separate observer of position changes.
    pub fn subscribe(&self) -> watch::Receiver<Carousel> {
        self.position.clone()
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut carousel: Carousel,
    period: Duration,
    mut events: mpsc::UnboundedReceiver<CarouselEvent>,
    position: watch::Sender<Carousel>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut paused = false;

    loop {
        let changed = tokio::select! {
            _ = ticker.tick(), if !paused => carousel.tick(),
            event = events.recv() => {
                let Some(event) = event else { break };
                trace!(?event, "carousel event");
                match event {
                    CarouselEvent::Resize(width) => carousel.resize(width),
                    CarouselEvent::Hover(hovering) => {
                        paused = hovering;
                        if !hovering {
                            ticker.reset();
                        }
                        false
                    }
                    CarouselEvent::Previous | CarouselEvent::Next | CarouselEvent::GoTo(_) => {
                        let before = carousel.page();
                        match event {
                            CarouselEvent::Previous => carousel.previous(),
                            CarouselEvent::Next => carousel.next(),
                            CarouselEvent::GoTo(page) => carousel.go_to(page),
                            _ => {}
                        }
                        ticker.reset();
                        carousel.page() != before
                    }
                }
            }
        };

        if changed {
            position.send_replace(carousel);
        }
    }

    debug!("carousel unmounted");
}
