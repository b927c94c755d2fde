use tracing::{info, warn};

use super::carousel::Carousel;
use super::loader::{SnapshotLoader, SnapshotLocation};
use crate::error::Result;
use crate::model::{Record, Snapshot};

/// Where the widget is in its load cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Snapshot),
    Failed(String),
}

/// What the widget should currently display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Ready(&'a Snapshot),
}

/// View state of one mounted leaderboard widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    state: LoadState,
    carousel: Carousel,
    viewport_width: u32,
}

impl Widget {
    /// A freshly mounted widget, waiting for its first load.
    pub fn new(viewport_width: u32) -> Self {
        Self {
            state: LoadState::Loading,
            carousel: Carousel::new(0, viewport_width),
            viewport_width,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn view(&self) -> View<'_> {
        match &self.state {
            LoadState::Loading => View::Loading,
            LoadState::Failed(message) => View::Error(message),
            LoadState::Ready(snapshot) if snapshot.is_empty() => View::Empty,
            LoadState::Ready(snapshot) => View::Ready(snapshot),
        }
    }

    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Ready(snapshot) => &snapshot.data,
            _ => &[],
        }
    }

    pub fn carousel(&self) -> Carousel {
        self.carousel
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Settle a pending load. Results arriving outside the loading state
    /// are ignored.
    pub fn finish(&mut self, result: Result<Snapshot>) {
        if self.state != LoadState::Loading {
            warn!("ignoring load result outside of loading state");
            return;
        }
        self.state = match result {
            Ok(snapshot) => {
                info!(entries = snapshot.len(), "leaderboard ready");
                self.carousel = Carousel::new(snapshot.len(), self.viewport_width);
                LoadState::Ready(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "leaderboard failed to load");
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Go back to loading after a failure. Returns whether a retry started.
    pub fn retry(&mut self) -> bool {
        if !matches!(self.state, LoadState::Failed(_)) {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    /// Run one load from `location` and settle the result.
    pub async fn load(&mut self, loader: &SnapshotLoader, location: &SnapshotLocation) {
        self.state = LoadState::Loading;
        let result = loader.load(location).await;
        self.finish(result);
    }

    /// Adopt a carousel position published by the driver.
    pub fn sync(&mut self, carousel: Carousel) {
        if carousel.len() == self.carousel.len() {
            self.carousel = carousel;
        }
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        self.carousel.resize(viewport_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeaderboardError;
    use crate::widget::fixtures::snapshot;

    #[test]
    fn test_loading_to_ready() {
        let mut widget = Widget::new(1280);
        assert_eq!(widget.view(), View::Loading);

        widget.finish(Ok(snapshot(15)));
        assert!(matches!(widget.view(), View::Ready(s) if s.len() == 15));
        assert_eq!(widget.carousel().len(), 15);
        assert_eq!(widget.carousel().page_size(), 4);
        assert_eq!(widget.records().len(), 15);
    }

    #[test]
    fn test_empty_snapshot_is_not_an_error() {
        let mut widget = Widget::new(1280);
        widget.finish(Ok(snapshot(0)));
        assert_eq!(widget.view(), View::Empty);
        assert!(!widget.retry());
    }

    #[test]
    fn test_failure_then_retry() {
        let mut widget = Widget::new(375);
        widget.finish(Err(LeaderboardError::NoRecords));
        assert_eq!(widget.view(), View::Error("no records found"));

        assert!(widget.retry());
        assert_eq!(widget.view(), View::Loading);
        assert!(!widget.retry());

        widget.finish(Ok(snapshot(3)));
        assert!(matches!(widget.view(), View::Ready(_)));

        // A late result does not clobber the settled state.
        widget.finish(Err(LeaderboardError::NoRecords));
        assert!(matches!(widget.view(), View::Ready(_)));
    }

    #[test]
    fn test_resize_updates_carousel() {
        let mut widget = Widget::new(1920);
        widget.finish(Ok(snapshot(15)));
        assert_eq!(widget.carousel().page_size(), 5);

        widget.resize(500);
        assert_eq!(widget.viewport_width(), 500);
        assert_eq!(widget.carousel().page_size(), 1);
    }

    #[tokio::test]
    async fn test_load_malformed_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("current.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut widget = Widget::new(1280);
        widget
            .load(&SnapshotLoader::new(), &SnapshotLocation::File(path))
            .await;
        assert!(matches!(widget.view(), View::Error(msg) if msg.starts_with("malformed snapshot")));
    }
}
