//! Leaderboard widget: load state, bounded paging carousel, the
//! timer-driven driver and the dioxus components that render it.

pub mod carousel;
pub mod driver;
pub mod loader;
pub mod render;
pub mod state;
pub mod style;

pub use carousel::{page_size_for_width, Carousel};
pub use driver::{mount, CarouselEvent, CarouselHandle, AUTO_ADVANCE_PERIOD};
pub use loader::{parse_snapshot, SnapshotLoader, SnapshotLocation};
pub use render::{cards, render_widget, CardView, Leaderboard, LeaderboardCard, WidgetAction};
pub use state::{LoadState, View, Widget};
