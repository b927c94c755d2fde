//! Weekly reels leaderboard.
//!
//! The [`Generator`] snapshots the top rows of an Airtable table into a
//! static JSON file; the [`widget`] module turns a published snapshot into
//! an auto-advancing card carousel.

mod airtable;
mod client;
mod http;

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod widget;

pub use client::{AirtableClient, RecordQuery};
pub use config::{AirtableConfig, Config, GeneratorOptions};
pub use error::{LeaderboardError, Result};
pub use generator::{format_view_count, week_start, Generator, LeaderboardSource};
pub use model::{Attachment, Category, Record, Snapshot};
