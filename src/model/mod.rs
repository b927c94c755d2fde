mod airtable;
mod record;
mod snapshot;

pub use airtable::*;
pub use record::*;
pub use snapshot::*;
