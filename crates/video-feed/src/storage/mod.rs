//! Snapshot storage module.
//!
//! Persists the normalized videos as a single JSON document.

mod snapshot;

pub use snapshot::{Snapshot, SNAPSHOT_SOURCE};
