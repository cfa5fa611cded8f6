//! # Storage Layer
//!
//! Two independent containers share the same entity contract
//! ([`crate::model::Entity`]) but answer different needs:
//!
//! - [`repository::Repository`]: in-memory working state, keyed by id.
//!   - Rejects duplicate ids and unknown ids on every mutation
//!   - Only `update_quantity` changes a field in place, and it refuses
//!     negative values
//!   - Reads hand out clones, so callers cannot corrupt stored records
//!
//! - [`persistent::PersistentLog`]: an ordered sequence bound to one file.
//!   - No uniqueness check; order is append order
//!   - `save_to_file` / `load_from_file` round-trip through pretty JSON
//!
//! ## Failure Contract
//!
//! Every operation either fully applies or leaves the container untouched.
//! A log whose file does not exist yet loads as [`LoadOutcome::Missing`],
//! which is a normal first-run state and not an error.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── inventory.json   # JSON array of records, 2-space indented
//! └── config.json      # StockroomConfig
//! ```
//!
//! Neither container locks. Callers sharing one instance across threads must
//! wrap it themselves.

pub mod persistent;
pub mod repository;

pub use self::persistent::PersistentLog;
pub use self::repository::Repository;

/// What `PersistentLog::load_from_file` found at its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Content replaced with this many records.
    Loaded(usize),
    /// No file yet; in-memory content left as is.
    Missing,
    /// The file exists but holds nothing; in-memory content left as is.
    Empty,
}
