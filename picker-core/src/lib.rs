//! picker-core: no-repeat random selection with persistent history
//!
//! This crate provides the pieces behind the `rp` command:
//!
//! - **Group registry** - [`PickerConfig`] and [`Group`], parsed from YAML
//! - **History store** - [`HistoryStore`] with the file-backed
//!   [`FileHistoryStore`] and the in-memory [`MemoryHistoryStore`]
//! - **Availability** - [`available`], the items not yet in history
//! - **Selection** - [`Picker`], which draws, detects exhaustion and resets
//! - **Listings** - [`Reporter`] for all, chosen and unchosen items
//!
//! # Quick Start
//!
//! ```
//! use picker_core::{MemoryHistoryStore, Picker, PickerConfig};
//!
//! let config = PickerConfig::sample();
//! let store = MemoryHistoryStore::new();
//! let picker = Picker::new(&config, &store);
//!
//! let first = picker.choose_one("games").unwrap();
//! let second = picker.choose_one("games").unwrap();
//! assert_ne!(first.item, second.item);
//! ```

pub mod availability;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod report;

pub use availability::available;
pub use config::{ConfigError, Group, PickerConfig};
pub use engine::{Pick, PickEvent, Picker};
pub use error::PickerError;
pub use history::{
    DEFAULT_KEEP_TAIL, FileHistoryStore, HistoryStore, MemoryHistoryStore, ResetOutcome,
    StorageError,
};
pub use report::{ListKind, Listing, Reporter};
