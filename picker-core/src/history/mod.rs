//! Per-group pick history with tail-preserving reset

mod error;
mod file;
mod memory;
mod store;

pub use error::StorageError;
pub use file::FileHistoryStore;
pub use memory::MemoryHistoryStore;
pub use store::{DEFAULT_KEEP_TAIL, HistoryStore, ResetOutcome};
pub(crate) use store::validate_entry;
