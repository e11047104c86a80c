//! Selection engine: no-repeat random picks with tail-preserving reset

use rand::Rng;
use tracing::{debug, info};

use crate::availability::available;
use crate::config::{Group, PickerConfig};
use crate::error::PickerError;
use crate::history::{DEFAULT_KEEP_TAIL, HistoryStore, ResetOutcome};

/// Something the user should hear about while a pick or reset runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickEvent<'e> {
    /// Every item has been chosen since the last reset.
    Exhausted { group: &'e str },
    /// History was truncated (or found absent).
    Reset {
        group: &'e str,
        outcome: ResetOutcome,
    },
}

/// Result of a successful pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub item: String,
    /// Set when the pick had to reset history first.
    pub reset: Option<ResetOutcome>,
}

/// Picks items from configured groups without repeats until a group is
/// exhausted
///
/// Holds the registry and history store it was built with; nothing is read
/// from process-wide state.
pub struct Picker<'a, S: ?Sized> {
    config: &'a PickerConfig,
    store: &'a S,
    observer: Option<&'a dyn Fn(&PickEvent<'_>)>,
}

impl<'a, S: HistoryStore + ?Sized> Picker<'a, S> {
    pub fn new(config: &'a PickerConfig, store: &'a S) -> Self {
        Self {
            config,
            store,
            observer: None,
        }
    }

    /// Receive [`PickEvent`]s as they happen.
    pub fn with_observer(mut self, observer: &'a dyn Fn(&PickEvent<'_>)) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Pick one item from the named group using the thread-local RNG.
    pub fn choose_one(&self, group: &str) -> Result<Pick, PickerError> {
        self.choose_one_with(group, &mut rand::rng())
    }

    /// Pick one item from the named group using `rng`.
    pub fn choose_one_with<R: Rng>(&self, group: &str, rng: &mut R) -> Result<Pick, PickerError> {
        let group = self.config.group(group)?;
        self.choose_from(group, rng)
    }

    /// Pick one item from `group` and record it in history.
    ///
    /// When nothing is available the history is reset once and availability
    /// recomputed once. Groups of at most [`DEFAULT_KEEP_TAIL`] distinct
    /// values can stay exhausted after that reset, which fails with
    /// [`PickerError::Exhausted`] without drawing or recording anything.
    pub fn choose_from<R: Rng>(&self, group: &Group, rng: &mut R) -> Result<Pick, PickerError> {
        if group.is_empty() {
            return Err(PickerError::EmptyGroup {
                group: group.name.clone(),
            });
        }

        let mut candidates = available(group, &self.store.list(&group.name)?)?;
        let mut reset = None;

        if candidates.is_empty() {
            info!(group = %group.name, "all items have been chosen, resetting history");
            self.emit(PickEvent::Exhausted { group: &group.name });
            reset = Some(self.reset_group(&group.name, DEFAULT_KEEP_TAIL)?);
            candidates = available(group, &self.store.list(&group.name)?)?;
        }

        if candidates.is_empty() {
            debug!(group = %group.name, keep = DEFAULT_KEEP_TAIL, "still exhausted after reset");
            return Err(PickerError::Exhausted {
                group: group.name.clone(),
            });
        }

        let index = rng.random_range(0..candidates.len());
        let item = candidates.swap_remove(index);
        debug!(group = %group.name, available = candidates.len() + 1, index, "drew item");

        self.store.append(&group.name, &item)?;
        info!(group = %group.name, item = %item, "picked item");

        Ok(Pick { item, reset })
    }

    /// Truncate the group's history to its most recent entries.
    pub fn reset(&self, group: &str) -> Result<ResetOutcome, PickerError> {
        let group = self.config.group(group)?;
        self.reset_group(&group.name, DEFAULT_KEEP_TAIL)
    }

    /// Clear the group's history entirely.
    pub fn reset_all(&self, group: &str) -> Result<ResetOutcome, PickerError> {
        let group = self.config.group(group)?;
        self.reset_group(&group.name, 0)
    }

    fn reset_group(&self, group: &str, keep: usize) -> Result<ResetOutcome, PickerError> {
        let outcome = self.store.reset_keeping_tail(group, keep)?;
        self.emit(PickEvent::Reset { group, outcome });
        Ok(outcome)
    }

    fn emit(&self, event: PickEvent<'_>) {
        if let Some(observer) = self.observer {
            observer(&event);
        }
    }
}
