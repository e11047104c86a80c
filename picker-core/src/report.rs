//! Read-only views over a group and its history

use crate::availability::available;
use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::history::HistoryStore;

/// Which view of a group to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListKind {
    /// Every configured item.
    All,
    /// History entries, oldest first.
    #[default]
    Chosen,
    /// Items still available for picking.
    Unchosen,
}

/// Values produced by one listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub kind: ListKind,
    pub group: String,
    pub items: Vec<String>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Informational line shown instead of an empty list.
    pub fn empty_message(&self) -> &'static str {
        match self.kind {
            ListKind::All => "No items are configured in this group.",
            ListKind::Chosen => "No items have been chosen yet.",
            ListKind::Unchosen => "All items have been chosen.",
        }
    }
}

/// Builds listings from the registry and history store; never writes
pub struct Reporter<'a, S: ?Sized> {
    config: &'a PickerConfig,
    store: &'a S,
}

impl<'a, S: HistoryStore + ?Sized> Reporter<'a, S> {
    pub fn new(config: &'a PickerConfig, store: &'a S) -> Self {
        Self { config, store }
    }

    pub fn list(&self, kind: ListKind, group: &str) -> Result<Listing, PickerError> {
        match kind {
            ListKind::All => self.all_items(group),
            ListKind::Chosen => self.chosen_items(group),
            ListKind::Unchosen => self.unchosen_items(group),
        }
    }

    pub fn all_items(&self, group: &str) -> Result<Listing, PickerError> {
        let group = self.config.group(group)?;
        Ok(Listing {
            kind: ListKind::All,
            group: group.name.clone(),
            items: group.items.clone(),
        })
    }

    pub fn chosen_items(&self, group: &str) -> Result<Listing, PickerError> {
        let group = self.config.group(group)?;
        Ok(Listing {
            kind: ListKind::Chosen,
            group: group.name.clone(),
            items: self.store.list(&group.name)?,
        })
    }

    /// Fails with [`PickerError::EmptyGroup`] when the group has no items.
    pub fn unchosen_items(&self, group: &str) -> Result<Listing, PickerError> {
        let group = self.config.group(group)?;
        let history = self.store.list(&group.name)?;
        Ok(Listing {
            kind: ListKind::Unchosen,
            group: group.name.clone(),
            items: available(group, &history)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Group;
    use crate::history::MemoryHistoryStore;

    fn config() -> PickerConfig {
        PickerConfig {
            default_group: Some("games".into()),
            groups: vec![
                Group::new("games", ["Balatro", "Marvel Rivals", "Hades"]),
                Group::new("empty", Vec::<String>::new()),
            ],
        }
    }

    #[test]
    fn test_list_kind_defaults_to_chosen() {
        assert_eq!(ListKind::default(), ListKind::Chosen);
    }

    #[test]
    fn test_all_items_in_config_order() {
        let config = config();
        let store = MemoryHistoryStore::new().with_history("games", ["Hades"]);
        let listing = Reporter::new(&config, &store).all_items("games").unwrap();
        assert_eq!(listing.items, ["Balatro", "Marvel Rivals", "Hades"]);
    }

    #[test]
    fn test_chosen_items_are_history_verbatim() {
        let config = config();
        let store =
            MemoryHistoryStore::new().with_history("games", ["Hades", "Balatro", "Retired Game"]);
        let listing = Reporter::new(&config, &store).chosen_items("games").unwrap();
        assert_eq!(listing.items, ["Hades", "Balatro", "Retired Game"]);
    }

    #[test]
    fn test_unchosen_items_exclude_history() {
        let config = config();
        let store = MemoryHistoryStore::new().with_history("games", ["Hades"]);
        let listing = Reporter::new(&config, &store)
            .unchosen_items("games")
            .unwrap();
        assert_eq!(listing.items, ["Balatro", "Marvel Rivals"]);
    }

    #[test]
    fn test_empty_outcomes_are_informational() {
        let config = config();
        let store = MemoryHistoryStore::new()
            .with_history("games", ["Balatro", "Marvel Rivals", "Hades"]);
        let reporter = Reporter::new(&config, &store);

        let all = reporter.all_items("empty").unwrap();
        assert!(all.is_empty());
        assert_eq!(all.empty_message(), "No items are configured in this group.");

        let chosen = reporter.chosen_items("empty").unwrap();
        assert_eq!(chosen.empty_message(), "No items have been chosen yet.");

        let unchosen = reporter.unchosen_items("games").unwrap();
        assert!(unchosen.is_empty());
        assert_eq!(unchosen.empty_message(), "All items have been chosen.");
    }

    #[test]
    fn test_unchosen_on_empty_group_is_error() {
        let config = config();
        let store = MemoryHistoryStore::new();
        let err = Reporter::new(&config, &store)
            .unchosen_items("empty")
            .unwrap_err();
        assert!(matches!(err, PickerError::EmptyGroup { .. }));
    }

    #[test]
    fn test_listing_is_repeatable_and_read_only() {
        let config = config();
        let store = MemoryHistoryStore::new().with_history("games", ["Hades"]);
        let reporter = Reporter::new(&config, &store);

        for kind in [ListKind::All, ListKind::Chosen, ListKind::Unchosen] {
            let first = reporter.list(kind, "games").unwrap();
            let second = reporter.list(kind, "games").unwrap();
            assert_eq!(first, second);
        }
        assert_eq!(store.list("games").unwrap(), ["Hades"]);
    }

    #[test]
    fn test_unknown_group_is_not_found() {
        let config = config();
        let store = MemoryHistoryStore::new();
        let err = Reporter::new(&config, &store)
            .chosen_items("movies")
            .unwrap_err();
        assert!(matches!(err, PickerError::GroupNotFound { .. }));
    }
}
