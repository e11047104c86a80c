//! Items of a group that have not been chosen since the last reset

use std::collections::HashSet;

use crate::config::Group;
use crate::error::PickerError;

/// Filter `group.items` down to values absent from `history`, keeping the
/// group's order.
///
/// Membership is by value: one history entry excludes every equal item,
/// duplicates included. Fails with [`PickerError::EmptyGroup`] before looking
/// at history when the group has no items.
pub fn available(group: &Group, history: &[String]) -> Result<Vec<String>, PickerError> {
    if group.is_empty() {
        return Err(PickerError::EmptyGroup {
            group: group.name.clone(),
        });
    }

    let chosen: HashSet<&str> = history.iter().map(String::as_str).collect();
    Ok(group
        .items
        .iter()
        .filter(|item| !chosen.contains(item.as_str()))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_history_makes_everything_available() {
        let group = Group::new("g", ["c", "a", "b"]);
        assert_eq!(available(&group, &[]).unwrap(), group.items);
    }

    #[test]
    fn full_history_makes_nothing_available() {
        let group = Group::new("g", ["a", "b", "c"]);
        assert!(available(&group, &group.items).unwrap().is_empty());
    }

    #[test]
    fn preserves_candidate_order_not_history_order() {
        let group = Group::new("g", ["d", "c", "b", "a"]);
        let history = strings(&["a", "c"]);
        assert_eq!(available(&group, &history).unwrap(), ["d", "b"]);
    }

    #[test]
    fn one_entry_excludes_all_duplicates() {
        let group = Group::new("g", ["a", "b", "a", "c", "a"]);
        let history = strings(&["a"]);
        assert_eq!(available(&group, &history).unwrap(), ["b", "c"]);
    }

    #[test]
    fn unknown_history_values_are_ignored() {
        let group = Group::new("g", ["a", "b"]);
        let history = strings(&["removed from config", "b"]);
        assert_eq!(available(&group, &history).unwrap(), ["a"]);
    }

    #[test]
    fn comparison_is_exact() {
        let group = Group::new("g", ["Balatro", "balatro", "Balatro "]);
        let history = strings(&["Balatro"]);
        assert_eq!(
            available(&group, &history).unwrap(),
            ["balatro", "Balatro "]
        );
    }

    #[test]
    fn empty_group_fails_even_with_history() {
        let group = Group::new("empty", Vec::<String>::new());
        let err = available(&group, &strings(&["a"])).unwrap_err();
        assert!(matches!(err, PickerError::EmptyGroup { group } if group == "empty"));
    }

    #[test]
    fn matches_filter_definition_for_mixed_inputs() {
        fn check(items: &[&str], history: &[&str]) {
            let group = Group::new("g", items.iter().copied());
            let history = strings(history);
            let expected: Vec<String> = group
                .items
                .iter()
                .filter(|item| !history.contains(*item))
                .cloned()
                .collect();
            assert_eq!(available(&group, &history).unwrap(), expected);
        }

        check(&["a"], &[]);
        check(&["a", "b", "c"], &["b"]);
        check(&["x", "x", "y"], &["y", "z"]);
        check(&["1", "2", "3", "4"], &["4", "3", "2", "1"]);
    }
}
