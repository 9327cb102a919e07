//! Sibling matching.
//!
//! Two items match when they share an id and either both carry a submenu or
//! neither does. Separators are anonymous and never match, not even another
//! separator. Sibling lists are short, so a linear scan is all that is needed.

use crate::item::MenuItem;

/// Whether `existing` is the sibling that `candidate` refers to.
#[inline]
pub fn is_matching_item(existing: &MenuItem, candidate: &MenuItem) -> bool {
    !candidate.is_separator()
        && existing.id == candidate.id
        && existing.has_submenu() == candidate.has_submenu()
}

/// Index of the first sibling matching `candidate`, or `None`.
pub fn find_matching_index(siblings: &[MenuItem], candidate: &MenuItem) -> Option<usize> {
    if candidate.is_separator() {
        return None;
    }
    siblings
        .iter()
        .position(|existing| is_matching_item(existing, candidate))
}

/// Number of entries in `items` that are not separators.
pub fn non_separator_count(items: &[MenuItem]) -> usize {
    items.iter().filter(|item| !item.is_separator()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn siblings() -> Vec<MenuItem> {
        vec![
            MenuItem::normal("save"),
            MenuItem::separator(),
            MenuItem::submenu("save", vec![]),
            MenuItem::normal("quit"),
        ]
    }

    #[test]
    fn test_match_by_id_and_leafness() {
        let list = siblings();
        assert_eq!(find_matching_index(&list, &MenuItem::normal("save")), Some(0));
        assert_eq!(
            find_matching_index(&list, &MenuItem::submenu("save", vec![MenuItem::normal("x")])),
            Some(2)
        );
        assert_eq!(find_matching_index(&list, &MenuItem::normal("quit")), Some(3));
        assert_eq!(find_matching_index(&list, &MenuItem::normal("open")), None);
    }

    #[test]
    fn test_separator_never_matches() {
        let list = siblings();
        assert_eq!(find_matching_index(&list, &MenuItem::separator()), None);
        assert!(!is_matching_item(&list[1], &list[1]));
    }

    #[test]
    fn test_anonymous_items_match_each_other() {
        let list = vec![MenuItem::default()];
        assert_eq!(find_matching_index(&list, &MenuItem::default()), Some(0));
    }

    #[test]
    fn test_first_match_wins() {
        let list = vec![MenuItem::normal("a"), MenuItem::normal("a").with_label("second")];
        assert_eq!(find_matching_index(&list, &MenuItem::normal("a")), Some(0));
    }

    #[test]
    fn test_non_separator_count() {
        assert_eq!(non_separator_count(&siblings()), 3);
        assert_eq!(non_separator_count(&[MenuItem::separator()]), 0);
        assert_eq!(non_separator_count(&[]), 0);
    }
}
