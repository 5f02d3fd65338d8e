use std::sync::Arc;

use crate::entry::Entry;
use crate::series::{is_subpost, parent_entry, parent_id, subposts_for_parent, top_level_entries};

#[derive(Debug, Clone, PartialEq)]
pub struct Adjacent {
    pub newer: Option<Arc<Entry>>,
    pub older: Option<Arc<Entry>>,
    pub parent: Option<Arc<Entry>>,
}

impl Adjacent {
    fn none() -> Self {
        Adjacent {
            newer: None,
            older: None,
            parent: None,
        }
    }
}

/// Prev/next links for one entry.
///
/// A subpost navigates within its own series, which is sorted ascending by
/// date, so the newer entry sits at the next index. A top-level entry
/// navigates the top-level list only; the caller supplies `entries` already
/// sorted descending by date, so there the newer entry sits at the previous
/// index. The two directions are intentionally opposite.
///
/// An id that is not in the collection yields all-`None`, not an error: the
/// entry may have just been unpublished or filtered out.
pub fn adjacent_with_series(entries: &[Arc<Entry>], current_id: &str) -> Adjacent {
    if is_subpost(current_id) {
        let parent = parent_entry(entries, current_id);
        let series_id = match parent_id(current_id) {
            Some(p) => p,
            None => return Adjacent::none(),
        };

        let subposts = subposts_for_parent(entries, series_id);
        return match subposts.iter().position(|e| e.id == current_id) {
            Some(pos) => Adjacent {
                newer: subposts.get(pos + 1).cloned(),
                older: if pos > 0 {
                    subposts.get(pos - 1).cloned()
                } else {
                    None
                },
                parent,
            },
            None => Adjacent {
                newer: None,
                older: None,
                parent,
            },
        };
    }

    let top_level = top_level_entries(entries);
    match top_level.iter().position(|e| e.id == current_id) {
        Some(pos) => Adjacent {
            newer: if pos > 0 {
                top_level.get(pos - 1).cloned()
            } else {
                None
            },
            older: top_level.get(pos + 1).cloned(),
            parent: None,
        },
        None => Adjacent::none(),
    }
}

/// Entries sharing tags with `current`, best match first. Ties go to the
/// more recent entry. An entry without tags has no related entries.
pub fn related_by_tags(entries: &[Arc<Entry>], current: &Entry, limit: usize) -> Vec<Arc<Entry>> {
    if current.data.tags.is_empty() {
        return vec![];
    }

    let mut scored: Vec<(usize, Arc<Entry>)> = entries
        .iter()
        .filter(|e| e.id != current.id)
        .map(|e| {
            let shared = e
                .data
                .tags
                .iter()
                .filter(|t| current.data.tags.contains(t))
                .count();
            (shared, e.clone())
        })
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.data.date.cmp(&a.1.data.date)));
    scored.into_iter().take(limit).map(|(_, e)| e).collect()
}

#[cfg(test)]
mod tests {
    use crate::query::sort_by_date;
    use crate::test_data::{entry, shared, tagged};

    use super::*;

    #[test]
    fn test_adjacent_within_series() {
        let mut first = entry("s/1", 2024, 1, 1);
        first.data.order = Some(0);
        let mut second = entry("s/2", 2024, 1, 2);
        second.data.order = Some(1);
        let entries = shared(vec![entry("s", 2023, 12, 1), first, second]);

        let adj = adjacent_with_series(&entries, "s/1");
        assert_eq!(adj.older, None);
        assert_eq!(adj.newer.as_ref().unwrap().id, "s/2");
        assert_eq!(adj.parent.as_ref().unwrap().id, "s");

        let adj = adjacent_with_series(&entries, "s/2");
        assert_eq!(adj.older.as_ref().unwrap().id, "s/1");
        assert_eq!(adj.newer, None);
    }

    #[test]
    fn test_adjacent_series_of_one() {
        let entries = shared(vec![entry("s", 2023, 12, 1), entry("s/only", 2024, 1, 1)]);
        let adj = adjacent_with_series(&entries, "s/only");
        assert_eq!(adj.newer, None);
        assert_eq!(adj.older, None);
        assert_eq!(adj.parent.as_ref().unwrap().id, "s");
    }

    #[test]
    fn test_adjacent_top_level() {
        // Top-level navigation expects a date-descending list
        let entries = sort_by_date(&shared(vec![
            entry("oldest", 2022, 1, 1),
            entry("newest", 2024, 1, 1),
            entry("middle", 2023, 1, 1),
            entry("newest/sub", 2024, 2, 1),
        ]));

        let adj = adjacent_with_series(&entries, "middle");
        assert_eq!(adj.newer.as_ref().unwrap().id, "newest");
        assert_eq!(adj.older.as_ref().unwrap().id, "oldest");
        assert_eq!(adj.parent, None);

        let adj = adjacent_with_series(&entries, "newest");
        assert_eq!(adj.newer, None);
        assert_eq!(adj.older.as_ref().unwrap().id, "middle");

        let adj = adjacent_with_series(&entries, "oldest");
        assert_eq!(adj.newer.as_ref().unwrap().id, "middle");
        assert_eq!(adj.older, None);
    }

    #[test]
    fn test_adjacent_missing_entry() {
        let entries = shared(vec![entry("a", 2024, 1, 1)]);
        let adj = adjacent_with_series(&entries, "never-published");
        assert_eq!(adj, Adjacent::none());
    }

    #[test]
    fn test_related_by_tags_scoring() {
        let x = tagged("x", 2024, 1, 1, &["a", "b"]);
        let y = tagged("y", 2024, 1, 2, &["a"]);
        let z = tagged("z", 2024, 1, 3, &["a", "b", "c"]);
        let entries = shared(vec![x.clone(), y, z]);

        let related = related_by_tags(&entries, &x, 2);
        let ids: Vec<&str> = related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["z", "y"]);
    }

    #[test]
    fn test_related_ties_break_on_date() {
        let current = tagged("current", 2024, 1, 1, &["a"]);
        let older = tagged("older", 2023, 1, 1, &["a"]);
        let newer = tagged("newer", 2024, 6, 1, &["a"]);
        let entries = shared(vec![older, current.clone(), newer]);

        let related = related_by_tags(&entries, &current, 3);
        let ids: Vec<&str> = related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["newer", "older"]);
    }

    #[test]
    fn test_related_respects_limit() {
        let current = tagged("current", 2024, 1, 1, &["a"]);
        let entries = shared(vec![
            tagged("1", 2024, 1, 2, &["a"]),
            tagged("2", 2024, 1, 3, &["a"]),
            tagged("3", 2024, 1, 4, &["a"]),
        ]);
        assert_eq!(related_by_tags(&entries, &current, 2).len(), 2);
    }

    #[test]
    fn test_related_without_tags() {
        let current = entry("untagged", 2024, 1, 1);
        let entries = shared(vec![tagged("other", 2024, 1, 2, &["a"])]);
        assert!(related_by_tags(&entries, &current, 3).is_empty());
    }

    #[test]
    fn test_related_tags_are_case_sensitive() {
        let current = tagged("current", 2024, 1, 1, &["Rust"]);
        let entries = shared(vec![tagged("other", 2024, 1, 2, &["rust"])]);
        assert!(related_by_tags(&entries, &current, 3).is_empty());
    }
}
