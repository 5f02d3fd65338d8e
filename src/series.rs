use std::sync::Arc;

use crate::entry::Entry;
use crate::query::sort_by_date;

/// Series relationships are derived from the id alone: "homelab-setup/hardware"
/// is a subpost of the series whose parent entry id is "homelab-setup". There
/// are no dedicated index entries; a parent is a regular top-level entry.
pub fn is_subpost(id: &str) -> bool {
    id.contains('/')
}

/// First path segment for subposts, `None` for standalone ids. Total, never
/// fails on odd input.
pub fn parent_id(id: &str) -> Option<&str> {
    id.find('/').map(|pos| &id[..pos])
}

/// The ordered subposts of a series, drafts excluded. Date decides the
/// order; the explicit order field only breaks date ties.
pub fn subposts_for_parent(entries: &[Arc<Entry>], parent: &str) -> Vec<Arc<Entry>> {
    let mut subposts: Vec<Arc<Entry>> = entries
        .iter()
        .filter(|e| !e.data.draft && parent_id(&e.id) == Some(parent))
        .cloned()
        .collect();

    subposts.sort_by(|a, b| {
        a.data
            .date
            .cmp(&b.data.date)
            .then_with(|| a.data.order.unwrap_or(0).cmp(&b.data.order.unwrap_or(0)))
    });
    subposts
}

/// The parent entry of a subpost, `None` when the id is standalone or the
/// parent entry was never written.
pub fn parent_entry(entries: &[Arc<Entry>], subpost_id: &str) -> Option<Arc<Entry>> {
    let parent = parent_id(subpost_id)?;
    entries.iter().find(|e| e.id == parent).cloned()
}

/// Parent first (when present), then the subposts in series order. A series
/// without an explicit parent entry is just its sorted subposts.
pub fn series_entries(entries: &[Arc<Entry>], parent: &str) -> Vec<Arc<Entry>> {
    let mut series = vec![];
    if let Some(parent_entry) = entries.iter().find(|e| e.id == parent) {
        series.push(parent_entry.clone());
    }
    series.extend(subposts_for_parent(entries, parent));
    series
}

pub fn has_subposts(entries: &[Arc<Entry>], id: &str) -> bool {
    !subposts_for_parent(entries, id).is_empty()
}

/// The entries shown on index pages: standalone posts and series parents.
pub fn top_level_entries(entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    entries.iter().filter(|e| !is_subpost(&e.id)).cloned().collect()
}

/// Everything a page needs to render series navigation for one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesContext {
    pub is_subpost: bool,
    pub is_parent: bool,
    /// Empty when the entry is not part of a series.
    pub series_id: String,
    pub parent: Option<Arc<Entry>>,
    pub series: Vec<Arc<Entry>>,
    pub newer: Option<Arc<Entry>>,
    pub older: Option<Arc<Entry>>,
}

impl SeriesContext {
    fn standalone() -> Self {
        SeriesContext {
            is_subpost: false,
            is_parent: false,
            series_id: String::new(),
            parent: None,
            series: vec![],
            newer: None,
            older: None,
        }
    }
}

pub fn series_context(entries: &[Arc<Entry>], current: &Entry) -> SeriesContext {
    let subpost = is_subpost(&current.id);
    let parent_of_series = has_subposts(entries, &current.id);
    if !subpost && !parent_of_series {
        return SeriesContext::standalone();
    }

    let series_id = match parent_id(&current.id) {
        Some(p) => p.to_string(),
        None => current.id.clone(),
    };

    let subposts = subposts_for_parent(entries, &series_id);
    let position = subposts.iter().position(|e| e.id == current.id);
    let newer = position.and_then(|i| subposts.get(i + 1)).cloned();
    let older = match position {
        Some(i) if i > 0 => subposts.get(i - 1).cloned(),
        _ => None,
    };

    SeriesContext {
        is_subpost: subpost,
        is_parent: parent_of_series,
        parent: entries.iter().find(|e| e.id == series_id).cloned(),
        series: series_entries(entries, &series_id),
        series_id,
        newer,
        older,
    }
}

/// Convenience for index pages: top-level entries, newest first.
pub fn top_level_by_date(entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    sort_by_date(&top_level_entries(entries))
}
