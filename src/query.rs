use std::collections::HashMap;
use std::sync::Arc;

use chrono::Datelike;

use crate::entry::Entry;
use crate::error::Result;

/// Drops draft entries for production builds. Development builds see
/// everything, so a post in progress can be previewed before publishing.
pub fn filter_drafts(entries: &[Arc<Entry>], is_production: bool) -> Vec<Arc<Entry>> {
    if !is_production {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.data.draft).cloned().collect()
}

/// Newest first. Entries sharing a date keep their input order.
pub fn sort_by_date(entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.data.date.cmp(&a.data.date));
    sorted
}

/// Ascending by the explicit order field, missing order counts as 0.
pub fn sort_by_order(entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.data.order.unwrap_or(0));
    sorted
}

/// Archive view: years descending, each year's entries date-descending.
pub fn group_by_year(entries: &[Arc<Entry>]) -> Vec<(String, Vec<Arc<Entry>>)> {
    let sorted = sort_by_date(entries);

    // Input is date-descending, so equal years are consecutive and the
    // groups come out year-descending.
    let mut groups: Vec<(String, Vec<Arc<Entry>>)> = vec![];
    for entry in sorted {
        let year = entry.data.date.year().to_string();
        match groups.last_mut() {
            Some((last_year, group)) if *last_year == year => group.push(entry),
            _ => groups.push((year, vec![entry])),
        }
    }
    groups
}

/// Groups by the stringified field value, keyed "Uncategorized" when the
/// field holds nothing. Group order follows the first occurrence of each key.
pub fn group_by_field(
    entries: &[Arc<Entry>],
    field: &str,
) -> Result<Vec<(String, Vec<Arc<Entry>>)>> {
    let mut groups: Vec<(String, Vec<Arc<Entry>>)> = vec![];
    for entry in entries {
        let key = entry
            .data
            .field_str(field)?
            .unwrap_or_else(|| "Uncategorized".to_string());
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(entry.clone()),
            None => groups.push((key, vec![entry.clone()])),
        }
    }
    Ok(groups)
}

/// All tags used across the entries, deduplicated and sorted ascending.
pub fn unique_tags(entries: &[Arc<Entry>]) -> Vec<String> {
    let mut tags: Vec<String> = entries
        .iter()
        .flat_map(|e| e.data.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

pub fn tag_counts(entries: &[Arc<Entry>]) -> HashMap<String, u32> {
    let mut tag_map = HashMap::new();
    for entry in entries {
        for tag in entry.data.tags.iter() {
            *tag_map.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    tag_map
}

/// Exact tag match, no case folding.
pub fn entries_by_tag(entries: &[Arc<Entry>], tag: &str) -> Vec<Arc<Entry>> {
    entries
        .iter()
        .filter(|e| e.data.tags.iter().any(|t| t == tag))
        .cloned()
        .collect()
}

pub fn featured_entries(entries: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    entries.iter().filter(|e| e.data.featured).cloned().collect()
}

/// Strict equality against the stringified field value.
pub fn filter_by_field(
    entries: &[Arc<Entry>],
    field: &str,
    value: &str,
) -> Result<Vec<Arc<Entry>>> {
    let mut filtered = vec![];
    for entry in entries {
        if entry.data.field_str(field)?.as_deref() == Some(value) {
            filtered.push(entry.clone());
        }
    }
    Ok(filtered)
}

/// Case-insensitive substring search over title and description.
pub fn search_entries(entries: &[Arc<Entry>], query: &str) -> Vec<Arc<Entry>> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.data.title.to_lowercase().contains(&query)
                || e.data
                    .description
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&query)
        })
        .cloned()
        .collect()
}
