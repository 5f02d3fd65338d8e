use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::entry::Entry;
use crate::series::top_level_by_date;

/// The flat record a feed serializer (RSS/Atom) consumes per item. Building
/// the XML itself is the serializer's job, not ours.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub link: String,
    pub guid: String,
    pub author: String,
    /// RFC 2822, e.g. "Tue, 2 Jan 2024 05:06:07 +0000".
    pub pub_date: String,
}

/// Projects the top-level entries into feed items, newest first. Draft
/// filtering is the caller's responsibility (see pipeline::feed).
pub fn feed_items(entries: &[Arc<Entry>], site_url: &str, author: &str) -> Vec<FeedItem> {
    let top_level = top_level_by_date(entries);
    top_level
        .iter()
        .map(|entry| {
            let dt = TimeZone::from_utc_datetime(Utc::now().offset(), &entry.data.date);
            FeedItem {
                title: entry.data.title.clone(),
                description: entry.data.description.clone().unwrap_or_default(),
                link: full_link(site_url, &entry.id),
                guid: entry.id.clone(),
                author: author.to_string(),
                pub_date: dt.to_rfc2822(),
            }
        })
        .collect()
}

fn full_link(base_url: &str, link: &str) -> String {
    let base_url = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    let link = if link.ends_with('/') {
        link.to_string()
    } else {
        format!("{}/", link)
    };

    format!("{}{}", base_url, link)
}
