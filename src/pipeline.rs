use std::sync::Arc;

use spdlog::info;

use crate::config::{Config, DEFAULT_RELATED_LIMIT};
use crate::entry::Entry;
use crate::error::Result;
use crate::feed::{feed_items, FeedItem};
use crate::navigation::related_by_tags;
use crate::paginator::Paginator;
use crate::query::{filter_drafts, group_by_year, tag_counts};
use crate::series::top_level_by_date;

/// One page of the index listing, with everything the template needs.
pub struct Listing {
    pub entries: Vec<Arc<Entry>>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_entries: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Fails the build on the first malformed entry. Run once, right after the
/// content loader hands over the collection.
pub fn validate_entries(entries: &[Arc<Entry>]) -> Result<()> {
    for entry in entries {
        entry.validate()?;
    }
    Ok(())
}

/// Index listing: drafts filtered per build mode, top-level entries only,
/// newest first, paginated by the configured page size.
pub fn listing_page(entries: &[Arc<Entry>], config: &Config, page: u32) -> Result<Listing> {
    let visible = filter_drafts(entries, config.build.production);
    let top_level = top_level_by_date(&visible);

    let paginator = Paginator::from(&top_level, config.defaults.page_size)?;
    let page = paginator.page(page);
    info!(
        "Listing page {}/{} with {} entries",
        page.current_page,
        page.total_pages,
        page.entries.len()
    );

    Ok(Listing {
        entries: page.entries.to_vec(),
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_entries: page.total_entries,
        has_next: page.has_next,
        has_prev: page.has_prev,
    })
}

/// Archive page data: visible top-level entries grouped by year.
pub fn archive(entries: &[Arc<Entry>], config: &Config) -> Vec<(String, Vec<Arc<Entry>>)> {
    let visible = filter_drafts(entries, config.build.production);
    group_by_year(&top_level_by_date(&visible))
}

/// Tag cloud data: tags sorted by frequency, most used first. Equal counts
/// fall back to name order so the output is deterministic.
pub fn tags_by_frequency(entries: &[Arc<Entry>]) -> Vec<(String, u32)> {
    let mut tag_list: Vec<(String, u32)> = tag_counts(entries).into_iter().collect();
    tag_list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    tag_list
}

pub fn feed(entries: &[Arc<Entry>], config: &Config) -> Vec<FeedItem> {
    let visible = filter_drafts(entries, config.build.production);
    info!("Building feed from {} visible entries", visible.len());
    feed_items(&visible, &config.site.url, &config.site.author)
}

pub fn related_for(entries: &[Arc<Entry>], current: &Entry, config: &Config) -> Vec<Arc<Entry>> {
    let limit = config.defaults.related_limit.unwrap_or(DEFAULT_RELATED_LIMIT);
    related_by_tags(entries, current, limit)
}
