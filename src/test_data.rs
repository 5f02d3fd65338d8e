use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::entry::{Entry, EntryData};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn entry(id: &str, y: i32, m: u32, d: u32) -> Entry {
    Entry {
        id: id.to_string(),
        data: EntryData {
            title: format!("Title of {}", id),
            description: Some(format!("Description of {}", id)),
            date: date(y, m, d),
            tags: vec![],
            draft: false,
            featured: false,
            order: None,
            category: "blog".to_string(),
        },
    }
}

pub fn tagged(id: &str, y: i32, m: u32, d: u32, tags: &[&str]) -> Entry {
    let mut e = entry(id, y, m, d);
    e.data.tags = tags.iter().map(|t| t.to_string()).collect();
    e
}

pub fn shared(entries: Vec<Entry>) -> Vec<Arc<Entry>> {
    entries.into_iter().map(Arc::new).collect()
}
