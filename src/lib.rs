pub mod breadcrumbs;
pub mod config;
pub mod entry;
pub mod error;
pub mod feed;
pub mod logger;
pub mod navigation;
pub mod paginator;
pub mod pipeline;
pub mod query;
pub mod reading_time;
pub mod series;
pub mod text_utils;

#[cfg(test)]
mod test_data;
