use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// One content item (post, gallery, page, doc) as loaded from the content
/// directory. The id is path-like: "homelab-setup" is a standalone post and
/// "homelab-setup/hardware" is a subpost of the "homelab-setup" series.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub data: EntryData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryData {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
    pub tags: Vec<String>,
    pub draft: bool,
    pub featured: bool,
    pub order: Option<i32>,
    pub category: String,
}

impl Entry {
    /// Checks the invariants the queries rely on. Run once after loading,
    /// so that bad frontmatter fails the build instead of corrupting
    /// ordering or series resolution later.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(self.malformed("empty id"));
        }
        if self.id.starts_with('/') || self.id.ends_with('/') {
            return Err(self.malformed("id must not start or end with '/'"));
        }
        if self.id.split('/').any(|segment| segment.is_empty()) {
            return Err(self.malformed("id contains an empty segment"));
        }
        if self.data.title.is_empty() {
            return Err(self.malformed("empty title"));
        }
        Ok(())
    }

    fn malformed(&self, reason: &str) -> Error {
        Error::MalformedEntry {
            id: self.id.clone(),
            reason: reason.to_string(),
        }
    }
}

impl EntryData {
    /// Stringified view of a field, used by the group-by and filter-by-field
    /// queries. `None` means the field holds no value for this entry.
    pub fn field_str(&self, field: &str) -> Result<Option<String>> {
        let value = match field {
            "title" => Some(self.title.clone()),
            "description" => self.description.clone(),
            "date" => Some(self.date.format("%Y-%m-%d %H:%M:%S").to_string()),
            "draft" => Some(self.draft.to_string()),
            "featured" => Some(self.featured.to_string()),
            "order" => self.order.map(|o| o.to_string()),
            "category" => Some(self.category.clone()),
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unknown entry field '{}'",
                    field
                )))
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::entry;

    use super::*;

    #[test]
    fn test_validate_happy_case() {
        assert_eq!(entry("homelab-setup", 2024, 1, 2).validate(), Ok(()));
        assert_eq!(entry("homelab-setup/hardware", 2024, 1, 3).validate(), Ok(()));
    }

    #[test]
    fn test_validate_bad_ids() {
        let bad = entry("homelab-setup/", 2024, 1, 2);
        assert_eq!(
            bad.validate(),
            Err(Error::MalformedEntry {
                id: "homelab-setup/".to_string(),
                reason: "id must not start or end with '/'".to_string(),
            })
        );

        let bad = entry("homelab//hardware", 2024, 1, 2);
        assert!(bad.validate().is_err());

        let bad = entry("", 2024, 1, 2);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut bad = entry("homelab-setup", 2024, 1, 2);
        bad.data.title = "".to_string();
        assert_eq!(
            bad.validate(),
            Err(Error::MalformedEntry {
                id: "homelab-setup".to_string(),
                reason: "empty title".to_string(),
            })
        );
    }

    #[test]
    fn test_field_str() {
        let mut e = entry("homelab-setup", 2024, 1, 2);
        e.data.category = "projects".to_string();
        e.data.order = None;
        e.data.description = None;

        assert_eq!(e.data.field_str("category"), Ok(Some("projects".to_string())));
        assert_eq!(e.data.field_str("order"), Ok(None));
        assert_eq!(e.data.field_str("description"), Ok(None));
        assert_eq!(e.data.field_str("draft"), Ok(Some("false".to_string())));
        assert!(e.data.field_str("nonsense").is_err());
    }
}
