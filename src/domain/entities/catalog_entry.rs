//! Catalogue entries as published by the upstream resource catalog.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of the upstream `resources.json` array, before validation.
///
/// Upstream objects carry many more fields; only `id` and `slug` are read.
/// Either field may be missing, empty, or of the wrong type, in which case it
/// is `None` and the record is skipped when the mapping is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogRecord {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub slug: Option<String>,
}

impl CatalogRecord {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// Values that are not objects produce an empty record rather than an
    /// error, so one bad element never invalidates the whole catalogue.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Convenience constructor for a fully populated record.
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            slug: Some(slug.into()),
        }
    }

    /// Returns the usable entry, or `None` when either field is absent.
    pub fn into_entry(self) -> Option<CatalogEntry> {
        Some(CatalogEntry {
            identifier: self.id?,
            slug: self.slug?,
        })
    }
}

/// A catalogue entry with both an identifier and a slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub identifier: String,
    pub slug: String,
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    })
}
