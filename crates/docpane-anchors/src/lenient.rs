//! Forgiving deserializers for content-layer input.
//!
//! Table of contents data comes from an external extraction step. Values of
//! the wrong type degrade to empty instead of failing the whole page.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeString {
    Text(String),
    Other(IgnoredAny),
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_string(deserializer)?.unwrap_or_default())
}

pub(crate) fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match MaybeString::deserialize(deserializer)? {
        MaybeString::Text(text) => Ok(Some(text)),
        MaybeString::Other(_) => {
            tracing::debug!("Ignoring non-string table of contents value");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RawTocEntry;

    #[test]
    fn test_non_string_title_is_empty() {
        let entry: RawTocEntry = serde_json::from_str(r#"{"title": 42, "url": null}"#).unwrap();
        assert_eq!(entry, RawTocEntry::default());
    }

    #[test]
    fn test_missing_fields_default() {
        let entry: RawTocEntry = serde_json::from_str("{}").unwrap();
        assert_eq!(entry.title, "");
        assert_eq!(entry.url, None);
    }

    #[test]
    fn test_well_formed_entry() {
        let entry: RawTocEntry =
            serde_json::from_str(r##"{"title": "Install #install", "url": "#install"}"##).unwrap();
        assert_eq!(entry, RawTocEntry::new("Install #install", Some("#install")));
    }

    #[test]
    fn test_non_string_url_is_none() {
        let entry: RawTocEntry =
            serde_json::from_str(r#"{"title": "Install #install", "url": ["x"]}"#).unwrap();
        assert_eq!(entry.url, None);
    }
}
