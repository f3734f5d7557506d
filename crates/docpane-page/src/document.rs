//! Document payload supplied by the content layer.
//!
//! Field names follow the content layer's camelCase JSON. Table of contents
//! data is parsed leniently: a missing `items` list, `null` entries or
//! non-string titles degrade to empty values instead of failing the page.

use docpane_anchors::RawTocEntry;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Error returned when a document payload cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// JSON parsing error.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error.
    #[error("Invalid document YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Document record for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Page title.
    pub title: String,
    /// Meta description (consumed by SEO collaborators).
    pub meta_description: Option<String>,
    /// Rendered body markup, passed through verbatim.
    pub body: String,
    /// Table of contents as extracted by the content layer.
    #[serde(deserialize_with = "lenient_toc")]
    pub table_of_contents: TableOfContents,
    /// Related resource links.
    pub related_resources: Vec<RelatedResource>,
    /// Source file path relative to the content root.
    pub file_relative_path: Option<String>,
    /// Frontmatter fields.
    pub frontmatter: Frontmatter,
}

impl DocumentPayload {
    /// Parse a payload from JSON.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Json` if the input is not valid JSON or a
    /// non-table-of-contents field has the wrong type.
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a payload from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Yaml` if the input is not valid YAML or a
    /// non-table-of-contents field has the wrong type.
    pub fn from_yaml(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Whether the content layer marked this page as machine translated.
    #[must_use]
    pub fn is_machine_translated(&self) -> bool {
        self.frontmatter.translation_type.as_deref() == Some("machine")
    }
}

/// Table of contents block of a payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableOfContents {
    /// Entries in document order.
    pub items: Vec<RawTocEntry>,
}

/// Entry that may be malformed.
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeEntry {
    Entry(RawTocEntry),
    Other(IgnoredAny),
}

/// Raw table of contents block.
#[derive(Deserialize)]
struct RawTableOfContents {
    #[serde(default)]
    items: Option<Vec<MaybeEntry>>,
}

fn lenient_toc<'de, D>(deserializer: D) -> Result<TableOfContents, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<RawTableOfContents>::deserialize(deserializer)? else {
        return Ok(TableOfContents::default());
    };

    let items = raw
        .items
        .unwrap_or_default()
        .into_iter()
        .map(|entry| match entry {
            MaybeEntry::Entry(entry) => entry,
            MaybeEntry::Other(_) => {
                tracing::debug!("Malformed table of contents entry, using empty title");
                RawTocEntry::default()
            }
        })
        .collect();

    Ok(TableOfContents { items })
}

/// Related resource link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedResource {
    /// Link title.
    pub title: String,
    /// Link target.
    pub url: String,
}

/// Frontmatter fields consumed by page composition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Frontmatter {
    /// Page type (e.g. "landingPage"); forwarded to SEO collaborators.
    #[serde(rename = "type")]
    pub page_type: Option<String>,
    /// Tags; forwarded to SEO collaborators.
    pub tags: Vec<String>,
    /// Translation type; `"machine"` shows the machine translation notice.
    pub translation_type: Option<String>,
    /// Data source; forwarded to SEO collaborators.
    pub data_source: Option<String>,
}

/// Routing context for the page being rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutingContext {
    /// Current path (e.g. "/jp/docs/apm/install").
    pub path: String,
    /// Current locale (e.g. "jp"); `None` for the default locale.
    pub locale: Option<String>,
}

impl RoutingContext {
    /// Create a routing context.
    pub fn new(path: impl Into<String>, locale: Option<&str>) -> Self {
        Self {
            path: path.into(),
            locale: locale.map(str::to_owned),
        }
    }

    /// Path of the English original: the first `/{locale}` segment removed.
    #[must_use]
    pub fn english_path(&self) -> String {
        match self.locale.as_deref() {
            Some(locale) if !locale.is_empty() => self.path.replacen(&format!("/{locale}"), "", 1),
            _ => self.path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r##"{
            "title": "Install the agent",
            "metaDescription": "How to install",
            "body": "<p>Body</p>",
            "tableOfContents": {
                "items": [
                    {"title": "Requirements #requirements", "url": "#requirements"},
                    {"title": "Install steps #steps"}
                ]
            },
            "relatedResources": [{"title": "APM", "url": "/docs/apm"}],
            "fileRelativePath": "src/content/docs/apm/install.mdx",
            "frontmatter": {
                "type": "landingPage",
                "tags": ["apm", "install"],
                "translationType": "machine",
                "dataSource": "apm"
            }
        }"##;

        let doc = DocumentPayload::from_json(json).unwrap();
        assert_eq!(doc.title, "Install the agent");
        assert_eq!(doc.meta_description.as_deref(), Some("How to install"));
        assert_eq!(
            doc.table_of_contents.items,
            vec![
                RawTocEntry::new("Requirements #requirements", Some("#requirements")),
                RawTocEntry::new("Install steps #steps", None),
            ]
        );
        assert_eq!(doc.related_resources.len(), 1);
        assert_eq!(
            doc.file_relative_path.as_deref(),
            Some("src/content/docs/apm/install.mdx")
        );
        assert_eq!(doc.frontmatter.page_type.as_deref(), Some("landingPage"));
        assert_eq!(doc.frontmatter.tags, vec!["apm", "install"]);
        assert!(doc.is_machine_translated());
    }

    #[test]
    fn test_missing_table_of_contents() {
        let doc = DocumentPayload::from_json(r#"{"title": "Empty"}"#).unwrap();
        assert!(doc.table_of_contents.items.is_empty());
        assert!(!doc.is_machine_translated());
    }

    #[test]
    fn test_null_table_of_contents_and_items() {
        let doc = DocumentPayload::from_json(r#"{"tableOfContents": null}"#).unwrap();
        assert!(doc.table_of_contents.items.is_empty());

        let doc = DocumentPayload::from_json(r#"{"tableOfContents": {"items": null}}"#).unwrap();
        assert!(doc.table_of_contents.items.is_empty());
    }

    #[test]
    fn test_malformed_entries_degrade() {
        let json = r##"{"tableOfContents": {"items": [
            null,
            {"title": 7},
            {"title": "Valid entry #valid", "url": "#valid"}
        ]}}"##;
        let doc = DocumentPayload::from_json(json).unwrap();
        assert_eq!(
            doc.table_of_contents.items,
            vec![
                RawTocEntry::default(),
                RawTocEntry::default(),
                RawTocEntry::new("Valid entry #valid", Some("#valid")),
            ]
        );
    }

    #[test]
    fn test_parse_yaml_payload() {
        let yaml = "
title: Alerts
body: <p>Alerts</p>
tableOfContents:
  items:
    - title: Conditions conditions
frontmatter:
  translationType: human
";
        let doc = DocumentPayload::from_yaml(yaml).unwrap();
        assert_eq!(doc.title, "Alerts");
        assert_eq!(doc.table_of_contents.items[0].title, "Conditions conditions");
        assert!(!doc.is_machine_translated());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            DocumentPayload::from_json("{not json"),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_english_path() {
        let routing = RoutingContext::new("/jp/docs/apm/install", Some("jp"));
        assert_eq!(routing.english_path(), "/docs/apm/install");

        let routing = RoutingContext::new("/docs/apm", None);
        assert_eq!(routing.english_path(), "/docs/apm");
    }
}
