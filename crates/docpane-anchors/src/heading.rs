//! Table of contents heading list.

use crate::slug::SlugRegistry;
use crate::title::strip_disambiguator;

/// Table of contents entry as supplied by the content layer.
///
/// `title` usually ends with an anchor hint token (`"Install #install"`).
/// When `url` is set it is the authoritative anchor for the heading.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTocEntry {
    /// Heading title, possibly with a trailing anchor hint.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::lenient::string")
    )]
    pub title: String,
    /// Explicit anchor for the heading.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub url: Option<String>,
}

impl RawTocEntry {
    /// Create an entry from a title and optional anchor.
    pub fn new(title: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            title: title.into(),
            url: url.map(str::to_owned),
        }
    }

    /// Explicit anchor, if present and non-empty.
    fn anchor(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Heading shown in the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Anchor id, unique within one document.
    pub id: String,
    /// Display text without the anchor hint.
    pub text: String,
}

/// Builds the heading list for a single document.
///
/// Owns a fresh [`SlugRegistry`] and is consumed by [`build`](Self::build),
/// so one builder covers exactly one document.
#[derive(Debug, Default)]
pub struct HeadingListBuilder {
    slugs: SlugRegistry,
}

impl HeadingListBuilder {
    /// Create a builder with an empty slug registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert table of contents entries into headings, preserving order.
    ///
    /// Entries with an explicit `url` keep it as their id; all others get a
    /// slug of their full title. Output length always equals input length.
    pub fn build<'a, I>(mut self, entries: I) -> Vec<Heading>
    where
        I: IntoIterator<Item = &'a RawTocEntry>,
    {
        let headings: Vec<Heading> = entries
            .into_iter()
            .map(|entry| self.heading(entry))
            .collect();

        tracing::debug!(
            headings = headings.len(),
            slugged = self.slugs.len(),
            "Built heading list"
        );
        headings
    }

    fn heading(&mut self, entry: &RawTocEntry) -> Heading {
        let id = match entry.anchor() {
            Some(url) => url.to_owned(),
            None => self.slugs.slug(&entry.title),
        };
        Heading {
            id,
            text: strip_disambiguator(&entry.title),
        }
    }
}

/// Build the heading list for one document with a fresh registry.
#[must_use]
pub fn build_headings(entries: &[RawTocEntry]) -> Vec<Heading> {
    HeadingListBuilder::new().build(entries)
}
