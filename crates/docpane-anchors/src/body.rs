//! Markdown body rendering with heading anchors.
//!
//! Assigns heading ids with the same [`SlugRegistry`] rules the table of
//! contents uses, so every link in the table of contents resolves to an
//! element in the body.

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::heading::RawTocEntry;
use crate::slug::SlugRegistry;

/// Rendered page body with its table of contents entries.
#[derive(Clone, Debug)]
pub struct RenderedBody {
    /// Rendered HTML.
    pub html: String,
    /// One entry per heading, in document order.
    ///
    /// Titles carry the anchor as a trailing `#id` token and `url` holds the
    /// anchor itself, matching what the content layer supplies.
    pub toc: Vec<RawTocEntry>,
}

/// Heading being collected until its end tag.
struct PendingHeading {
    /// Index of the start event in the output buffer.
    start: usize,
    /// Id from `{#custom-id}` heading attributes.
    explicit_id: Option<String>,
    /// Plain text for slugging.
    text: String,
}

/// Render markdown to HTML, assigning a unique id to every heading.
///
/// Headings with an explicit `{#id}` attribute keep it and reserve it, so a
/// later heading with the same text is numbered. All others are slugged from
/// their plain text.
#[must_use]
pub fn render_body(markdown: &str) -> RenderedBody {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_HEADING_ATTRIBUTES;

    let mut slugs = SlugRegistry::new();
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut toc = Vec::new();
    let mut pending: Option<PendingHeading> = None;

    for event in Parser::new_ext(markdown, options) {
        if let (Some(heading), Event::Text(text) | Event::Code(text)) = (pending.as_mut(), &event) {
            heading.text.push_str(text);
        }

        match event {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => {
                pending = Some(PendingHeading {
                    start: events.len(),
                    explicit_id: id.map(|id| id.to_string()),
                    text: String::new(),
                });
                events.push(Event::Start(Tag::Heading {
                    level,
                    id: None,
                    classes,
                    attrs,
                }));
            }
            Event::End(TagEnd::Heading(level)) => {
                if let Some(heading) = pending.take() {
                    let text = heading.text.trim();
                    let anchor = match heading.explicit_id {
                        Some(id) if !id.is_empty() => {
                            slugs.reserve(&id);
                            id
                        }
                        _ => slugs.slug(text),
                    };
                    if let Some(Event::Start(Tag::Heading { id, .. })) = events.get_mut(heading.start)
                    {
                        *id = Some(CowStr::from(anchor.clone()));
                    }
                    toc.push(RawTocEntry {
                        title: format!("{text} #{anchor}"),
                        url: Some(anchor),
                    });
                }
                events.push(Event::End(TagEnd::Heading(level)));
            }
            other => events.push(other),
        }
    }

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html, events.into_iter());

    tracing::debug!(headings = toc.len(), "Rendered body");
    RenderedBody { html, toc }
}
