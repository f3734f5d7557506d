//! Documentation page composition for docpane.
//!
//! This crate provides:
//! - [`DocumentPayload`]: the document record supplied by the content layer
//! - [`PageComposer`]: builds the [`PageLayout`] region tree
//! - [`render_html`]: structural HTML for a region tree
//! - [`PageSession`]: ties layout state, headings and composition together
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docpane_config::Config;
//! use docpane_layout::LayoutEvent;
//! use docpane_page::{DocumentPayload, PageSession};
//!
//! let document = DocumentPayload::from_json(r##"{
//!     "title": "NRQL syntax",
//!     "body": "<p>Query your data.</p>",
//!     "tableOfContents": {"items": [{"title": "Clauses #clauses", "url": "#clauses"}]}
//! }"##)?;
//!
//! let mut session = PageSession::from_config(&Config::default(), Some(1440))?;
//! session.navigate("/docs/nrql/syntax", document);
//! session.dispatch(LayoutEvent::ToggleSidebar);
//!
//! let page = session.render();
//! assert_eq!(page.sidebar.width, 50);
//! assert!(page.sidebar.search.is_none());
//! # Ok(())
//! # }
//! ```

mod composer;
mod document;
mod html;
mod region;
mod session;
mod telemetry;

pub use composer::{ComposerConfig, PageComposer};
pub use document::{
    DocumentError, DocumentPayload, Frontmatter, RelatedResource, RoutingContext,
    TableOfContents,
};
pub use html::{escape_html, render_html};
pub use region::{
    ContentRegion, ContributingLinks, FeedbackWidget, FooterRegion, MainRegion,
    MobileHeaderRegion, NavigationRegion, NavigationTree, PageLayout, PageMetadata, PageTools,
    SearchBox, SidebarRegion, TranslationNotice,
};
pub use session::PageSession;
pub use telemetry::{NoopTelemetry, PAGE_TYPE_ATTRIBUTE, Telemetry, TelemetryError};

// Re-export heading types for convenience
pub use docpane_anchors::{Heading, RawTocEntry};
