//! Page session: one reader's view of the documentation site.
//!
//! [`PageSession`] owns the layout state controller, the current document
//! and its heading list. Headings are rebuilt with a fresh slug registry each
//! time a document is loaded, so anchors never leak between pages.

use std::fmt;

use docpane_anchors::{Heading, HeadingListBuilder};
use docpane_config::{Config, ConfigError, PageConfig};
use docpane_layout::{
    BreakpointPolicy, LayoutEvent, LayoutStateController, SearchQuery, SearchSink,
};

use crate::composer::{ComposerConfig, PageComposer};
use crate::document::{DocumentPayload, RoutingContext};
use crate::region::PageLayout;
use crate::telemetry::{PAGE_TYPE_ATTRIBUTE, Telemetry};

/// Layout state, document and composition for a single reader.
pub struct PageSession {
    layout: LayoutStateController,
    composer: PageComposer,
    telemetry: Option<Box<dyn Telemetry>>,
    page_type: String,
    locale: Option<String>,
    document: DocumentPayload,
    headings: Vec<Heading>,
}

impl PageSession {
    /// Create a session from explicit parts.
    #[must_use]
    pub fn new(layout: LayoutStateController, composer: PageComposer) -> Self {
        Self {
            layout,
            composer,
            telemetry: None,
            page_type: PageConfig::default().page_type,
            locale: None,
            document: DocumentPayload::default(),
            headings: Vec::new(),
        }
    }

    /// Create a session from loaded configuration.
    ///
    /// `viewport_width` is the initial viewport signal; `None` means wide.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Pattern` if a navigation pattern is invalid.
    pub fn from_config(config: &Config, viewport_width: Option<u32>) -> Result<Self, ConfigError> {
        let policy = BreakpointPolicy {
            breakpoint: config.layout.breakpoint,
            sidebar_width: config.layout.sidebar_width,
            narrow_sidebar_width: config.layout.narrow_sidebar_width,
            collapsed_sidebar_width: config.layout.collapsed_sidebar_width,
            page_tools_width: config.layout.page_tools_width,
        };
        let composer = PageComposer::new(ComposerConfig::from_config(config)?);

        let mut session = Self::new(LayoutStateController::new(policy, viewport_width), composer);
        session.page_type.clone_from(&config.page.page_type);
        Ok(session)
    }

    /// Report page attributes to a telemetry collaborator on every render.
    #[must_use]
    pub fn with_telemetry<T: Telemetry + 'static>(mut self, telemetry: T) -> Self {
        self.telemetry = Some(Box::new(telemetry));
        self
    }

    /// Forward submitted searches to a sink.
    #[must_use]
    pub fn with_search_sink<S: SearchSink + 'static>(mut self, sink: S) -> Self {
        self.layout = self.layout.with_search_sink(sink);
        self
    }

    /// Set the reader's locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Replace the current document without navigating.
    pub fn load(&mut self, document: DocumentPayload) {
        self.headings = HeadingListBuilder::new().build(&document.table_of_contents.items);
        tracing::debug!(
            title = %document.title,
            headings = self.headings.len(),
            "Loaded document"
        );
        self.document = document;
    }

    /// Navigate to `path` and show `document` there.
    ///
    /// Closes the mobile navigation overlay.
    pub fn navigate(&mut self, path: impl Into<String>, document: DocumentPayload) {
        self.layout.dispatch(LayoutEvent::NavigateTo(path.into()));
        self.load(document);
    }

    /// Apply a layout event.
    pub fn dispatch(&mut self, event: LayoutEvent) -> Option<SearchQuery> {
        self.layout.dispatch(event)
    }

    /// Compose the current page.
    ///
    /// Reports the page type to telemetry first. Telemetry failures are
    /// logged and do not affect the result.
    pub fn render(&self) -> PageLayout {
        if let Some(telemetry) = &self.telemetry
            && let Err(e) = telemetry.set_custom_attribute(PAGE_TYPE_ATTRIBUTE, &self.page_type)
        {
            tracing::warn!(error = %e, "Failed to report page type");
        }

        let routing = RoutingContext {
            path: self.layout.active_path().to_owned(),
            locale: self.locale.clone(),
        };
        self.composer.compose(
            self.layout.state(),
            &self.layout.geometry(),
            &self.headings,
            &self.document,
            &routing,
        )
    }

    /// Layout state controller.
    pub fn layout(&self) -> &LayoutStateController {
        &self.layout
    }

    /// Headings of the current document.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Current document.
    pub fn document(&self) -> &DocumentPayload {
        &self.document
    }
}

impl fmt::Debug for PageSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageSession")
            .field("layout", &self.layout)
            .field("composer", &self.composer)
            .field("telemetry", &self.telemetry.is_some())
            .field("page_type", &self.page_type)
            .field("locale", &self.locale)
            .field("document", &self.document.title)
            .field("headings", &self.headings.len())
            .finish()
    }
}
