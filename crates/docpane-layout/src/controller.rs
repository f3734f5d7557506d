//! Layout state machine.
//!
//! Every interaction is a [`LayoutEvent`] applied through
//! [`LayoutStateController::dispatch`]. Events are handled synchronously in
//! arrival order, each one completing before the next is applied.

use std::fmt;

use crate::policy::{BreakpointPolicy, LayoutGeometry};
use crate::search::{SearchQuery, SearchSink};
use crate::state::LayoutState;

/// Discrete layout interactions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutEvent {
    /// Collapse or expand the sidebar.
    ToggleSidebar,
    /// The active document path changed.
    NavigateTo(String),
    /// Open the mobile navigation overlay.
    OpenMobileNav,
    /// Close the mobile navigation overlay.
    CloseMobileNav,
    /// Replace the search box contents.
    SetSearchTerm(String),
    /// Submit the current search term.
    SubmitSearch,
    /// The viewport width changed, or became unavailable.
    ViewportResized(Option<u32>),
}

/// Owns [`LayoutState`] for one page session.
///
/// There is no terminal state: the controller lives as long as the session.
pub struct LayoutStateController {
    state: LayoutState,
    policy: BreakpointPolicy,
    active_path: String,
    search_sink: Option<Box<dyn SearchSink>>,
}

impl LayoutStateController {
    /// Create a controller in the initial state for the given viewport.
    #[must_use]
    pub fn new(policy: BreakpointPolicy, viewport_width: Option<u32>) -> Self {
        Self {
            state: LayoutState::initial(policy.classify(viewport_width)),
            policy,
            active_path: String::new(),
            search_sink: None,
        }
    }

    /// Deliver submitted searches to `sink`.
    #[must_use]
    pub fn with_search_sink<S: SearchSink + 'static>(mut self, sink: S) -> Self {
        self.search_sink = Some(Box::new(sink));
        self
    }

    /// Set the path the session starts on.
    #[must_use]
    pub fn with_active_path(mut self, path: impl Into<String>) -> Self {
        self.active_path = path.into();
        self
    }

    /// Current layout state.
    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Path of the document currently shown.
    pub fn active_path(&self) -> &str {
        &self.active_path
    }

    /// Breakpoint policy used for classification and geometry.
    pub fn policy(&self) -> &BreakpointPolicy {
        &self.policy
    }

    /// Geometry for the current state.
    pub fn geometry(&self) -> LayoutGeometry {
        self.policy.geometry(&self.state)
    }

    /// Apply one event.
    ///
    /// Returns the submitted query for [`LayoutEvent::SubmitSearch`], after it
    /// has been handed to the search sink (if any).
    pub fn dispatch(&mut self, event: LayoutEvent) -> Option<SearchQuery> {
        tracing::trace!(event = ?event, "Layout event");

        match event {
            LayoutEvent::ToggleSidebar => {
                self.state.sidebar_expanded = !self.state.sidebar_expanded;
            }
            LayoutEvent::NavigateTo(path) => {
                self.state.mobile_nav_open = false;
                self.active_path = path;
            }
            LayoutEvent::OpenMobileNav => self.state.mobile_nav_open = true,
            LayoutEvent::CloseMobileNav => self.state.mobile_nav_open = false,
            LayoutEvent::SetSearchTerm(term) => self.state.search_term = term,
            LayoutEvent::SubmitSearch => return Some(self.submit_search()),
            LayoutEvent::ViewportResized(width) => {
                let class = self.policy.classify(width);
                if class != self.state.viewport_class {
                    tracing::debug!(width = ?width, class = ?class, "Viewport class changed");
                }
                self.state.viewport_class = class;
            }
        }

        None
    }

    fn submit_search(&mut self) -> SearchQuery {
        let query = SearchQuery::new(self.state.search_term.clone());

        if let Some(sink) = self.search_sink.as_mut()
            && let Err(e) = sink.submit(&query)
        {
            tracing::warn!(term = %query.term, error = %e, "Search submission failed");
        }

        query
    }
}

impl fmt::Debug for LayoutStateController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutStateController")
            .field("state", &self.state)
            .field("policy", &self.policy)
            .field("active_path", &self.active_path)
            .field("search_sink", &self.search_sink.is_some())
            .finish()
    }
}
