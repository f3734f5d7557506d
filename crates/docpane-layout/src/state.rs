//! Layout state record.

use serde::{Deserialize, Serialize};

/// Coarse viewport size bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// At or below the breakpoint.
    Narrow,
    /// Above the breakpoint. Also used when no viewport signal is available.
    #[default]
    Wide,
}

/// UI state owned by [`LayoutStateController`](crate::LayoutStateController).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    /// Whether the sidebar shows its full contents.
    pub sidebar_expanded: bool,
    /// Whether the mobile navigation overlay is open.
    pub mobile_nav_open: bool,
    /// Current search box contents, stored verbatim.
    pub search_term: String,
    /// Current viewport size bucket.
    pub viewport_class: ViewportClass,
}

impl LayoutState {
    /// Initial state for a page session.
    #[must_use]
    pub fn initial(viewport_class: ViewportClass) -> Self {
        Self {
            sidebar_expanded: true,
            mobile_nav_open: false,
            search_term: String::new(),
            viewport_class,
        }
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::initial(ViewportClass::default())
    }
}
