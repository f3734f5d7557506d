//! Breakpoint policy and derived layout geometry.

use serde::Serialize;

use crate::state::{LayoutState, ViewportClass};

/// Viewport width (px) at or below which the layout is narrow.
const DEFAULT_BREAKPOINT: u32 = 1240;

/// Maps viewport widths to size classes and sizes the sidebar.
///
/// All widths are in CSS pixels. The policy holds no state; callers derive
/// geometry again after every event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BreakpointPolicy {
    /// Viewport width at or below which the layout is [`ViewportClass::Narrow`].
    pub breakpoint: u32,
    /// Expanded sidebar width on wide viewports.
    pub sidebar_width: u32,
    /// Expanded sidebar width on narrow viewports.
    pub narrow_sidebar_width: u32,
    /// Collapsed sidebar width on any viewport.
    pub collapsed_sidebar_width: u32,
    /// Width of the page tools rail on wide viewports.
    pub page_tools_width: u32,
}

impl Default for BreakpointPolicy {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            sidebar_width: 340,
            narrow_sidebar_width: 278,
            collapsed_sidebar_width: 50,
            page_tools_width: 320,
        }
    }
}

impl BreakpointPolicy {
    /// Classify a viewport width.
    ///
    /// Without a viewport signal (e.g. server-side rendering) the layout is wide.
    #[must_use]
    pub fn classify(&self, viewport_width: Option<u32>) -> ViewportClass {
        match viewport_width {
            Some(width) if width <= self.breakpoint => ViewportClass::Narrow,
            _ => ViewportClass::Wide,
        }
    }

    /// Sidebar width for a viewport class and sidebar state.
    ///
    /// A collapsed sidebar always uses the collapsed width.
    #[must_use]
    pub fn width_for(&self, viewport_class: ViewportClass, sidebar_expanded: bool) -> u32 {
        match (sidebar_expanded, viewport_class) {
            (false, _) => self.collapsed_sidebar_width,
            (true, ViewportClass::Wide) => self.sidebar_width,
            (true, ViewportClass::Narrow) => self.narrow_sidebar_width,
        }
    }

    /// Derive the full geometry for a layout state.
    #[must_use]
    pub fn geometry(&self, state: &LayoutState) -> LayoutGeometry {
        let page_tools = match state.viewport_class {
            ViewportClass::Wide => PageToolsPlacement::Rail {
                width: self.page_tools_width,
            },
            ViewportClass::Narrow => PageToolsPlacement::Stacked,
        };

        LayoutGeometry {
            viewport_class: state.viewport_class,
            sidebar_width: self.width_for(state.viewport_class, state.sidebar_expanded),
            sidebar_expanded: state.sidebar_expanded,
            content_visible: !state.mobile_nav_open,
            page_tools,
        }
    }
}

/// Where the page tools (table of contents, feedback, related links) go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "placement", rename_all = "lowercase")]
pub enum PageToolsPlacement {
    /// Fixed-width column beside the content.
    Rail {
        /// Column width in pixels.
        width: u32,
    },
    /// Single column below the content.
    Stacked,
}

/// Layout geometry derived from [`LayoutState`] and [`BreakpointPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutGeometry {
    /// Viewport class the geometry was derived for.
    pub viewport_class: ViewportClass,
    /// Sidebar width in pixels.
    pub sidebar_width: u32,
    /// Whether the sidebar shows logo, search box and navigation tree.
    pub sidebar_expanded: bool,
    /// Whether the main content is displayed. It stays mounted either way.
    pub content_visible: bool,
    /// Page tools placement.
    pub page_tools: PageToolsPlacement,
}
