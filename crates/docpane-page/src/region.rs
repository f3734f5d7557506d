//! Page region tree.
//!
//! The structural contract handed to the presentation layer: which regions
//! exist, how wide the sidebar is, and what each region contains.

use docpane_anchors::Heading;
use docpane_layout::{PageToolsPlacement, ViewportClass};
use serde::Serialize;

use crate::document::RelatedResource;

/// Complete page region tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// Viewport class the tree was composed for.
    pub viewport_class: ViewportClass,
    /// Page metadata for SEO collaborators.
    pub metadata: PageMetadata,
    /// Mobile header with the navigation overlay.
    pub mobile_header: MobileHeaderRegion,
    /// Navigation sidebar.
    pub sidebar: SidebarRegion,
    /// Title, content and page tools.
    pub main: MainRegion,
    /// Page footer.
    pub footer: FooterRegion,
}

/// Document metadata passed through for head and meta tag emission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Page title.
    pub title: String,
    /// Meta description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Frontmatter page type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<String>,
    /// Frontmatter tags.
    pub tags: Vec<String>,
    /// Frontmatter data source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
}

/// Header shown on narrow viewports.
///
/// Always present; `open` controls whether its navigation overlay is shown.
/// While open, the main region is hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MobileHeaderRegion {
    /// Whether the navigation overlay is open.
    pub open: bool,
    /// Navigation tree inside the overlay.
    pub navigation: NavigationRegion,
}

/// Navigation sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarRegion {
    /// Width in pixels.
    pub width: u32,
    /// Whether the sidebar is expanded.
    pub expanded: bool,
    /// Whether the logo link is shown.
    pub logo: bool,
    /// Search box, only when expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchBox>,
    /// Navigation tree, only when expanded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationRegion>,
}

/// Sidebar search box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBox {
    /// Current search term.
    pub value: String,
    /// Localization key for the placeholder text.
    pub placeholder_key: String,
}

/// Which navigation tree is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationTree {
    /// Main documentation tree.
    Docs,
    /// Style guide and handbook tree.
    StyleGuide,
}

/// Navigation tree. In the sidebar the navigation footer is shown alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationRegion {
    /// Tree to display.
    pub tree: NavigationTree,
    /// Locale for navigation labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Path to highlight as active.
    pub active_path: String,
}

/// Main region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainRegion {
    /// Whether the region is displayed. Hidden regions stay mounted.
    pub visible: bool,
    /// Machine translation notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_notice: Option<TranslationNotice>,
    /// Page title.
    pub title: String,
    /// Page body.
    pub content: ContentRegion,
    /// Page tools rail.
    pub page_tools: PageTools,
}

/// Notice linking a machine-translated page to its English original.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationNotice {
    /// Path of the English page.
    pub english_href: String,
}

/// Page body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContentRegion {
    /// Rendered body markup.
    pub body: String,
}

/// Page tools rail.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTools {
    /// Rail beside the content or stacked below it.
    pub placement: PageToolsPlacement,
    /// Edit and issue links.
    pub contributing: ContributingLinks,
    /// Table of contents; absent when the page has no headings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<Vec<Heading>>,
    /// Feedback widget.
    pub feedback: FeedbackWidget,
    /// Related resource links.
    pub related_resources: Vec<RelatedResource>,
}

/// Edit-this-page and file-an-issue links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributingLinks {
    /// Page title used in issue templates.
    pub page_title: String,
    /// Source file to edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_relative_path: Option<String>,
    /// Labels for new issues.
    pub issue_labels: Vec<String>,
}

/// Page feedback widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackWidget {
    /// Page title the feedback refers to.
    pub page_title: String,
}

/// Page footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterRegion {
    /// Source file path for the footer edit link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_relative_path: Option<String>,
}
