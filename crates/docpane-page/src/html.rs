//! Structural HTML for a page region tree.
//!
//! Emits regions as semantic elements with `docpane-*` classes and data
//! attributes. Sizes are exposed as CSS custom properties; colors, fonts and
//! spacing belong to the stylesheet.

use std::fmt::Write;

use docpane_anchors::Heading;
use docpane_layout::{PageToolsPlacement, SEARCH_PARAM, ViewportClass};

use crate::document::RelatedResource;
use crate::region::{
    MainRegion, MobileHeaderRegion, NavigationRegion, NavigationTree, PageLayout, PageTools,
    SearchBox, SidebarRegion,
};

/// Render a region tree to an HTML fragment.
pub fn render_html(page: &PageLayout) -> String {
    let mut html = String::with_capacity(4096 + page.main.content.body.len());

    let viewport = match page.viewport_class {
        ViewportClass::Wide => "wide",
        ViewportClass::Narrow => "narrow",
    };
    let _ = writeln!(
        html,
        "<div class=\"docpane-layout\" data-viewport=\"{viewport}\" \
         style=\"--sidebar-width: {}px\">",
        page.sidebar.width
    );

    render_mobile_header(&mut html, &page.mobile_header);
    render_sidebar(&mut html, &page.sidebar);
    render_main(&mut html, &page.main);

    match page.footer.file_relative_path.as_deref() {
        Some(path) => {
            let _ = writeln!(
                html,
                "<footer class=\"docpane-footer\" data-file=\"{}\"></footer>",
                escape_html(path)
            );
        }
        None => html.push_str("<footer class=\"docpane-footer\"></footer>\n"),
    }

    html.push_str("</div>");
    html
}

/// Render the mobile header and its navigation overlay.
fn render_mobile_header(html: &mut String, header: &MobileHeaderRegion) {
    let _ = writeln!(
        html,
        "<header class=\"docpane-mobile-header\" data-open=\"{open}\">\n\
         <button type=\"button\" class=\"docpane-mobile-nav-toggle\" \
         data-action=\"toggle-mobile-nav\" aria-expanded=\"{open}\"></button>",
        open = header.open
    );
    if header.open {
        html.push_str("<div class=\"docpane-mobile-nav\">\n");
    } else {
        html.push_str("<div class=\"docpane-mobile-nav\" hidden>\n");
    }
    render_navigation(html, &header.navigation);
    html.push_str("</div>\n</header>\n");
}

/// Render the navigation sidebar.
fn render_sidebar(html: &mut String, sidebar: &SidebarRegion) {
    let _ = writeln!(
        html,
        "<aside class=\"docpane-sidebar\" data-expanded=\"{}\">",
        sidebar.expanded
    );

    html.push_str("<div class=\"docpane-sidebar-header\">\n");
    if sidebar.logo {
        html.push_str("<a href=\"/\" class=\"docpane-logo\"></a>\n");
    }
    let _ = writeln!(
        html,
        "<button type=\"button\" class=\"docpane-sidebar-toggle\" \
         data-action=\"toggle-sidebar\" aria-expanded=\"{}\"></button>",
        sidebar.expanded
    );
    if let Some(search) = &sidebar.search {
        render_search(html, search);
    }
    html.push_str("</div>\n");

    if let Some(navigation) = &sidebar.navigation {
        render_navigation(html, navigation);
        html.push_str("<div class=\"docpane-nav-footer\"></div>\n");
    }

    html.push_str("</aside>\n");
}

/// Render the sidebar search box.
fn render_search(html: &mut String, search: &SearchBox) {
    html.push_str("<form class=\"docpane-search\" role=\"search\" method=\"get\">\n");
    let _ = writeln!(
        html,
        "<input type=\"search\" name=\"{SEARCH_PARAM}\" value=\"{}\" data-placeholder-key=\"{}\">",
        escape_html(&search.value),
        escape_html(&search.placeholder_key),
    );
    html.push_str("</form>\n");
}

/// Render the navigation mount point.
fn render_navigation(html: &mut String, navigation: &NavigationRegion) {
    let tree = match navigation.tree {
        NavigationTree::Docs => "docs",
        NavigationTree::StyleGuide => "style-guide",
    };
    let _ = write!(
        html,
        "<nav class=\"docpane-navigation\" data-tree=\"{tree}\" data-active-path=\"{}\"",
        escape_html(&navigation.active_path)
    );
    if let Some(locale) = &navigation.locale {
        let _ = write!(html, " data-locale=\"{}\"", escape_html(locale));
    }
    html.push_str("></nav>\n");
}

/// Render title, content and page tools.
fn render_main(html: &mut String, main: &MainRegion) {
    if main.visible {
        html.push_str("<main class=\"docpane-main\">\n");
    } else {
        html.push_str("<main class=\"docpane-main\" hidden>\n");
    }

    let placement = match main.page_tools.placement {
        PageToolsPlacement::Rail { width } => {
            format!("data-page-tools=\"rail\" style=\"--page-tools-width: {width}px\"")
        }
        PageToolsPlacement::Stacked => "data-page-tools=\"stacked\"".to_owned(),
    };
    let _ = writeln!(html, "<div class=\"docpane-page\" {placement}>");

    if let Some(notice) = &main.translation_notice {
        let _ = writeln!(
            html,
            "<aside class=\"docpane-translation-notice\"><a href=\"{}\" hreflang=\"en\"></a></aside>",
            escape_html(&notice.english_href)
        );
    }

    let _ = writeln!(
        html,
        "<h1 class=\"docpane-page-title\">{}</h1>",
        escape_html(&main.title)
    );

    html.push_str("<article class=\"docpane-content\">\n");
    html.push_str(&main.content.body);
    html.push_str("\n</article>\n");

    render_page_tools(html, &main.page_tools);

    html.push_str("</div>\n</main>\n");
}

/// Render the page tools rail.
fn render_page_tools(html: &mut String, tools: &PageTools) {
    html.push_str("<aside class=\"docpane-page-tools\">\n");

    let contributing = &tools.contributing;
    let _ = write!(
        html,
        "<div class=\"docpane-contributing\" data-page-title=\"{}\" data-issue-labels=\"{}\"",
        escape_html(&contributing.page_title),
        escape_html(&contributing.issue_labels.join(",")),
    );
    if let Some(path) = &contributing.file_relative_path {
        let _ = write!(html, " data-file=\"{}\"", escape_html(path));
    }
    html.push_str("></div>\n");

    if let Some(headings) = &tools.table_of_contents {
        render_toc(html, headings);
    }

    let _ = writeln!(
        html,
        "<div class=\"docpane-feedback\" data-page-title=\"{}\"></div>",
        escape_html(&tools.feedback.page_title)
    );

    render_related(html, &tools.related_resources);

    html.push_str("</aside>\n");
}

/// Render the table of contents.
fn render_toc(html: &mut String, headings: &[Heading]) {
    html.push_str("<nav class=\"docpane-toc\">\n<ul>\n");
    for heading in headings {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&anchor_href(&heading.id)),
            escape_html(&heading.text),
        );
    }
    html.push_str("</ul>\n</nav>\n");
}

/// Render related resource links.
fn render_related(html: &mut String, resources: &[RelatedResource]) {
    if resources.is_empty() {
        return;
    }
    html.push_str("<ul class=\"docpane-related\">\n");
    for resource in resources {
        let _ = writeln!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&resource.url),
            escape_html(&resource.title),
        );
    }
    html.push_str("</ul>\n");
}

/// In-page link for a heading id. Ids supplied as `#anchor` are kept as-is.
fn anchor_href(id: &str) -> String {
    if id.starts_with('#') {
        id.to_owned()
    } else {
        format!("#{id}")
    }
}

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use docpane_layout::{BreakpointPolicy, LayoutState};

    use super::*;
    use crate::composer::PageComposer;
    use crate::document::{DocumentPayload, RoutingContext};

    fn page(state: &LayoutState, headings: &[Heading], document: &DocumentPayload) -> PageLayout {
        let geometry = BreakpointPolicy::default().geometry(state);
        let routing = RoutingContext::new("/docs/apm", Some("en"));
        PageComposer::default().compose(state, &geometry, headings, document, &routing)
    }

    fn heading(id: &str, text: &str) -> Heading {
        Heading {
            id: id.to_owned(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_anchor_href() {
        assert_eq!(anchor_href("setup"), "#setup");
        assert_eq!(anchor_href("#examples"), "#examples");
    }

    #[test]
    fn test_render_expanded_page() {
        let document = DocumentPayload {
            title: "APM & you".to_owned(),
            body: "<p>Body</p>".to_owned(),
            ..Default::default()
        };
        let headings = vec![heading("setup", "Setup"), heading("#examples", "Examples")];
        let html = render_html(&page(
            &LayoutState::initial(ViewportClass::Wide),
            &headings,
            &document,
        ));

        assert!(html.contains("style=\"--sidebar-width: 340px\""));
        assert!(html.contains("data-viewport=\"wide\""));
        assert!(html.contains("<a href=\"/\" class=\"docpane-logo\"></a>"));
        assert!(html.contains("<input type=\"search\" name=\"q\""));
        assert!(html.contains("data-tree=\"docs\""));
        assert!(html.contains("data-locale=\"en\""));
        assert!(html.contains("<main class=\"docpane-main\">"));
        assert!(html.contains("<h1 class=\"docpane-page-title\">APM &amp; you</h1>"));
        assert!(html.contains("<p>Body</p>"));
        assert!(html.contains("<li><a href=\"#setup\">Setup</a></li>"));
        assert!(html.contains("<li><a href=\"#examples\">Examples</a></li>"));
        assert!(html.contains("data-page-tools=\"rail\""));
        assert!(html.contains("<header class=\"docpane-mobile-header\" data-open=\"false\">"));
        assert!(html.contains("<div class=\"docpane-mobile-nav\" hidden>"));
        assert!(html.contains("<div class=\"docpane-nav-footer\"></div>"));
        assert_eq!(html.matches("class=\"docpane-navigation\"").count(), 2);
    }

    #[test]
    fn test_render_collapsed_page_without_headings() {
        let state = LayoutState {
            sidebar_expanded: false,
            mobile_nav_open: true,
            ..LayoutState::initial(ViewportClass::Narrow)
        };
        let html = render_html(&page(&state, &[], &DocumentPayload::default()));

        assert!(html.contains("style=\"--sidebar-width: 50px\""));
        assert!(html.contains("data-expanded=\"false\""));
        assert!(!html.contains("docpane-logo"));
        assert!(!html.contains("docpane-search"));
        assert!(!html.contains("docpane-nav-footer"));
        assert!(!html.contains("docpane-toc"));
        assert!(html.contains("<main class=\"docpane-main\" hidden>"));
        assert!(html.contains("<header class=\"docpane-mobile-header\" data-open=\"true\">"));
        assert!(html.contains("<div class=\"docpane-mobile-nav\">\n<nav class=\"docpane-navigation\""));
        assert_eq!(html.matches("class=\"docpane-navigation\"").count(), 1);
        assert!(html.contains("data-page-tools=\"stacked\""));
    }

    #[test]
    fn test_search_value_is_escaped() {
        let state = LayoutState {
            search_term: "\"><script>".to_owned(),
            ..LayoutState::initial(ViewportClass::Wide)
        };
        let html = render_html(&page(&state, &[], &DocumentPayload::default()));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
    }
}
