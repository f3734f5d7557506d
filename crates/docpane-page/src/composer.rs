//! Page composition.
//!
//! [`PageComposer`] turns layout state, geometry, headings and the document
//! payload into a [`PageLayout`]. It holds only configuration, so the same
//! inputs always produce the same tree.

use docpane_anchors::Heading;
use docpane_config::{Config, ConfigError};
use docpane_layout::{LayoutGeometry, LayoutState};
use regex::Regex;

use crate::document::{DocumentPayload, RoutingContext};
use crate::region::{
    ContentRegion, ContributingLinks, FeedbackWidget, FooterRegion, MainRegion,
    MobileHeaderRegion, NavigationRegion, NavigationTree, PageLayout, PageMetadata, PageTools,
    SearchBox, SidebarRegion, TranslationNotice,
};

/// Configuration for [`PageComposer`].
#[derive(Clone, Debug)]
pub struct ComposerConfig {
    /// Paths matching any of these show the style guide navigation tree.
    pub style_guide_patterns: Vec<Regex>,
    /// Localization key for the search box placeholder.
    pub search_placeholder_key: String,
    /// Labels for issues opened from the contributing links.
    pub issue_labels: Vec<String>,
    /// Maximum number of related resources shown.
    pub related_resources_limit: usize,
}

impl Default for ComposerConfig {
    /// Composer settings from [`Config::default`].
    fn default() -> Self {
        let config = Config::default();
        Self {
            style_guide_patterns: config
                .navigation
                .style_guide_patterns
                .iter()
                .filter_map(|pattern| Regex::new(pattern).ok())
                .collect(),
            search_placeholder_key: config.search.placeholder_key,
            issue_labels: config.page.issue_labels,
            related_resources_limit: config.page.related_resources_limit,
        }
    }
}

impl ComposerConfig {
    /// Build composer configuration from the loaded config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Pattern` if a navigation pattern is invalid.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            style_guide_patterns: config.navigation.compile_patterns()?,
            search_placeholder_key: config.search.placeholder_key.clone(),
            issue_labels: config.page.issue_labels.clone(),
            related_resources_limit: config.page.related_resources_limit,
        })
    }
}

/// Assembles the page region tree.
#[derive(Clone, Debug, Default)]
pub struct PageComposer {
    config: ComposerConfig,
}

impl PageComposer {
    /// Create a composer.
    #[must_use]
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Compose the region tree for one page.
    #[must_use]
    pub fn compose(
        &self,
        state: &LayoutState,
        geometry: &LayoutGeometry,
        headings: &[Heading],
        document: &DocumentPayload,
        routing: &RoutingContext,
    ) -> PageLayout {
        PageLayout {
            viewport_class: geometry.viewport_class,
            metadata: PageMetadata {
                title: document.title.clone(),
                description: document.meta_description.clone(),
                page_type: document.frontmatter.page_type.clone(),
                tags: document.frontmatter.tags.clone(),
                data_source: document.frontmatter.data_source.clone(),
            },
            mobile_header: MobileHeaderRegion {
                open: state.mobile_nav_open,
                navigation: self.navigation(routing),
            },
            sidebar: self.sidebar(state, geometry, routing),
            main: self.main(geometry, headings, document, routing),
            footer: FooterRegion {
                file_relative_path: document.file_relative_path.clone(),
            },
        }
    }

    fn sidebar(
        &self,
        state: &LayoutState,
        geometry: &LayoutGeometry,
        routing: &RoutingContext,
    ) -> SidebarRegion {
        let expanded = geometry.sidebar_expanded;

        let search = expanded.then(|| SearchBox {
            value: state.search_term.clone(),
            placeholder_key: self.config.search_placeholder_key.clone(),
        });

        let navigation = expanded.then(|| self.navigation(routing));

        SidebarRegion {
            width: geometry.sidebar_width,
            expanded,
            logo: expanded,
            search,
            navigation,
        }
    }

    fn main(
        &self,
        geometry: &LayoutGeometry,
        headings: &[Heading],
        document: &DocumentPayload,
        routing: &RoutingContext,
    ) -> MainRegion {
        let translation_notice = document
            .is_machine_translated()
            .then(|| TranslationNotice {
                english_href: routing.english_path(),
            });

        let table_of_contents = (!headings.is_empty()).then(|| headings.to_vec());

        let related_resources = document
            .related_resources
            .iter()
            .take(self.config.related_resources_limit)
            .cloned()
            .collect();

        MainRegion {
            visible: geometry.content_visible,
            translation_notice,
            title: document.title.clone(),
            content: ContentRegion {
                body: document.body.clone(),
            },
            page_tools: PageTools {
                placement: geometry.page_tools,
                contributing: ContributingLinks {
                    page_title: document.title.clone(),
                    file_relative_path: document.file_relative_path.clone(),
                    issue_labels: self.config.issue_labels.clone(),
                },
                table_of_contents,
                feedback: FeedbackWidget {
                    page_title: document.title.clone(),
                },
                related_resources,
            },
        }
    }

    fn navigation(&self, routing: &RoutingContext) -> NavigationRegion {
        NavigationRegion {
            tree: self.navigation_tree(&routing.path),
            locale: routing.locale.clone(),
            active_path: routing.path.clone(),
        }
    }

    fn navigation_tree(&self, path: &str) -> NavigationTree {
        if self
            .config
            .style_guide_patterns
            .iter()
            .any(|pattern| pattern.is_match(path))
        {
            NavigationTree::StyleGuide
        } else {
            NavigationTree::Docs
        }
    }
}
