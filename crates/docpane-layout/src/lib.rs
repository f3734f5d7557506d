//! Responsive layout state for docpane.
//!
//! This crate provides:
//! - [`LayoutStateController`]: the state machine behind sidebar, mobile
//!   navigation and search box interactions
//! - [`BreakpointPolicy`]: viewport classification and sidebar sizing
//! - [`LayoutGeometry`]: the derived geometry the page composer consumes
//!
//! # Example
//!
//! ```
//! use docpane_layout::{BreakpointPolicy, LayoutEvent, LayoutStateController};
//!
//! let mut layout = LayoutStateController::new(BreakpointPolicy::default(), Some(1440));
//! layout.dispatch(LayoutEvent::OpenMobileNav);
//! layout.dispatch(LayoutEvent::NavigateTo("/docs/b".to_owned()));
//!
//! assert!(!layout.state().mobile_nav_open);
//! assert_eq!(layout.geometry().sidebar_width, 340);
//! ```

mod controller;
mod policy;
mod search;
mod state;

pub use controller::{LayoutEvent, LayoutStateController};
pub use policy::{BreakpointPolicy, LayoutGeometry, PageToolsPlacement};
pub use search::{SEARCH_PARAM, SearchError, SearchQuery, SearchSink};
pub use state::{LayoutState, ViewportClass};
