//! Heading anchors and table of contents for docpane.
//!
//! This crate reconciles the anchors a rendered page body assigns to its
//! headings with the table of contents shown next to it:
//!
//! - [`SlugRegistry`]: turns heading text into unique URL-fragment ids
//! - [`strip_disambiguator`]: removes the trailing anchor hint from a title
//! - [`HeadingListBuilder`]: produces the ordered [`Heading`] list
//! - [`render_body`]: renders markdown with anchors from the same registry
//!
//! # Example
//!
//! ```
//! use docpane_anchors::{HeadingListBuilder, RawTocEntry};
//!
//! let entries = vec![
//!     RawTocEntry::new("Query examples #examples", Some("examples")),
//!     RawTocEntry::new("Setup", None),
//!     RawTocEntry::new("Setup", None),
//! ];
//! let headings = HeadingListBuilder::new().build(&entries);
//!
//! assert_eq!(headings[0].id, "examples");
//! assert_eq!(headings[0].text, "Query examples");
//! assert_eq!(headings[1].id, "setup");
//! assert_eq!(headings[2].id, "setup-1");
//! ```

mod body;
mod heading;
#[cfg(feature = "serde")]
mod lenient;
mod slug;
mod title;

pub use body::{RenderedBody, render_body};
pub use heading::{Heading, HeadingListBuilder, RawTocEntry, build_headings};
pub use slug::{SlugRegistry, slugify};
pub use title::strip_disambiguator;
