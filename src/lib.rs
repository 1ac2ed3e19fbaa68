//! Convert a small Markdown-like markup subset into HTML.
//!
//! Conversion is a two-stage rewrite. Every line is run through an ordered
//! table of pattern rules, then the joined document is passed through fix-ups
//! that merge adjacent list and blockquote containers emitted line by line.
//!
//! ```
//! let html = mdhtml::convert("* a\n* b");
//! assert_eq!(html, "<ul>\n<li>a</li>\n\n\n<li>b</li>\n</ul>");
//! ```

pub mod convert;
pub mod error;
pub mod pattern;
pub mod rules;
pub mod template;

pub use convert::{Converter, convert, convert_legacy, convert_with};
pub use error::PatternError;
pub use pattern::{Flags, Matcher, Pattern};
pub use rules::{Dialect, FixUp, Replacement, Rule, Transform};
pub use template::Template;
