//! Markdown documents for docroute
//!
//! Splits YAML front matter from Markdown, renders HTML with explicit
//! options, and writes documents back to the paths URLs map to.

pub mod document;
pub mod error;
pub mod front_matter;
pub mod markdown;
pub mod parser;
pub mod store;
pub mod writer;

pub use document::Document;
pub use error::{Error, Result};
pub use markdown::{MarkdownOptions, render_html};
pub use parser::{DocumentParser, ParseOptions, PreParseFn, PreParseMode, PreParseSetting};
pub use store::ContentStore;
pub use writer::{DocumentWriter, compose};
