//! snipdoc — documentation blocks for a tree of code snippets.
//!
//! [`parser`] turns the leading `/** ... */` block of a source file into
//! typed sections. [`loader`] reads snippets and lists the snippet tree.
//! [`render`] formats the result as markdown or JSON.

pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, Result};
pub use model::{DocKind, DocSection, FileEntry, ParseResult, Snippet};
pub use parser::ParseOptions;
