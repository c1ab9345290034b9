//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod tree;

use crate::error::{Error, Result};
use crate::model::Snippet;

/// Trait for rendering a parsed snippet into a specific output format.
pub trait Renderer {
    fn render(&self, snippet: &Snippet) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
///
/// `language` tags the fence around the snippet's source code.
pub fn create_renderer(format: &str, language: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(language))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::Format(format.to_string())),
    }
}
