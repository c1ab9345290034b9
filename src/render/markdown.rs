//! Markdown renderer.
//!
//! One heading per snippet, one subheading per section in parse order,
//! then the remaining source in a fenced block.

use crate::error::Result;
use crate::model::*;
use crate::parser::FENCE;
use crate::render::Renderer;

pub struct MarkdownRenderer {
    /// Fence language for the source block
    language: String,
}

impl MarkdownRenderer {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, snippet: &Snippet) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("# {}\n", snippet.name));

        for section in &snippet.result.sections {
            lines.push(format!("## {}\n", section.title));
            lines.push(section.content.clone());
            lines.push(String::new());
        }

        let code = snippet.result.code.trim_end();
        if !code.trim().is_empty() {
            lines.push("## Source\n".to_string());
            lines.push(format!("{}{}", FENCE, self.language));
            lines.push(code.to_string());
            lines.push(FENCE.to_string());
            lines.push(String::new());
        }

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
