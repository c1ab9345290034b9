//! Documentation-comment parser — line-by-line state machine.
//!
//! Splits a source file into its leading `/** ... */` block and the
//! remaining code, then breaks the block into typed sections at each
//! `@tag` line. Triple-backtick fences inside the block suppress tag
//! detection so example code can contain `@` lines.
//!
//! The parser never fails: unterminated blocks or fences are handled by
//! following the current state to the end of input.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

pub const BLOCK_OPEN: &str = "/**";
pub const BLOCK_CLOSE: &str = "*/";
pub const FENCE: &str = "```";
const TAG_MARKER: char = '@';

/// Fence language used for example sections when none is configured.
pub const DEFAULT_LANGUAGE: &str = "tsx";

// One leading `* ` (or bare `*`) continuation prefix.
static RE_CONTINUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\* ?").unwrap());

/// Tag name → section kind. Anything not listed is a description.
const TAGS: &[(&str, DocKind)] = &[
    ("example", DocKind::Example),
    ("param", DocKind::Param),
    ("returns", DocKind::Returns),
    ("limitations", DocKind::Limitations),
    ("performance", DocKind::Performance),
    ("remarks", DocKind::Remarks),
];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Language tag written after the opening fence of wrapped examples
    pub language: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

// -- Public API ---------------------------------------------------------------

/// Parse a whole source file: doc block sections plus the residual code.
pub fn parse(text: &str, options: &ParseOptions) -> ParseResult {
    let (block, code) = extract_block_and_code(text);
    ParseResult {
        sections: parse_block(&block, options),
        code,
    }
}

/// Separate doc-block lines from code lines, preserving order within each.
///
/// Returns `(block_text, code_text)`; every line is written back followed
/// by `\n`. A file without a block yields an empty block and all of its
/// lines as code.
pub fn extract_block_and_code(text: &str) -> (String, String) {
    let mut block = String::new();
    let mut code = String::new();
    let mut region = Region::Code;

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with(BLOCK_OPEN) {
            region = Region::Block;
            push_line(&mut block, line);
        } else if trimmed.starts_with(BLOCK_CLOSE) {
            region = Region::Code;
            push_line(&mut block, line);
        } else {
            match region {
                Region::Block => push_line(&mut block, line),
                Region::Code => push_line(&mut code, line),
            }
        }
    }

    (block, code)
}

/// Break a doc block into sections, in the order their tags appear.
pub fn parse_block(block: &str, options: &ParseOptions) -> Vec<DocSection> {
    let mut state = BlockState::default();

    for raw in block.lines() {
        if let Some(line) = clean_line(raw) {
            state.process_line(line, options);
        }
    }

    state.flush(options);
    state.sections
}

// -- Parser state -------------------------------------------------------------

#[derive(Clone, Copy)]
enum Region {
    Code,
    Block,
}

#[derive(Default)]
struct BlockState {
    // Results
    sections: Vec<DocSection>,

    // Open section and its pending lines
    current: Option<DocKind>,
    buffer: Vec<String>,

    // Toggled on every fence line; never reset between sections
    in_fence: bool,
}

impl BlockState {
    fn process_line(&mut self, line: &str, options: &ParseOptions) {
        if !self.in_fence {
            if let Some(body) = line.strip_prefix(TAG_MARKER) {
                self.flush(options);
                let (tag, rest) = body.split_once(' ').unwrap_or((body, ""));
                self.current = Some(kind_for_tag(tag));
                if !rest.trim().is_empty() {
                    self.buffer.push(rest.to_string());
                }
                return;
            }
        }

        if line.starts_with(FENCE) {
            self.in_fence = !self.in_fence;
        }

        self.current.get_or_insert(DocKind::Description);
        self.buffer.push(line.to_string());
    }

    /// Close the open section, emitting it only if it has content.
    fn flush(&mut self, options: &ParseOptions) {
        let Some(kind) = self.current.take() else {
            return;
        };
        let joined = self.buffer.join("\n");
        self.buffer.clear();

        let content = joined.trim();
        if content.is_empty() {
            return;
        }

        let content = if kind == DocKind::Example && !content.starts_with(FENCE) {
            format!("{FENCE}{}\n{}\n{FENCE}", options.language, content)
        } else {
            content.to_string()
        };
        self.sections.push(DocSection::new(kind, content));
    }
}

// -- Helpers ------------------------------------------------------------------

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Trim a raw block line and strip its `*` continuation prefix.
///
/// Returns `None` for blank lines and bare open/close markers.
fn clean_line(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed == BLOCK_OPEN || trimmed == BLOCK_CLOSE {
        return None;
    }
    let line = match RE_CONTINUATION.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };
    if line.trim().is_empty() || line == BLOCK_OPEN || line == BLOCK_CLOSE {
        return None;
    }
    Some(line)
}

fn kind_for_tag(tag: &str) -> DocKind {
    TAGS.iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, kind)| *kind)
        .unwrap_or(DocKind::Description)
}
