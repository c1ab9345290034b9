//! Data model for parsed snippets — format-agnostic.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

/// Kind of a documentation section, selected by its `@tag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Description,
    Example,
    Param,
    Returns,
    Limitations,
    Performance,
    Remarks,
}

impl DocKind {
    /// Display label for sections of this kind.
    pub fn title(self) -> &'static str {
        match self {
            DocKind::Description => "Description",
            DocKind::Example => "Example Usage",
            DocKind::Param => "Parameters",
            DocKind::Returns => "Returns",
            DocKind::Limitations => "Limitations",
            DocKind::Performance => "Performance Considerations",
            DocKind::Remarks => "Additional Notes",
        }
    }
}

/// One typed section of a documentation block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocSection {
    pub kind: DocKind,
    pub title: String,
    pub content: String,
}

impl DocSection {
    pub fn new(kind: DocKind, content: String) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            content,
        }
    }
}

/// Result of parsing one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// Sections in the order their tags appear in the block
    pub sections: Vec<DocSection>,
    /// Everything outside the doc block, newline-terminated lines
    pub code: String,
}

/// A loaded snippet: parse result plus where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    /// Base name of the path, used as the display name
    pub name: String,
    /// Path relative to the snippet root
    pub path: String,
    #[serde(flatten)]
    pub result: ParseResult,
}

/// Node of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEntry {
    File {
        name: String,
        path: String,
    },
    Directory {
        name: String,
        path: String,
        children: Vec<FileEntry>,
    },
}

impl FileEntry {
    pub fn name(&self) -> &str {
        match self {
            FileEntry::File { name, .. } | FileEntry::Directory { name, .. } => name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            FileEntry::File { path, .. } | FileEntry::Directory { path, .. } => path,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FileEntry::Directory { .. })
    }
}

// Flat `{name, path, isDirectory, children?}` shape expected by consumers.
impl Serialize for FileEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FileEntry::File { name, path } => {
                let mut s = serializer.serialize_struct("FileEntry", 3)?;
                s.serialize_field("name", name)?;
                s.serialize_field("path", path)?;
                s.serialize_field("isDirectory", &false)?;
                s.end()
            }
            FileEntry::Directory {
                name,
                path,
                children,
            } => {
                let mut s = serializer.serialize_struct("FileEntry", 4)?;
                s.serialize_field("name", name)?;
                s.serialize_field("path", path)?;
                s.serialize_field("isDirectory", &true)?;
                s.serialize_field("children", children)?;
                s.end()
            }
        }
    }
}
