//! Snippet loader — reads snippet files and lists the snippet tree.
//!
//! Every request goes to disk; nothing is cached between calls.

use crate::error::{Error, Result};
use crate::model::*;
use crate::parser::{self, ParseOptions};
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, warn};

/// Load and parse one snippet identified by its path relative to `root`.
///
/// Any failure to read the file (missing, permission denied, a directory,
/// not UTF-8) is reported as [`Error::NotFound`]. Paths that would leave
/// `root` (`..`, absolute paths) are treated the same way.
pub fn load_snippet(root: &Path, rel_path: &str, options: &ParseOptions) -> Result<Snippet> {
    let not_found = || Error::NotFound {
        path: rel_path.to_string(),
    };

    let rel = Path::new(rel_path);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        debug!(path = rel_path, "rejecting path outside snippet root");
        return Err(not_found());
    }

    let full = root.join(rel);
    let content = fs::read_to_string(&full).map_err(|e| {
        debug!(path = %full.display(), error = %e, "snippet read failed");
        not_found()
    })?;

    Ok(parse_snippet(rel_path, &content, options))
}

/// Parse already-loaded text as the snippet at `path`.
pub fn parse_snippet(path: &str, content: &str, options: &ParseOptions) -> Snippet {
    let result = parser::parse(content, options);
    debug!(path, sections = result.sections.len(), "parsed snippet");
    Snippet {
        name: base_name(path),
        path: path.to_string(),
        result,
    }
}

/// Display name of a snippet: the last component of its path.
/// "hooks/useScroll.ts" → "useScroll.ts"
pub fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// Recursively list `root`, depth first, in file-system order.
///
/// Entry paths are relative to `root` and use `/` separators. Symlinks are
/// not followed and are listed as files. A subdirectory that cannot be read
/// is logged and listed with no children.
pub fn list_tree(root: &Path) -> Result<Vec<FileEntry>> {
    walk(root, "")
}

fn walk(dir: &Path, prefix: &str) -> Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            let children = walk(&entry.path(), &path).unwrap_or_else(|e| {
                warn!(dir = %entry.path().display(), error = %e, "cannot list directory");
                Vec::new()
            });
            entries.push(FileEntry::Directory {
                name,
                path,
                children,
            });
        } else {
            entries.push(FileEntry::File { name, path });
        }
    }

    Ok(entries)
}

/// Flatten a tree into the paths of its files, depth first.
pub fn file_paths(entries: &[FileEntry]) -> Vec<String> {
    let mut out = Vec::new();
    collect_files(entries, &mut out);
    out
}

fn collect_files(entries: &[FileEntry], out: &mut Vec<String>) {
    for entry in entries {
        match entry {
            FileEntry::File { path, .. } => out.push(path.clone()),
            FileEntry::Directory { children, .. } => collect_files(children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), "/**\n * A.\n */\nexport const a = 1;\n").unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::write(dir.path().join("b/c.ts"), "export const c = 3;\n").unwrap();
        dir
    }

    #[test]
    fn tree_lists_files_and_directories() {
        let dir = fixture_tree();
        let tree = list_tree(dir.path()).unwrap();
        assert_eq!(tree.len(), 2);

        let a = tree.iter().find(|e| e.name() == "a.ts").unwrap();
        assert!(!a.is_directory());
        assert_eq!(a.path(), "a.ts");
        assert_eq!(
            a,
            &FileEntry::File {
                name: "a.ts".to_string(),
                path: "a.ts".to_string(),
            }
        );

        let b = tree.iter().find(|e| e.name() == "b").unwrap();
        assert!(b.is_directory());
        assert_eq!(b.path(), "b");
        assert_eq!(
            b,
            &FileEntry::Directory {
                name: "b".to_string(),
                path: "b".to_string(),
                children: vec![FileEntry::File {
                    name: "c.ts".to_string(),
                    path: "b/c.ts".to_string(),
                }],
            }
        );
    }

    #[test]
    fn tree_of_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let err = list_tree(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn file_paths_flattens_depth_first() {
        let dir = fixture_tree();
        let mut paths = file_paths(&list_tree(dir.path()).unwrap());
        paths.sort();
        assert_eq!(paths, vec!["a.ts", "b/c.ts"]);
    }

    #[test]
    fn load_existing_snippet() {
        let dir = fixture_tree();
        let snippet = load_snippet(dir.path(), "a.ts", &ParseOptions::default()).unwrap();
        assert_eq!(snippet.name, "a.ts");
        assert_eq!(snippet.result.sections.len(), 1);
        assert_eq!(snippet.result.sections[0].content, "A.");
        assert_eq!(snippet.result.code, "export const a = 1;\n");
    }

    #[test]
    fn load_nested_snippet_uses_base_name() {
        let dir = fixture_tree();
        let snippet = load_snippet(dir.path(), "b/c.ts", &ParseOptions::default()).unwrap();
        assert_eq!(snippet.name, "c.ts");
        assert_eq!(snippet.path, "b/c.ts");
        assert!(snippet.result.sections.is_empty());
        assert_eq!(snippet.result.code, "export const c = 3;\n");
    }

    #[test]
    fn missing_snippet_is_not_found() {
        let dir = fixture_tree();
        let err = load_snippet(dir.path(), "zzz.ts", &ParseOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Snippet not found: zzz.ts");
    }

    #[test]
    fn directory_is_not_found() {
        let dir = fixture_tree();
        let err = load_snippet(dir.path(), "b", &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn escaping_path_is_not_found() {
        let dir = fixture_tree();
        let err = load_snippet(&dir.path().join("b"), "../a.ts", &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn base_name_of_paths() {
        assert_eq!(base_name("hooks/useScroll.ts"), "useScroll.ts");
        assert_eq!(base_name("list.tsx"), "list.tsx");
    }
}
