//! Directory tree output — indented outline and JSON.

use crate::error::Result;
use crate::model::FileEntry;

/// Render a tree as an indented outline, directories suffixed with `/`.
pub fn render_outline(entries: &[FileEntry]) -> String {
    let mut out = String::new();
    write_outline(entries, 0, &mut out);
    out
}

fn write_outline(entries: &[FileEntry], depth: usize, out: &mut String) {
    for entry in entries {
        out.push_str(&"  ".repeat(depth));
        out.push_str(entry.name());
        match entry {
            FileEntry::File { .. } => out.push('\n'),
            FileEntry::Directory { children, .. } => {
                out.push_str("/\n");
                write_outline(children, depth + 1, out);
            }
        }
    }
}

/// Render a tree as a JSON array of `{name, path, isDirectory, children?}`.
pub fn render_json(entries: &[FileEntry]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(entries)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<FileEntry> {
        vec![
            FileEntry::File {
                name: "a.ts".to_string(),
                path: "a.ts".to_string(),
            },
            FileEntry::Directory {
                name: "b".to_string(),
                path: "b".to_string(),
                children: vec![FileEntry::File {
                    name: "c.ts".to_string(),
                    path: "b/c.ts".to_string(),
                }],
            },
        ]
    }

    #[test]
    fn outline_indents_children() {
        assert_eq!(render_outline(&sample()), "a.ts\nb/\n  c.ts\n");
    }

    #[test]
    fn json_marks_directories() {
        let value: serde_json::Value = serde_json::from_str(&render_json(&sample()).unwrap()).unwrap();
        assert_eq!(value[0]["isDirectory"], false);
        assert!(value[0].get("children").is_none());
        assert_eq!(value[1]["isDirectory"], true);
        assert_eq!(value[1]["children"][0]["path"], "b/c.ts");
    }
}
