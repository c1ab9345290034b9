//! JSON renderer — structured output for tooling integration.

use crate::error::Result;
use crate::model::Snippet;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, snippet: &Snippet) -> Result<String> {
        let mut out = serde_json::to_string_pretty(snippet)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_snippet;
    use crate::parser::ParseOptions;

    #[test]
    fn sections_and_code_are_serialized() {
        let snippet = parse_snippet(
            "hooks/use.ts",
            "/**\n * Hook.\n * @param n count\n */\nexport {};\n",
            &ParseOptions::default(),
        );
        let out = JsonRenderer.render(&snippet).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["name"], "use.ts");
        assert_eq!(value["path"], "hooks/use.ts");
        assert_eq!(value["sections"][0]["kind"], "description");
        assert_eq!(value["sections"][1]["kind"], "param");
        assert_eq!(value["sections"][1]["title"], "Parameters");
        assert_eq!(value["sections"][1]["content"], "n count");
        assert_eq!(value["code"], "export {};\n");
    }
}
