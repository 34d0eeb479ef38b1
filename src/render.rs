//! Static HTML rendering of a plan, for use outside the browser.

use crate::error::PlanError;
use crate::plan::{PLAN_HEADING, PlanResult};

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2rem; }
pre#output { background: #1e1e1e; color: #d4d4d4; padding: 1rem; border-radius: 6px; }
.json-key { color: #9cdcfe; }
.json-string { color: #ce9178; }
.json-number { color: #b5cea8; }
.json-boolean { color: #569cd6; }
.json-null { color: #c586c0; }
";

/// Heading and highlighted code block for the plan in `json`.
pub fn plan_fragment(json: &str) -> Result<String, PlanError> {
    let plan = PlanResult::new(serde_json::from_str(json)?);
    Ok(format!(
        "<h2>{PLAN_HEADING}</h2>\n<pre id=\"output\"><code>{}</code></pre>\n",
        plan.highlighted()
    ))
}

/// A standalone HTML page showing the plan in `json`.
pub fn plan_document(json: &str) -> Result<String, PlanError> {
    let fragment = plan_fragment(json)?;
    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{PLAN_HEADING}</title>\n<style>\n{STYLE}</style>\n</head>\n\
         <body>\n{fragment}</body>\n</html>\n"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_reformats_input() {
        let html = plan_fragment(r#"{"title":"T"}"#).unwrap();
        assert_eq!(
            html,
            "<h2>Generated Plan</h2>\n<pre id=\"output\"><code>{\n  \
             <span class=\"json-key\">\"title\":</span> \
             <span class=\"json-string\">\"T\"</span>\n}</code></pre>\n"
        );
    }

    #[test]
    fn test_document_includes_styles() {
        let html = plan_document("[1]").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(".json-key"));
        assert!(html.contains("<span class=\"json-number\">1</span>"));
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(matches!(plan_fragment("{oops"), Err(PlanError::Parse(_))));
    }
}
