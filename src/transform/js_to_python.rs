//! JavaScript → Python line transformer.
//!
//! # Example
//!
//! ```text
//! function add(a, b) {        def add(a, b):
//!   return a + b;       →         return a + b
//! }
//! ```
//!
//! Braces disappear entirely: block structure is carried by the indentation
//! the pipeline applies from the tracked depth.

use crate::classifier::{ForHeader, LineClassification};
use crate::transform::{comment_line, normalize_equality, MANUAL_MARKER};

pub fn transform(class: &LineClassification) -> Vec<String> {
    match class {
        LineClassification::Comment { text } => vec![comment_line("#", text)],
        LineClassification::FunctionDecl { name, params, .. } => {
            vec![format!("def {}({}):", name, params)]
        }
        LineClassification::VariableDecl { name, value, .. } => {
            vec![format!("{} = {}", name, value)]
        }
        LineClassification::IfStatement { condition, .. } => {
            vec![format!("if {}:", normalize_equality(condition))]
        }
        LineClassification::ForLoop { header, .. } => vec![transform_for(header)],
        LineClassification::PrintCall { args } => vec![format!("print({})", args)],
        LineClassification::ReturnStatement { expr } => {
            if expr.is_empty() {
                vec!["return".to_string()]
            } else {
                vec![format!("return {}", expr)]
            }
        }
        LineClassification::BlockOpen | LineClassification::BlockClose => vec![],
        LineClassification::Blank => vec![String::new()],
        LineClassification::Plain { text } => {
            vec![text.strip_suffix(';').unwrap_or(text).trim_end().to_string()]
        }
    }
}

fn transform_for(header: &ForHeader) -> String {
    match header {
        ForHeader::CStyle { var, start, op, end } => match op.as_str() {
            "<" => format!("for {} in range({}, {}):", var, start, end),
            "<=" => format!("for {} in range({}, {} + 1):", var, start, end),
            _ => format!(
                "# {}: for loop with condition {} {} {}",
                MANUAL_MARKER, var, op, end
            ),
        },
        ForHeader::Unparsed { raw } => format!("# {}: {}", MANUAL_MARKER, raw),
        // Range/Iterable headers come from Python sources and never reach
        // this transformer; keep them as markers rather than panic.
        ForHeader::Range { var, args } => {
            format!("# {}: for {} in range({})", MANUAL_MARKER, var, args.join(", "))
        }
        ForHeader::Iterable { var, expr } => {
            format!("for {} in {}:", var, expr)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::types::Language;

    fn tf(line: &str) -> Vec<String> {
        transform(&classify(line, &Language::JavaScript))
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(tf("function add(a, b) {"), vec!["def add(a, b):"]);
    }

    #[test]
    fn test_variable_declaration_strips_keyword_and_semicolon() {
        assert_eq!(tf("let x = 5;"), vec!["x = 5"]);
        assert_eq!(tf("const name = \"Ada\";"), vec!["name = \"Ada\""]);
        assert_eq!(tf("var total = 0;"), vec!["total = 0"]);
    }

    #[test]
    fn test_if_normalizes_strict_equality() {
        assert_eq!(tf("if (x === 5) {"), vec!["if x == 5:"]);
        assert_eq!(tf("if (a !== b) {"), vec!["if a != b:"]);
    }

    #[test]
    fn test_counting_for_loop() {
        assert_eq!(
            tf("for (let i = 0; i < 10; i++) {"),
            vec!["for i in range(0, 10):"]
        );
        assert_eq!(
            tf("for (let i = 1; i <= 5; i++) {"),
            vec!["for i in range(1, 5 + 1):"]
        );
    }

    #[test]
    fn test_descending_for_is_marked_manual() {
        let out = tf("for (let i = 10; i > 0; i--) {");
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("# MANUAL CONVERSION NEEDED"));
        assert!(out[0].contains("i > 0"));
    }

    #[test]
    fn test_unparseable_for_is_marked_manual() {
        assert_eq!(tf("for (;;)"), vec!["# MANUAL CONVERSION NEEDED: for (;;)"]);
    }

    #[test]
    fn test_print_and_return() {
        assert_eq!(tf("console.log(i);"), vec!["print(i)"]);
        assert_eq!(tf("return a + b;"), vec!["return a + b"]);
        assert_eq!(tf("return;"), vec!["return"]);
    }

    #[test]
    fn test_braces_emit_nothing() {
        assert!(tf("{").is_empty());
        assert!(tf("}").is_empty());
    }

    #[test]
    fn test_comment_and_blank() {
        assert_eq!(tf("// setup"), vec!["# setup"]);
        assert_eq!(tf(""), vec![""]);
    }

    #[test]
    fn test_plain_strips_trailing_semicolon() {
        assert_eq!(tf("doWork();"), vec!["doWork()"]);
    }
}
