//! Python → JavaScript line transformer.
//!
//! # Example
//!
//! ```text
//! def add(a, b):          function add(a, b) {
//!     return a + b    →     return a + b;
//!                         }
//! ```
//!
//! Colon-delimited blocks become brace blocks: every block header emits its
//! own `{`, and the pipeline emits the matching `}` lines when the source
//! dedents (or at end of input).

use crate::classifier::{ForHeader, LineClassification};
use crate::transform::{comment_line, MANUAL_MARKER};

pub fn transform(class: &LineClassification) -> Vec<String> {
    match class {
        LineClassification::Comment { text } => vec![comment_line("//", text)],
        LineClassification::FunctionDecl { name, params, .. } => {
            vec![format!("function {}({}) {{", name, params)]
        }
        LineClassification::VariableDecl { name, value, .. } => {
            vec![format!("let {} = {};", name, value)]
        }
        LineClassification::IfStatement { condition, .. } => {
            vec![format!("if ({}) {{", condition)]
        }
        LineClassification::ForLoop { header, .. } => vec![transform_for(header)],
        LineClassification::PrintCall { args } => vec![format!("console.log({});", args)],
        LineClassification::ReturnStatement { expr } => {
            if expr.is_empty() {
                vec!["return;".to_string()]
            } else {
                vec![format!("return {};", expr)]
            }
        }
        // Bare braces are not Python block syntax; pass them through.
        LineClassification::BlockOpen => vec!["{".to_string()],
        LineClassification::BlockClose => vec!["}".to_string()],
        LineClassification::Blank => vec![String::new()],
        LineClassification::Plain { text } => {
            if text.ends_with(':') || text.ends_with('{') || text.ends_with('}') {
                vec![text.clone()]
            } else {
                vec![format!("{};", text)]
            }
        }
    }
}

fn transform_for(header: &ForHeader) -> String {
    match header {
        ForHeader::Range { var, args } => match args.as_slice() {
            [end] => format!("for (let {v} = 0; {v} < {end}; {v}++) {{", v = var, end = end),
            [start, end] => {
                format!("for (let {v} = {start}; {v} < {end}; {v}++) {{", v = var, start = start, end = end)
            }
            [start, end, step] => format!(
                "for (let {v} = {start}; {v} < {end}; {v} += {step}) {{",
                v = var,
                start = start,
                end = end,
                step = step
            ),
            _ => format!(
                "// {}: for {} in range({})",
                MANUAL_MARKER,
                var,
                args.join(", ")
            ),
        },
        ForHeader::Iterable { var, expr } => format!("for (let {} of {}) {{", var, expr),
        ForHeader::Unparsed { raw } => format!("// {}: {}", MANUAL_MARKER, raw),
        // C-style headers come from JavaScript sources and never reach this
        // transformer; reconstruct rather than panic.
        ForHeader::CStyle { var, start, op, end } => format!(
            "for (let {v} = {start}; {v} {op} {end}; {v}++) {{",
            v = var,
            start = start,
            op = op,
            end = end
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::types::Language;

    fn tf(line: &str) -> Vec<String> {
        transform(&classify(line, &Language::Python))
    }

    #[test]
    fn test_function_declaration_opens_brace() {
        assert_eq!(tf("def add(a, b):"), vec!["function add(a, b) {"]);
    }

    #[test]
    fn test_assignment_gets_let_and_semicolon() {
        assert_eq!(tf("x = 5"), vec!["let x = 5;"]);
        assert_eq!(tf("name = \"Ada\""), vec!["let name = \"Ada\";"]);
    }

    #[test]
    fn test_if_wraps_condition_in_parens() {
        assert_eq!(tf("if count > 0:"), vec!["if (count > 0) {"]);
    }

    #[test]
    fn test_range_loop_arities() {
        assert_eq!(
            tf("for i in range(10):"),
            vec!["for (let i = 0; i < 10; i++) {"]
        );
        assert_eq!(
            tf("for i in range(2, 8):"),
            vec!["for (let i = 2; i < 8; i++) {"]
        );
        assert_eq!(
            tf("for i in range(0, 10, 2):"),
            vec!["for (let i = 0; i < 10; i += 2) {"]
        );
    }

    #[test]
    fn test_iterable_loop_uses_for_of() {
        assert_eq!(
            tf("for item in items:"),
            vec!["for (let item of items) {"]
        );
    }

    #[test]
    fn test_empty_range_is_marked_manual() {
        let out = tf("for i in range():");
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("// MANUAL CONVERSION NEEDED"));
    }

    #[test]
    fn test_print_and_return() {
        assert_eq!(tf("print(i)"), vec!["console.log(i);"]);
        assert_eq!(tf("return a + b"), vec!["return a + b;"]);
        assert_eq!(tf("return"), vec!["return;"]);
    }

    #[test]
    fn test_comment_marker_swap() {
        assert_eq!(tf("# setup"), vec!["// setup"]);
    }

    #[test]
    fn test_plain_semicolon_policy() {
        assert_eq!(tf("total += 1"), vec!["total += 1;"]);
        assert_eq!(tf("while True:"), vec!["while True:"]);
    }
}
