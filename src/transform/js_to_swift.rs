//! JavaScript → Swift line transformer.
//!
//! # Example
//!
//! ```text
//! if (x === 5) {            if x == 5 {
//!   console.log("hi");  →     print("hi")
//! }                         }
//! ```
//!
//! Both sides are brace-delimited, so braces survive; conditions lose their
//! mandatory parentheses and `const`/`let`/`var` map onto Swift's
//! `let`/`var` split. Counting loops become range expressions (`..<` for
//! `<`, `...` for `<=`).

use crate::classifier::{ForHeader, LineClassification};
use crate::transform::{comment_line, normalize_equality, MANUAL_MARKER};

pub fn transform(class: &LineClassification) -> Vec<String> {
    match class {
        LineClassification::Comment { text } => vec![comment_line("//", text)],
        LineClassification::FunctionDecl { name, params, trailing_brace } => {
            let annotated = annotate_params(params);
            if *trailing_brace {
                vec![format!("func {}({}) {{", name, annotated)]
            } else {
                vec![format!("func {}({})", name, annotated)]
            }
        }
        LineClassification::VariableDecl { keyword, name, value } => {
            let swift_kw = match keyword.as_deref() {
                Some("const") => "let ",
                Some(_) => "var ",
                None => "",
            };
            vec![format!("{}{} = {}", swift_kw, name, value)]
        }
        LineClassification::IfStatement { condition, trailing_brace } => {
            let cond = normalize_equality(condition);
            if *trailing_brace {
                vec![format!("if {} {{", cond)]
            } else {
                vec![format!("if {}", cond)]
            }
        }
        LineClassification::ForLoop { header, trailing_brace } => {
            vec![transform_for(header, *trailing_brace)]
        }
        LineClassification::PrintCall { args } => vec![format!("print({})", args)],
        LineClassification::ReturnStatement { expr } => {
            if expr.is_empty() {
                vec!["return".to_string()]
            } else {
                vec![format!("return {}", expr)]
            }
        }
        LineClassification::BlockOpen => vec!["{".to_string()],
        LineClassification::BlockClose => vec!["}".to_string()],
        LineClassification::Blank => vec![String::new()],
        LineClassification::Plain { text } => vec![text.clone()],
    }
}

/// Annotate a raw JavaScript parameter list with `Any` types.
fn annotate_params(params: &str) -> String {
    if params.trim().is_empty() {
        return String::new();
    }
    params
        .split(',')
        .map(|p| format!("{}: Any", p.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn transform_for(header: &ForHeader, trailing_brace: bool) -> String {
    let brace = if trailing_brace { " {" } else { "" };
    match header {
        ForHeader::CStyle { var, start, op, end } => match op.as_str() {
            "<" => format!("for {} in {}..<{}{}", var, start, end, brace),
            "<=" => format!("for {} in {}...{}{}", var, start, end, brace),
            _ => format!(
                "for {} in {}..<{}{}  // original condition: {} {} {}",
                var, start, end, brace, var, op, end
            ),
        },
        ForHeader::Iterable { var, expr } => format!("for {} in {}{}", var, expr, brace),
        ForHeader::Range { var, args } => {
            format!("// {}: for {} in range({})", MANUAL_MARKER, var, args.join(", "))
        }
        ForHeader::Unparsed { raw } => format!("// {}: {}", MANUAL_MARKER, raw),
    }
}
