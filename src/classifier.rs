//! Line classification for the transliteration engine.
//!
//! Each source language gets an immutable table of compiled patterns, built
//! once at startup. Classification walks the patterns in a fixed priority
//! order and returns the first match together with its capture groups.
//!
//! The grammar is deliberately narrow: simple declarations, `if`/`for`
//! headers, print calls and returns. Anything else falls through to
//! [`LineClassification::Plain`] so the transformers can pass it through
//! rather than fail.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Language;

/// Syntactic category of a single source line, with the capture groups
/// relevant to that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClassification {
    Comment { text: String },
    FunctionDecl { name: String, params: String, trailing_brace: bool },
    VariableDecl { keyword: Option<String>, name: String, value: String },
    IfStatement { condition: String, trailing_brace: bool },
    ForLoop { header: ForHeader, trailing_brace: bool },
    PrintCall { args: String },
    ReturnStatement { expr: String },
    BlockOpen,
    BlockClose,
    Blank,
    Plain { text: String },
}

/// Parsed shape of a `for` loop header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForHeader {
    /// C-style three-clause header: `for (let i = start; i op end; i++)`.
    CStyle { var: String, start: String, op: String, end: String },
    /// Python `for x in range(...)` with the comma-separated range arguments.
    Range { var: String, args: Vec<String> },
    /// Any other `for x in <expr>` iteration.
    Iterable { var: String, expr: String },
    /// A `for` line whose header did not match the supported grammar.
    Unparsed { raw: String },
}

/// Compiled pattern table for one source language.
///
/// Optional fields are grammar rules the language does not have (e.g. Python
/// has no C-style `for`, JavaScript has no `for..in range()`).
struct Grammar {
    comment: Regex,
    function: Regex,
    variable_kw: Option<Regex>,
    assignment: Regex,
    if_stmt: Regex,
    for_c: Option<Regex>,
    for_range: Option<Regex>,
    for_iter: Option<Regex>,
    for_keyword: Regex,
    print: Regex,
    ret: Regex,
}

static JS_GRAMMAR: Lazy<Grammar> = Lazy::new(|| Grammar {
    comment: Regex::new(r"^//\s?(.*)$").unwrap(),
    function: Regex::new(r"^function\s+(\w+)\s*\(([^)]*)\)\s*(\{)?\s*$").unwrap(),
    variable_kw: Some(Regex::new(r"^(var|let|const)\s+(\w+)\s*=\s*(.*?)\s*;?\s*$").unwrap()),
    assignment: Regex::new(r"^(\w+)\s*=\s*([^=].*?)\s*;?\s*$").unwrap(),
    if_stmt: Regex::new(r"^if\s*\((.*)\)\s*(\{)?\s*$").unwrap(),
    for_c: Some(
        Regex::new(
            r"^for\s*\(\s*(?:(?:var|let|const)\s+)?(\w+)\s*=\s*([^;]+?)\s*;\s*\w+\s*(<=|>=|<|>)\s*([^;]+?)\s*;\s*[^)]*?\)\s*(\{)?\s*$",
        )
        .unwrap(),
    ),
    for_range: None,
    for_iter: None,
    for_keyword: Regex::new(r"^for\b").unwrap(),
    print: Regex::new(r"^console\.log\s*\((.*)\)\s*;?\s*$").unwrap(),
    ret: Regex::new(r"^return\b\s*(.*?)\s*;?\s*$").unwrap(),
});

static PY_GRAMMAR: Lazy<Grammar> = Lazy::new(|| Grammar {
    comment: Regex::new(r"^#\s?(.*)$").unwrap(),
    function: Regex::new(r"^def\s+(\w+)\s*\(([^)]*)\)\s*:\s*$").unwrap(),
    variable_kw: None,
    assignment: Regex::new(r"^(\w+)\s*=\s*([^=].*?)\s*$").unwrap(),
    if_stmt: Regex::new(r"^if\s+(.+?)\s*:\s*$").unwrap(),
    for_c: None,
    for_range: Some(Regex::new(r"^for\s+(\w+)\s+in\s+range\s*\(([^)]*)\)\s*:\s*$").unwrap()),
    for_iter: Some(Regex::new(r"^for\s+(\w+)\s+in\s+(.+?)\s*:\s*$").unwrap()),
    for_keyword: Regex::new(r"^for\b").unwrap(),
    print: Regex::new(r"^print\s*\((.*)\)\s*$").unwrap(),
    ret: Regex::new(r"^return\b\s*(.*)$").unwrap(),
});

static SWIFT_GRAMMAR: Lazy<Grammar> = Lazy::new(|| Grammar {
    comment: Regex::new(r"^//\s?(.*)$").unwrap(),
    function: Regex::new(r"^func\s+(\w+)\s*\(([^)]*)\)\s*(\{)?\s*$").unwrap(),
    variable_kw: Some(Regex::new(r"^(let|var)\s+(\w+)\s*=\s*(.*?)\s*$").unwrap()),
    assignment: Regex::new(r"^(\w+)\s*=\s*([^=].*?)\s*$").unwrap(),
    if_stmt: Regex::new(r"^if\s+(.+?)\s*(\{)?\s*$").unwrap(),
    for_c: None,
    for_range: None,
    for_iter: Some(Regex::new(r"^for\s+(\w+)\s+in\s+(.+?)\s*(\{)?\s*$").unwrap()),
    for_keyword: Regex::new(r"^for\b").unwrap(),
    print: Regex::new(r"^print\s*\((.*)\)\s*$").unwrap(),
    ret: Regex::new(r"^return\b\s*(.*)$").unwrap(),
});

impl Grammar {
    fn for_language(lang: &Language) -> Option<&'static Grammar> {
        match lang {
            Language::JavaScript => Some(&JS_GRAMMAR),
            Language::Python => Some(&PY_GRAMMAR),
            Language::Swift => Some(&SWIFT_GRAMMAR),
            Language::Other(_) => None,
        }
    }
}

/// Classify a single line of source code.
///
/// Pure function: trims internally for matching, never mutates state.
/// Matching order is significant and mirrors the priority list in the
/// grammar tables; the first match wins.
pub fn classify(line: &str, source_lang: &Language) -> LineClassification {
    let trimmed = line.trim();

    let grammar = match Grammar::for_language(source_lang) {
        Some(g) => g,
        None => {
            return if trimmed.is_empty() {
                LineClassification::Blank
            } else {
                LineClassification::Plain { text: trimmed.to_string() }
            };
        }
    };

    if let Some(caps) = grammar.comment.captures(trimmed) {
        return LineClassification::Comment { text: caps[1].to_string() };
    }

    if let Some(caps) = grammar.function.captures(trimmed) {
        return LineClassification::FunctionDecl {
            name: caps[1].to_string(),
            params: caps[2].trim().to_string(),
            trailing_brace: caps.get(3).is_some(),
        };
    }

    match trimmed {
        "{" => return LineClassification::BlockOpen,
        "}" => return LineClassification::BlockClose,
        _ => {}
    }

    if let Some(re) = &grammar.variable_kw {
        if let Some(caps) = re.captures(trimmed) {
            return LineClassification::VariableDecl {
                keyword: Some(caps[1].to_string()),
                name: caps[2].to_string(),
                value: caps[3].to_string(),
            };
        }
    }

    if let Some(caps) = grammar.assignment.captures(trimmed) {
        return LineClassification::VariableDecl {
            keyword: None,
            name: caps[1].to_string(),
            value: caps[2].to_string(),
        };
    }

    if let Some(caps) = grammar.if_stmt.captures(trimmed) {
        return LineClassification::IfStatement {
            condition: caps[1].to_string(),
            trailing_brace: caps.get(2).is_some(),
        };
    }

    if let Some(re) = &grammar.for_c {
        if let Some(caps) = re.captures(trimmed) {
            return LineClassification::ForLoop {
                header: ForHeader::CStyle {
                    var: caps[1].to_string(),
                    start: caps[2].to_string(),
                    op: caps[3].to_string(),
                    end: caps[4].to_string(),
                },
                trailing_brace: caps.get(5).is_some(),
            };
        }
    }

    if let Some(re) = &grammar.for_range {
        if let Some(caps) = re.captures(trimmed) {
            let args: Vec<String> = caps[2]
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
            return LineClassification::ForLoop {
                header: ForHeader::Range { var: caps[1].to_string(), args },
                trailing_brace: false,
            };
        }
    }

    if let Some(re) = &grammar.for_iter {
        if let Some(caps) = re.captures(trimmed) {
            return LineClassification::ForLoop {
                header: ForHeader::Iterable {
                    var: caps[1].to_string(),
                    expr: caps[2].to_string(),
                },
                trailing_brace: caps.get(3).is_some(),
            };
        }
    }

    if grammar.for_keyword.is_match(trimmed) {
        return LineClassification::ForLoop {
            header: ForHeader::Unparsed { raw: trimmed.to_string() },
            trailing_brace: trimmed.ends_with('{'),
        };
    }

    if let Some(caps) = grammar.print.captures(trimmed) {
        return LineClassification::PrintCall { args: caps[1].to_string() };
    }

    if let Some(caps) = grammar.ret.captures(trimmed) {
        return LineClassification::ReturnStatement { expr: caps[1].to_string() };
    }

    if trimmed.is_empty() {
        return LineClassification::Blank;
    }

    LineClassification::Plain { text: trimmed.to_string() }
}

/// Leading-whitespace width of a line (spaces count 1, tabs count 4).
pub fn leading_whitespace(line: &str) -> usize {
    let mut width = 0;
    for ch in line.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += 4,
            _ => break,
        }
    }
    width
}
