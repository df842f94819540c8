//! Per-language-pair line transformers.
//!
//! One module per supported ordered pair. Each exposes a single
//! `transform(classification) -> Vec<String>` mapping a classified line to
//! zero or more target-language lines (unindented; the pipeline applies
//! block indentation). Every transformer degrades to passthrough or an
//! explicit manual-conversion marker, never an error.

pub mod js_to_python;
pub mod js_to_swift;
pub mod python_to_js;

use crate::classifier::LineClassification;

/// Signature shared by the per-pair transformers.
pub type TransformFn = fn(&LineClassification) -> Vec<String>;

/// Marker prefix for constructs that need a human to finish the conversion.
pub const MANUAL_MARKER: &str = "MANUAL CONVERSION NEEDED";

/// Rewrite strict JavaScript equality operators into their loose
/// target-language forms (`===` → `==`, `!==` → `!=`).
pub(crate) fn normalize_equality(condition: &str) -> String {
    condition.replace("===", "==").replace("!==", "!=")
}

/// Render a comment line in the target language, without trailing
/// whitespace when the comment body is empty.
pub(crate) fn comment_line(marker: &str, text: &str) -> String {
    if text.is_empty() {
        marker.to_string()
    } else {
        format!("{} {}", marker, text)
    }
}
