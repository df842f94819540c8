//! traducir: line-oriented source-to-source transliteration.
//!
//! Converts code snippets between JavaScript, Python, and Swift by
//! classifying each line with regular expressions, tracking block depth,
//! and re-emitting the line in the target language's block convention.
//! No AST, no semantic analysis; unmatched constructs pass through or get
//! an explicit manual-conversion marker, and the engine never fails.

pub mod classifier;
pub mod explain;
pub mod indent;
pub mod pipeline;
pub mod transform;
pub mod types;

// Re-export key types for convenience
pub use classifier::{classify, ForHeader, LineClassification};
pub use explain::{convert, explanation_for};
pub use indent::{IndentEvent, IndentMode, IndentTracker};
pub use pipeline::{supported_pairs, transliterate};
pub use types::{
    ConversionRequest, ConversionResult, Explanation, Language, RequestError, SkillLevel,
};
