//! Explanation templates keyed by language pair.
//!
//! These are static lookups, not analysis: the step-by-step list describes
//! what the line transformers did for the pair, with extra steps at the
//! beginner level. README/API-doc generation belongs to the surrounding
//! system and is intentionally absent.

use crate::pipeline::transliterate;
use crate::types::{ConversionRequest, ConversionResult, Explanation, Language, SkillLevel};

/// Convert a validated request into target code plus its explanation.
///
/// This is the boundary consumed by the surrounding HTTP layer once the
/// optional LLM path has failed or is unavailable.
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    let target_code = transliterate(
        &request.source_code,
        &request.source_language,
        &request.target_language,
    );
    let explanation = explanation_for(
        &request.source_language,
        &request.target_language,
        request.skill_level,
    );
    ConversionResult { target_code, explanation }
}

/// Look up the explanation strings for a language pair.
pub fn explanation_for(from: &Language, to: &Language, skill: SkillLevel) -> Explanation {
    let high_level = format!(
        "Converted the snippet from {} to {} line by line, keeping identifiers unchanged \
         and rewriting only the surface syntax.",
        from, to
    );

    let language_differences = match (from, to) {
        (Language::JavaScript, Language::Python) | (Language::Python, Language::JavaScript) => {
            "JavaScript delimits blocks with braces and statements with semicolons; \
             Python uses indentation and newlines. JavaScript declares variables with \
             let/const, Python with bare assignment, and strict equality (===) has no \
             Python counterpart."
                .to_string()
        }
        (Language::JavaScript, Language::Swift) => {
            "Both languages use braces, but Swift drops the parentheses around if \
             conditions, distinguishes let (constant) from var (mutable), and writes \
             counting loops as range expressions (0..<10) instead of three-clause \
             for headers."
                .to_string()
        }
        _ => format!(
            "Direct conversion between {} and {} is not supported; the source was \
             passed through unchanged.",
            from, to
        ),
    };

    Explanation {
        high_level,
        language_differences,
        step_by_step: steps_for(from, to, skill),
    }
}

fn steps_for(from: &Language, to: &Language, skill: SkillLevel) -> Vec<String> {
    let mut steps: Vec<String> = match (from, to) {
        (Language::JavaScript, Language::Python) => vec![
            "Rewrote function declarations as def name(params): headers.".to_string(),
            "Dropped var/let/const keywords and trailing semicolons.".to_string(),
            "Replaced === and !== with == and != in conditions.".to_string(),
            "Turned counting for loops into for i in range(start, end):.".to_string(),
            "Replaced console.log(...) with print(...).".to_string(),
            "Removed braces; block structure is now carried by indentation.".to_string(),
        ],
        (Language::JavaScript, Language::Swift) => vec![
            "Rewrote function declarations as func name(param: Any, ...) headers.".to_string(),
            "Mapped const to let and let/var to var.".to_string(),
            "Dropped the parentheses around if conditions.".to_string(),
            "Turned counting for loops into range expressions (..< or ...).".to_string(),
            "Replaced console.log(...) with print(...).".to_string(),
        ],
        (Language::Python, Language::JavaScript) => vec![
            "Rewrote def headers as function name(params) { blocks.".to_string(),
            "Prefixed assignments with let and appended semicolons.".to_string(),
            "Turned range(...) loops into three-clause for headers.".to_string(),
            "Replaced print(...) with console.log(...).".to_string(),
            "Emitted closing braces where the indentation decreased.".to_string(),
        ],
        _ => vec![format!(
            "No converter exists for {} to {}; added a comment header and kept the \
             source as-is.",
            from, to
        )],
    };

    if skill == SkillLevel::Beginner {
        steps.insert(
            0,
            "Read the source one line at a time and matched each line against a small \
             set of known patterns."
                .to_string(),
        );
        steps.push(
            "Lines that matched no pattern were kept as close to the original as \
             possible; check any MANUAL CONVERSION NEEDED markers by hand."
                .to_string(),
        );
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_produces_code_and_explanation() {
        let req = ConversionRequest::new(
            "function add(a, b) {\n  return a + b;\n}",
            Language::JavaScript,
            Language::Python,
        );
        let result = convert(&req);
        assert_eq!(result.target_code, "def add(a, b):\n    return a + b");
        assert!(result.explanation.high_level.contains("javascript"));
        assert!(!result.explanation.step_by_step.is_empty());
    }

    #[test]
    fn test_beginner_gets_more_steps() {
        let beginner = explanation_for(
            &Language::JavaScript,
            &Language::Python,
            SkillLevel::Beginner,
        );
        let advanced = explanation_for(
            &Language::JavaScript,
            &Language::Python,
            SkillLevel::Advanced,
        );
        assert!(beginner.step_by_step.len() > advanced.step_by_step.len());
    }

    #[test]
    fn test_unsupported_pair_explanation() {
        let expl = explanation_for(
            &Language::Other("java".to_string()),
            &Language::Other("rust".to_string()),
            SkillLevel::Intermediate,
        );
        assert!(expl.language_differences.contains("not supported"));
        assert_eq!(expl.step_by_step.len(), 1);
    }

    #[test]
    fn test_explanation_is_skill_agnostic_for_code() {
        let mut req = ConversionRequest::new("x = 1", Language::Python, Language::JavaScript);
        req.skill_level = SkillLevel::Beginner;
        let beginner_code = convert(&req).target_code;
        req.skill_level = SkillLevel::Advanced;
        let advanced_code = convert(&req).target_code;
        assert_eq!(beginner_code, advanced_code);
    }
}
