//! Keyword-overlap understanding evaluator.
//!
//! Scores a free-text student answer against a prompt's expected keywords and
//! produces tiered feedback plus a mastery label. Deliberately a heuristic:
//! lowercase substring containment, no language model, no tokenization.

use serde::{Deserialize, Serialize};

use crate::model::{MasteryLevel, QuizPrompt, ReviewResource, UnderstandingLevel};

/// Match ratio at or above which an answer can classify as strong.
pub const STRONG_MATCH_RATIO: f64 = 0.6;
/// Match ratio at or above which an answer can classify as partial.
pub const PARTIAL_MATCH_RATIO: f64 = 0.3;
/// A strong answer must be strictly longer than this many characters.
pub const STRONG_MIN_CHARS: usize = 50;
/// A partial answer must be strictly longer than this many characters.
pub const PARTIAL_MIN_CHARS: usize = 30;

const WEAK_FEEDBACK: &str = "This explanation needs more detail. It seems like you might be \
     confusing this with a concept from a different week, or missing the core idea. Please \
     review the materials below and try again with a more complete explanation.";

/// Outcome of evaluating one answer against one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub understanding: UnderstandingLevel,
    pub feedback: String,
    pub mastery: MasteryLevel,
    pub review_resources: Vec<ReviewResource>,
}

/// Scores `answer_text` against the prompt's expected keywords.
///
/// Pure and deterministic: the same input always yields the same evaluation.
///
/// Classification is ordered strong -> partial -> weak and the first branch
/// whose match-ratio and length gates both hold wins:
///
/// - strong: ratio >= 0.6 and more than 50 characters. Mastery `Confident`,
///   no review resources (nothing to remediate).
/// - partial: ratio >= 0.3 and more than 30 characters. Mastery
///   `GettingThere`; feedback names the first unmatched keyword in list order.
/// - weak: everything else, including a high ratio on a too-short answer.
///   Mastery `NotSolid`.
///
/// Keywords match as lowercase substrings, so "cat" matches "category".
/// A prompt with no keywords cannot produce a match ratio and is treated as
/// an automatic weak answer rather than dividing by zero.
#[must_use]
pub fn evaluate(answer_text: &str, prompt: &QuizPrompt) -> Evaluation {
    let answer = answer_text.to_lowercase();
    let keywords: Vec<String> = prompt
        .expected_keywords()
        .iter()
        .map(|k| k.to_lowercase())
        .collect();

    let matched = keywords.iter().filter(|k| answer.contains(k.as_str())).count();
    let match_ratio = if keywords.is_empty() {
        0.0
    } else {
        matched as f64 / keywords.len() as f64
    };
    let answer_chars = answer_text.chars().count();

    if match_ratio >= STRONG_MATCH_RATIO && answer_chars > STRONG_MIN_CHARS {
        let affirmation = if matched == keywords.len() {
            "You mentioned all the important concepts."
        } else {
            "Your explanation shows solid understanding."
        };
        Evaluation {
            understanding: UnderstandingLevel::Strong,
            feedback: format!(
                "Excellent! You've captured the key aspects of {}. {affirmation}",
                prompt.concept()
            ),
            mastery: MasteryLevel::Confident,
            review_resources: Vec::new(),
        }
    } else if match_ratio >= PARTIAL_MATCH_RATIO && answer_chars > PARTIAL_MIN_CHARS {
        // Every keyword can match while the answer is still too short for
        // strong; the hint then falls back to a generic phrase.
        let hint = keywords
            .iter()
            .find(|k| !answer.contains(k.as_str()))
            .map_or("the core concepts", |k| k.as_str());
        Evaluation {
            understanding: UnderstandingLevel::Partial,
            feedback: format!(
                "You're on the right track, but you're missing some key aspects. Consider how \
                 {} relates to {hint}. Review the materials below to strengthen your \
                 understanding.",
                prompt.concept()
            ),
            mastery: MasteryLevel::GettingThere,
            review_resources: prompt.review_resources().to_vec(),
        }
    } else {
        Evaluation {
            understanding: UnderstandingLevel::Weak,
            feedback: WEAK_FEEDBACK.to_string(),
            mastery: MasteryLevel::NotSolid,
            review_resources: prompt.review_resources().to_vec(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
