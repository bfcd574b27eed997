use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::{PromptId, WeekId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz prompt concept cannot be empty")]
    EmptyConcept,
}

//
// ─── REVIEW RESOURCES ──────────────────────────────────────────────────────────
//

/// Kind of supplementary material offered for review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Slide,
    Reading,
    Clip,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::Slide => "slide",
            ResourceKind::Reading => "reading",
            ResourceKind::Clip => "clip",
        };
        write!(f, "{label}")
    }
}

/// Pointer to course material a student should revisit.
///
/// Referenced by quiz prompts and attached to tutor feedback on weak or
/// partial answers. Not owned by either: the same resource may be offered
/// by several prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewResource {
    pub kind: ResourceKind,
    pub title: String,
    pub description: String,
    pub week_id: WeekId,
}

impl ReviewResource {
    #[must_use]
    pub fn new(
        kind: ResourceKind,
        title: impl Into<String>,
        description: impl Into<String>,
        week_id: WeekId,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            week_id,
        }
    }
}

//
// ─── QUIZ PROMPT ───────────────────────────────────────────────────────────────
//

/// A single quiz question tied to one concept.
///
/// Immutable once defined; owned by the week's static content. The expected
/// keywords drive the evaluator's match scoring. An empty keyword list is
/// permitted here and handled by the evaluator as an automatic weak answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizPrompt {
    id: PromptId,
    concept: String,
    related_week: WeekId,
    expected_keywords: Vec<String>,
    review_resources: Vec<ReviewResource>,
}

impl QuizPrompt {
    /// Creates a new quiz prompt.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyConcept` if the concept label is blank.
    pub fn new(
        id: PromptId,
        concept: impl Into<String>,
        related_week: WeekId,
        expected_keywords: Vec<String>,
        review_resources: Vec<ReviewResource>,
    ) -> Result<Self, QuizError> {
        let concept = concept.into();
        if concept.trim().is_empty() {
            return Err(QuizError::EmptyConcept);
        }

        Ok(Self {
            id,
            concept,
            related_week,
            expected_keywords,
            review_resources,
        })
    }

    #[must_use]
    pub fn id(&self) -> &PromptId {
        &self.id
    }

    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// The week whose material this prompt draws on.
    #[must_use]
    pub fn related_week(&self) -> WeekId {
        self.related_week
    }

    #[must_use]
    pub fn expected_keywords(&self) -> &[String] {
        &self.expected_keywords
    }

    #[must_use]
    pub fn review_resources(&self) -> &[ReviewResource] {
        &self.review_resources
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> ReviewResource {
        ReviewResource::new(
            ResourceKind::Slide,
            "Supply curves",
            "Slides 4-9",
            WeekId::new(1),
        )
    }

    #[test]
    fn prompt_rejects_blank_concept() {
        let err = QuizPrompt::new(
            PromptId::new("q1-1"),
            "   ",
            WeekId::new(1),
            vec!["supply".to_string()],
            Vec::new(),
        )
        .unwrap_err();

        assert_eq!(err, QuizError::EmptyConcept);
    }

    #[test]
    fn prompt_allows_empty_keyword_list() {
        let prompt = QuizPrompt::new(
            PromptId::new("q1-1"),
            "supply and demand",
            WeekId::new(1),
            Vec::new(),
            vec![resource()],
        )
        .unwrap();

        assert!(prompt.expected_keywords().is_empty());
        assert_eq!(prompt.review_resources().len(), 1);
    }

    #[test]
    fn prompt_exposes_fields() {
        let prompt = QuizPrompt::new(
            PromptId::new("q2-1"),
            "price elasticity",
            WeekId::new(2),
            vec!["elasticity".to_string(), "price".to_string()],
            Vec::new(),
        )
        .unwrap();

        assert_eq!(prompt.id().as_str(), "q2-1");
        assert_eq!(prompt.concept(), "price elasticity");
        assert_eq!(prompt.related_week(), WeekId::new(2));
        assert_eq!(prompt.expected_keywords().len(), 2);
    }

    #[test]
    fn resource_kind_labels_are_kebab_case() {
        assert_eq!(ResourceKind::Slide.to_string(), "slide");
        assert_eq!(
            serde_json::to_string(&ResourceKind::Clip).unwrap(),
            "\"clip\""
        );
    }
}
