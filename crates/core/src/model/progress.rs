use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::PromptId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Errors that can occur while working with progress values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressError {
    #[error("invalid understanding level value: {0}")]
    InvalidUnderstanding(u8),
}

//
// ─── UNDERSTANDING LEVEL ───────────────────────────────────────────────────────
//

/// Per-answer 1-3 score produced by the evaluator.
///
/// - `Weak`: the explanation misses the core idea or lacks detail
/// - `Partial`: on the right track but missing key aspects
/// - `Strong`: captures the key aspects of the concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum UnderstandingLevel {
    Weak,
    Partial,
    Strong,
}

impl UnderstandingLevel {
    /// Converts a numeric level (1-3) to an `UnderstandingLevel`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidUnderstanding` if the value is not 1, 2 or 3.
    pub fn from_u8(value: u8) -> Result<Self, ProgressError> {
        match value {
            1 => Ok(Self::Weak),
            2 => Ok(Self::Partial),
            3 => Ok(Self::Strong),
            _ => Err(ProgressError::InvalidUnderstanding(value)),
        }
    }

    /// Maps this level to the 1-3 scale shown to students.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            UnderstandingLevel::Weak => 1,
            UnderstandingLevel::Partial => 2,
            UnderstandingLevel::Strong => 3,
        }
    }
}

impl From<UnderstandingLevel> for u8 {
    fn from(level: UnderstandingLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for UnderstandingLevel {
    type Error = ProgressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

//
// ─── MASTERY LEVEL ─────────────────────────────────────────────────────────────
//

/// Coarse three-tier mastery label for a week's quiz.
///
/// Recomputed from the most recent answer only, never a cumulative average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MasteryLevel {
    NotSolid,
    GettingThere,
    Confident,
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MasteryLevel::NotSolid => "not-solid",
            MasteryLevel::GettingThere => "getting-there",
            MasteryLevel::Confident => "confident",
        };
        write!(f, "{label}")
    }
}

//
// ─── QUIZ STATUS ───────────────────────────────────────────────────────────────
//

/// Lifecycle of a week's quiz: `NotStarted -> InProgress -> Completed`.
///
/// `Completed` is terminal. A single-prompt quiz jumps straight from
/// `NotStarted` to `Completed` on its first answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizStatus::NotStarted => "not-started",
            QuizStatus::InProgress => "in-progress",
            QuizStatus::Completed => "completed",
        };
        write!(f, "{label}")
    }
}

//
// ─── QUIZ ANSWER ───────────────────────────────────────────────────────────────
//

/// Record of a single evaluated answer.
///
/// Created once per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub prompt_id: PromptId,
    pub answer: String,
    pub feedback: String,
    pub understanding: UnderstandingLevel,
    pub answered_at: DateTime<Utc>,
}

impl QuizAnswer {
    #[must_use]
    pub fn new(
        prompt_id: PromptId,
        answer: impl Into<String>,
        feedback: impl Into<String>,
        understanding: UnderstandingLevel,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            prompt_id,
            answer: answer.into(),
            feedback: feedback.into(),
            understanding,
            answered_at,
        }
    }
}

//
// ─── STUDENT PROGRESS ──────────────────────────────────────────────────────────
//

/// Per-week quiz progress for the student.
///
/// Invariants, enforced by `record_answer`:
/// - `current_prompt_index` is monotonically non-decreasing and never exceeds
///   the week's prompt count; reaching the count means completion
/// - `answers` is append-only, one entry per evaluated turn
/// - `mastery_level` mirrors the latest answer's label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProgress {
    quiz_status: QuizStatus,
    current_prompt_index: usize,
    answers: Vec<QuizAnswer>,
    mastery_level: MasteryLevel,
}

impl Default for StudentProgress {
    fn default() -> Self {
        Self {
            quiz_status: QuizStatus::NotStarted,
            current_prompt_index: 0,
            answers: Vec::new(),
            mastery_level: MasteryLevel::NotSolid,
        }
    }
}

impl StudentProgress {
    #[must_use]
    pub fn quiz_status(&self) -> QuizStatus {
        self.quiz_status
    }

    #[must_use]
    pub fn current_prompt_index(&self) -> usize {
        self.current_prompt_index
    }

    #[must_use]
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn mastery_level(&self) -> MasteryLevel {
        self.mastery_level
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.quiz_status == QuizStatus::Completed
    }

    /// Returns true when another answer can be recorded against a quiz with
    /// `total_prompts` prompts.
    #[must_use]
    pub fn can_answer(&self, total_prompts: usize) -> bool {
        !self.is_completed() && self.current_prompt_index < total_prompts
    }

    /// Appends an evaluated answer and advances the prompt cursor.
    ///
    /// Sets the status to `Completed` when the cursor reaches `total_prompts`,
    /// otherwise `InProgress`, and overwrites the mastery label with the
    /// latest evaluation's. Returns `None` without touching any state when the
    /// quiz is already completed or has no prompt left to answer.
    pub fn record_answer(
        &mut self,
        answer: QuizAnswer,
        mastery: MasteryLevel,
        total_prompts: usize,
    ) -> Option<&QuizAnswer> {
        if !self.can_answer(total_prompts) {
            return None;
        }

        self.answers.push(answer);
        self.current_prompt_index += 1;
        self.quiz_status = if self.current_prompt_index >= total_prompts {
            QuizStatus::Completed
        } else {
            QuizStatus::InProgress
        };
        self.mastery_level = mastery;

        self.answers.last()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
