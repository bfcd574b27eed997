use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::{ReadingId, SuggestionId, WeekId};
use crate::model::progress::StudentProgress;
use crate::model::quiz::QuizPrompt;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeekError {
    #[error("week title cannot be empty")]
    EmptyTitle,
}

//
// ─── UPLOADED MATERIAL ─────────────────────────────────────────────────────────
//

/// Descriptor for an uploaded lecture recording.
///
/// Supplied by the upload stub and stored verbatim; the duration is whatever
/// the collaborator reported, no parsing or validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub filename: String,
    pub duration: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Descriptor for an uploaded slide deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDeck {
    pub filename: String,
    pub page_count: u32,
    pub uploaded_at: DateTime<Utc>,
}

/// Kind of an assigned reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingKind {
    Article,
    Book,
    Paper,
}

/// A reading assigned for the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub id: ReadingId,
    pub title: String,
    pub url: Url,
    pub kind: ReadingKind,
}

//
// ─── ANALYTICS ─────────────────────────────────────────────────────────────────
//

/// Per-student participation counters for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationDetail {
    pub student_name: String,
    pub questions_asked: u32,
    pub times_spoken: u32,
}

/// Classroom analytics shown on the instructor side.
///
/// Static seed data in this mockup; nothing in the core recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub total_questions: u32,
    pub participation_rate: f32,
    pub attendance: u32,
    pub total_students: u32,
    pub key_themes: Vec<String>,
    pub participation_details: Vec<ParticipationDetail>,
}

//
// ─── SUGGESTED RESOURCES ───────────────────────────────────────────────────────
//

/// Kind of an instructor-facing suggested resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Article,
    Podcast,
    Case,
    Video,
}

/// Supplementary material suggested to the instructor for next session.
///
/// `added_to_plan` is the only mutable bit; it is flipped by the suggestion
/// toggle and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedResource {
    pub id: SuggestionId,
    pub title: String,
    pub description: String,
    pub kind: SuggestionKind,
    pub added_to_plan: bool,
}

//
// ─── WEEK ──────────────────────────────────────────────────────────────────────
//

/// One week of the course: materials, analytics, quiz prompts and the
/// student's progress through them.
///
/// The static content (prompts, readings, analytics, summary) is defined at
/// seed time; only uploads, the suggestion flags and `StudentProgress` change
/// afterwards, each through its dedicated mutator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    id: WeekId,
    title: String,
    date: NaiveDate,
    recording: Option<Recording>,
    slides: Option<SlideDeck>,
    readings: Vec<Reading>,
    analytics: Analytics,
    suggested_resources: Vec<SuggestedResource>,
    student_summary: String,
    key_concepts: Vec<String>,
    quiz_prompts: Vec<QuizPrompt>,
    student_progress: StudentProgress,
}

impl Week {
    /// Creates a week with empty content.
    ///
    /// # Errors
    ///
    /// Returns `WeekError::EmptyTitle` if the title is blank.
    pub fn new(id: WeekId, title: impl Into<String>, date: NaiveDate) -> Result<Self, WeekError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(WeekError::EmptyTitle);
        }

        Ok(Self {
            id,
            title,
            date,
            recording: None,
            slides: None,
            readings: Vec::new(),
            analytics: Analytics::default(),
            suggested_resources: Vec::new(),
            student_summary: String::new(),
            key_concepts: Vec::new(),
            quiz_prompts: Vec::new(),
            student_progress: StudentProgress::default(),
        })
    }

    #[must_use]
    pub fn with_recording(mut self, recording: Recording) -> Self {
        self.recording = Some(recording);
        self
    }

    #[must_use]
    pub fn with_slides(mut self, slides: SlideDeck) -> Self {
        self.slides = Some(slides);
        self
    }

    #[must_use]
    pub fn with_readings(mut self, readings: Vec<Reading>) -> Self {
        self.readings = readings;
        self
    }

    #[must_use]
    pub fn with_analytics(mut self, analytics: Analytics) -> Self {
        self.analytics = analytics;
        self
    }

    #[must_use]
    pub fn with_suggested_resources(mut self, resources: Vec<SuggestedResource>) -> Self {
        self.suggested_resources = resources;
        self
    }

    #[must_use]
    pub fn with_student_summary(mut self, summary: impl Into<String>) -> Self {
        self.student_summary = summary.into();
        self
    }

    #[must_use]
    pub fn with_key_concepts(mut self, concepts: Vec<String>) -> Self {
        self.key_concepts = concepts;
        self
    }

    #[must_use]
    pub fn with_quiz_prompts(mut self, prompts: Vec<QuizPrompt>) -> Self {
        self.quiz_prompts = prompts;
        self
    }

    #[must_use]
    pub fn id(&self) -> WeekId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn recording(&self) -> Option<&Recording> {
        self.recording.as_ref()
    }

    #[must_use]
    pub fn slides(&self) -> Option<&SlideDeck> {
        self.slides.as_ref()
    }

    #[must_use]
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }

    #[must_use]
    pub fn analytics(&self) -> &Analytics {
        &self.analytics
    }

    #[must_use]
    pub fn suggested_resources(&self) -> &[SuggestedResource] {
        &self.suggested_resources
    }

    #[must_use]
    pub fn student_summary(&self) -> &str {
        &self.student_summary
    }

    #[must_use]
    pub fn key_concepts(&self) -> &[String] {
        &self.key_concepts
    }

    #[must_use]
    pub fn quiz_prompts(&self) -> &[QuizPrompt] {
        &self.quiz_prompts
    }

    #[must_use]
    pub fn progress(&self) -> &StudentProgress {
        &self.student_progress
    }

    pub fn progress_mut(&mut self) -> &mut StudentProgress {
        &mut self.student_progress
    }

    /// The prompt the student is currently on, if any is left.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&QuizPrompt> {
        self.quiz_prompts
            .get(self.student_progress.current_prompt_index())
    }

    /// Replaces the recording descriptor (upload or re-upload).
    pub fn set_recording(&mut self, recording: Recording) {
        self.recording = Some(recording);
    }

    /// Replaces the slide deck descriptor (upload or re-upload).
    pub fn set_slides(&mut self, slides: SlideDeck) {
        self.slides = Some(slides);
    }

    /// Appends a reading and returns the stored entry.
    pub fn add_reading(&mut self, reading: Reading) -> &Reading {
        self.readings.push(reading);
        self.readings.last().expect("reading was just appended")
    }

    /// Flips `added_to_plan` on the matching suggestion.
    ///
    /// Returns the new flag value, or `None` when no suggestion has that id.
    pub fn toggle_suggestion(&mut self, id: &SuggestionId) -> Option<bool> {
        let suggestion = self.suggested_resources.iter_mut().find(|s| &s.id == id)?;
        suggestion.added_to_plan = !suggestion.added_to_plan;
        Some(suggestion.added_to_plan)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::PromptId;
    use crate::time::fixed_now;

    fn week_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
    }

    fn build_week() -> Week {
        Week::new(WeekId::new(1), "Supply and Demand", week_date()).unwrap()
    }

    #[test]
    fn week_rejects_blank_title() {
        let err = Week::new(WeekId::new(1), "  ", week_date()).unwrap_err();
        assert_eq!(err, WeekError::EmptyTitle);
    }

    #[test]
    fn current_prompt_follows_progress_index() {
        let prompts = vec![
            QuizPrompt::new(
                PromptId::new("q1-1"),
                "supply and demand",
                WeekId::new(1),
                vec!["supply".to_string()],
                Vec::new(),
            )
            .unwrap(),
            QuizPrompt::new(
                PromptId::new("q1-2"),
                "market equilibrium",
                WeekId::new(1),
                vec!["price".to_string()],
                Vec::new(),
            )
            .unwrap(),
        ];
        let week = build_week().with_quiz_prompts(prompts);

        assert_eq!(week.current_prompt().unwrap().id().as_str(), "q1-1");
    }

    #[test]
    fn week_without_prompts_has_no_current_prompt() {
        let week = build_week();
        assert!(week.current_prompt().is_none());
    }

    #[test]
    fn uploads_replace_existing_descriptors() {
        let mut week = build_week();
        assert!(week.recording().is_none());

        week.set_recording(Recording {
            filename: "lecture-01.mp3".to_string(),
            duration: "1:23:45".to_string(),
            uploaded_at: fixed_now(),
        });
        week.set_recording(Recording {
            filename: "lecture-01-fixed.mp3".to_string(),
            duration: "1:23:45".to_string(),
            uploaded_at: fixed_now(),
        });

        assert_eq!(week.recording().unwrap().filename, "lecture-01-fixed.mp3");
    }

    #[test]
    fn toggle_suggestion_flips_only_the_target() {
        let mut week = build_week().with_suggested_resources(vec![
            SuggestedResource {
                id: SuggestionId::new("s1-1"),
                title: "Planet Money on price controls".to_string(),
                description: "Podcast episode".to_string(),
                kind: SuggestionKind::Podcast,
                added_to_plan: false,
            },
            SuggestedResource {
                id: SuggestionId::new("s1-2"),
                title: "Rent control case study".to_string(),
                description: "Short case".to_string(),
                kind: SuggestionKind::Case,
                added_to_plan: false,
            },
        ]);

        let flipped = week.toggle_suggestion(&SuggestionId::new("s1-2"));
        assert_eq!(flipped, Some(true));
        assert!(!week.suggested_resources()[0].added_to_plan);
        assert!(week.suggested_resources()[1].added_to_plan);

        let missing = week.toggle_suggestion(&SuggestionId::new("s9-9"));
        assert!(missing.is_none());
    }

    #[test]
    fn add_reading_appends() {
        let mut week = build_week();
        week.add_reading(Reading {
            id: ReadingId::new("r1-1"),
            title: "Principles of Economics, ch. 4".to_string(),
            url: Url::parse("https://example.edu/econ101/ch4").unwrap(),
            kind: ReadingKind::Book,
        });

        assert_eq!(week.readings().len(), 1);
        assert_eq!(week.readings()[0].id.as_str(), "r1-1");
    }
}
