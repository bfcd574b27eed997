use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

use course_core::Clock;
use course_core::model::{
    ChatLog, ChatMessage, Reading, ReadingId, ReadingKind, Recording, SlideDeck, SuggestionId,
    Week, WeekId,
};

use crate::error::SessionError;
use crate::follow_up::FollowUp;
use crate::tutor::{TutorService, TutorTurn};

/// Duration reported for every uploaded recording; the upload stub does not
/// inspect the file.
const MOCK_RECORDING_DURATION: &str = "1:23:45";
/// Page count reported for every uploaded slide deck.
const MOCK_SLIDE_PAGE_COUNT: u32 = 28;

//
// ─── VIEW STATE ────────────────────────────────────────────────────────────────
//

/// Which role's view the shell is rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    Instructor,
    Student,
}

/// Color scheme flag. The session only stores it; rendering is the shell's
/// concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

//
// ─── COURSE SESSION ────────────────────────────────────────────────────────────
//

/// Top-level application state for one session.
///
/// Owns the weeks, the per-week chat logs, pending follow-ups and the view
/// flags, and hands the shell an updated view after every operation. All
/// state is session-local and lost on teardown; nothing persists.
#[derive(Debug)]
pub struct CourseSession {
    weeks: Vec<Week>,
    logs: HashMap<WeekId, ChatLog>,
    pending: HashMap<WeekId, FollowUp>,
    selected: WeekId,
    view_mode: ViewMode,
    theme: Theme,
    tutor: TutorService,
}

impl CourseSession {
    /// Builds a session over the given weeks and seeds every week's chat log
    /// with its current prompt, in one pass at construction time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoWeeks` when `weeks` is empty; the session
    /// needs a first week to fall back to on unknown selections.
    pub fn new(weeks: Vec<Week>, clock: Clock) -> Result<Self, SessionError> {
        let selected = weeks.first().ok_or(SessionError::NoWeeks)?.id();
        let tutor = TutorService::new(clock);

        let mut logs = HashMap::with_capacity(weeks.len());
        for week in &weeks {
            let mut log = ChatLog::new();
            tutor.open_quiz(week, &mut log);
            logs.insert(week.id(), log);
        }

        Ok(Self {
            weeks,
            logs,
            pending: HashMap::new(),
            selected,
            view_mode: ViewMode::default(),
            theme: Theme::default(),
            tutor,
        })
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────
    //

    /// Selects a week by id, falling back to the first week when the id is
    /// unknown. Returns the id that ended up selected.
    pub fn select_week(&mut self, id: WeekId) -> WeekId {
        if self.weeks.iter().any(|w| w.id() == id) {
            self.selected = id;
        } else if let Some(first) = self.weeks.first() {
            tracing::debug!(requested = %id, fallback = %first.id(), "unknown week id");
            self.selected = first.id();
        }
        self.selected
    }

    #[must_use]
    pub fn selected_week(&self) -> WeekId {
        self.selected
    }

    #[must_use]
    pub fn current_week(&self) -> Option<&Week> {
        self.week(self.selected)
    }

    #[must_use]
    pub fn week(&self, id: WeekId) -> Option<&Week> {
        self.weeks.iter().find(|w| w.id() == id)
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    #[must_use]
    pub fn chat_log(&self, id: WeekId) -> Option<&ChatLog> {
        self.logs.get(&id)
    }

    //
    // ─── QUIZ TURNS ────────────────────────────────────────────────────────
    //

    /// Submits an answer for the selected week's current prompt.
    ///
    /// Any still-pending follow-up for the week is flushed first, so the
    /// delayed announcement always precedes the new turn's messages. The
    /// turn's own follow-up (if any) replaces it as pending.
    ///
    /// Returns `None` (and changes nothing) when the selected week's quiz is
    /// completed or has no prompts.
    pub fn submit_answer(&mut self, answer_text: &str) -> Option<TutorTurn> {
        let week_id = self.selected;
        self.flush_follow_up(week_id);

        let week = self.weeks.iter_mut().find(|w| w.id() == week_id)?;
        let log = self.logs.entry(week_id).or_default();
        let turn = self.tutor.submit_answer(week, log, answer_text)?;

        if let Some(follow_up) = turn.follow_up.clone() {
            self.pending.insert(week_id, follow_up);
        }
        Some(turn)
    }

    //
    // ─── DEFERRED FOLLOW-UPS ───────────────────────────────────────────────
    //

    #[must_use]
    pub fn pending_follow_up(&self, week_id: WeekId) -> Option<&FollowUp> {
        self.pending.get(&week_id)
    }

    /// Appends the pending follow-up for `week_id` to its chat log, if one
    /// exists. Returns whether a message was appended.
    pub fn flush_follow_up(&mut self, week_id: WeekId) -> bool {
        let Some(follow_up) = self.pending.remove(&week_id) else {
            return false;
        };
        let Some(log) = self.logs.get_mut(&week_id) else {
            return false;
        };
        log.push(ChatMessage::tutor(
            follow_up.content,
            self.tutor.clock().now(),
        ));
        true
    }

    /// Flushes every pending follow-up whose due time has passed.
    ///
    /// Returns the number of messages appended.
    pub fn flush_due(&mut self, now: DateTime<Utc>) -> usize {
        let due: Vec<WeekId> = self
            .pending
            .iter()
            .filter(|(_, follow_up)| follow_up.due_at <= now)
            .map(|(id, _)| *id)
            .collect();
        let mut appended = 0;
        for id in due {
            if self.flush_follow_up(id) {
                appended += 1;
            }
        }
        appended
    }

    /// Tears down a week's transient state: its pending follow-up is
    /// cancelled so a later timer fire cannot write into it.
    pub fn close_week(&mut self, week_id: WeekId) -> bool {
        self.pending.remove(&week_id).is_some()
    }

    //
    // ─── VIEW STATE ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    //
    // ─── INSTRUCTOR UPLOAD STUBS ───────────────────────────────────────────
    //

    /// Records an uploaded lecture recording for the week, verbatim.
    ///
    /// Mock pipeline: the duration is a canned value, the file is never
    /// opened. Returns `None` when the week id is unknown.
    pub fn attach_recording(
        &mut self,
        week_id: WeekId,
        filename: impl Into<String>,
    ) -> Option<&Recording> {
        let uploaded_at = self.tutor.clock().now();
        let week = self.week_mut(week_id)?;
        week.set_recording(Recording {
            filename: filename.into(),
            duration: MOCK_RECORDING_DURATION.to_string(),
            uploaded_at,
        });
        week.recording()
    }

    /// Records an uploaded slide deck for the week, verbatim.
    pub fn attach_slides(
        &mut self,
        week_id: WeekId,
        filename: impl Into<String>,
    ) -> Option<&SlideDeck> {
        let uploaded_at = self.tutor.clock().now();
        let week = self.week_mut(week_id)?;
        week.set_slides(SlideDeck {
            filename: filename.into(),
            page_count: MOCK_SLIDE_PAGE_COUNT,
            uploaded_at,
        });
        week.slides()
    }

    /// Adds a reading to the week, generating its id from the week's
    /// current reading count.
    pub fn add_reading(
        &mut self,
        week_id: WeekId,
        title: impl Into<String>,
        url: Url,
        kind: ReadingKind,
    ) -> Option<&Reading> {
        let week = self.week_mut(week_id)?;
        let id = ReadingId::new(format!("r{}-{}", week.id(), week.readings().len() + 1));
        Some(week.add_reading(Reading {
            id,
            title: title.into(),
            url,
            kind,
        }))
    }

    /// Flips a suggested resource's `added_to_plan` flag.
    ///
    /// Returns the new flag value, or `None` when the week or suggestion is
    /// unknown.
    pub fn toggle_suggestion(&mut self, week_id: WeekId, id: &SuggestionId) -> Option<bool> {
        self.week_mut(week_id)?.toggle_suggestion(id)
    }

    fn week_mut(&mut self, id: WeekId) -> Option<&mut Week> {
        self.weeks.iter_mut().find(|w| w.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
