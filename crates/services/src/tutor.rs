use course_core::Clock;
use course_core::evaluator;
use course_core::model::{
    ChatLog, ChatMessage, MasteryLevel, QuizAnswer, QuizPrompt, Week,
};

use crate::follow_up::FollowUp;

//
// ─── TURN RESULT ───────────────────────────────────────────────────────────────
//

/// Outcome of one evaluated quiz turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorTurn {
    pub answer: QuizAnswer,
    pub mastery: MasteryLevel,
    pub is_complete: bool,
    /// Deferred announcement of the next prompt; `None` once the quiz is done.
    pub follow_up: Option<FollowUp>,
}

//
// ─── TUTOR SERVICE ─────────────────────────────────────────────────────────────
//

/// Drives a week's quiz conversation: presents prompts, evaluates answers
/// and advances `StudentProgress`.
///
/// Stateless apart from its clock; all quiz state lives on the `Week` and
/// the per-week `ChatLog` passed in.
#[derive(Debug, Clone, Copy)]
pub struct TutorService {
    clock: Clock,
}

impl TutorService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Seeds the week's chat with the prompt the student is currently on.
    ///
    /// Appends nothing when the week has no prompts or its quiz is already
    /// completed. Called once per week at session start, not lazily.
    pub fn open_quiz<'a>(&self, week: &Week, log: &'a mut ChatLog) -> Option<&'a ChatMessage> {
        if week.progress().is_completed() {
            return None;
        }
        let prompt = week.current_prompt()?;
        let message = ChatMessage::tutor(intro_message(prompt), self.clock.now());
        Some(log.push(message))
    }

    /// Evaluates an answer to the current prompt and advances the quiz.
    ///
    /// Appends the student message and the tutor's feedback (in that order)
    /// to the log, records the answer, and returns the turn outcome. The
    /// follow-up announcing the next prompt is returned for deferred
    /// delivery, never appended here.
    ///
    /// Submissions against a completed quiz or a week without prompts are
    /// silently ignored: `None`, no state change, no messages.
    pub fn submit_answer(
        &self,
        week: &mut Week,
        log: &mut ChatLog,
        answer_text: &str,
    ) -> Option<TutorTurn> {
        let prompt = week.current_prompt()?.clone();
        let now = self.clock.now();
        let evaluation = evaluator::evaluate(answer_text, &prompt);

        let answer = QuizAnswer::new(
            prompt.id().clone(),
            answer_text,
            evaluation.feedback.clone(),
            evaluation.understanding,
            now,
        );

        let total_prompts = week.quiz_prompts().len();
        week.progress_mut()
            .record_answer(answer.clone(), evaluation.mastery, total_prompts)?;

        log.push(ChatMessage::student(answer_text, now));
        let mut feedback = ChatMessage::tutor(evaluation.feedback, now)
            .with_understanding(evaluation.understanding);
        if !evaluation.review_resources.is_empty() {
            feedback = feedback.with_resources(evaluation.review_resources);
        }
        log.push(feedback);

        let is_complete = week.progress().is_completed();
        let follow_up = week
            .current_prompt()
            .map(|next| FollowUp::scheduled_at(week.id(), next_prompt_message(next), now));

        tracing::debug!(
            week = %week.id(),
            prompt = %prompt.id(),
            understanding = evaluation.understanding.as_u8(),
            complete = is_complete,
            "answer evaluated"
        );

        Some(TutorTurn {
            answer,
            mastery: evaluation.mastery,
            is_complete,
            follow_up,
        })
    }
}

fn intro_message(prompt: &QuizPrompt) -> String {
    format!(
        "In your own words, explain what we covered about \"{}\" in Week {}.",
        prompt.concept(),
        prompt.related_week()
    )
}

fn next_prompt_message(prompt: &QuizPrompt) -> String {
    format!(
        "Great! Now, let's move on. In your own words, explain \"{}\" from Week {}.",
        prompt.concept(),
        prompt.related_week()
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
