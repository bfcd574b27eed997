use course_core::model::{
    MasteryLevel, QuizStatus, Sender, SuggestionId, UnderstandingLevel, WeekId,
};
use course_core::time::fixed_now;
use services::{Clock, CourseSession, catalog};

fn build_session() -> CourseSession {
    let weeks = catalog::seed_weeks().unwrap();
    CourseSession::new(weeks, Clock::fixed(fixed_now())).unwrap()
}

fn strong_supply_answer() -> String {
    format!("{:<60}", "supply rises while demand falls until they meet")
}

#[test]
fn session_start_seeds_every_week_with_its_prompt() {
    let session = build_session();

    let week1_log = session.chat_log(WeekId::new(1)).unwrap();
    assert_eq!(week1_log.len(), 1);
    assert_eq!(week1_log.messages()[0].sender, Sender::Tutor);
    assert_eq!(
        week1_log.messages()[0].content,
        "In your own words, explain what we covered about \"supply and demand\" in Week 1."
    );

    for id in 2..=3 {
        let log = session.chat_log(WeekId::new(id)).unwrap();
        assert_eq!(log.len(), 1, "week {id} should be seeded exactly once");
    }
}

#[test]
fn full_week_run_through_completion() {
    let mut session = build_session();
    assert_eq!(session.selected_week(), WeekId::new(1));

    // First prompt: strong answer, mastery jumps to confident.
    let turn = session.submit_answer(&strong_supply_answer()).unwrap();
    assert_eq!(turn.answer.understanding, UnderstandingLevel::Strong);
    assert_eq!(turn.mastery, MasteryLevel::Confident);
    assert!(!turn.is_complete);

    let week = session.week(WeekId::new(1)).unwrap();
    assert_eq!(week.progress().quiz_status(), QuizStatus::InProgress);
    assert_eq!(week.progress().current_prompt_index(), 1);

    // Deferred announcement of the second prompt arrives on its timer.
    let due = fixed_now() + chrono::Duration::milliseconds(1000);
    assert_eq!(session.flush_due(due), 1);
    let log = session.chat_log(WeekId::new(1)).unwrap();
    assert!(
        log.last()
            .unwrap()
            .content
            .contains("\"market equilibrium\" from Week 1")
    );

    // Second prompt: partial answer naming only one keyword; feedback hints
    // at the first missing one.
    let partial = format!("{:<35}", "the price settles where curves");
    let turn = session.submit_answer(&partial).unwrap();
    assert_eq!(turn.answer.understanding, UnderstandingLevel::Partial);
    assert_eq!(turn.mastery, MasteryLevel::GettingThere);
    assert!(turn.is_complete);
    assert!(turn.follow_up.is_none());
    assert!(turn.answer.feedback.contains("relates to quantity"));

    let week = session.week(WeekId::new(1)).unwrap();
    assert_eq!(week.progress().quiz_status(), QuizStatus::Completed);
    assert_eq!(
        week.progress().current_prompt_index(),
        week.quiz_prompts().len()
    );
    assert_eq!(week.progress().answers().len(), 2);
    // Mastery reflects the latest answer, not the best one.
    assert_eq!(week.progress().mastery_level(), MasteryLevel::GettingThere);
}

#[test]
fn completed_quiz_ignores_submissions_and_stays_completed() {
    let mut session = build_session();
    session.submit_answer(&strong_supply_answer()).unwrap();
    let partial = format!("{:<35}", "the price settles where curves");
    session.submit_answer(&partial).unwrap();

    let log_len = session.chat_log(WeekId::new(1)).unwrap().len();
    let answers_len = session
        .week(WeekId::new(1))
        .unwrap()
        .progress()
        .answers()
        .len();

    assert!(session.submit_answer("wait, one more thought").is_none());

    let week = session.week(WeekId::new(1)).unwrap();
    assert_eq!(week.progress().quiz_status(), QuizStatus::Completed);
    assert_eq!(week.progress().answers().len(), answers_len);
    assert_eq!(session.chat_log(WeekId::new(1)).unwrap().len(), log_len);
}

#[test]
fn prompt_index_never_decreases_across_turns() {
    let mut session = build_session();
    let mut last_index = 0;

    for _ in 0..5 {
        session.submit_answer("idk");
        let index = session
            .week(WeekId::new(1))
            .unwrap()
            .progress()
            .current_prompt_index();
        assert!(index >= last_index);
        last_index = index;
    }
}

#[test]
fn answers_record_one_entry_per_turn_in_prompt_order() {
    let mut session = build_session();

    session.submit_answer("first try, not much detail").unwrap();
    session.submit_answer("second try, still thin").unwrap();

    let week = session.week(WeekId::new(1)).unwrap();
    let answers = week.progress().answers();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].prompt_id, week.quiz_prompts()[0].id().clone());
    assert_eq!(answers[1].prompt_id, week.quiz_prompts()[1].id().clone());
    assert_eq!(answers[0].answer, "first try, not much detail");
}

#[test]
fn switching_weeks_keeps_quiz_states_independent() {
    let mut session = build_session();
    session.submit_answer(&strong_supply_answer()).unwrap();

    session.select_week(WeekId::new(2));
    let elastic = format!(
        "{:<60}",
        "elasticity measures how responsive quantity is to price"
    );
    let turn = session.submit_answer(&elastic).unwrap();
    assert_eq!(turn.answer.understanding, UnderstandingLevel::Strong);

    assert_eq!(
        session
            .week(WeekId::new(1))
            .unwrap()
            .progress()
            .current_prompt_index(),
        1
    );
    assert_eq!(
        session
            .week(WeekId::new(2))
            .unwrap()
            .progress()
            .current_prompt_index(),
        1
    );
    assert_eq!(
        session
            .week(WeekId::new(3))
            .unwrap()
            .progress()
            .quiz_status(),
        QuizStatus::NotStarted
    );
}

#[test]
fn unknown_week_navigation_falls_back_to_first() {
    let mut session = build_session();
    session.select_week(WeekId::new(3));

    let selected = session.select_week(WeekId::new(42));
    assert_eq!(selected, WeekId::new(1));
    assert_eq!(session.current_week().unwrap().id(), WeekId::new(1));
}

#[test]
fn instructor_actions_mutate_only_their_targets() {
    let mut session = build_session();

    let added = session
        .toggle_suggestion(WeekId::new(1), &SuggestionId::new("s1-1"))
        .unwrap();
    assert!(added);
    let removed = session
        .toggle_suggestion(WeekId::new(1), &SuggestionId::new("s1-1"))
        .unwrap();
    assert!(!removed);

    let slides = session
        .attach_slides(WeekId::new(3), "week03-market-structures.pdf")
        .unwrap();
    assert_eq!(slides.filename, "week03-market-structures.pdf");
    assert!(session.week(WeekId::new(3)).unwrap().recording().is_none());

    // Quiz state is untouched by instructor-side edits.
    assert_eq!(
        session
            .week(WeekId::new(3))
            .unwrap()
            .progress()
            .quiz_status(),
        QuizStatus::NotStarted
    );
}
