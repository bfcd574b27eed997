//! Seeded in-memory course content.
//!
//! The mockup runs entirely off this static data set: an introductory
//! economics course with three weeks of materials, analytics and quiz
//! prompts. Nothing here is persisted or fetched.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use url::Url;

use course_core::model::{
    Analytics, ParticipationDetail, PromptId, QuizPrompt, Reading, ReadingId, ReadingKind,
    Recording, ResourceKind, ReviewResource, SlideDeck, SuggestedResource, SuggestionId,
    SuggestionKind, Week, WeekId,
};

use crate::error::CatalogError;

/// Builds the full seeded week list, first week first.
///
/// # Errors
///
/// Returns `CatalogError` if any seed entry fails validation; with the
/// checked-in data set this does not happen.
pub fn seed_weeks() -> Result<Vec<Week>, CatalogError> {
    Ok(vec![week_one()?, week_two()?, week_three()?])
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CatalogError::InvalidDate { year, month, day })
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(ToString::to_string).collect()
}

/// Upload timestamp used for pre-seeded materials: 09:30 on lecture day.
fn lecture_morning(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc() + Duration::minutes(9 * 60 + 30)
}

fn week_one() -> Result<Week, CatalogError> {
    let week_id = WeekId::new(1);
    let date = date(2025, 1, 13)?;
    let morning = lecture_morning(date);

    let prompts = vec![
        QuizPrompt::new(
            PromptId::new("q1-1"),
            "supply and demand",
            week_id,
            keywords(&["supply", "demand", "equilibrium"]),
            vec![
                ReviewResource::new(
                    ResourceKind::Slide,
                    "Supply and demand curves",
                    "Slides 4-11: shifting curves and what moves them",
                    week_id,
                ),
                ReviewResource::new(
                    ResourceKind::Clip,
                    "Lecture clip: the market for coffee",
                    "Eight minutes walking a price change through both curves",
                    week_id,
                ),
            ],
        )?,
        QuizPrompt::new(
            PromptId::new("q1-2"),
            "market equilibrium",
            week_id,
            keywords(&["price", "quantity", "intersect"]),
            vec![ReviewResource::new(
                ResourceKind::Reading,
                "Principles of Economics, ch. 4",
                "Sections 4.3-4.4 on equilibrium and surpluses",
                week_id,
            )],
        )?,
    ];

    Ok(Week::new(week_id, "Supply and Demand", date)?
        .with_recording(Recording {
            filename: "econ101-week01.mp3".to_string(),
            duration: "1:18:02".to_string(),
            uploaded_at: morning,
        })
        .with_slides(SlideDeck {
            filename: "week01-supply-demand.pdf".to_string(),
            page_count: 32,
            uploaded_at: morning,
        })
        .with_readings(vec![Reading {
            id: ReadingId::new("r1-1"),
            title: "Principles of Economics, ch. 4".to_string(),
            url: Url::parse("https://example.edu/econ101/readings/ch4")?,
            kind: ReadingKind::Book,
        }])
        .with_analytics(Analytics {
            total_questions: 14,
            participation_rate: 0.78,
            attendance: 42,
            total_students: 48,
            key_themes: vec![
                "Why curves shift vs. movement along a curve".to_string(),
                "Price ceilings and shortages".to_string(),
            ],
            participation_details: vec![
                ParticipationDetail {
                    student_name: "Priya N.".to_string(),
                    questions_asked: 4,
                    times_spoken: 6,
                },
                ParticipationDetail {
                    student_name: "Marcus T.".to_string(),
                    questions_asked: 3,
                    times_spoken: 3,
                },
                ParticipationDetail {
                    student_name: "Elena R.".to_string(),
                    questions_asked: 2,
                    times_spoken: 5,
                },
            ],
        })
        .with_suggested_resources(vec![
            SuggestedResource {
                id: SuggestionId::new("s1-1"),
                title: "Planet Money: the price of eggs".to_string(),
                description: "Podcast episode tracing a real supply shock".to_string(),
                kind: SuggestionKind::Podcast,
                added_to_plan: false,
            },
            SuggestedResource {
                id: SuggestionId::new("s1-2"),
                title: "Rent control in the Bay Area".to_string(),
                description: "Short case on binding price ceilings".to_string(),
                kind: SuggestionKind::Case,
                added_to_plan: false,
            },
        ])
        .with_student_summary(
            "Markets coordinate buyers and sellers through prices. We built the supply and \
             demand model, practiced shifting each curve, and saw how the equilibrium price \
             clears the market.",
        )
        .with_key_concepts(vec![
            "Demand curve".to_string(),
            "Supply curve".to_string(),
            "Market equilibrium".to_string(),
            "Price signals".to_string(),
        ])
        .with_quiz_prompts(prompts))
}

fn week_two() -> Result<Week, CatalogError> {
    let week_id = WeekId::new(2);
    let date = date(2025, 1, 20)?;
    let morning = lecture_morning(date);

    let prompts = vec![
        QuizPrompt::new(
            PromptId::new("q2-1"),
            "price elasticity of demand",
            week_id,
            keywords(&["elasticity", "responsive", "price", "quantity"]),
            vec![ReviewResource::new(
                ResourceKind::Slide,
                "Elasticity formulas",
                "Slides 6-14: computing and interpreting elasticities",
                week_id,
            )],
        )?,
        QuizPrompt::new(
            PromptId::new("q2-2"),
            "consumer surplus",
            week_id,
            keywords(&["willingness to pay", "surplus", "benefit"]),
            vec![
                ReviewResource::new(
                    ResourceKind::Reading,
                    "Principles of Economics, ch. 7",
                    "Consumer and producer surplus, with worked diagrams",
                    week_id,
                ),
                ReviewResource::new(
                    ResourceKind::Clip,
                    "Lecture clip: auction willingness to pay",
                    "The in-class auction we used to reveal the demand curve",
                    week_id,
                ),
            ],
        )?,
    ];

    Ok(Week::new(week_id, "Elasticity and Consumer Choice", date)?
        .with_recording(Recording {
            filename: "econ101-week02.mp3".to_string(),
            duration: "1:21:40".to_string(),
            uploaded_at: morning,
        })
        .with_slides(SlideDeck {
            filename: "week02-elasticity.pdf".to_string(),
            page_count: 27,
            uploaded_at: morning,
        })
        .with_readings(vec![
            Reading {
                id: ReadingId::new("r2-1"),
                title: "Principles of Economics, ch. 5".to_string(),
                url: Url::parse("https://example.edu/econ101/readings/ch5")?,
                kind: ReadingKind::Book,
            },
            Reading {
                id: ReadingId::new("r2-2"),
                title: "Why gas demand barely moves".to_string(),
                url: Url::parse("https://example.edu/econ101/readings/gas-elasticity")?,
                kind: ReadingKind::Article,
            },
        ])
        .with_analytics(Analytics {
            total_questions: 11,
            participation_rate: 0.71,
            attendance: 40,
            total_students: 48,
            key_themes: vec![
                "Confusion between slope and elasticity".to_string(),
                "Elastic vs. inelastic goods in daily life".to_string(),
            ],
            participation_details: vec![
                ParticipationDetail {
                    student_name: "Priya N.".to_string(),
                    questions_asked: 2,
                    times_spoken: 4,
                },
                ParticipationDetail {
                    student_name: "Jonah W.".to_string(),
                    questions_asked: 3,
                    times_spoken: 3,
                },
            ],
        })
        .with_suggested_resources(vec![SuggestedResource {
            id: SuggestionId::new("s2-1"),
            title: "Uber surge pricing study".to_string(),
            description: "Article with real elasticity estimates from ride data".to_string(),
            kind: SuggestionKind::Article,
            added_to_plan: false,
        }])
        .with_student_summary(
            "Elasticity measures how strongly quantity reacts to price. We computed price \
             elasticity of demand, connected it to revenue, and introduced consumer surplus \
             as the gap between willingness to pay and the market price.",
        )
        .with_key_concepts(vec![
            "Price elasticity of demand".to_string(),
            "Total revenue test".to_string(),
            "Consumer surplus".to_string(),
        ])
        .with_quiz_prompts(prompts))
}

fn week_three() -> Result<Week, CatalogError> {
    let week_id = WeekId::new(3);
    let date = date(2025, 1, 27)?;

    let prompts = vec![
        QuizPrompt::new(
            PromptId::new("q3-1"),
            "perfect competition",
            week_id,
            keywords(&["many firms", "price taker", "identical"]),
            vec![ReviewResource::new(
                ResourceKind::Slide,
                "Market structure overview",
                "Slides 2-9: the competition spectrum",
                week_id,
            )],
        )?,
        QuizPrompt::new(
            PromptId::new("q3-2"),
            "monopoly pricing",
            week_id,
            keywords(&["single seller", "barriers", "market power"]),
            vec![
                ReviewResource::new(
                    ResourceKind::Reading,
                    "Principles of Economics, ch. 15".to_string(),
                    "Monopoly output choice and deadweight loss",
                    week_id,
                ),
                ReviewResource::new(
                    ResourceKind::Clip,
                    "Lecture clip: the only pharmacy in town",
                    "Worked example of a single seller setting price",
                    week_id,
                ),
            ],
        )?,
    ];

    // Most recent week: lecture not uploaded yet, analytics still thin.
    Ok(Week::new(week_id, "Market Structures", date)?
        .with_readings(vec![Reading {
            id: ReadingId::new("r3-1"),
            title: "Principles of Economics, ch. 14".to_string(),
            url: Url::parse("https://example.edu/econ101/readings/ch14")?,
            kind: ReadingKind::Book,
        }])
        .with_analytics(Analytics {
            total_questions: 6,
            participation_rate: 0.65,
            attendance: 38,
            total_students: 48,
            key_themes: vec!["What actually counts as a barrier to entry".to_string()],
            participation_details: vec![ParticipationDetail {
                student_name: "Marcus T.".to_string(),
                questions_asked: 2,
                times_spoken: 2,
            }],
        })
        .with_student_summary(
            "We mapped the spectrum from perfect competition to monopoly and asked what lets \
             a firm hold on to market power.",
        )
        .with_key_concepts(vec![
            "Perfect competition".to_string(),
            "Monopoly".to_string(),
            "Barriers to entry".to_string(),
        ])
        .with_quiz_prompts(prompts))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
