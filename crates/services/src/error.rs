//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::{QuizError, WeekError};

/// Errors emitted while building the seeded course catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Week(#[from] WeekError),
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
    #[error("invalid seed date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Errors emitted by `CourseSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session needs at least one week")]
    NoWeeks,
}
