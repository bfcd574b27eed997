use thiserror::Error;

use crate::model::{ProgressError, QuizError, WeekError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Week(#[from] WeekError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
