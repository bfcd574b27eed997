#![forbid(unsafe_code)]

//! Session orchestration for the course companion: the tutor's quiz
//! progression, the owning session state, deferred follow-up prompts and
//! the seeded course catalog.

pub mod catalog;
pub mod error;
pub mod follow_up;
pub mod session;
pub mod tutor;

pub use course_core::Clock;

pub use error::{CatalogError, SessionError};
pub use follow_up::{FOLLOW_UP_DELAY, FollowUp, FollowUpTimer};
pub use session::{CourseSession, Theme, ViewMode};
pub use tutor::{TutorService, TutorTurn};
