#![forbid(unsafe_code)]

//! Domain model and answer evaluator for the course companion.
//!
//! Everything here is synchronous and in-memory: weeks and their quiz
//! prompts, per-week student progress, the chat log, and the pure
//! keyword-overlap evaluator. Orchestration (sessions, deferred follow-up
//! prompts, seed data) lives in the `services` crate.

pub mod error;
pub mod evaluator;
pub mod model;
pub mod time;

pub use error::Error;
pub use evaluator::{Evaluation, evaluate};
pub use time::Clock;
