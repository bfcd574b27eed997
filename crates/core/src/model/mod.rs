mod chat;
mod ids;
mod progress;
mod quiz;
mod week;

pub use ids::{MessageId, ParseIdError, PromptId, ReadingId, SuggestionId, WeekId};

pub use chat::{ChatLog, ChatMessage, Sender};
pub use progress::{
    MasteryLevel, ProgressError, QuizAnswer, QuizStatus, StudentProgress, UnderstandingLevel,
};
pub use quiz::{QuizError, QuizPrompt, ResourceKind, ReviewResource};
pub use week::{
    Analytics, ParticipationDetail, Reading, ReadingKind, Recording, SlideDeck,
    SuggestedResource, SuggestionKind, Week, WeekError,
};
