mod answer;
mod backend_config;
mod ids;
mod language;
mod question;
mod quiz;
mod result;
mod syllabus;

pub use ids::{QuestionId, SessionId};

pub use answer::AnswerRecord;
pub use backend_config::{BackendConfig, BackendConfigDraft, ConfigError, PLACEHOLDER_MARKER};
pub use language::{Language, UnknownLanguage};
pub use question::{OptionIndex, Question};
pub use quiz::{Quiz, QuizError};
pub use result::{QuizResult, QuizResultError, ScoreSource, fallback_score, percentage};
pub use syllabus::{Chapter, Subject, UnknownSubject};
