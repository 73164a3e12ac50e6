use thiserror::Error;

use crate::model::{ConfigError, QuizError, QuizResultError, UnknownLanguage, UnknownSubject};

/// Any validation failure raised by the domain model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error(transparent)]
    Language(#[from] UnknownLanguage),
    #[error(transparent)]
    Subject(#[from] UnknownSubject),
}
