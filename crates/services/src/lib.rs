#![forbid(unsafe_code)]

pub mod app_services;
pub mod backend;
pub mod error;
pub mod language_service;
pub mod sessions;

pub use quiz_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use backend::{AnalysisReport, HttpQuizBackend, QuizBackend};
pub use error::{
    AppServicesError, BackendError, GenerationError, LanguageServiceError, QuizFlowError,
    SessionError, SetupError,
};
pub use language_service::LanguageService;
pub use sessions::{
    Advance, QuizFlowService, QuizSession, QuizSetup, SessionPhase, SessionProgress,
    SessionTicket,
};
