use std::sync::Arc;

use quiz_core::model::{BackendConfig, ConfigError};
use storage::repository::Storage;

use crate::Clock;
use crate::backend::{HttpQuizBackend, QuizBackend};
use crate::error::AppServicesError;
use crate::language_service::LanguageService;
use crate::sessions::QuizFlowService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    quiz_flow: Arc<QuizFlowService>,
    language: Arc<LanguageService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails. An unusable
    /// backend URL is not an error here; quiz generation reports it.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        backend_config: Result<BackendConfig, ConfigError>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let backend: Arc<dyn QuizBackend> = Arc::new(HttpQuizBackend::new(backend_config));
        Ok(Self::from_parts(storage, clock, backend))
    }

    /// Build services around an arbitrary backend and in-memory storage.
    #[must_use]
    pub fn in_memory(clock: Clock, backend: Arc<dyn QuizBackend>) -> Self {
        Self::from_parts(Storage::in_memory(), clock, backend)
    }

    #[must_use]
    pub fn from_parts(storage: Storage, clock: Clock, backend: Arc<dyn QuizBackend>) -> Self {
        let quiz_flow = Arc::new(QuizFlowService::new(clock, backend));
        let language = Arc::new(LanguageService::new(Arc::clone(&storage.preferences)));
        Self {
            quiz_flow,
            language,
        }
    }

    #[must_use]
    pub fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    #[must_use]
    pub fn language(&self) -> Arc<LanguageService> {
        Arc::clone(&self.language)
    }
}
