use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use quiz_core::model::{
    AnswerRecord, BackendConfig, BackendConfigDraft, ConfigError, Language, Question,
};

use crate::error::BackendError;

pub use reqwest::StatusCode;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "QUIZ_BACKEND_URL";

/// Generation and analysis both wait on a language model.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Body of `POST /generate_quiz`. The backend reads `style_prompt` in snake case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateQuizRequest {
    pub subject: String,
    pub chapter: String,
    pub limit: u32,
    pub language: Language,
    pub style_prompt: String,
}

/// Body of `POST /analyze_results`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResultsRequest<'a> {
    pub quiz: &'a [Question],
    pub user_answers: &'a [AnswerRecord],
    pub language: Language,
}

/// Score and feedback returned by `POST /analyze_results`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub score: u32,
    #[serde(default)]
    pub overall_feedback: Option<String>,
}

/// Remote side of the quiz: question generation and answer analysis.
#[async_trait]
pub trait QuizBackend: Send + Sync {
    /// Ask the backend for questions matching `request`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` when the backend is unconfigured, unreachable,
    /// answers with a non-success status, or sends an undecodable body.
    async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<Vec<Question>, BackendError>;

    /// Ask the backend to score a finished quiz.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`QuizBackend::generate_quiz`].
    async fn analyze_results(
        &self,
        request: &AnalyzeResultsRequest<'_>,
    ) -> Result<AnalysisReport, BackendError>;
}

/// `QuizBackend` speaking JSON over HTTP.
#[derive(Clone)]
pub struct HttpQuizBackend {
    client: Client,
    config: Result<BackendConfig, ConfigError>,
}

impl HttpQuizBackend {
    /// Build a backend from `QUIZ_BACKEND_URL`.
    ///
    /// A missing or invalid URL does not fail here; every request reports it
    /// as `BackendError::NotConfigured` instead.
    #[must_use]
    pub fn from_env() -> Self {
        let draft = BackendConfigDraft::new(env::var(BACKEND_URL_ENV).ok());
        Self::new(draft.validate())
    }

    #[must_use]
    pub fn new(config: Result<BackendConfig, ConfigError>) -> Self {
        if let Err(err) = &config {
            tracing::warn!(error = %err, "quiz backend disabled");
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, config }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let config = self.config.as_ref().map_err(|err| err.clone())?;
        let url = config.endpoint(path);
        tracing::debug!(%url, "posting to quiz backend");

        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::Rejected {
                status,
                message: error_message(&text),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl QuizBackend for HttpQuizBackend {
    async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<Vec<Question>, BackendError> {
        let body: GenerateQuizResponse = self.post("generate_quiz", request).await?;
        Ok(body.questions)
    }

    async fn analyze_results(
        &self,
        request: &AnalyzeResultsRequest<'_>,
    ) -> Result<AnalysisReport, BackendError> {
        self.post("analyze_results", request).await
    }
}

#[derive(Debug, Deserialize)]
struct GenerateQuizResponse {
    #[serde(default)]
    questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull `{"error": "..."}` out of a failed response body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty())
}
