use std::sync::Arc;

use tracing::instrument;

use quiz_core::model::{AnswerRecord, Language, Quiz, QuizResult};

use super::service::{Advance, QuizSession, SessionPhase};
use super::setup::QuizSetup;
use crate::Clock;
use crate::backend::{AnalyzeResultsRequest, QuizBackend};
use crate::error::{BackendError, GenerationError, QuizFlowError, SessionError};

/// Orchestrates a `QuizSession` against the remote backend.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    backend: Arc<dyn QuizBackend>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(clock: Clock, backend: Arc<dyn QuizBackend>) -> Self {
        Self { clock, backend }
    }

    /// A fresh session in setup, sharing this service's clock.
    #[must_use]
    pub fn new_session(&self, language: Language) -> QuizSession {
        QuizSession::new(self.clock.clone(), language)
    }

    /// Ask the backend for a quiz matching `setup`.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Configuration` if no usable backend URL is
    /// configured (no request is sent), and `QuizFlowError::Generation` if the
    /// request fails or yields no questions.
    #[instrument(skip_all, fields(subject = setup.subject(), chapter = setup.chapter(), limit = setup.limit()))]
    pub async fn generate(&self, setup: &QuizSetup) -> Result<Quiz, QuizFlowError> {
        let questions = match self.backend.generate_quiz(&setup.to_request()).await {
            Ok(questions) => questions,
            Err(BackendError::NotConfigured(err)) => {
                return Err(QuizFlowError::Configuration(err));
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz generation failed");
                return Err(GenerationError::Backend(err).into());
            }
        };

        // A question without options can never be answered.
        let received = questions.len();
        let questions: Vec<_> = questions
            .into_iter()
            .filter(|question| !question.options().is_empty())
            .collect();
        if questions.len() < received {
            tracing::warn!(
                dropped = received - questions.len(),
                "discarded questions without options"
            );
        }

        let quiz = Quiz::new(setup.subject(), setup.chapter(), questions)
            .map_err(|_| QuizFlowError::Generation(GenerationError::Empty))?;
        tracing::info!(questions = quiz.len(), "quiz generated");
        Ok(quiz)
    }

    /// Score a finished quiz remotely, falling back to the local scorer on
    /// any failure.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Session` only if `answers` is empty.
    #[instrument(skip_all, fields(questions = quiz.len(), language = %language))]
    pub async fn analyze(
        &self,
        quiz: &Quiz,
        answers: &[AnswerRecord],
        language: Language,
    ) -> Result<QuizResult, QuizFlowError> {
        let request = AnalyzeResultsRequest {
            quiz: quiz.questions(),
            user_answers: answers,
            language,
        };

        let result = match self.backend.analyze_results(&request).await {
            Ok(report) => {
                QuizResult::remote(report.score, report.overall_feedback, answers.to_vec())
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed, scoring locally");
                QuizResult::local(answers.to_vec())
            }
        };
        result.map_err(|err| QuizFlowError::Session(SessionError::from(err)))
    }

    /// Generate a quiz for `setup` and move `session` into it.
    ///
    /// On error the session stays in setup.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError` from generation, or `QuizFlowError::Session`
    /// when the session is not in setup or was restarted meanwhile.
    pub async fn start_quiz<'s>(
        &self,
        session: &'s mut QuizSession,
        setup: &QuizSetup,
    ) -> Result<&'s Quiz, QuizFlowError> {
        if session.phase() != SessionPhase::Setup {
            return Err(SessionError::InvalidPhase {
                actual: session.phase(),
            }
            .into());
        }
        session.set_language(setup.language());
        let ticket = session.ticket();
        let quiz = self.generate(setup).await?;
        session.begin(ticket, quiz, &mut rand::rng())?;
        session.quiz().ok_or_else(|| {
            QuizFlowError::Session(SessionError::InvalidPhase {
                actual: session.phase(),
            })
        })
    }

    /// Record the pending selection; after the last question, analyze the
    /// answers and attach the result.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoSelection` with state unchanged when nothing
    /// is selected.
    pub async fn advance(&self, session: &mut QuizSession) -> Result<Advance, QuizFlowError> {
        let outcome = session.advance(&mut rand::rng())?;
        if let Advance::Submitted { ticket } = outcome {
            let result = match session.quiz() {
                Some(quiz) => self.analyze(quiz, session.answers(), session.language()).await?,
                None => {
                    return Err(SessionError::InvalidPhase {
                        actual: session.phase(),
                    }
                    .into());
                }
            };
            session.finish(ticket, result)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quiz_core::model::{ConfigError, OptionIndex, Question, QuestionId, ScoreSource};
    use quiz_core::time::fixed_clock;
    use std::sync::Mutex;

    use crate::backend::{AnalysisReport, GenerateQuizRequest};

    struct FakeBackend {
        questions: Vec<Question>,
        failure: Option<fn() -> BackendError>,
        analysis: Option<AnalysisReport>,
        requests: Mutex<Vec<GenerateQuizRequest>>,
    }

    impl FakeBackend {
        fn with_questions(questions: Vec<Question>) -> Self {
            Self {
                questions,
                failure: None,
                analysis: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(make: fn() -> BackendError) -> Self {
            Self {
                failure: Some(make),
                ..Self::with_questions(Vec::new())
            }
        }

        fn analysis(mut self, report: AnalysisReport) -> Self {
            self.analysis = Some(report);
            self
        }
    }

    #[async_trait]
    impl QuizBackend for FakeBackend {
        async fn generate_quiz(
            &self,
            request: &GenerateQuizRequest,
        ) -> Result<Vec<Question>, BackendError> {
            self.requests.lock().unwrap().push(request.clone());
            match self.failure {
                Some(make) => Err(make()),
                None => Ok(self.questions.clone()),
            }
        }

        async fn analyze_results(
            &self,
            _request: &AnalyzeResultsRequest<'_>,
        ) -> Result<AnalysisReport, BackendError> {
            self.analysis.clone().ok_or(BackendError::Rejected {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("AI analysis failed.".into()),
            })
        }
    }

    fn questions(len: u64) -> Vec<Question> {
        (1..=len)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("Q{id}"),
                    vec!["right".into(), "wrong".into()],
                    "right",
                    format!("S{id}"),
                )
            })
            .collect()
    }

    fn setup() -> QuizSetup {
        QuizSetup::new("Physics", "Gravitation", 2, Language::English, None).unwrap()
    }

    fn service(backend: FakeBackend) -> QuizFlowService {
        QuizFlowService::new(fixed_clock(), Arc::new(backend))
    }

    /// Selects the option whose text is `text` on the current question.
    fn pick(session: &mut QuizSession, text: &str) {
        let question = session.current_question().unwrap();
        let index = question
            .options()
            .iter()
            .position(|option| option == text)
            .unwrap();
        session.select_option(OptionIndex::new(index)).unwrap();
    }

    #[tokio::test]
    async fn empty_question_set_is_a_generation_error_and_stays_in_setup() {
        let flow = service(FakeBackend::with_questions(vec![]));
        let mut session = flow.new_session(Language::English);

        let err = flow.start_quiz(&mut session, &setup()).await.unwrap_err();
        assert!(matches!(err, QuizFlowError::Generation(GenerationError::Empty)));
        assert_eq!(session.phase(), SessionPhase::Setup);
    }

    #[tokio::test]
    async fn questions_without_options_are_dropped() {
        let mut received = questions(2);
        received.insert(
            0,
            Question::new(QuestionId::new(9), "Q9", vec![], "A", ""),
        );
        let flow = service(FakeBackend::with_questions(received));
        let mut session = flow.new_session(Language::English);

        let quiz = flow.start_quiz(&mut session, &setup()).await.unwrap();
        assert_eq!(quiz.len(), 2);
        assert!(quiz.questions().iter().all(|q| !q.options().is_empty()));
        assert_eq!(session.current_question().unwrap().id(), QuestionId::new(1));
    }

    #[tokio::test]
    async fn only_optionless_questions_is_a_generation_error() {
        let received = vec![Question::new(QuestionId::new(1), "Q1", vec![], "A", "")];
        let flow = service(FakeBackend::with_questions(received));
        let mut session = flow.new_session(Language::English);

        let err = flow.start_quiz(&mut session, &setup()).await.unwrap_err();
        assert!(matches!(err, QuizFlowError::Generation(GenerationError::Empty)));
        assert_eq!(session.phase(), SessionPhase::Setup);
    }

    #[tokio::test]
    async fn unconfigured_backend_is_a_configuration_error() {
        let backend = FakeBackend::failing(|| {
            BackendError::NotConfigured(ConfigError::PlaceholderBaseUrl)
        });
        let flow = service(backend);
        let mut session = flow.new_session(Language::English);

        let err = flow.start_quiz(&mut session, &setup()).await.unwrap_err();
        assert!(matches!(
            err,
            QuizFlowError::Configuration(ConfigError::PlaceholderBaseUrl)
        ));
        assert_eq!(session.phase(), SessionPhase::Setup);
    }

    #[tokio::test]
    async fn backend_rejection_is_a_generation_error() {
        let backend = FakeBackend::failing(|| BackendError::Rejected {
            status: reqwest::StatusCode::BAD_REQUEST,
            message: Some("Missing subject, chapter, or limit".into()),
        });
        let flow = service(backend);
        let mut session = flow.new_session(Language::English);

        let err = flow.start_quiz(&mut session, &setup()).await.unwrap_err();
        assert!(matches!(
            err,
            QuizFlowError::Generation(GenerationError::Backend(BackendError::Rejected { .. }))
        ));
    }

    #[tokio::test]
    async fn start_sends_setup_and_accepts_a_short_quiz() {
        let backend = Arc::new(FakeBackend::with_questions(questions(1)));
        let flow = QuizFlowService::new(fixed_clock(), backend.clone());
        let mut session = flow.new_session(Language::English);
        let setup = QuizSetup::new(
            "Botany",
            "Photosynthesis in Higher Plants",
            5,
            Language::Hindi,
            Some("NCERT line based".into()),
        )
        .unwrap();

        let quiz = flow.start_quiz(&mut session, &setup).await.unwrap();
        assert_eq!(quiz.len(), 1);
        assert_eq!(quiz.subject(), "Botany");
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.language(), Language::Hindi);

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].limit, 5);
        assert_eq!(requests[0].style_prompt, "NCERT line based");
        assert_eq!(requests[0].language, Language::Hindi);
    }

    #[tokio::test]
    async fn failed_analysis_falls_back_to_the_local_score() {
        let flow = service(FakeBackend::with_questions(questions(2)));
        let mut session = flow.new_session(Language::English);
        flow.start_quiz(&mut session, &setup()).await.unwrap();

        pick(&mut session, "right");
        assert_eq!(
            flow.advance(&mut session).await.unwrap(),
            Advance::Next { index: 1 }
        );
        pick(&mut session, "right");
        let outcome = flow.advance(&mut session).await.unwrap();
        assert!(matches!(outcome, Advance::Submitted { .. }));

        let result = session.result().unwrap();
        assert_eq!(result.source(), &ScoreSource::LocalFallback);
        assert_eq!(result.score(), 2);
        assert_eq!(result.percentage(), 100);
    }

    #[tokio::test]
    async fn remote_score_is_clamped_and_keeps_feedback() {
        let backend = FakeBackend::with_questions(questions(2)).analysis(AnalysisReport {
            score: 9,
            overall_feedback: Some("**Great** work".into()),
        });
        let flow = service(backend);
        let mut session = flow.new_session(Language::English);
        flow.start_quiz(&mut session, &setup()).await.unwrap();

        pick(&mut session, "wrong");
        flow.advance(&mut session).await.unwrap();
        pick(&mut session, "right");
        flow.advance(&mut session).await.unwrap();

        let result = session.result().unwrap();
        assert_eq!(result.score(), 2);
        assert_eq!(result.feedback(), Some("**Great** work"));
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn advance_without_selection_reports_no_selection() {
        let flow = service(FakeBackend::with_questions(questions(2)));
        let mut session = flow.new_session(Language::English);
        flow.start_quiz(&mut session, &setup()).await.unwrap();

        let err = flow.advance(&mut session).await.unwrap_err();
        assert!(matches!(err, QuizFlowError::NoSelection));
        assert_eq!(session.current_index(), Some(0));
        assert!(session.answers().is_empty());
    }

    #[tokio::test]
    async fn start_is_rejected_outside_setup() {
        let flow = service(FakeBackend::with_questions(questions(1)));
        let mut session = flow.new_session(Language::English);
        flow.start_quiz(&mut session, &setup()).await.unwrap();

        let err = flow.start_quiz(&mut session, &setup()).await.unwrap_err();
        assert!(matches!(
            err,
            QuizFlowError::Session(SessionError::InvalidPhase {
                actual: SessionPhase::InProgress
            })
        ));
    }
}
