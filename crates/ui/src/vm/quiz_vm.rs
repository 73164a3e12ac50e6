use rand::Rng;

use quiz_core::locale::{Phrase, generation_failed, phrase};
use quiz_core::model::{AnswerRecord, Language, OptionIndex, Quiz, QuizResult};
use services::{
    Advance, GenerationError, QuizFlowError, QuizSession, QuizSetup, SessionError, SessionPhase,
    SessionTicket,
};

use super::question_vm::{QuestionVm, map_question};
use super::results_vm::{ResultsVm, map_results};
use super::setup_vm::{SetupForm, SetupVm, map_setup};

/// Everything the user or a finished remote call can tell the quiz screen.
#[derive(Debug)]
pub enum QuizEvent {
    LanguageLoaded(Language),
    SubjectChanged(String),
    ChapterChanged(String),
    LimitChanged(String),
    StylePromptChanged(String),
    ToggleLanguage,
    Start,
    SelectOption(OptionIndex),
    Advance,
    Restart,
    DismissAlert,
    QuizGenerated {
        ticket: SessionTicket,
        outcome: Result<Quiz, QuizFlowError>,
    },
    AnalysisFinished {
        ticket: SessionTicket,
        outcome: Result<QuizResult, QuizFlowError>,
    },
}

impl QuizEvent {
    /// Events a blocking alert swallows until it is dismissed.
    fn is_user_input(&self) -> bool {
        !matches!(
            self,
            QuizEvent::LanguageLoaded(_)
                | QuizEvent::DismissAlert
                | QuizEvent::QuizGenerated { .. }
                | QuizEvent::AnalysisFinished { .. }
        )
    }
}

/// Work the view must perform after a dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Generate {
        ticket: SessionTicket,
        setup: QuizSetup,
    },
    Analyze {
        ticket: SessionTicket,
        quiz: Quiz,
        answers: Vec<AnswerRecord>,
        language: Language,
    },
    PersistLanguage(Language),
    Alert(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertVm {
    pub message: String,
    pub dismiss_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenBody {
    Setup(SetupVm),
    Question(QuestionVm),
    /// `None` while the analysis is still running.
    Results(Option<ResultsVm>),
}

/// Everything needed to render the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenVm {
    pub language: Language,
    pub app_title: &'static str,
    pub quiz_title: Option<String>,
    pub body: ScreenBody,
    pub loader: Option<&'static str>,
    pub alert: Option<AlertVm>,
}

/// Owns the quiz session plus the setup form and turns events into effects.
pub struct QuizVm {
    session: QuizSession,
    form: SetupForm,
    generating: Option<SessionTicket>,
    alert: Option<String>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            form: SetupForm::default(),
            generating: None,
            alert: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.session.language()
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.session.phase() == SessionPhase::Submitted && self.session.result().is_none()
    }

    pub fn dispatch(&mut self, event: QuizEvent) -> Effect {
        self.dispatch_with(event, &mut rand::rng())
    }

    pub fn dispatch_with<R: Rng + ?Sized>(&mut self, event: QuizEvent, rng: &mut R) -> Effect {
        if self.alert.is_some() && event.is_user_input() {
            return Effect::None;
        }

        match event {
            QuizEvent::LanguageLoaded(language) => {
                if self.in_idle_setup() {
                    self.session.set_language(language);
                }
                Effect::None
            }
            QuizEvent::SubjectChanged(raw) => {
                if self.in_idle_setup() {
                    self.form.set_subject(&raw);
                }
                Effect::None
            }
            QuizEvent::ChapterChanged(raw) => {
                if self.in_idle_setup() {
                    self.form.set_chapter(&raw);
                }
                Effect::None
            }
            QuizEvent::LimitChanged(raw) => {
                if self.in_idle_setup() {
                    self.form.set_limit(&raw);
                }
                Effect::None
            }
            QuizEvent::StylePromptChanged(raw) => {
                if self.in_idle_setup() {
                    self.form.set_style_prompt(raw);
                }
                Effect::None
            }
            QuizEvent::ToggleLanguage => {
                if !self.in_idle_setup() {
                    return Effect::None;
                }
                let language = self.session.language().toggled();
                self.session.set_language(language);
                Effect::PersistLanguage(language)
            }
            QuizEvent::Start => self.start(),
            QuizEvent::SelectOption(index) => {
                if let Err(err) = self.session.select_option(index) {
                    tracing::warn!(error = %err, "option selection ignored");
                }
                Effect::None
            }
            QuizEvent::Advance => self.advance(rng),
            QuizEvent::Restart => {
                if self.session.phase() == SessionPhase::Submitted && !self.is_analyzing() {
                    self.session.restart();
                    self.form.clear_style_prompt();
                }
                Effect::None
            }
            QuizEvent::DismissAlert => {
                self.alert = None;
                Effect::None
            }
            QuizEvent::QuizGenerated { ticket, outcome } => {
                self.quiz_generated(ticket, outcome, rng)
            }
            QuizEvent::AnalysisFinished { ticket, outcome } => {
                self.analysis_finished(ticket, outcome)
            }
        }
    }

    /// Pure projection of the current state.
    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        let language = self.language();
        let body = match self.session.phase() {
            SessionPhase::Setup => {
                ScreenBody::Setup(map_setup(&self.form, language, self.is_generating()))
            }
            SessionPhase::InProgress => match map_question(&self.session, language) {
                Some(question) => ScreenBody::Question(question),
                None => ScreenBody::Setup(map_setup(&self.form, language, true)),
            },
            SessionPhase::Submitted => ScreenBody::Results(
                self.session
                    .result()
                    .map(|result| map_results(result, language)),
            ),
        };

        let loader = if self.is_generating() {
            Some(phrase(language, Phrase::GeneratingQuiz))
        } else if self.is_analyzing() {
            Some(phrase(language, Phrase::AnalyzingResults))
        } else {
            None
        };

        ScreenVm {
            language,
            app_title: phrase(language, Phrase::AppTitle),
            quiz_title: self.session.quiz().map(|quiz| quiz.subject().to_string()),
            body,
            loader,
            alert: self.alert.clone().map(|message| AlertVm {
                message,
                dismiss_label: phrase(language, Phrase::Dismiss),
            }),
        }
    }

    fn in_idle_setup(&self) -> bool {
        self.session.phase() == SessionPhase::Setup && !self.is_generating()
    }

    fn start(&mut self) -> Effect {
        if !self.in_idle_setup() {
            return Effect::None;
        }
        let language = self.language();
        match self.form.to_setup(language) {
            Ok(setup) => {
                let ticket = self.session.ticket();
                self.generating = Some(ticket);
                Effect::Generate { ticket, setup }
            }
            Err(err) => {
                tracing::debug!(error = %err, "start rejected");
                self.raise(phrase(language, Phrase::InvalidSetup).to_string())
            }
        }
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Effect {
        match self.session.advance(rng) {
            Ok(Advance::Next { .. }) => Effect::None,
            Ok(Advance::Submitted { ticket }) => match self.session.quiz() {
                Some(quiz) => Effect::Analyze {
                    ticket,
                    quiz: quiz.clone(),
                    answers: self.session.answers().to_vec(),
                    language: self.language(),
                },
                None => Effect::None,
            },
            Err(SessionError::NoSelection) => {
                let message = phrase(self.language(), Phrase::SelectOptionFirst);
                self.raise(message.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "advance ignored");
                Effect::None
            }
        }
    }

    fn quiz_generated<R: Rng + ?Sized>(
        &mut self,
        ticket: SessionTicket,
        outcome: Result<Quiz, QuizFlowError>,
        rng: &mut R,
    ) -> Effect {
        if self.generating != Some(ticket) {
            tracing::debug!("dropping stale quiz generation");
            return Effect::None;
        }
        self.generating = None;

        let language = self.language();
        match outcome {
            Ok(quiz) => {
                if let Err(err) = self.session.begin(ticket, quiz, rng) {
                    tracing::warn!(error = %err, "generated quiz discarded");
                }
                Effect::None
            }
            Err(QuizFlowError::Configuration(_)) => {
                self.raise(phrase(language, Phrase::ConfigurationError).to_string())
            }
            Err(QuizFlowError::Generation(GenerationError::Empty)) => {
                let detail = phrase(language, Phrase::EmptyQuiz);
                self.raise(generation_failed(language, detail))
            }
            Err(QuizFlowError::Generation(GenerationError::Backend(err))) => {
                self.raise(generation_failed(language, &err.detail()))
            }
            Err(err) => self.raise(generation_failed(language, &err.to_string())),
        }
    }

    fn analysis_finished(
        &mut self,
        ticket: SessionTicket,
        outcome: Result<QuizResult, QuizFlowError>,
    ) -> Effect {
        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "analysis failed, scoring locally");
                match QuizResult::local(self.session.answers().to_vec()) {
                    Ok(result) => result,
                    Err(err) => {
                        tracing::warn!(error = %err, "no answers to score");
                        return Effect::None;
                    }
                }
            }
        };

        match self.session.finish(ticket, result) {
            Ok(_) => Effect::None,
            Err(SessionError::Stale { .. }) => {
                tracing::debug!("dropping stale analysis");
                Effect::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "analysis result discarded");
                Effect::None
            }
        }
    }

    fn raise(&mut self, message: String) -> Effect {
        self.alert = Some(message.clone());
        Effect::Alert(message)
    }
}
