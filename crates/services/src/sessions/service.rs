use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{
    AnswerRecord, Language, OptionIndex, Question, Quiz, QuizResult, SessionId,
};

use super::progress::SessionProgress;
use crate::Clock;
use crate::error::SessionError;

//
// ─── PHASES & TICKETS ──────────────────────────────────────────────────────────
//

/// Lifecycle position of a [`QuizSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    Setup,
    InProgress,
    Submitted,
}

/// Snapshot of the session id an async completion was issued under.
///
/// Completions carrying a ticket from before a restart are rejected with
/// `SessionError::Stale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionTicket(SessionId);

impl SessionTicket {
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.0
    }
}

/// What happened after the current answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The next question is now on screen.
    Next { index: usize },
    /// The last answer was recorded; results must be analyzed under `ticket`.
    Submitted { ticket: SessionTicket },
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
struct ActiveQuiz {
    quiz: Quiz,
    current: usize,
    answers: Vec<AnswerRecord>,
    pending: Option<OptionIndex>,
    display_order: Vec<OptionIndex>,
    question_started_at: DateTime<Utc>,
}

impl ActiveQuiz {
    fn question(&self) -> Option<&Question> {
        self.quiz.question(self.current)
    }
}

#[derive(Debug, Clone)]
struct SubmittedQuiz {
    quiz: Quiz,
    answers: Vec<AnswerRecord>,
    result: Option<QuizResult>,
}

#[derive(Debug, Clone)]
enum State {
    Setup,
    InProgress(ActiveQuiz),
    Submitted(SubmittedQuiz),
}

impl State {
    fn phase(&self) -> SessionPhase {
        match self {
            State::Setup => SessionPhase::Setup,
            State::InProgress(_) => SessionPhase::InProgress,
            State::Submitted(_) => SessionPhase::Submitted,
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Client-held quiz lifecycle: `Setup → InProgress → Submitted → Setup`.
///
/// Owns the generated quiz, the answers recorded so far, the pending option
/// selection and the shuffled display order of the current question. Remote
/// calls live in `QuizFlowService`; their completions come back through
/// [`QuizSession::begin`] and [`QuizSession::finish`] with a [`SessionTicket`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: SessionId,
    clock: Clock,
    language: Language,
    state: State,
}

impl QuizSession {
    #[must_use]
    pub fn new(clock: Clock, language: Language) -> Self {
        Self {
            id: SessionId::new_random(),
            clock,
            language,
            state: State::Setup,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn ticket(&self) -> SessionTicket {
        SessionTicket(self.id)
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        match &self.state {
            State::Setup => None,
            State::InProgress(active) => Some(&active.quiz),
            State::Submitted(submitted) => Some(&submitted.quiz),
        }
    }

    /// Answers recorded so far, in question order.
    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        match &self.state {
            State::Setup => &[],
            State::InProgress(active) => &active.answers,
            State::Submitted(submitted) => &submitted.answers,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active().ok().map(|active| active.current)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.active().ok().and_then(ActiveQuiz::question)
    }

    /// Option positions of the current question in the order they are shown.
    #[must_use]
    pub fn display_order(&self) -> &[OptionIndex] {
        self.active()
            .map(|active| active.display_order.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn pending_selection(&self) -> Option<OptionIndex> {
        self.active().ok().and_then(|active| active.pending)
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.active().ok().map(|active| active.question_started_at)
    }

    /// Returns a summary of the current quiz progress.
    #[must_use]
    pub fn progress(&self) -> Option<SessionProgress> {
        let active = self.active().ok()?;
        let total = active.quiz.len();
        Some(SessionProgress {
            current: active.current,
            total,
            answered: active.answers.len(),
            is_last: active.current + 1 == total,
        })
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            State::Submitted(submitted) => submitted.result.as_ref(),
            _ => None,
        }
    }

    /// Move from setup into the quiz and display its first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Stale` if `ticket` predates a restart and
    /// `SessionError::InvalidPhase` unless the session is in setup.
    pub fn begin<R: Rng + ?Sized>(
        &mut self,
        ticket: SessionTicket,
        quiz: Quiz,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        self.check_ticket(ticket)?;
        if self.phase() != SessionPhase::Setup {
            return Err(SessionError::InvalidPhase {
                actual: self.phase(),
            });
        }

        tracing::debug!(session = %self.id, questions = quiz.len(), "quiz started");
        let capacity = quiz.len();
        self.state = State::InProgress(ActiveQuiz {
            quiz,
            current: 0,
            answers: Vec::with_capacity(capacity),
            pending: None,
            display_order: Vec::new(),
            question_started_at: self.clock.now(),
        });
        self.display_question(0, rng)?;
        Ok(())
    }

    /// Shuffle the display order of question `index`, clear the pending
    /// selection and restart its timer.
    ///
    /// The question itself is never modified.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotCurrent` unless `index` is the current
    /// question, or `SessionError::InvalidPhase` outside a running quiz.
    pub fn display_question<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<&[OptionIndex], SessionError> {
        let now = self.clock.now();
        let active = self.active_mut()?;
        if index != active.current {
            return Err(SessionError::NotCurrent {
                requested: index,
                current: active.current,
            });
        }

        let option_count = active.question().map_or(0, |question| question.options().len());
        let mut order: Vec<OptionIndex> = (0..option_count).map(OptionIndex::new).collect();
        order.shuffle(rng);

        active.display_order = order;
        active.pending = None;
        active.question_started_at = now;
        Ok(active.display_order.as_slice())
    }

    /// Set the pending selection for the current question. Re-selecting
    /// overwrites the previous choice; answers are untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OptionOutOfRange` for a position the question
    /// does not have, or `SessionError::InvalidPhase` outside a running quiz.
    pub fn select_option(&mut self, index: OptionIndex) -> Result<(), SessionError> {
        let active = self.active_mut()?;
        let len = active.question().map_or(0, |question| question.options().len());
        if index.value() >= len {
            return Err(SessionError::OptionOutOfRange {
                index: index.value(),
                len,
            });
        }
        active.pending = Some(index);
        Ok(())
    }

    /// Record the pending selection and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` without touching state when nothing
    /// is selected, or `SessionError::InvalidPhase` outside a running quiz.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Advance, SessionError> {
        let selected = self.active()?.pending.ok_or(SessionError::NoSelection)?;
        self.record_current(Some(selected), rng)
    }

    /// Attach the analysis result to a submitted quiz.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Stale` for a ticket from before a restart and
    /// `SessionError::InvalidPhase` unless the quiz has been submitted.
    pub fn finish(
        &mut self,
        ticket: SessionTicket,
        result: QuizResult,
    ) -> Result<&QuizResult, SessionError> {
        self.check_ticket(ticket)?;
        match &mut self.state {
            State::Submitted(submitted) => Ok(&*submitted.result.insert(result)),
            other => Err(SessionError::InvalidPhase {
                actual: other.phase(),
            }),
        }
    }

    /// Drop everything and return to setup under a fresh session id.
    pub fn restart(&mut self) {
        let previous = self.id;
        self.state = State::Setup;
        self.id = SessionId::new_random();
        tracing::debug!(%previous, session = %self.id, "session restarted");
    }

    fn record_current<R: Rng + ?Sized>(
        &mut self,
        selected: Option<OptionIndex>,
        rng: &mut R,
    ) -> Result<Advance, SessionError> {
        let started_at = self.active()?.question_started_at;
        let elapsed_ms = self.clock.millis_since(started_at);

        let active = self.active_mut()?;
        let record = {
            let Some(question) = active.question() else {
                return Err(SessionError::InvalidPhase {
                    actual: SessionPhase::InProgress,
                });
            };
            AnswerRecord::for_question(question, selected, elapsed_ms)
        };
        active.answers.push(record);
        active.current += 1;
        active.pending = None;

        if active.current < active.quiz.len() {
            let index = active.current;
            self.display_question(index, rng)?;
            return Ok(Advance::Next { index });
        }

        if let State::InProgress(active) = std::mem::replace(&mut self.state, State::Setup) {
            self.state = State::Submitted(SubmittedQuiz {
                quiz: active.quiz,
                answers: active.answers,
                result: None,
            });
        }
        tracing::debug!(session = %self.id, "quiz submitted");
        Ok(Advance::Submitted {
            ticket: self.ticket(),
        })
    }

    fn check_ticket(&self, ticket: SessionTicket) -> Result<(), SessionError> {
        if ticket.0 == self.id {
            Ok(())
        } else {
            Err(SessionError::Stale { ticket: ticket.0 })
        }
    }

    fn active(&self) -> Result<&ActiveQuiz, SessionError> {
        match &self.state {
            State::InProgress(active) => Ok(active),
            other => Err(SessionError::InvalidPhase {
                actual: other.phase(),
            }),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveQuiz, SessionError> {
        match &mut self.state {
            State::InProgress(active) => Ok(active),
            other => Err(SessionError::InvalidPhase {
                actual: other.phase(),
            }),
        }
    }
}
