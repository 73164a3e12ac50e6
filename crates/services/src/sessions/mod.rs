mod progress;
mod service;
mod setup;
mod workflow;

// Public API of the quiz session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::{Advance, QuizSession, SessionPhase, SessionTicket};
pub use setup::{DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT, QuizSetup};
pub use workflow::QuizFlowService;
