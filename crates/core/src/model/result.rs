use thiserror::Error;

use crate::model::AnswerRecord;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("cannot score an empty answer set")]
    NoAnswers,

    #[error("too many answers for a single quiz: {len}")]
    TooManyAnswers { len: usize },
}

/// Where the score on the results screen came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreSource {
    /// The analysis service scored the quiz and may have written feedback.
    Remote { feedback: Option<String> },
    /// Remote analysis failed; the score was computed locally.
    LocalFallback,
}

/// Final outcome of a completed quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    score: u32,
    total: u32,
    source: ScoreSource,
    answers: Vec<AnswerRecord>,
}

/// Number of records whose selected answer equals the correct answer.
///
/// Unanswered records never count.
#[must_use]
pub fn fallback_score(answers: &[AnswerRecord]) -> u32 {
    answers.iter().fold(0_u32, |score, answer| {
        if answer.is_correct() {
            score.saturating_add(1)
        } else {
            score
        }
    })
}

/// `round(score / total * 100)`, or 0 for an empty quiz.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(score.min(total)) / f64::from(total);
    // ratio is within [0, 1], so the rounded value fits in u32.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (ratio * 100.0).round() as u32;
    rounded
}

impl QuizResult {
    /// Score the answers locally.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError::NoAnswers` for an empty answer set and
    /// `QuizResultError::TooManyAnswers` if the count cannot fit in `u32`.
    pub fn local(answers: Vec<AnswerRecord>) -> Result<Self, QuizResultError> {
        let total = total_for(&answers)?;
        Ok(Self {
            score: fallback_score(&answers),
            total,
            source: ScoreSource::LocalFallback,
            answers,
        })
    }

    /// Accept a score from the analysis service.
    ///
    /// Scores above the number of questions are clamped.
    ///
    /// # Errors
    ///
    /// Same as [`QuizResult::local`].
    pub fn remote(
        score: u32,
        feedback: Option<String>,
        answers: Vec<AnswerRecord>,
    ) -> Result<Self, QuizResultError> {
        let total = total_for(&answers)?;
        let feedback = feedback
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());
        Ok(Self {
            score: score.min(total),
            total,
            source: ScoreSource::Remote { feedback },
            answers,
        })
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total)
    }

    #[must_use]
    pub fn source(&self) -> &ScoreSource {
        &self.source
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        match &self.source {
            ScoreSource::Remote { feedback } => feedback.as_deref(),
            ScoreSource::LocalFallback => None,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, ScoreSource::LocalFallback)
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }
}

fn total_for(answers: &[AnswerRecord]) -> Result<u32, QuizResultError> {
    if answers.is_empty() {
        return Err(QuizResultError::NoAnswers);
    }
    u32::try_from(answers.len()).map_err(|_| QuizResultError::TooManyAnswers { len: answers.len() })
}
