use serde::{Deserialize, Serialize};

use crate::model::{OptionIndex, Question, QuestionId};

/// The user's recorded response to one question.
///
/// Serialized in the shape the analysis endpoint expects (`userAnswers[]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    question_id: QuestionId,
    question_text: String,
    selected_answer: Option<String>,
    correct_answer: String,
    #[serde(rename = "timeTaken")]
    time_taken_ms: u64,
    solution: String,
    #[serde(skip)]
    selected_index: Option<OptionIndex>,
}

impl AnswerRecord {
    /// Record the option at `selected` (or no choice at all) for `question`.
    ///
    /// An index outside the question's options is recorded as unanswered.
    #[must_use]
    pub fn for_question(
        question: &Question,
        selected: Option<OptionIndex>,
        time_taken_ms: u64,
    ) -> Self {
        let selected_answer = selected.and_then(|index| question.option(index).map(str::to_owned));
        let selected_index = selected.filter(|_| selected_answer.is_some());
        Self {
            question_id: question.id(),
            question_text: question.text().to_owned(),
            selected_answer,
            correct_answer: question.correct_answer().to_owned(),
            time_taken_ms,
            solution: question.solution().to_owned(),
            selected_index,
        }
    }

    #[must_use]
    pub fn question_id(&self) -> QuestionId {
        self.question_id
    }

    #[must_use]
    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// Position of the chosen option; `None` when unanswered.
    #[must_use]
    pub fn selected_index(&self) -> Option<OptionIndex> {
        self.selected_index
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn time_taken_ms(&self) -> u64 {
        self.time_taken_ms
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// An answer counts as correct when the chosen text equals the correct text.
    /// Unanswered records are never correct.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.selected_answer.as_deref() == Some(self.correct_answer.as_str())
    }
}
