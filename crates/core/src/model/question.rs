use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// Position of an option inside [`Question::options`].
///
/// Options are identified by position so two options with identical text stay
/// distinct choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionIndex(usize);

impl OptionIndex {
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }
}

/// A generated multiple-choice question, as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    question: String,
    #[serde(default)]
    options: Vec<String>,
    correct_answer: String,
    #[serde(default)]
    solution: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
        solution: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
            solution: solution.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: OptionIndex) -> Option<&str> {
        self.options.get(index.value()).map(String::as_str)
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn solution(&self) -> &str {
        &self.solution
    }

    /// First option whose text equals the correct answer, if any.
    #[must_use]
    pub fn correct_index(&self) -> Option<OptionIndex> {
        self.options
            .iter()
            .position(|option| *option == self.correct_answer)
            .map(OptionIndex::new)
    }
}
