use quiz_core::locale::{Phrase, phrase, question_counter, score_summary};
use quiz_core::model::{Language, QuizResult};

use super::markdown_vm::feedback_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub heading: String,
    pub your_answer_label: &'static str,
    pub your_answer: String,
    pub is_correct: bool,
    pub correct_answer_label: &'static str,
    pub correct_answer: String,
    /// Only present for incorrect or unanswered items.
    pub solution: Option<SolutionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionVm {
    pub label: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage_label: String,
    pub summary: String,
    pub feedback_label: &'static str,
    pub feedback_html: Option<String>,
    pub fallback_notice: Option<&'static str>,
    pub items: Vec<ResultItemVm>,
    pub restart_label: &'static str,
}

#[must_use]
pub fn map_results(result: &QuizResult, language: Language) -> ResultsVm {
    let total = result.answers().len();
    let items = result
        .answers()
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let is_correct = answer.is_correct();
            let counter = question_counter(language, index + 1, total);
            ResultItemVm {
                heading: format!("{counter}: {}", answer.question_text()),
                your_answer_label: phrase(language, Phrase::YourAnswer),
                your_answer: answer
                    .selected_answer()
                    .unwrap_or_else(|| phrase(language, Phrase::NotAnswered))
                    .to_string(),
                is_correct,
                correct_answer_label: phrase(language, Phrase::CorrectAnswer),
                correct_answer: answer.correct_answer().to_string(),
                solution: (!is_correct).then(|| SolutionVm {
                    label: phrase(language, Phrase::AiSolution),
                    text: answer.solution().to_string(),
                }),
            }
        })
        .collect();

    ResultsVm {
        percentage_label: format!("{}%", result.percentage()),
        summary: score_summary(language, result.score(), result.total()),
        feedback_label: phrase(language, Phrase::OverallFeedback),
        feedback_html: result.feedback().and_then(feedback_html),
        fallback_notice: result
            .is_fallback()
            .then(|| phrase(language, Phrase::AnalysisUnavailable)),
        items,
        restart_label: phrase(language, Phrase::Restart),
    }
}
