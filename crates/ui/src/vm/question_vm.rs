use quiz_core::locale::{Phrase, phrase, question_counter};
use quiz_core::model::Language;
use services::QuizSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    /// Position in the question's original option list.
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub counter: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub advance_label: &'static str,
    pub is_last: bool,
}

/// Project the current question of a running quiz, options in display order.
#[must_use]
pub fn map_question(session: &QuizSession, language: Language) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let progress = session.progress()?;
    let pending = session.pending_selection();

    let options = session
        .display_order()
        .iter()
        .filter_map(|index| {
            question.option(*index).map(|label| OptionVm {
                index: index.value(),
                label: label.to_string(),
                selected: pending == Some(*index),
            })
        })
        .collect();

    Some(QuestionVm {
        counter: question_counter(language, progress.number(), progress.total),
        text: question.text().to_string(),
        options,
        advance_label: if progress.is_last {
            phrase(language, Phrase::Submit)
        } else {
            phrase(language, Phrase::Next)
        },
        is_last: progress.is_last,
    })
}
