use quiz_core::model::Language;

use crate::backend::GenerateQuizRequest;
use crate::error::SetupError;

/// Question count preselected on the setup screen.
pub const DEFAULT_QUESTION_LIMIT: u32 = 10;

/// Upper bound accepted for a single quiz.
pub const MAX_QUESTION_LIMIT: u32 = 50;

/// Validated setup form: what to ask the backend for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetup {
    subject: String,
    chapter: String,
    limit: u32,
    language: Language,
    style_prompt: String,
}

impl QuizSetup {
    /// Validate the setup form.
    ///
    /// `subject` is the display name used as the quiz title, `chapter` the
    /// English chapter value the backend expects. A blank style prompt is sent
    /// as an empty string.
    ///
    /// # Errors
    ///
    /// Returns `SetupError` if subject or chapter are blank, or `limit` is
    /// outside `1..=MAX_QUESTION_LIMIT`.
    pub fn new(
        subject: impl Into<String>,
        chapter: impl Into<String>,
        limit: u32,
        language: Language,
        style_prompt: Option<String>,
    ) -> Result<Self, SetupError> {
        let subject = subject.into().trim().to_string();
        let chapter = chapter.into().trim().to_string();
        if subject.is_empty() {
            return Err(SetupError::MissingSubject);
        }
        if chapter.is_empty() {
            return Err(SetupError::MissingChapter);
        }
        if limit == 0 || limit > MAX_QUESTION_LIMIT {
            return Err(SetupError::InvalidLimit {
                requested: limit,
                max: MAX_QUESTION_LIMIT,
            });
        }
        let style_prompt = style_prompt
            .map(|prompt| prompt.trim().to_string())
            .unwrap_or_default();

        Ok(Self {
            subject,
            chapter,
            limit,
            language,
            style_prompt,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn chapter(&self) -> &str {
        &self.chapter
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn style_prompt(&self) -> &str {
        &self.style_prompt
    }

    pub(crate) fn to_request(&self) -> GenerateQuizRequest {
        GenerateQuizRequest {
            subject: self.subject.clone(),
            chapter: self.chapter.clone(),
            limit: self.limit,
            language: self.language,
            style_prompt: self.style_prompt.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_inputs_and_defaults_style_prompt() {
        let setup = QuizSetup::new(" Physics ", "Gravitation ", 5, Language::Hindi, None).unwrap();
        assert_eq!(setup.subject(), "Physics");
        assert_eq!(setup.chapter(), "Gravitation");
        assert_eq!(setup.style_prompt(), "");

        let request = setup.to_request();
        assert_eq!(request.limit, 5);
        assert_eq!(request.language, Language::Hindi);
    }

    #[test]
    fn rejects_blank_subject_and_chapter() {
        assert_eq!(
            QuizSetup::new("  ", "Gravitation", 5, Language::English, None),
            Err(SetupError::MissingSubject)
        );
        assert_eq!(
            QuizSetup::new("Physics", "", 5, Language::English, None),
            Err(SetupError::MissingChapter)
        );
    }

    #[test]
    fn rejects_limits_out_of_range() {
        assert!(matches!(
            QuizSetup::new("Physics", "Gravitation", 0, Language::English, None),
            Err(SetupError::InvalidLimit { requested: 0, .. })
        ));
        assert!(
            QuizSetup::new("Physics", "Gravitation", MAX_QUESTION_LIMIT + 1, Language::English, None)
                .is_err()
        );
        assert!(
            QuizSetup::new("Physics", "Gravitation", MAX_QUESTION_LIMIT, Language::English, None)
                .is_ok()
        );
    }
}
