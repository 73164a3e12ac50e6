use quiz_core::locale::{Phrase, phrase};
use quiz_core::model::{Language, Subject};
use services::error::SetupError;
use services::sessions::{DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT};
use services::QuizSetup;

/// Raw state of the setup form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupForm {
    subject: Option<Subject>,
    chapter: Option<&'static str>,
    limit: u32,
    style_prompt: String,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            subject: None,
            chapter: None,
            limit: DEFAULT_QUESTION_LIMIT,
            style_prompt: String::new(),
        }
    }
}

impl SetupForm {
    #[must_use]
    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    #[must_use]
    pub fn chapter(&self) -> Option<&'static str> {
        self.chapter
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn style_prompt(&self) -> &str {
        &self.style_prompt
    }

    /// Choosing another subject clears the chapter.
    pub fn set_subject(&mut self, raw: &str) {
        let subject = raw.parse::<Subject>().ok();
        if subject != self.subject {
            self.chapter = None;
        }
        self.subject = subject;
    }

    /// Only chapters of the chosen subject are accepted.
    pub fn set_chapter(&mut self, raw: &str) {
        self.chapter = self
            .subject
            .and_then(|subject| subject.chapter(raw))
            .map(|chapter| chapter.value());
    }

    /// Non-numeric input keeps the previous count; numbers are clamped.
    pub fn set_limit(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<i64>() {
            let clamped = value.clamp(1, i64::from(MAX_QUESTION_LIMIT));
            self.limit = u32::try_from(clamped).unwrap_or(DEFAULT_QUESTION_LIMIT);
        }
    }

    pub fn set_style_prompt(&mut self, raw: String) {
        self.style_prompt = raw;
    }

    pub fn clear_style_prompt(&mut self) {
        self.style_prompt.clear();
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.subject.is_some() && self.chapter.is_some()
    }

    /// Build the validated setup. Subject and chapter go out under their
    /// English names whatever the medium.
    ///
    /// # Errors
    ///
    /// Returns `SetupError` while subject or chapter are missing.
    pub fn to_setup(&self, language: Language) -> Result<QuizSetup, SetupError> {
        let subject = self.subject.ok_or(SetupError::MissingSubject)?;
        let chapter = self.chapter.ok_or(SetupError::MissingChapter)?;
        let style_prompt = Some(self.style_prompt.clone()).filter(|prompt| !prompt.trim().is_empty());
        QuizSetup::new(
            subject.name(),
            chapter,
            self.limit,
            language,
            style_prompt,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOptionVm {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub toggle_label: &'static str,
    pub subject_label: &'static str,
    pub subject_placeholder: &'static str,
    pub subjects: Vec<SelectOptionVm>,
    pub chapter_label: &'static str,
    pub chapter_placeholder: &'static str,
    pub chapters: Vec<SelectOptionVm>,
    pub chapter_disabled: bool,
    pub limit_label: &'static str,
    pub limit: u32,
    pub max_limit: u32,
    pub style_label: &'static str,
    pub style_hint: &'static str,
    pub style_prompt: String,
    pub start_label: &'static str,
    pub start_disabled: bool,
    pub controls_disabled: bool,
}

#[must_use]
pub fn map_setup(form: &SetupForm, language: Language, busy: bool) -> SetupVm {
    let subjects = Subject::ALL
        .iter()
        .map(|subject| SelectOptionVm {
            value: subject.key(),
            label: subject.label(language),
            selected: form.subject == Some(*subject),
        })
        .collect();

    let chapters = form
        .subject
        .map(|subject| {
            subject
                .chapters()
                .iter()
                .map(|chapter| SelectOptionVm {
                    value: chapter.value(),
                    label: chapter.label(language),
                    selected: form.chapter == Some(chapter.value()),
                })
                .collect()
        })
        .unwrap_or_default();

    SetupVm {
        toggle_label: phrase(language, Phrase::SwitchLanguage),
        subject_label: phrase(language, Phrase::SelectSubject),
        subject_placeholder: phrase(language, Phrase::ChooseSubject),
        subjects,
        chapter_label: phrase(language, Phrase::SelectChapter),
        chapter_placeholder: phrase(language, Phrase::ChooseChapter),
        chapters,
        chapter_disabled: busy || form.subject.is_none(),
        limit_label: phrase(language, Phrase::QuestionCount),
        limit: form.limit,
        max_limit: MAX_QUESTION_LIMIT,
        style_label: phrase(language, Phrase::QuestionStyle),
        style_hint: phrase(language, Phrase::QuestionStyleHint),
        style_prompt: form.style_prompt.clone(),
        start_label: phrase(language, Phrase::StartQuiz),
        start_disabled: busy || !form.can_start(),
        controls_disabled: busy,
    }
}
