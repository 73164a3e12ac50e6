//! User-facing text in both quiz mediums.

use crate::model::Language;

/// Fixed strings shown by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phrase {
    AppTitle,
    SwitchLanguage,
    SelectSubject,
    SelectChapter,
    ChooseSubject,
    ChooseChapter,
    QuestionCount,
    QuestionStyle,
    QuestionStyleHint,
    StartQuiz,
    GeneratingQuiz,
    AnalyzingResults,
    Question,
    Next,
    Submit,
    YourAnswer,
    CorrectAnswer,
    NotAnswered,
    AiSolution,
    OverallFeedback,
    Restart,
    SelectOptionFirst,
    ConfigurationError,
    AnalysisUnavailable,
    EmptyQuiz,
    InvalidSetup,
    Dismiss,
}

#[must_use]
pub fn phrase(language: Language, phrase: Phrase) -> &'static str {
    match language {
        Language::English => english(phrase),
        Language::Hindi => hindi(phrase),
    }
}

fn english(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::AppTitle => "VIPQuizs",
        Phrase::SwitchLanguage => "Switch to Hindi Medium",
        Phrase::SelectSubject => "Select Subject",
        Phrase::SelectChapter => "Select Chapter",
        Phrase::ChooseSubject => "-- Choose Subject --",
        Phrase::ChooseChapter => "-- Choose Chapter --",
        Phrase::QuestionCount => "Questions",
        Phrase::QuestionStyle => "Question Style (Optional)",
        Phrase::QuestionStyleHint => "e.g. assertion-reason, numerical, NCERT line based",
        Phrase::StartQuiz => "Start Quiz",
        Phrase::GeneratingQuiz => "Generating Your Quiz...",
        Phrase::AnalyzingResults => "Analyzing Results...",
        Phrase::Question => "Question",
        Phrase::Next => "Next",
        Phrase::Submit => "Submit",
        Phrase::YourAnswer => "Your Answer",
        Phrase::CorrectAnswer => "Correct Answer",
        Phrase::NotAnswered => "Not Answered",
        Phrase::AiSolution => "AI Solution",
        Phrase::OverallFeedback => "AI Feedback",
        Phrase::Restart => "Take Another Quiz",
        Phrase::SelectOptionFirst => "Please select an option before proceeding.",
        Phrase::ConfigurationError => {
            "Configuration Error: the quiz backend URL is not configured. Set QUIZ_BACKEND_URL and restart."
        }
        Phrase::AnalysisUnavailable => {
            "AI feedback is unavailable right now. Your score was calculated locally."
        }
        Phrase::EmptyQuiz => {
            "AI failed to generate questions. Please try a different prompt or chapter."
        }
        Phrase::InvalidSetup => "Please choose a subject, a chapter and at least one question.",
        Phrase::Dismiss => "OK",
    }
}

fn hindi(phrase: Phrase) -> &'static str {
    match phrase {
        Phrase::AppTitle => "वीआईपीक्विज़",
        Phrase::SwitchLanguage => "Switch to English Medium",
        Phrase::SelectSubject => "विषय चुनें",
        Phrase::SelectChapter => "अध्याय चुनें",
        Phrase::ChooseSubject => "-- विषय चुनें --",
        Phrase::ChooseChapter => "-- अध्याय चुनें --",
        Phrase::QuestionCount => "प्रश्न",
        Phrase::QuestionStyle => "प्रश्न शैली (वैकल्पिक)",
        Phrase::QuestionStyleHint => "जैसे अभिकथन-कारण, संख्यात्मक, NCERT आधारित",
        Phrase::StartQuiz => "क्विज़ शुरू करें",
        Phrase::GeneratingQuiz => "आपका क्विज़ बन रहा है...",
        Phrase::AnalyzingResults => "परिणामों का विश्लेषण किया जा रहा है...",
        Phrase::Question => "प्रश्न",
        Phrase::Next => "अगला",
        Phrase::Submit => "जमा करें",
        Phrase::YourAnswer => "आपका उत्तर",
        Phrase::CorrectAnswer => "सही उत्तर",
        Phrase::NotAnswered => "उत्तर नहीं दिया",
        Phrase::AiSolution => "AI समाधान",
        Phrase::OverallFeedback => "AI प्रतिक्रिया",
        Phrase::Restart => "एक और क्विज़ लें",
        Phrase::SelectOptionFirst => "कृपया आगे बढ़ने से पहले एक विकल्प चुनें।",
        Phrase::ConfigurationError => {
            "कॉन्फ़िगरेशन त्रुटि: क्विज़ बैकएंड URL सेट नहीं है। QUIZ_BACKEND_URL सेट करें और पुनः आरंभ करें।"
        }
        Phrase::AnalysisUnavailable => {
            "AI प्रतिक्रिया अभी उपलब्ध नहीं है। आपका स्कोर स्थानीय रूप से गणना किया गया है।"
        }
        Phrase::EmptyQuiz => {
            "AI प्रश्न उत्पन्न करने में विफल रहा। कृपया कोई अन्य शैली या अध्याय आज़माएँ।"
        }
        Phrase::InvalidSetup => "कृपया विषय, अध्याय और कम से कम एक प्रश्न चुनें।",
        Phrase::Dismiss => "ठीक है",
    }
}

/// "Question 2 / 10".
#[must_use]
pub fn question_counter(language: Language, number: usize, total: usize) -> String {
    format!("{} {number} / {total}", phrase(language, Phrase::Question))
}

/// "You answered 7 out of 10 questions correctly."
#[must_use]
pub fn score_summary(language: Language, score: u32, total: u32) -> String {
    match language {
        Language::English => {
            format!("You answered {score} out of {total} questions correctly.")
        }
        Language::Hindi => format!("आपने {total} में से {score} प्रश्न सही किए।"),
    }
}

/// Alert text for a failed quiz generation.
#[must_use]
pub fn generation_failed(language: Language, detail: &str) -> String {
    match language {
        Language::English => format!(
            "Failed to generate quiz: {detail}. Please ensure the backend server is running."
        ),
        Language::Hindi => format!(
            "क्विज़ उत्पन्न करने में विफल: {detail}। कृपया सुनिश्चित करें कि बैकएंड सर्वर चल रहा है।"
        ),
    }
}
