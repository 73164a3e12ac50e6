use std::sync::Arc;

use dioxus::prelude::ReadableExt;

use quiz_core::model::{Language, OptionIndex};
use quiz_core::time::fixed_clock;
use services::QuizSession;
use storage::repository::Storage;

use super::test_harness::{CannedBackend, ViewHarness, render_screen, setup_view_harness};
use crate::vm::{QuizEvent, QuizVm, ScreenBody};

fn harness_with_feedback(feedback: Option<&str>) -> ViewHarness {
    setup_view_harness(
        Storage::in_memory(),
        Arc::new(CannedBackend {
            feedback: feedback.map(str::to_string),
        }),
    )
}

fn choose(harness: &mut ViewHarness, text: &str) {
    let vm = harness.handles.vm();
    let position = harness.dom.in_runtime(|| {
        vm.read()
            .session()
            .current_question()
            .and_then(|question| question.options().iter().position(|option| option == text))
            .expect("option present")
    });
    harness.send(QuizEvent::SelectOption(OptionIndex::new(position)));
}

async fn start_quiz(harness: &mut ViewHarness, limit: &str) {
    harness.rebuild();
    harness.settle().await;
    harness.send(QuizEvent::SubjectChanged("physics".into()));
    harness.send(QuizEvent::ChapterChanged("Optics".into()));
    harness.send(QuizEvent::LimitChanged(limit.into()));
    harness.send(QuizEvent::Start);
    harness.settle().await;
}

#[tokio::test(flavor = "current_thread")]
async fn setup_screen_renders_in_english_by_default() {
    let mut harness = harness_with_feedback(None);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("VIPQuizs"), "missing title in {html}");
    assert!(html.contains("Select Subject"), "missing subject label in {html}");
    assert!(html.contains("-- Choose Subject --"), "missing placeholder in {html}");
    assert!(html.contains("Switch to Hindi Medium"), "missing toggle in {html}");
    assert!(html.contains("Start Quiz"), "missing start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stored_hindi_preference_is_applied_on_load() {
    let storage = Storage::in_memory();
    storage
        .preferences
        .set(Language::PREFERENCE_KEY, "hindi")
        .await
        .expect("seed preference");
    let mut harness = setup_view_harness(storage, Arc::new(CannedBackend { feedback: None }));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("विषय चुनें"), "missing hindi label in {html}");
    assert!(html.contains("Switch to English Medium"), "missing toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_language_persists_the_preference() {
    let mut harness = harness_with_feedback(None);
    harness.rebuild();
    harness.settle().await;
    harness.send(QuizEvent::ToggleLanguage);
    harness.settle().await;

    let stored = harness
        .storage
        .preferences
        .get(Language::PREFERENCE_KEY)
        .await
        .expect("read preference");
    assert_eq!(stored.as_deref(), Some("hindi"));
    assert!(harness.render().contains("क्विज़ शुरू करें"));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_runs_from_question_to_remote_results() {
    let mut harness = harness_with_feedback(Some("**Great** work on optics."));
    start_quiz(&mut harness, "2").await;

    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing counter in {html}");
    assert!(html.contains("Optics #1"), "missing question in {html}");
    assert!(html.contains("Physics"), "missing quiz title in {html}");

    choose(&mut harness, "right");
    harness.send(QuizEvent::Advance);
    assert!(harness.render().contains("Question 2 / 2"));
    assert!(harness.render().contains("Submit"));

    choose(&mut harness, "wrong");
    harness.send(QuizEvent::Advance);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("You answered 1 out of 2 questions correctly."));
    assert!(html.contains("<strong>Great</strong>"), "missing feedback in {html}");
    assert!(html.contains("AI Solution"), "missing solution in {html}");
    assert!(html.contains("Solution 2"), "missing solution text in {html}");
    assert!(!html.contains("Solution 1"), "correct item shows a solution in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_analysis_shows_local_score() {
    let mut harness = harness_with_feedback(None);
    start_quiz(&mut harness, "1").await;
    choose(&mut harness, "right");
    harness.send(QuizEvent::Advance);
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("calculated locally"), "missing notice in {html}");
    assert!(!html.contains("AI Feedback"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn advancing_without_selection_raises_alert() {
    let mut harness = harness_with_feedback(None);
    start_quiz(&mut harness, "1").await;
    harness.send(QuizEvent::Advance);

    let html = harness.render();
    assert!(
        html.contains("Please select an option before proceeding."),
        "missing alert in {html}"
    );
    assert!(harness.screen().alert.is_some());

    harness.send(QuizEvent::DismissAlert);
    assert!(harness.screen().alert.is_none());
    assert!(matches!(harness.screen().body, ScreenBody::Question(_)));
}

#[tokio::test(flavor = "current_thread")]
async fn restart_returns_to_setup_with_empty_style_prompt() {
    let mut harness = harness_with_feedback(Some("Fine."));
    harness.rebuild();
    harness.settle().await;
    harness.send(QuizEvent::StylePromptChanged("assertion-reason".into()));
    harness.send(QuizEvent::SubjectChanged("physics".into()));
    harness.send(QuizEvent::ChapterChanged("Optics".into()));
    harness.send(QuizEvent::LimitChanged("1".into()));
    harness.send(QuizEvent::Start);
    harness.settle().await;
    choose(&mut harness, "right");
    harness.send(QuizEvent::Advance);
    harness.settle().await;

    harness.send(QuizEvent::Restart);
    let ScreenBody::Setup(setup) = harness.screen().body else {
        panic!("expected setup screen");
    };
    assert_eq!(setup.style_prompt, "");
    assert!(!harness.render().contains("assertion-reason"));
}

#[test]
fn loader_overlay_renders_while_generating() {
    let mut vm = QuizVm::new(QuizSession::new(fixed_clock(), Language::English));
    vm.dispatch(QuizEvent::SubjectChanged("chemistry".into()));
    vm.dispatch(QuizEvent::ChapterChanged("Equilibrium".into()));
    vm.dispatch(QuizEvent::Start);

    let html = render_screen(vm.screen());
    assert!(html.contains("Generating Your Quiz..."), "missing loader in {html}");
    assert!(html.contains("disabled"), "controls not disabled in {html}");
}

#[test]
fn invalid_setup_alert_renders_dismiss_button() {
    let mut vm = QuizVm::new(QuizSession::new(fixed_clock(), Language::Hindi));
    vm.dispatch(QuizEvent::Start);

    let html = render_screen(vm.screen());
    assert!(html.contains("ठीक है"), "missing dismiss in {html}");
    assert!(html.contains("alertdialog"), "missing alert in {html}");
}
