use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{ConfigError, Question, QuestionId};
use quiz_core::time::fixed_clock;
use services::backend::{AnalyzeResultsRequest, GenerateQuizRequest};
use services::{
    AnalysisReport, AppServices, BackendError, LanguageService, QuizBackend, QuizFlowService,
};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::QuizTestHandles;
use crate::views::{QuizScreen, QuizView};
use crate::vm::{QuizEvent, ScreenVm};

/// Answers every generation with `limit` two-option questions whose correct
/// answer is "right".
pub struct CannedBackend {
    pub feedback: Option<String>,
}

#[async_trait]
impl QuizBackend for CannedBackend {
    async fn generate_quiz(
        &self,
        request: &GenerateQuizRequest,
    ) -> Result<Vec<Question>, BackendError> {
        Ok((1..=u64::from(request.limit))
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    format!("{} #{id}", request.chapter),
                    vec!["right".into(), "wrong".into()],
                    "right",
                    format!("Solution {id}"),
                )
            })
            .collect())
    }

    async fn analyze_results(
        &self,
        request: &AnalyzeResultsRequest<'_>,
    ) -> Result<AnalysisReport, BackendError> {
        let Some(feedback) = self.feedback.clone() else {
            return Err(BackendError::NotConfigured(ConfigError::MissingBaseUrl));
        };
        let score = request
            .user_answers
            .iter()
            .filter(|answer| answer.is_correct())
            .count();
        Ok(AnalysisReport {
            score: u32::try_from(score).unwrap_or(u32::MAX),
            overall_feedback: Some(feedback),
        })
    }
}

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        self.services.quiz_flow()
    }

    fn language(&self) -> Arc<LanguageService> {
        self.services.language()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned work finish and re-render.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn send(&mut self, event: QuizEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn screen(&self) -> ScreenVm {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().screen())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(storage: Storage, backend: Arc<dyn QuizBackend>) -> ViewHarness {
    let services = AppServices::from_parts(storage.clone(), fixed_clock(), backend);
    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizViewHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { services }),
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        storage,
        handles,
    }
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: ScreenVm,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    rsx! {
        QuizScreen { screen: props.screen.clone(), on_event: move |_: QuizEvent| {} }
    }
}

/// Render a screen projection without any services behind it.
pub fn render_screen(screen: ScreenVm) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
