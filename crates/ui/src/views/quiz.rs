use dioxus::prelude::*;

use quiz_core::model::{Language, OptionIndex};

use crate::context::AppContext;
use crate::vm::{
    Effect, OptionVm, QuestionVm, QuizEvent, QuizVm, ResultItemVm, ResultsVm, ScreenBody,
    ScreenVm, SetupVm,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// Stateful quiz page: owns the session and runs remote calls.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = {
        let quiz_flow = ctx.quiz_flow();
        use_signal(move || QuizVm::new(quiz_flow.new_session(Language::default())))
    };

    // Loaded once; a failed read leaves the session in English.
    let _language = {
        let ctx = ctx.clone();
        use_resource(move || {
            let ctx = ctx.clone();
            async move {
                let language = ctx.language().load_or_default().await;
                dispatch(vm, &ctx, QuizEvent::LanguageLoaded(language));
                language
            }
        })
    };

    let on_event = {
        let ctx = ctx.clone();
        use_callback(move |event: QuizEvent| dispatch(vm, &ctx, event))
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(on_event, vm);
            }
        }
    }

    let screen = vm.read().screen();
    rsx! {
        QuizScreen { screen, on_event }
    }
}

fn dispatch(mut vm: Signal<QuizVm>, ctx: &AppContext, event: QuizEvent) {
    let effect = vm.write().dispatch(event);
    run_effect(vm, ctx, effect);
}

fn run_effect(vm: Signal<QuizVm>, ctx: &AppContext, effect: Effect) {
    match effect {
        Effect::None => {}
        Effect::Alert(message) => tracing::info!(%message, "alert shown"),
        Effect::PersistLanguage(language) => {
            let service = ctx.language();
            spawn(async move {
                if let Err(err) = service.save(language).await {
                    tracing::warn!(error = %err, "language preference not saved");
                }
            });
        }
        Effect::Generate { ticket, setup } => {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.quiz_flow().generate(&setup).await;
                dispatch(vm, &ctx, QuizEvent::QuizGenerated { ticket, outcome });
            });
        }
        Effect::Analyze {
            ticket,
            quiz,
            answers,
            language,
        } => {
            let ctx = ctx.clone();
            spawn(async move {
                let outcome = ctx.quiz_flow().analyze(&quiz, &answers, language).await;
                dispatch(vm, &ctx, QuizEvent::AnalysisFinished { ticket, outcome });
            });
        }
    }
}

/// Pure rendering of a `ScreenVm`; every interaction goes out through `on_event`.
#[component]
pub fn QuizScreen(screen: ScreenVm, on_event: EventHandler<QuizEvent>) -> Element {
    let ScreenVm {
        language,
        app_title,
        quiz_title,
        body,
        loader,
        alert,
    } = screen;
    let lang = language.as_str();

    let body = match body {
        ScreenBody::Setup(setup) => rsx! { SetupPanel { setup, on_event } },
        ScreenBody::Question(question) => rsx! { QuestionPanel { question, on_event } },
        ScreenBody::Results(Some(results)) => rsx! { ResultsPanel { results, on_event } },
        ScreenBody::Results(None) => rsx! {},
    };

    rsx! {
        div { class: "quiz-screen", lang: "{lang}",
            header { class: "quiz-header",
                h1 { "{app_title}" }
                if let Some(title) = quiz_title {
                    h2 { class: "quiz-title", "{title}" }
                }
            }
            main { class: "quiz-body", {body} }
            if let Some(message) = loader {
                div { class: "loader-overlay",
                    div { class: "spinner" }
                    p { "{message}" }
                }
            }
            if let Some(alert) = alert {
                div { class: "alert-backdrop",
                    div { class: "alert", role: "alertdialog",
                        p { class: "alert__message", "{alert.message}" }
                        button {
                            class: "btn btn--primary",
                            onclick: move |_| on_event.call(QuizEvent::DismissAlert),
                            "{alert.dismiss_label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SetupPanel(setup: SetupVm, on_event: EventHandler<QuizEvent>) -> Element {
    let SetupVm {
        toggle_label,
        subject_label,
        subject_placeholder,
        subjects,
        chapter_label,
        chapter_placeholder,
        chapters,
        chapter_disabled,
        limit_label,
        limit,
        max_limit,
        style_label,
        style_hint,
        style_prompt,
        start_label,
        start_disabled,
        controls_disabled,
    } = setup;

    rsx! {
        section { class: "setup-panel",
            div { class: "setup-panel__toolbar",
                button {
                    id: "language-toggle",
                    class: "btn btn--ghost",
                    disabled: controls_disabled,
                    onclick: move |_| on_event.call(QuizEvent::ToggleLanguage),
                    "{toggle_label}"
                }
            }
            div { class: "field",
                label { r#for: "subject-select", "{subject_label}" }
                select {
                    id: "subject-select",
                    disabled: controls_disabled,
                    onchange: move |evt: FormEvent| on_event.call(QuizEvent::SubjectChanged(evt.value())),
                    option { value: "", "{subject_placeholder}" }
                    for subject in subjects {
                        option {
                            key: "{subject.value}",
                            value: "{subject.value}",
                            selected: subject.selected,
                            "{subject.label}"
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "chapter-select", "{chapter_label}" }
                select {
                    id: "chapter-select",
                    disabled: chapter_disabled,
                    onchange: move |evt: FormEvent| on_event.call(QuizEvent::ChapterChanged(evt.value())),
                    option { value: "", "{chapter_placeholder}" }
                    for chapter in chapters {
                        option {
                            key: "{chapter.value}",
                            value: "{chapter.value}",
                            selected: chapter.selected,
                            "{chapter.label}"
                        }
                    }
                }
            }
            div { class: "field",
                label { r#for: "limit-input", "{limit_label}" }
                input {
                    id: "limit-input",
                    r#type: "number",
                    min: "1",
                    max: "{max_limit}",
                    value: "{limit}",
                    disabled: controls_disabled,
                    oninput: move |evt: FormEvent| on_event.call(QuizEvent::LimitChanged(evt.value())),
                }
            }
            div { class: "field",
                label { r#for: "style-input", "{style_label}" }
                textarea {
                    id: "style-input",
                    rows: "2",
                    placeholder: "{style_hint}",
                    value: "{style_prompt}",
                    disabled: controls_disabled,
                    oninput: move |evt: FormEvent| on_event.call(QuizEvent::StylePromptChanged(evt.value())),
                }
            }
            button {
                id: "start-quiz",
                class: "btn btn--primary",
                disabled: start_disabled,
                onclick: move |_| on_event.call(QuizEvent::Start),
                "{start_label}"
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_event: EventHandler<QuizEvent>) -> Element {
    let QuestionVm {
        counter,
        text,
        options,
        advance_label,
        is_last,
    } = question;
    let advance_class = if is_last {
        "btn btn--primary btn--submit"
    } else {
        "btn btn--primary"
    };

    rsx! {
        section { class: "question-panel",
            p { class: "question-panel__counter", "{counter}" }
            h3 { class: "question-panel__text", "{text}" }
            div { class: "question-panel__options",
                for choice in options {
                    OptionButton { key: "{choice.index}", choice, on_event }
                }
            }
            button {
                id: "advance",
                class: "{advance_class}",
                onclick: move |_| on_event.call(QuizEvent::Advance),
                "{advance_label}"
            }
        }
    }
}

#[component]
fn OptionButton(choice: OptionVm, on_event: EventHandler<QuizEvent>) -> Element {
    let index = OptionIndex::new(choice.index);
    let class = if choice.selected {
        "option option--selected"
    } else {
        "option"
    };
    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_event.call(QuizEvent::SelectOption(index)),
            "{choice.label}"
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, on_event: EventHandler<QuizEvent>) -> Element {
    let ResultsVm {
        percentage_label,
        summary,
        feedback_label,
        feedback_html,
        fallback_notice,
        items,
        restart_label,
    } = results;

    rsx! {
        section { class: "results-panel",
            div { class: "score-circle",
                span { class: "score-circle__value", "{percentage_label}" }
            }
            p { class: "results-panel__summary", "{summary}" }
            if let Some(html) = feedback_html {
                div { class: "feedback",
                    h3 { "{feedback_label}" }
                    div { class: "feedback__body", dangerous_inner_html: "{html}" }
                }
            }
            if let Some(notice) = fallback_notice {
                p { class: "results-panel__notice", "{notice}" }
            }
            ol { class: "breakdown",
                for (position, item) in items.into_iter().enumerate() {
                    ResultItem { key: "{position}", item }
                }
            }
            button {
                id: "restart",
                class: "btn btn--primary",
                onclick: move |_| on_event.call(QuizEvent::Restart),
                "{restart_label}"
            }
        }
    }
}

#[component]
fn ResultItem(item: ResultItemVm) -> Element {
    let ResultItemVm {
        heading,
        your_answer_label,
        your_answer,
        is_correct,
        correct_answer_label,
        correct_answer,
        solution,
    } = item;
    let class = if is_correct {
        "breakdown__item breakdown__item--correct"
    } else {
        "breakdown__item breakdown__item--incorrect"
    };

    rsx! {
        li { class: "{class}",
            p { class: "breakdown__question", "{heading}" }
            p {
                span { class: "breakdown__label", "{your_answer_label}: " }
                span { "{your_answer}" }
            }
            p {
                span { class: "breakdown__label", "{correct_answer_label}: " }
                span { "{correct_answer}" }
            }
            if let Some(solution) = solution {
                div { class: "breakdown__solution",
                    strong { "{solution.label}: " }
                    span { "{solution.text}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizEvent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
