use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::{use_toast, PageHeader, ToastMsg};
use crate::config::CONFIG;
use crate::hooks::use_route_guard;
use crate::models::{AiExchange, PeerAnswer};

#[derive(Clone, Copy, PartialEq)]
enum DeskTab {
    AiTutor,
    PeerAnswers,
}

#[function_component(HelpDesk)]
pub fn help_desk() -> Html {
    use_route_guard();

    let toast = use_toast();
    let tab = use_state(|| DeskTab::AiTutor);
    let exchanges = use_state(Vec::<AiExchange>::new);
    let answers = use_state(PeerAnswer::seed);
    let thinking = use_state(|| false);
    let question_ref = use_node_ref();

    // Ask the simulated AI tutor: delay, then append the canned exchange.
    let on_ask = {
        let exchanges = exchanges.clone();
        let thinking = thinking.clone();
        let question_ref = question_ref.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            let textarea = match question_ref.cast::<HtmlTextAreaElement>() {
                Some(textarea) => textarea,
                None => return,
            };
            let question = textarea.value();
            if question.trim().is_empty() {
                toast.emit(ToastMsg::new(
                    "Empty question",
                    "Type your homework question first.",
                ));
                return;
            }

            thinking.set(true);
            log::info!("💬 Question asked: {}", question);

            let exchanges = exchanges.clone();
            let thinking = thinking.clone();
            let toast = toast.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(CONFIG.answer_delay_ms).await;

                let mut next = (*exchanges).clone();
                next.push(AiExchange::respond(question.trim()));
                exchanges.set(next);
                thinking.set(false);
                textarea.set_value("");

                toast.emit(ToastMsg::new(
                    "Answer ready! 🤖",
                    format!("+{} XP for staying curious", CONFIG.xp_config.ask_question),
                ));
            });
        })
    };

    let on_helpful = {
        let answers = answers.clone();
        let toast = toast.clone();
        Callback::from(move |id: u32| {
            let mut next = (*answers).clone();
            PeerAnswer::mark_helpful(&mut next, id);
            answers.set(next);
            toast.emit(ToastMsg::new(
                "Thanks for the feedback! 👍",
                "Helpful answers rise to the top.",
            ));
        })
    };

    let select_tab = |target: DeskTab| {
        let tab = tab.clone();
        Callback::from(move |_: MouseEvent| tab.set(target))
    };

    let tab_class = |target: DeskTab| {
        if *tab == target {
            "tab active"
        } else {
            "tab"
        }
    };

    html! {
        <div class="page help-desk">
            <PageHeader
                icon="❓"
                title="HelpDesk"
                blurb="Get AI & peer homework answers"
            />

            <div class="tabs glass-card">
                <button class={tab_class(DeskTab::AiTutor)} onclick={select_tab(DeskTab::AiTutor)}>
                    {"AI Tutor"}
                </button>
                <button class={tab_class(DeskTab::PeerAnswers)} onclick={select_tab(DeskTab::PeerAnswers)}>
                    {"Peer Answers"}
                </button>
            </div>

            if *tab == DeskTab::AiTutor {
                <div class="ai-tutor glass-card">
                    <div class="form-group">
                        <label for="question">{"Your Question"}</label>
                        <textarea
                            id="question"
                            placeholder="Paste your homework question here..."
                            ref={question_ref}
                        />
                    </div>

                    <button
                        class="btn-ask gradient-bg"
                        disabled={*thinking}
                        onclick={on_ask}
                    >
                        if *thinking {
                            {"🤔 Thinking..."}
                        } else {
                            {"✨ Ask the AI Tutor"}
                        }
                    </button>

                    <div class="exchanges">
                        { for exchanges.iter().enumerate().map(|(i, exchange)| html! {
                            <div key={i} class="exchange glass-card">
                                <p class="exchange-question">{"Q: "}{&exchange.question}</p>
                                <p class="exchange-answer">{&exchange.answer}</p>
                            </div>
                        })}
                    </div>
                </div>
            } else {
                <div class="peer-answers">
                    { for answers.iter().map(|answer| {
                        let on_helpful = on_helpful.clone();
                        let id = answer.id;
                        html! {
                            <div key={answer.id} class="answer-card glass-card">
                                <p class="answer-question">{&answer.question}</p>
                                <p class="answer-body">{&answer.body}</p>
                                <div class="answer-footer">
                                    <span class="answer-author">{"by "}{&answer.author}</span>
                                    <button
                                        class="btn-helpful glass-card"
                                        onclick={Callback::from(move |_| on_helpful.emit(id))}
                                    >
                                        {format!("👍 Helpful ({})", answer.helpful)}
                                    </button>
                                </div>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}
