use yew::prelude::*;
use shared::models::{Question, QuestionKey, QUESTIONS, RECOMMENDATION, TRIAL_PRICE};
use shared::quiz_flow::QuizView;
use crate::{preorder_form::EmailInput, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub view: QuizView,
    pub email: AttrValue,
    pub error: Option<AttrValue>,
    pub on_answer: Callback<(QuestionKey, String)>,
    pub on_close: Callback<()>,
    pub on_retake: Callback<()>,
    pub on_preorder: Callback<()>,
    pub on_email: Callback<String>,
}

#[function_component(QuizModal)]
pub fn quiz_modal(props: &Props) -> Html {
    let body = match props.view {
        QuizView::Closed => return html! {},
        QuizView::Question(step) => match QUESTIONS.get(step) {
            Some(question) => render_question(question, step, &props.on_answer),
            None => html! {},
        },
        QuizView::Recommendation => render_recommendation(props),
    };

    html! {
        <div id="quiz" class={MODAL_BACKDROP}>
            <div class={MODAL_PANEL}>
                <div class={FLEX_BETWEEN}>
                    <h4 class="font-bold">{"Wellness Quiz"}</h4>
                    <button onclick={props.on_close.reform(|_: MouseEvent| ())} class="text-gray-500">
                        {"Close"}
                    </button>
                </div>
                <div class="mt-4">{body}</div>
            </div>
        </div>
    }
}

fn render_question(question: &'static Question, step: usize, on_answer: &Callback<(QuestionKey, String)>) -> Html {
    html! {
        <div>
            <p class="text-xs text-gray-400 mb-1">{format!("Question {} of {}", step + 1, QUESTIONS.len())}</p>
            <p class="text-sm text-gray-600">{question.prompt}</p>
            <div class="mt-3 flex gap-3">
                {for question.options.iter().map(|option| {
                    let key = question.key;
                    let value = option.value;
                    let onclick = on_answer.reform(move |_: MouseEvent| (key, value.to_string()));
                    html! {
                        <button {onclick} class="border rounded-md px-4 py-2">{option.label}</button>
                    }
                })}
            </div>
        </div>
    }
}

fn render_recommendation(props: &Props) -> Html {
    let [lead, product_name, prompt] = RECOMMENDATION.segments();
    html! {
        <div>
            <h5 class={HEADING_SM}>{RECOMMENDATION.heading}</h5>
            <p class="text-sm text-gray-600 mt-2">
                {lead}<strong>{product_name}</strong>{prompt}
            </p>
            <div class="mt-4">
                <EmailInput
                    value={props.email.clone()}
                    error={props.error.clone()}
                    on_change={props.on_email.clone()}
                />
            </div>
            <div class="mt-4 flex gap-3">
                <button onclick={props.on_preorder.reform(|_: MouseEvent| ())} class={button(ButtonKind::Accent, false)}>
                    {format!("Pre-order {}", TRIAL_PRICE)}
                </button>
                <button onclick={props.on_retake.reform(|_: MouseEvent| ())} class={button(ButtonKind::Outline, false)}>
                    {"Retake"}
                </button>
            </div>
        </div>
    }
}
