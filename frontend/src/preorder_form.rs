use web_sys::HtmlInputElement;
use yew::prelude::*;
use shared::models::TRIAL_PRICE;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct EmailInputProps {
    pub value: AttrValue,
    pub error: Option<AttrValue>,
    pub on_change: Callback<String>,
}

/// Email field with its inline validation message. Shared by the pre-order
/// section and the quiz recommendation screen so both edit the same address.
/// Plain text input: emptiness is the only thing checked, and not by the browser.
#[function_component(EmailInput)]
pub fn email_input(props: &EmailInputProps) -> Html {
    let oninput = props.on_change.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="flex-1 flex flex-col">
            <input
                type="text"
                inputmode="email"
                autocomplete="email"
                placeholder="Your email"
                class={input_class(props.error.is_some())}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <p class={TEXT_ERROR} role="alert">{error.clone()}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub email: AttrValue,
    pub error: Option<AttrValue>,
    pub success: bool,
    pub pending: bool,
    pub reference: Option<AttrValue>,
    pub on_email: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(PreorderSection)]
pub fn preorder_section(props: &Props) -> Html {
    let onsubmit = props.on_submit.reform(|e: SubmitEvent| {
        e.prevent_default();
    });

    html! {
        <section id="preorder" class={SECTION}>
            <h3 class={HEADING_LG}>{"Pre-order & Early Access"}</h3>
            <p class={combine_classes(TEXT_MUTED, "mt-2")}>
                {"Become a founding customer — limited trial kits with special pricing and free practitioner consults."}
            </p>

            if props.success {
                <div class={ALERT_SUCCESS}>
                    {"Thanks — we’ll email you the next steps shortly."}
                    if let Some(reference) = &props.reference {
                        <span class="block text-sm mt-1">{format!("Reference: {}", reference)}</span>
                    }
                </div>
            } else {
                <form {onsubmit} class="mt-4 flex flex-col sm:flex-row gap-3 items-start">
                    <EmailInput
                        value={props.email.clone()}
                        error={props.error.clone()}
                        on_change={props.on_email.clone()}
                    />
                    <button type="submit" class={button(ButtonKind::Accent, true)}>
                        {if props.pending { "Reserving...".to_string() } else { format!("Pre-order for {}", TRIAL_PRICE) }}
                    </button>
                </form>
            }
        </section>
    }
}
