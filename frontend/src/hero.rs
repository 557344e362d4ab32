use yew::prelude::*;
use crate::{config::CONFIG, styles::*};

const TRUST_BADGES: [&str; 2] = ["3rd-party lab tests", "Practitioner-backed"];

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_take_quiz: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &Props) -> Html {
    let open_quiz = props.on_take_quiz.reform(|_: MouseEvent| ());

    html! {
        <section class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center py-12">
            <div>
                <h2 class={HEADING_XL}>{"Nature's Healing. Science's Assurance."}</h2>
                <p class={combine_classes(TEXT_MUTED, "mt-4")}>
                    {"Personalized Ayurvedic kits — clinically tested, ethically sourced, and built for modern life. \
                    Start with a simple 7-day ritual and feel the difference."}
                </p>

                <div class="mt-6 flex gap-4">
                    <a href="#preorder" class={combine_classes(&button(ButtonKind::Accent, true), "font-semibold")}>
                        {"Pre-order Kit"}
                    </a>
                    <button onclick={open_quiz} class={button(ButtonKind::Outline, true)}>
                        {"Take the wellness quiz"}
                    </button>
                </div>

                <div class={combine_classes(TEXT_SM_MUTED, "mt-6 flex gap-4 items-center")}>
                    {for TRUST_BADGES.iter().map(|badge| html! {
                        <div class="flex items-center gap-2">
                            <span class={BADGE}>{"✔"}</span>
                            {*badge}
                        </div>
                    })}
                </div>
            </div>
            <div class={PANEL}>
                <img src={CONFIG.hero_image_url} alt="ayurveda" class="rounded-lg w-full h-72 object-cover" />
            </div>
        </section>
    }
}
