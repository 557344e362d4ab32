use yew::prelude::*;
use crate::styles::*;

const STEPS: [&str; 3] = [
    "Take a 2-minute wellness quiz (or upload photos).",
    "Our algorithm + practitioner reviews map a personalized ritual.",
    "Receive a 7-day kit & simple ritual card. Subscribe when ready.",
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how" class={SECTION}>
            <h3 class={HEADING_LG}>{"How it works"}</h3>
            <ol class={combine_classes(TEXT_MUTED, "mt-4 space-y-3")}>
                {for STEPS.iter().enumerate().map(|(i, step)| html! {
                    <li>{format!("{}. {}", i + 1, step)}</li>
                })}
            </ol>
        </section>
    }
}
