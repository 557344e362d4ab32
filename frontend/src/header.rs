use yew::prelude::*;
use crate::{config::CONFIG, logo::Logo, styles::*};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_take_quiz: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &Props) -> Html {
    let open_quiz = props.on_take_quiz.reform(|_: MouseEvent| ());

    html! {
        <header class={combine_classes(CONTAINER, "py-6 flex items-center justify-between")}>
            <div class="flex items-center gap-3">
                <Logo variant={CONFIG.logo} />
                <div>
                    <h1 class="font-bold text-lg">{CONFIG.brand_name}</h1>
                    <p class="text-xs text-gray-500">{CONFIG.tagline}</p>
                </div>
            </div>
            <nav class="space-x-4 hidden md:flex">
                <a class="text-sm hover:underline" href="#products">{"Products"}</a>
                <a class="text-sm hover:underline" href="#how">{"How it works"}</a>
                <a class="text-sm hover:underline" href="#quiz" onclick={open_quiz.clone()}>{"Take Quiz"}</a>
            </nav>
            <div class="flex items-center gap-3">
                <button onclick={open_quiz} class={button(ButtonKind::Primary, false)}>{"Take Quiz"}</button>
            </div>
        </header>
    }
}
