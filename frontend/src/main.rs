use tracing::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod logo;
mod header;
mod hero;
mod products;
mod how_it_works;
mod preorder_form;
mod quiz_modal;
mod footer;
mod home;

use crate::{home::Home, styles::*};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[not_found]
    #[at("/404")] NotFound,
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class={combine_classes(CONTAINER, "py-24 text-center")}>
            <h1 class={HEADING_LG}>{"Page not found"}</h1>
            <p class={combine_classes(TEXT_MUTED, "mt-4 mb-8")}>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes={classes!(button(ButtonKind::Primary, true))}>
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
