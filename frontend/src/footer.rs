use yew::prelude::*;
use time::OffsetDateTime;
use crate::config::CONFIG;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = OffsetDateTime::now_utc().year();
    html! {
        <footer class="py-12 text-center text-gray-600">
            {format!("© {} {}. All rights reserved. • Terms • Privacy", year, CONFIG.brand_name)}
        </footer>
    }
}
