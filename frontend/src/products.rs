use yew::prelude::*;
use shared::models::{Product, PRODUCTS};
use crate::styles::*;

#[derive(Properties, PartialEq)]
struct CardProps {
    product: Product,
}

#[function_component(ProductCard)]
fn product_card(props: &CardProps) -> Html {
    let product = &props.product;
    html! {
        <div class={CARD}>
            <h4 class={HEADING_SM}>{product.title}</h4>
            <p class={combine_classes(TEXT_SM_MUTED, "mt-2")}>{product.description}</p>
            <div class={combine_classes(FLEX_BETWEEN, "mt-4")}>
                <div class="text-lg font-bold">{product.price.to_string()}</div>
                <a href="#preorder" class={button(ButtonKind::Primary, false)}>{"Pre-order"}</a>
            </div>
        </div>
    }
}

#[function_component(Products)]
pub fn products() -> Html {
    html! {
        <section id="products" class={SECTION}>
            <h3 class={HEADING_LG}>{"Starter Kits"}</h3>
            <p class={combine_classes(TEXT_MUTED, "mt-2")}>
                {"Choose a starter plan designed to fit into busy lives — easy rituals, powerful herbs, visible outcomes."}
            </p>
            <div class="mt-6 grid grid-cols-1 md:grid-cols-3 gap-6">
                {for PRODUCTS.iter().map(|product| html! {
                    <ProductCard key={product.id} product={*product} />
                })}
            </div>
        </section>
    }
}
