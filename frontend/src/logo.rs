use yew::prelude::*;

/// The three brand marks. Only one is shown at a time; nothing else depends
/// on which is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// Leaf and mortar-pestle, calming green.
    Leaf,
    /// Sun and oil drop, warm amber.
    Sun,
    /// Monogram formed by two herbal leaves.
    Monogram,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub variant: LogoVariant,
    #[prop_or(AttrValue::Static("h-10 w-10"))]
    pub class: AttrValue,
}

#[function_component(Logo)]
pub fn logo(props: &Props) -> Html {
    let shapes = match props.variant {
        LogoVariant::Leaf => html! {
            <>
                <circle cx="32" cy="32" r="30" fill="#E6F7EE" stroke="#2F855A" stroke-width="2" />
                <path d="M20 36c4-8 12-12 20-10" stroke="#276749" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
                <path d="M28 44c0-6 8-10 12-8" stroke="#276749" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
                <rect x="28" y="20" width="8" height="8" rx="2" fill="#2F855A" />
            </>
        },
        LogoVariant::Sun => html! {
            <>
                <rect x="2" y="2" width="60" height="60" rx="12" fill="#FFF7ED" />
                <path d="M32 14c6 0 10 6 10 12s-4 10-10 10-10-4-10-10 4-12 10-12z" fill="#D69E2E" />
                <path d="M32 36c6 0 10 6 10 12H22c0-6 4-12 10-12z" fill="#E97721" />
            </>
        },
        LogoVariant::Monogram => html! {
            <>
                <circle cx="32" cy="32" r="30" fill="#F0FFF4" />
                <path d="M20 36c4-8 20-8 24 0" stroke="#1E6F3A" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
                <path d="M26 30c3-4 10-4 13 0" stroke="#1E6F3A" stroke-width="2.5" stroke-linecap="round" />
            </>
        },
    };

    html! {
        <svg class={props.class.to_string()} viewBox="0 0 64 64" fill="none" xmlns="http://www.w3.org/2000/svg">
            {shapes}
        </svg>
    }
}
