pub const PAGE: &str = "min-h-screen bg-white text-gray-800";
pub const CONTAINER: &str = "max-w-6xl mx-auto px-6";
pub const SECTION: &str = "py-8";

pub const CARD: &str = "border rounded-xl p-5";
pub const PANEL: &str = "bg-gray-50 rounded-xl p-6";
pub const ALERT_SUCCESS: &str = "mt-4 p-4 bg-green-50 rounded-md text-green-700";

pub const INPUT_BASE: &str = "border rounded-md px-4 py-3 flex-1";
pub const INPUT_ERROR: &str = "border-red-400 focus:outline-none focus:border-red-500";

pub const BUTTON_BASE: &str = "rounded-md font-medium transition-colors duration-150";
pub const BUTTON_PRIMARY: &str = "bg-green-600 hover:bg-green-700 text-white";
pub const BUTTON_ACCENT: &str = "bg-amber-500 hover:bg-amber-600 text-white";
pub const BUTTON_OUTLINE: &str = "border border-gray-200 hover:border-gray-400";
pub const BUTTON_SM: &str = "px-4 py-2 text-sm";
pub const BUTTON_LG: &str = "px-5 py-3";

pub const TEXT_ERROR: &str = "text-sm text-red-600 font-semibold mt-2";
pub const TEXT_MUTED: &str = "text-gray-600";
pub const TEXT_SM_MUTED: &str = "text-sm text-gray-500";
pub const HEADING_XL: &str = "text-4xl font-extrabold leading-tight";
pub const HEADING_LG: &str = "text-2xl font-bold";
pub const HEADING_SM: &str = "font-semibold";

pub const BADGE: &str = "w-8 h-8 bg-green-100 text-green-700 rounded-full flex items-center justify-center";
pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black/40 flex items-center justify-center p-6";
pub const MODAL_PANEL: &str = "bg-white rounded-lg max-w-xl w-full p-6";
pub const FLEX_BETWEEN: &str = "flex items-center justify-between";

pub enum ButtonKind {
    Primary,
    Accent,
    Outline,
}

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button(kind: ButtonKind, large: bool) -> String {
    let colour = match kind {
        ButtonKind::Primary => BUTTON_PRIMARY,
        ButtonKind::Accent => BUTTON_ACCENT,
        ButtonKind::Outline => BUTTON_OUTLINE,
    };
    let size = if large { BUTTON_LG } else { BUTTON_SM };
    combine_classes(BUTTON_BASE, &combine_classes(colour, size))
}

pub fn input_class(has_error: bool) -> String {
    if has_error {
        combine_classes(INPUT_BASE, INPUT_ERROR)
    } else {
        INPUT_BASE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        let accent = button(ButtonKind::Accent, true);
        assert!(accent.starts_with(BUTTON_BASE));
        assert!(accent.contains(BUTTON_ACCENT));
        assert!(accent.ends_with(BUTTON_LG));
        assert!(button(ButtonKind::Outline, false).ends_with(BUTTON_SM));
    }

    #[test]
    fn test_input_class_flags_errors() {
        assert_eq!(input_class(false), INPUT_BASE);
        assert!(input_class(true).contains(INPUT_ERROR));
    }
}
