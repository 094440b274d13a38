//! Palette context and semantic color resolution

use dioxus::prelude::*;
use joyboy_common::{ColorToken, Palette};

/// Provides a palette to every descendant and exposes it as CSS variables.
///
/// Components outside a `ThemeProvider` fall back to the light palette.
#[component]
pub fn ThemeProvider(palette: Palette, children: Element) -> Element {
    let current = use_memo(use_reactive!(|palette| palette));
    use_context_provider(|| current);

    let vars = palette_css_vars(&current.read());

    rsx! {
        div { class: "joyboy-theme", style: "{vars}", {children} }
    }
}

/// Palette from the nearest `ThemeProvider`
pub fn use_palette() -> Palette {
    try_use_context::<Memo<Palette>>()
        .map(|palette| palette())
        .unwrap_or_default()
}

/// Resolve a semantic color token to a concrete CSS color
pub fn use_color(token: ColorToken) -> String {
    use_palette().resolve(token).to_string()
}

fn palette_css_vars(palette: &Palette) -> String {
    ColorToken::ALL
        .iter()
        .map(|token| format!("--joyboy-{}: {};", token.as_str(), palette.resolve(*token)))
        .collect::<Vec<_>>()
        .join(" ")
}
