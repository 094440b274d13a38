//! joyboy-ui - Dioxus components for the anchored menu
//!
//! Contains the `Menu` container, its `MenuItem` rows, and the small
//! primitives they are built from (pressable, icon, theme context, layout
//! measurement).

pub mod components;
pub mod layout;
pub mod overlay;
pub mod theme;

pub use components::*;
pub use theme::{use_color, use_palette, ThemeProvider};
