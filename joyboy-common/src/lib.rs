//! joyboy-common - Framework-free core of the anchored menu
//!
//! Geometry, placement, animation and configuration shared by the Dioxus
//! components in `joyboy-ui`. Nothing in here touches a renderer, so every
//! rule can be exercised with plain unit tests.

pub mod animation;
pub mod color;
pub mod config;
pub mod icon;
pub mod layout;
pub mod menu_state;
pub mod placement;

pub use animation::{Easing, Progress, Transition};
pub use color::{ColorToken, Palette, ThemeMode, UnknownColorToken};
pub use config::{Config, ConfigError, MenuConfig, MAX_FRAME_INTERVAL_MS};
pub use icon::{IconName, UnknownIcon};
pub use layout::{LayoutObserver, Rect, Size};
pub use menu_state::MenuState;
pub use placement::{
    compute_panel_style, panel_width, place_panel, HorizontalPlacement, PanelPlacement,
    PanelStyle, Position, VerticalPlacement,
};
