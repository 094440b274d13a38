//! Demo screen with one menu per corner and one in the middle

use dioxus::prelude::*;
use joyboy_common::{ColorToken, Config, IconName, MenuConfig};
use joyboy_ui::{Icon, Menu, MenuDivider, MenuItem, Pressable, ThemeProvider};
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const DEMO_CSS: Asset = asset!("/assets/demo.css");

/// Launch the demo window
pub fn launch(config: Config) {
    let window = dioxus::desktop::Config::default().with_window(
        dioxus::desktop::WindowBuilder::new()
            .with_title("joyboy menu")
            .with_inner_size(dioxus::desktop::LogicalSize::new(420, 820))
            .with_resizable(true),
    );

    LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context_provider(move || Box::new(config.clone()))
        .launch(App);
}

/// Where a demo handle sits on screen
#[derive(Clone, Copy, Debug, PartialEq)]
enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Anchor {
    const ALL: [Anchor; 5] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Center,
    ];

    fn class(&self) -> &'static str {
        match self {
            Self::TopLeft => "demo-anchor--top-left",
            Self::TopRight => "demo-anchor--top-right",
            Self::BottomLeft => "demo-anchor--bottom-left",
            Self::BottomRight => "demo-anchor--bottom-right",
            Self::Center => "demo-anchor--center",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::TopLeft => "Top left",
            Self::TopRight => "Top right",
            Self::BottomLeft => "Bottom left",
            Self::BottomRight => "Bottom right",
            Self::Center => "Center",
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<Config>();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: DEMO_CSS }
        ThemeProvider { palette: config.palette(),
            DemoScreen { menu_config: config.menu.clone() }
        }
    }
}

#[component]
fn DemoScreen(menu_config: MenuConfig) -> Element {
    let mut last_action = use_signal(|| "Open a menu".to_string());

    rsx! {
        div { class: "demo-screen",
            for anchor in Anchor::ALL {
                DemoMenu {
                    key: "{anchor.label()}",
                    anchor,
                    config: menu_config.clone(),
                    on_action: move |action: String| last_action.set(action),
                }
            }
            p { class: "demo-status", "{last_action}" }
        }
    }
}

/// Build a press handler that reports `action` and closes the menu
fn choose(
    mut open: Signal<bool>,
    on_action: EventHandler<String>,
    anchor: Anchor,
    action: &'static str,
) -> impl FnMut(MouseEvent) {
    move |_| {
        info!(anchor = anchor.label(), action, "Menu item selected");
        on_action.call(format!("{}: {}", anchor.label(), action));
        open.set(false);
    }
}

#[component]
fn DemoMenu(anchor: Anchor, config: MenuConfig, on_action: EventHandler<String>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "demo-anchor {anchor.class()}",
            Menu {
                handle: rsx! {
                    Pressable {
                        class: Some("demo-trigger".to_string()),
                        aria_label: Some(format!("{} menu", anchor.label())),
                        onpress: move |_| open.toggle(),
                        "{anchor.label()}"
                        Icon { name: IconName::Ellipsis, size: 18 }
                    }
                },
                open,
                on_close: move |_| {
                    info!(anchor = anchor.label(), "Menu dismissed");
                    open.set(false);
                },
                config,
                MenuItem {
                    label: "Share",
                    icon: Some(IconName::Share),
                    onpress: choose(open, on_action, anchor, "Share"),
                }
                MenuItem {
                    label: "Copy link",
                    icon: Some(IconName::Copy),
                    onpress: choose(open, on_action, anchor, "Copy link"),
                }
                MenuItem {
                    label: "Edit",
                    icon: Some(IconName::Pencil),
                    color: ColorToken::Primary,
                    onpress: choose(open, on_action, anchor, "Edit"),
                }
                MenuItem { label: "Locked", icon: Some(IconName::Lock), disabled: true }
                MenuDivider {}
                MenuItem {
                    label: "Report",
                    icon: Some(IconName::Flag),
                    color: ColorToken::Warning,
                    onpress: choose(open, on_action, anchor, "Report"),
                }
                MenuItem {
                    label: "Delete",
                    icon: Some(IconName::Trash),
                    color: ColorToken::Danger,
                    onpress: choose(open, on_action, anchor, "Delete"),
                }
            }
        }
    }
}
