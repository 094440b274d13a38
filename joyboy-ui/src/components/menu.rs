//! Anchored dropdown menu
//!
//! - `Menu` - renders a handle and, while open, a floating panel next to it
//!   plus a transparent backdrop that reports taps outside the panel
//! - `MenuItem` - pressable row with a label and optional icon
//! - `MenuDivider` - separator line between groups of items
//!
//! ```ignore
//! let mut open = use_signal(|| false);
//! rsx! {
//!     Menu {
//!         handle: rsx! { Pressable { onpress: move |_| open.toggle(), "More" } },
//!         open,
//!         on_close: move |_| open.set(false),
//!         MenuItem { label: "Share", icon: Some(IconName::Share), onpress: move |_| { ... } }
//!         MenuItem { label: "Delete", color: ColorToken::Danger, onpress: move |_| { ... } }
//!     }
//! }
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use joyboy_common::{ColorToken, IconName, MenuConfig, MenuState, PanelStyle};
use tracing::{debug, trace};

use crate::components::{Icon, Pressable};
use crate::layout::{measure, now_ms, sleep_ms, viewport_size, MeasuredBounds};
use crate::overlay::show_in_top_layer;
use crate::theme::use_color;

/// Edge length of menu item icons
pub const MENU_ITEM_ICON_SIZE: u32 = 24;

/// Style before the first frame has been computed
const PANEL_BASE_STYLE: &str = "position: absolute; top: 0; left: 0; opacity: 0;";

/// Handles to the elements a frame needs to measure
#[derive(Clone, Copy)]
struct FrameTargets {
    handle: Signal<Option<Rc<MountedData>>>,
    panel: Signal<Option<Rc<MountedData>>>,
}

/// Dropdown menu anchored to a handle element.
///
/// The host owns `open`: tapping outside the panel calls `on_close` and
/// leaves it to the host to flip the flag.
#[component]
pub fn Menu(
    /// Trigger element, always rendered
    handle: Element,
    /// Whether the menu is open
    open: ReadSignal<bool>,
    /// Called once per tap on the backdrop outside the panel
    #[props(default)]
    on_close: Option<EventHandler<()>>,
    /// Layout and animation policy, read when the menu mounts
    #[props(default)]
    config: MenuConfig,
    /// Panel contents (typically MenuItem components)
    children: Element,
) -> Element {
    let keep_mounted_while_closing = config.keep_mounted_while_closing;

    let mut state = use_signal(move || MenuState::new(config));
    let mut panel_style = use_signal(|| None::<PanelStyle>);
    let mut lingering = use_signal(|| false);
    let mut frame_task = use_signal(|| None::<Task>);
    let targets = FrameTargets {
        handle: use_signal(|| None),
        panel: use_signal(|| None),
    };

    use_effect(move || {
        let is_open = open();

        if !state.write().set_open(is_open, now_ms()) {
            return;
        }
        debug!(open = is_open, "Menu toggled");

        if let Some(task) = frame_task.take() {
            task.cancel();
        }

        if !is_open && !keep_mounted_while_closing {
            let mut panel = targets.panel;
            panel.set(None);
            panel_style.set(None);
            lingering.set(false);
            return;
        }

        lingering.set(!is_open);
        let task = spawn(run_frames(state, targets, panel_style, lingering));
        frame_task.set(Some(task));
    });

    use_drop(move || {
        if let Some(task) = frame_task.peek().as_ref() {
            task.cancel();
        }
    });

    let overlay_mounted = open() || (keep_mounted_while_closing && lingering());
    let style = panel_css(panel_style().as_ref());
    let layer_class = if lingering() {
        "menu-layer menu-layer--closing"
    } else {
        "menu-layer"
    };

    rsx! {
        div { class: "menu-container",
            div {
                class: "menu-handle",
                onmounted: move |evt: MountedEvent| {
                    let mut handle = targets.handle;
                    handle.set(Some(evt.data()));
                },
                {handle}
            }
            if overlay_mounted {
                div {
                    class: "{layer_class}",
                    popover: "manual",
                    onmounted: move |evt: MountedEvent| {
                        if let Some(element) = evt.data().downcast::<web_sys_x::Element>() {
                            show_in_top_layer(element);
                        }
                    },
                    div {
                        class: "menu-outside",
                        onclick: move |_| {
                            if let Some(on_close) = on_close {
                                forward_backdrop_tap(*open.peek(), || on_close.call(()));
                            }
                        },
                    }
                    div {
                        class: "menu-panel",
                        role: "menu",
                        style: "{style}",
                        onmounted: move |evt: MountedEvent| {
                            let mut panel = targets.panel;
                            panel.set(Some(evt.data()));
                        },
                        {children}
                    }
                }
            }
        }
    }
}

/// Recompute the panel style every frame while the overlay is mounted.
async fn run_frames(
    state: Signal<MenuState>,
    targets: FrameTargets,
    mut panel_style: Signal<Option<PanelStyle>>,
    mut lingering: Signal<bool>,
) {
    loop {
        let (mounted, interval) = {
            let state = state.peek();
            (
                state.overlay_mounted(now_ms()),
                state.config().frame_interval_ms,
            )
        };
        if !mounted {
            trace!("Overlay unmounted, stopping frame loop");
            panel_style.set(None);
            lingering.set(false);
            break;
        }

        let handle = targets.handle.peek().clone();
        let panel = targets.panel.peek().clone();

        let handle_bounds = match handle {
            Some(handle) => measure(&handle).await,
            None => None,
        };
        let panel_height = match panel {
            Some(panel) => measure(&panel).await.map(|rect| rect.height),
            None => None,
        };

        match viewport_size() {
            Some(viewport) => {
                let frame = state.peek().frame(
                    now_ms(),
                    &MeasuredBounds(handle_bounds),
                    panel_height,
                    viewport,
                );
                if frame.position.is_none() {
                    trace!("Handle not measurable yet, skipping positioning");
                }
                if panel_style.peek().as_ref() != Some(&frame) {
                    panel_style.set(Some(frame));
                }
            }
            None => trace!("No viewport available, skipping frame"),
        }

        sleep_ms(interval).await;
    }
}

/// Pass a backdrop tap on to the host unless the menu is already closing.
///
/// Returns whether `on_close` ran.
fn forward_backdrop_tap(open: bool, on_close: impl FnOnce()) -> bool {
    if !open {
        trace!("Ignoring backdrop tap while closing");
        return false;
    }
    on_close();
    true
}

/// Inline style for the panel on the current frame
fn panel_css(style: Option<&PanelStyle>) -> String {
    let Some(style) = style else {
        return PANEL_BASE_STYLE.to_string();
    };

    let mut css = format!(
        "position: absolute; width: {}px; opacity: {};",
        style.width, style.opacity
    );
    if let Some(position) = style.position {
        css.push_str(&format!(
            " top: {}px; left: {}px;",
            position.top, position.left
        ));
    }
    css
}

fn menu_item_class(disabled: bool) -> &'static str {
    if disabled {
        "menu-item menu-item--disabled"
    } else {
        "menu-item"
    }
}

/// Individual menu row.
///
/// Interaction props are forwarded unchanged to the underlying `Pressable`.
#[component]
pub fn MenuItem(
    /// Row text
    label: String,
    /// Optional trailing icon
    #[props(default)]
    icon: Option<IconName>,
    /// Icon color
    #[props(default)]
    color: ColorToken,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onpress: Option<EventHandler<MouseEvent>>,
    #[props(default)] onpressin: Option<EventHandler<MouseEvent>>,
    #[props(default)] onpressout: Option<EventHandler<MouseEvent>>,
) -> Element {
    let resolved = use_color(color);

    rsx! {
        Pressable {
            class: Some(menu_item_class(disabled).to_string()),
            disabled,
            id,
            title,
            aria_label,
            onpress,
            onpressin,
            onpressout,
            span { class: "menu-item-label", "{label}" }
            if let Some(name) = icon {
                Icon { name, size: MENU_ITEM_ICON_SIZE, color: Some(resolved.clone()) }
            }
        }
    }
}

/// Menu divider line
#[component]
pub fn MenuDivider() -> Element {
    rsx! {
        div { class: "menu-divider", role: "separator" }
    }
}
