//! Pressable primitive

use dioxus::prelude::*;

/// Chromeless button that reports press interactions.
///
/// Carries accessibility attributes and disabled handling but no visual
/// styling of its own. `onpressin`/`onpressout` fire on pointer down/up,
/// `onpress` on a completed click. None of them fire while disabled.
#[component]
pub fn Pressable(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] onpressin: Option<EventHandler<MouseEvent>>,
    #[props(default)] onpressout: Option<EventHandler<MouseEvent>>,
    #[props(default)] onpress: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: "button",
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_disabled: if disabled { Some("true") } else { None },
            onmousedown: move |e| {
                if let Some(handler) = onpressin.filter(|_| !disabled) {
                    handler.call(e);
                }
            },
            onmouseup: move |e| {
                if let Some(handler) = onpressout.filter(|_| !disabled) {
                    handler.call(e);
                }
            },
            onclick: move |e| {
                if let Some(handler) = onpress.filter(|_| !disabled) {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
