//! Top-layer rendering for floating content
//!
//! Overlay containers are rendered with `popover="manual"` and promoted with
//! `showPopover()` once mounted, which lifts them above every stacking
//! context without z-index juggling. Dismissal is handled by the menu's own
//! backdrop, so the browser's light dismiss is never involved.

use tracing::{debug, warn};
use wasm_bindgen_x::JsCast;

/// Promote a mounted `popover` element into the top layer.
///
/// When the popover API is unavailable the `popover` attribute is removed so
/// the element falls back to regular fixed positioning instead of staying
/// hidden.
pub fn show_in_top_layer(element: &web_sys_x::Element) {
    let shown = js_sys_x::Reflect::get(element, &"showPopover".into())
        .ok()
        .and_then(|show| {
            show.dyn_ref::<js_sys_x::Function>()
                .map(|func| func.call0(element).is_ok())
        })
        .unwrap_or(false);

    if shown {
        debug!("Overlay promoted to top layer");
    } else {
        warn!("Popover API unavailable, falling back to fixed positioning");
        let _ = element.remove_attribute("popover");
    }
}
