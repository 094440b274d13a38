//! Element measurement, viewport size and frame timing
//!
//! These are the platform-facing halves of the layout observer: everything
//! here talks to the renderer, and hands plain `Rect`/`Size` values to
//! `joyboy_common`.

use dioxus::prelude::*;
use joyboy_common::{LayoutObserver, Rect, Size};
use tracing::trace;

/// Current client rect of a mounted element.
///
/// Returns `None` if the renderer cannot measure it (not laid out yet, or
/// already removed from the tree).
pub async fn measure(mounted: &MountedData) -> Option<Rect> {
    match mounted.get_client_rect().await {
        Ok(rect) => Some(Rect::new(
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
        )),
        Err(e) => {
            trace!("Element not measurable: {:?}", e);
            None
        }
    }
}

/// Inner size of the window, if a window is available
pub fn viewport_size() -> Option<Size> {
    let window = web_sys_x::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width, height))
}

/// A measurement taken earlier in the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasuredBounds(pub Option<Rect>);

impl LayoutObserver for MeasuredBounds {
    fn bounds(&self) -> Option<Rect> {
        self.0
    }
}

/// Milliseconds on a monotonic clock. Only differences are meaningful.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys_x::Date::now()
}

/// Milliseconds on a monotonic clock. Only differences are meaningful.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let ms = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
