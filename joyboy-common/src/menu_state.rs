//! Open/close state of one menu instance
//!
//! Owns the progress animation and decides whether the overlay should be
//! mounted. The open flag itself belongs to the host; this only mirrors it.

use crate::animation::Progress;
use crate::config::MenuConfig;
use crate::layout::{LayoutObserver, Size};
use crate::placement::{compute_panel_style, PanelStyle};
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    config: MenuConfig,
    open: bool,
    progress: Progress,
}

impl MenuState {
    /// Start closed. An invalid config is replaced by the defaults.
    pub fn new(config: MenuConfig) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Invalid menu config, using defaults: {}", e);
                MenuConfig::default()
            }
        };
        Self {
            config,
            open: false,
            progress: Progress::default(),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mirror the host's open flag.
    ///
    /// Returns whether the flag changed. Only a change starts a transition,
    /// so repeated calls with the same value never restart the fade.
    pub fn set_open(&mut self, open: bool, now_ms: f64) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        let target = if open { 1.0 } else { 0.0 };
        self.progress
            .animate_to(target, now_ms, self.config.duration_ms, self.config.easing);
        true
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        self.progress.value_at(now_ms)
    }

    pub fn is_animating(&self, now_ms: f64) -> bool {
        !self.progress.is_settled(now_ms)
    }

    /// Whether the panel and dismiss overlay should be in the tree.
    ///
    /// The overlay unmounts the moment the menu closes unless
    /// `keep_mounted_while_closing` is set, in which case it stays until the
    /// fade-out reaches zero.
    pub fn overlay_mounted(&self, now_ms: f64) -> bool {
        if self.open {
            return true;
        }
        self.config.keep_mounted_while_closing && self.progress(now_ms) > 0.0
    }

    /// Style for the frame at `now_ms`
    pub fn frame(
        &self,
        now_ms: f64,
        handle: &dyn LayoutObserver,
        panel_height: Option<f64>,
        viewport: Size,
    ) -> PanelStyle {
        compute_panel_style(
            self.progress(now_ms),
            handle.bounds(),
            panel_height,
            viewport,
            &self.config,
        )
    }
}
