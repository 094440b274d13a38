//! Panel placement relative to the handle
//!
//! The panel opens below the handle unless the handle sits too close to the
//! bottom of the viewport, in which case it opens above. Horizontally it is
//! left-aligned with the handle, or pinned to the right edge of the viewport
//! when it would overflow.

use crate::config::MenuConfig;
use crate::layout::{Rect, Size};

/// Which side of the handle the panel opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPlacement {
    Above,
    Below,
}

/// How the panel is aligned horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalPlacement {
    /// Left edge aligned with the handle's left edge
    Start,
    /// Right edge pinned just inside the viewport
    EndAligned,
}

/// Top-left corner of the panel in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// Resolved placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub position: Position,
    pub width: f64,
    pub vertical: VerticalPlacement,
    pub horizontal: HorizontalPlacement,
}

/// Style overrides for the panel on one animation frame.
///
/// `position` is `None` when geometry could not be resolved; the panel then
/// renders with its base style until a later frame succeeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub width: f64,
    pub opacity: f64,
    pub position: Option<Position>,
}

/// Panel width for a viewport: `min(viewport_width / width_divisor, max_width)`
pub fn panel_width(viewport_width: f64, config: &MenuConfig) -> f64 {
    (viewport_width / config.width_divisor).min(config.max_width)
}

fn vertical_placement(trigger: &Rect, viewport: Size, config: &MenuConfig) -> VerticalPlacement {
    if trigger.bottom() + config.flip_threshold > viewport.height {
        VerticalPlacement::Above
    } else {
        VerticalPlacement::Below
    }
}

/// Place a panel of known height next to `trigger`.
pub fn place_panel(
    trigger: Rect,
    panel_height: f64,
    viewport: Size,
    config: &MenuConfig,
) -> PanelPlacement {
    let width = panel_width(viewport.width, config);
    let vertical = vertical_placement(&trigger, viewport, config);

    let top = match vertical {
        VerticalPlacement::Above => trigger.y - panel_height - config.anchor_gap,
        VerticalPlacement::Below => trigger.bottom() + config.anchor_gap,
    };

    let (left, horizontal) = if trigger.x + width > viewport.width {
        (
            viewport.width - width - config.edge_margin,
            HorizontalPlacement::EndAligned,
        )
    } else {
        (trigger.x, HorizontalPlacement::Start)
    };

    PanelPlacement {
        position: Position { top, left },
        width,
        vertical,
        horizontal,
    }
}

/// Compute the panel style for one frame.
///
/// Opacity always follows `progress`. The position is only resolved when the
/// trigger has been measured, and, for panels that must open above the
/// trigger, once the panel's own height is known.
pub fn compute_panel_style(
    progress: f64,
    trigger: Option<Rect>,
    panel_height: Option<f64>,
    viewport: Size,
    config: &MenuConfig,
) -> PanelStyle {
    let width = panel_width(viewport.width, config);
    let opacity = progress.clamp(0.0, 1.0);

    let position = trigger.filter(Rect::is_finite).and_then(|trigger| {
        let height = match vertical_placement(&trigger, viewport, config) {
            VerticalPlacement::Above => panel_height.filter(|h| h.is_finite())?,
            VerticalPlacement::Below => panel_height.unwrap_or(0.0),
        };
        Some(place_panel(trigger, height, viewport, config).position)
    });

    PanelStyle {
        width,
        opacity,
        position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Size {
        Size::new(400.0, 800.0)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_width_caps_at_max() {
        let config = MenuConfig::default();
        assert_eq!(panel_width(1200.0, &config), 320.0);
        assert!(approx(panel_width(400.0, &config), 400.0 / 1.5));
        assert_eq!(panel_width(0.0, &config), 0.0);
    }

    #[test]
    fn test_below_when_room() {
        let config = MenuConfig::default();
        let placed = place_panel(Rect::new(10.0, 100.0, 80.0, 40.0), 200.0, viewport(), &config);
        assert_eq!(placed.vertical, VerticalPlacement::Below);
        assert_eq!(placed.position.top, 148.0);
        assert_eq!(placed.horizontal, HorizontalPlacement::Start);
        assert_eq!(placed.position.left, 10.0);
    }

    #[test]
    fn test_threshold_boundary_stays_below() {
        let config = MenuConfig::default();
        // bottom + 40 == viewport height
        let placed = place_panel(Rect::new(10.0, 720.0, 80.0, 40.0), 200.0, viewport(), &config);
        assert_eq!(placed.vertical, VerticalPlacement::Below);
        assert_eq!(placed.position.top, 768.0);
    }

    #[test]
    fn test_above_uses_panel_height() {
        let config = MenuConfig::default();
        let placed = place_panel(Rect::new(10.0, 770.0, 80.0, 40.0), 120.0, viewport(), &config);
        assert_eq!(placed.vertical, VerticalPlacement::Above);
        assert_eq!(placed.position.top, 770.0 - 120.0 - 8.0);
    }

    #[test]
    fn test_right_overflow_pins_to_edge() {
        let config = MenuConfig::default();
        let placed = place_panel(Rect::new(300.0, 100.0, 80.0, 40.0), 0.0, viewport(), &config);
        assert_eq!(placed.horizontal, HorizontalPlacement::EndAligned);
        assert!(approx(placed.position.left, 400.0 - 400.0 / 1.5 - 8.0));
    }

    #[test]
    fn test_exact_fit_is_not_overflow() {
        let config = MenuConfig::default();
        let width = panel_width(400.0, &config);
        let placed = place_panel(Rect::new(400.0 - width, 100.0, 10.0, 10.0), 0.0, viewport(), &config);
        assert_eq!(placed.horizontal, HorizontalPlacement::Start);
    }

    #[test]
    fn test_unmeasured_trigger_has_no_position() {
        let config = MenuConfig::default();
        let style = compute_panel_style(0.4, None, Some(100.0), viewport(), &config);
        assert_eq!(style.position, None);
        assert_eq!(style.opacity, 0.4);
        assert!(approx(style.width, 400.0 / 1.5));
    }

    #[test]
    fn test_nan_trigger_has_no_position() {
        let config = MenuConfig::default();
        let trigger = Rect::new(f64::NAN, 0.0, 10.0, 10.0);
        let style = compute_panel_style(1.0, Some(trigger), Some(100.0), viewport(), &config);
        assert_eq!(style.position, None);
    }

    #[test]
    fn test_above_waits_for_panel_height() {
        let config = MenuConfig::default();
        let trigger = Rect::new(10.0, 770.0, 80.0, 40.0);
        let style = compute_panel_style(1.0, Some(trigger), None, viewport(), &config);
        assert_eq!(style.position, None);

        let style = compute_panel_style(1.0, Some(trigger), Some(50.0), viewport(), &config);
        assert_eq!(
            style.position,
            Some(Position {
                top: 712.0,
                left: 10.0
            })
        );
    }

    #[test]
    fn test_below_does_not_need_panel_height() {
        let config = MenuConfig::default();
        let trigger = Rect::new(10.0, 100.0, 80.0, 40.0);
        let style = compute_panel_style(1.0, Some(trigger), None, viewport(), &config);
        assert_eq!(
            style.position,
            Some(Position {
                top: 148.0,
                left: 10.0
            })
        );
    }

    #[test]
    fn test_opacity_is_clamped() {
        let config = MenuConfig::default();
        assert_eq!(compute_panel_style(1.7, None, None, viewport(), &config).opacity, 1.0);
        assert_eq!(compute_panel_style(-0.2, None, None, viewport(), &config).opacity, 0.0);
    }

    #[test]
    fn test_custom_margins() {
        let config = MenuConfig {
            anchor_gap: 2.0,
            edge_margin: 16.0,
            flip_threshold: 100.0,
            ..MenuConfig::default()
        };
        // bottom 740 + 100 > 800 flips above with the custom threshold
        let placed = place_panel(Rect::new(300.0, 700.0, 80.0, 40.0), 60.0, viewport(), &config);
        assert_eq!(placed.vertical, VerticalPlacement::Above);
        assert_eq!(placed.position.top, 700.0 - 60.0 - 2.0);
        assert!(approx(placed.position.left, 400.0 - 400.0 / 1.5 - 16.0));
    }
}
