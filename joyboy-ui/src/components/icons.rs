//! Icons from the Lucide set (https://lucide.dev), keyed by `IconName`
//!
//! Shapes are drawn on a 24x24 grid with a 2px stroke. Without a color the
//! icon inherits the surrounding text color.

use dioxus::prelude::*;
use joyboy_common::IconName;

/// One primitive of an icon outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
    },
}

/// Outline of an icon
pub fn icon_shapes(name: IconName) -> &'static [Shape] {
    use Shape::*;

    match name {
        IconName::Check => &[Path("M20 6 9 17l-5-5")],
        IconName::ChevronRight => &[Path("m9 18 6-6-6-6")],
        IconName::Copy => &[
            Rect {
                x: 8.0,
                y: 8.0,
                width: 14.0,
                height: 14.0,
                rx: 2.0,
            },
            Path("M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"),
        ],
        IconName::Ellipsis => &[
            Circle {
                cx: 12.0,
                cy: 12.0,
                r: 1.0,
            },
            Circle {
                cx: 19.0,
                cy: 12.0,
                r: 1.0,
            },
            Circle {
                cx: 5.0,
                cy: 12.0,
                r: 1.0,
            },
        ],
        IconName::ExternalLink => &[
            Path("M15 3h6v6"),
            Path("M10 14 21 3"),
            Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
        ],
        IconName::Flag => &[
            Path("M4 15s1-1 4-1 5 2 8 2 4-1 4-1V3s-1 1-4 1-5-2-8-2-4 1-4 1z"),
            Path("M4 22v-7"),
        ],
        IconName::Info => &[
            Circle {
                cx: 12.0,
                cy: 12.0,
                r: 10.0,
            },
            Path("M12 16v-4"),
            Path("M12 8h.01"),
        ],
        IconName::Lock => &[
            Rect {
                x: 3.0,
                y: 11.0,
                width: 18.0,
                height: 11.0,
                rx: 2.0,
            },
            Path("M7 11V7a5 5 0 0 1 10 0v4"),
        ],
        IconName::Pencil => &[
            Path("M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z"),
            Path("m15 5 4 4"),
        ],
        IconName::Plus => &[Path("M5 12h14"), Path("M12 5v14")],
        IconName::Refresh => &[
            Path("M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"),
            Path("M21 3v5h-5"),
            Path("M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"),
            Path("M8 16H3v5"),
        ],
        IconName::Share => &[
            Circle {
                cx: 18.0,
                cy: 5.0,
                r: 3.0,
            },
            Circle {
                cx: 6.0,
                cy: 12.0,
                r: 3.0,
            },
            Circle {
                cx: 18.0,
                cy: 19.0,
                r: 3.0,
            },
            Path("m8.59 13.51 6.83 3.98"),
            Path("m15.41 6.51-6.82 3.98"),
        ],
        IconName::Trash => &[
            Path("M10 11v6"),
            Path("M14 11v6"),
            Path("M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"),
            Path("M3 6h18"),
            Path("M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"),
        ],
        IconName::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! {
            path { d }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                rx: "{rx}",
            }
        },
    }
}

/// Icon rendered as inline SVG
#[component]
pub fn Icon(
    name: IconName,
    /// Edge length in pixels
    #[props(default = 24)]
    size: u32,
    /// Stroke color; inherits the text color when omitted
    #[props(default)]
    color: Option<String>,
) -> Element {
    let stroke = color.unwrap_or_else(|| "currentColor".to_string());

    rsx! {
        svg {
            class: "icon",
            "data-icon": name.as_str(),
            width: "{size}",
            height: "{size}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "{stroke}",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {icon_shapes(name).iter().map(render_shape)}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_an_outline() {
        for name in IconName::ALL {
            assert!(!icon_shapes(name).is_empty(), "{name} has no shapes");
        }
    }

    #[test]
    fn test_shapes_fit_the_grid() {
        for name in IconName::ALL {
            for shape in icon_shapes(name) {
                match *shape {
                    Shape::Circle { cx, cy, r } => {
                        assert!(cx - r >= 0.0 && cx + r <= 24.0, "{name}");
                        assert!(cy - r >= 0.0 && cy + r <= 24.0, "{name}");
                    }
                    Shape::Rect {
                        x,
                        y,
                        width,
                        height,
                        ..
                    } => {
                        assert!(x >= 0.0 && x + width <= 24.0, "{name}");
                        assert!(y >= 0.0 && y + height <= 24.0, "{name}");
                    }
                    Shape::Path(d) => assert!(!d.is_empty(), "{name}"),
                }
            }
        }
    }
}
