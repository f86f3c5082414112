//! Vector drawing primitives on the 0–100 glyph canvas.
//!
//! Every primitive renders to a single SVG element stroked with
//! `currentColor`, so a glyph picks up the text color of whatever contains it.

use serde::Serialize;
use std::fmt;

/// Stroke width used by every primitive except [`Primitive::Line`].
pub const STROKE_WIDTH: u32 = 3;
/// Arrowhead size used by [`Primitive::arrow`].
pub const ARROW_SIZE: i32 = 15;

/// Direction an arrowhead points in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    pub fn from_name(text: &str) -> Option<Self> {
        Some(match text {
            "right" => Direction::Right,
            "left" => Direction::Left,
            "up" => Direction::Up,
            "down" => Direction::Down,
            _ => return None,
        })
    }
}

/// One draw instruction of a glyph recipe.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        width: u32,
    },
    Circle {
        cx: i32,
        cy: i32,
        r: i32,
        filled: bool,
    },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        filled: bool,
    },
    /// Raw SVG path data (`M`, `L`, `Q`, `C`, `Z` commands).
    Path { d: &'static str, filled: bool },
    /// Two strokes meeting at `(x, y)`, opening away from `direction`.
    Arrow {
        x: i32,
        y: i32,
        direction: Direction,
        size: i32,
    },
}

impl Primitive {
    pub const fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::thick_line(x1, y1, x2, y2, STROKE_WIDTH)
    }

    pub const fn thick_line(x1: i32, y1: i32, x2: i32, y2: i32, width: u32) -> Self {
        Primitive::Line { x1, y1, x2, y2, width }
    }

    pub const fn circle(cx: i32, cy: i32, r: i32) -> Self {
        Primitive::Circle { cx, cy, r, filled: false }
    }

    pub const fn dot(cx: i32, cy: i32, r: i32) -> Self {
        Primitive::Circle { cx, cy, r, filled: true }
    }

    pub const fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Primitive::Rect { x, y, width, height, filled: false }
    }

    pub const fn filled_rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Primitive::Rect { x, y, width, height, filled: true }
    }

    pub const fn path(d: &'static str) -> Self {
        Primitive::Path { d, filled: false }
    }

    pub const fn filled_path(d: &'static str) -> Self {
        Primitive::Path { d, filled: true }
    }

    pub const fn arrow(x: i32, y: i32, direction: Direction) -> Self {
        Primitive::Arrow { x, y, direction, size: ARROW_SIZE }
    }

    pub const fn sized_arrow(x: i32, y: i32, direction: Direction, size: i32) -> Self {
        Primitive::Arrow { x, y, direction, size }
    }

    /// Render this primitive as one SVG element.
    pub fn markup(&self) -> String {
        self.to_string()
    }
}

fn fill(filled: bool) -> &'static str {
    if filled {
        "currentColor"
    } else {
        "none"
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Primitive::Line { x1, y1, x2, y2, width } => write!(
                f,
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="currentColor" stroke-width="{width}" stroke-linecap="round" />"#
            ),
            Primitive::Circle { cx, cy, r, filled } => write!(
                f,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}" stroke="currentColor" stroke-width="{STROKE_WIDTH}" />"#,
                fill(filled)
            ),
            Primitive::Rect { x, y, width, height, filled } => write!(
                f,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}" stroke="currentColor" stroke-width="{STROKE_WIDTH}" />"#,
                fill(filled)
            ),
            Primitive::Path { d, filled } => write!(
                f,
                r#"<path d="{d}" fill="{}" stroke="currentColor" stroke-width="{STROKE_WIDTH}" stroke-linecap="round" stroke-linejoin="round" />"#,
                fill(filled)
            ),
            Primitive::Arrow { x, y, direction, size } => {
                // Arms run back from the tip, away from the pointing direction.
                let (ax, ay, bx, by) = match direction {
                    Direction::Right => (x - size, y - size, x - size, y + size),
                    Direction::Left => (x + size, y - size, x + size, y + size),
                    Direction::Up => (x - size, y + size, x + size, y + size),
                    Direction::Down => (x - size, y - size, x + size, y - size),
                };
                write!(
                    f,
                    r#"<path d="M {x} {y} L {ax} {ay} M {x} {y} L {bx} {by}" stroke="currentColor" stroke-width="{STROKE_WIDTH}" fill="none" stroke-linecap="round" />"#
                )
            }
        }
    }
}

/// Arrowhead markup for a direction given by name.
///
/// An unrecognized direction name yields an empty fragment.
pub fn arrow_markup(x: i32, y: i32, direction: &str, size: i32) -> String {
    match Direction::from_name(direction) {
        Some(direction) => Primitive::sized_arrow(x, y, direction, size).markup(),
        None => String::new(),
    }
}

/// Concatenate the markup of every primitive in drawing order.
pub fn render(recipe: &[Primitive]) -> String {
    recipe.iter().map(Primitive::markup).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_defaults_to_standard_width() {
        assert_eq!(
            Primitive::line(50, 35, 50, 90).markup(),
            r#"<line x1="50" y1="35" x2="50" y2="90" stroke="currentColor" stroke-width="3" stroke-linecap="round" />"#
        );
    }

    #[test]
    fn filled_shapes_use_current_color() {
        assert!(Primitive::dot(50, 20, 8).markup().contains(r#"fill="currentColor""#));
        assert!(Primitive::circle(50, 20, 8).markup().contains(r#"fill="none""#));
        assert!(Primitive::filled_rect(0, 0, 10, 10).markup().contains(r#"fill="currentColor""#));
        assert!(Primitive::filled_path("M 0 0 L 1 1").markup().contains(r#"fill="currentColor""#));
    }

    #[test]
    fn arrow_points_in_each_direction() {
        assert!(Primitive::arrow(50, 50, Direction::Right)
            .markup()
            .contains(r#"d="M 50 50 L 35 35 M 50 50 L 35 65""#));
        assert!(Primitive::arrow(50, 50, Direction::Left)
            .markup()
            .contains(r#"d="M 50 50 L 65 35 M 50 50 L 65 65""#));
        assert!(Primitive::arrow(50, 50, Direction::Up)
            .markup()
            .contains(r#"d="M 50 50 L 35 65 M 50 50 L 65 65""#));
        assert!(Primitive::arrow(50, 50, Direction::Down)
            .markup()
            .contains(r#"d="M 50 50 L 35 35 M 50 50 L 65 35""#));
    }

    #[test]
    fn unknown_arrow_direction_is_empty() {
        assert_eq!(arrow_markup(10, 10, "sideways", 5), "");
        assert_eq!(arrow_markup(10, 10, "Right", 5), "");
        assert!(!arrow_markup(10, 10, "right", 5).is_empty());
    }

    #[test]
    fn render_keeps_order() {
        let a = Primitive::line(0, 0, 1, 1);
        let b = Primitive::dot(5, 5, 1);
        assert_eq!(render(&[a, b]), format!("{}{}", a.markup(), b.markup()));
        assert_eq!(render(&[]), "");
    }
}
