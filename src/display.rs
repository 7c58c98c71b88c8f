//! Geometry and display types shared by the model, the scene and the
//! surfaces.
//!
//! [`DisplayInfo`] describes a physical output as the surface provider
//! reports it.  [`RenderContext`] is what a single redraw actually needs:
//! the bounding rectangle of that display's drawing area.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in drawing units (logical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Whether the interiors of `self` and `other` intersect.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Whether `other` lies entirely inside `self`, with a small tolerance
    /// for floating-point error.
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f64 = 1e-9;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() <= self.bottom() + EPS
    }
}

/// Portrait or landscape, decided by the bounding rectangle's aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// `Landscape` iff strictly wider than tall.  Square counts as portrait.
    pub fn of(width: f64, height: f64) -> Self {
        if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// A physical display as reported by a
/// [`DisplaySource`](crate::traits::DisplaySource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Connector name (e.g. `"DP-1"`), or a synthetic name when the
    /// backend does not report one.
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Position in the global compositor layout.
    pub x: i32,
    pub y: i32,
}

impl DisplayInfo {
    /// The render context for a full-screen surface on this display.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Name for a display in logs.
///
/// The connector (`"DP-1"`) identifies an output stably.  Without one, the
/// monitor's manufacturer and model are used, and only as a last resort the
/// list position, which shifts as monitors come and go.
pub fn display_name(
    connector: Option<String>,
    manufacturer: Option<String>,
    model: Option<String>,
    index: usize,
) -> String {
    let non_empty = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
    if let Some(c) = non_empty(connector) {
        return c;
    }
    match (non_empty(manufacturer), non_empty(model)) {
        (Some(make), Some(model)) => format!("{} {}", make, model),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => format!("monitor-{}", index),
    }
}

/// Everything a redraw needs to know about its surface.
///
/// Built fresh for every frame from the drawing area's current size, so
/// nothing about a display outlives the frame that drew it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Drawing area in surface-local coordinates, anchored at `(0, 0)`.
    pub bounds: Rect,
}

impl RenderContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Rect::sized(width, height),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::of(self.bounds.width, self.bounds.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_from_aspect() {
        assert_eq!(Orientation::of(1920.0, 1080.0), Orientation::Landscape);
        assert_eq!(Orientation::of(1080.0, 1920.0), Orientation::Portrait);
        assert_eq!(Orientation::of(1000.0, 1000.0), Orientation::Portrait);
    }

    #[test]
    fn touching_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.overlaps(&c));
    }

    #[test]
    fn display_name_prefers_connector() {
        let name = display_name(
            Some("DP-1".into()),
            Some("Dell".into()),
            Some("U2720Q".into()),
            3,
        );
        assert_eq!(name, "DP-1");
    }

    #[test]
    fn display_name_without_connector_uses_model_not_position() {
        let a = display_name(None, Some("Dell".into()), Some("U2720Q".into()), 0);
        let b = display_name(None, Some("Dell".into()), Some("U2720Q".into()), 1);
        assert_eq!(a, "Dell U2720Q");
        assert_eq!(a, b);
        assert_eq!(display_name(Some(" ".into()), None, Some("X1".into()), 2), "X1");
    }

    #[test]
    fn display_name_falls_back_to_position() {
        assert_eq!(display_name(None, None, None, 2), "monitor-2");
    }

    #[test]
    fn display_render_context_is_local() {
        let d = DisplayInfo {
            name: "HDMI-A-1".into(),
            width: 2560,
            height: 1440,
            x: 1920,
            y: 0,
        };
        let ctx = d.render_context();
        assert_eq!(ctx.bounds, Rect::sized(2560.0, 1440.0));
        assert_eq!(ctx.orientation(), Orientation::Landscape);
    }
}
