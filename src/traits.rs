//! Seams between the calendar and whatever actually puts pixels on screen.
//!
//! * [`DisplaySource`] enumerates the displays that should each get an
//!   overlay.
//! * [`Painter`] is the handful of immediate-mode primitives the
//!   [`scene`](crate::scene) needs: rectangle fill, ellipse fill, text.
//!
//! The GTK surface in [`surface`](crate::surface) implements both; tests
//! use in-memory doubles.

use crate::display::{DisplayInfo, Rect};

/// Font family used for every text item.
pub const FONT_FAMILY: &str = "Inter";

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to `0.0..=1.0`.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }
}

/// Text style.  The family is always [`FONT_FAMILY`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Size in drawing units.
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

/// Extents of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width.
    pub width: f64,
    /// Line height (ascent + descent).
    pub height: f64,
    /// Distance from the top of the line box to the baseline.
    pub ascent: f64,
}

/// Source of the displays that should each get an overlay.
pub trait DisplaySource {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Return every display currently connected.
    fn displays(&self) -> Result<Vec<DisplayInfo>, Self::Error>;
}

/// Immediate-mode drawing surface.
///
/// Coordinates are surface-local.  Text is positioned by its left edge and
/// baseline, which is how toolkits typically expose glyph drawing.
pub trait Painter {
    /// The error type produced by this painter.
    type Error: std::error::Error + 'static;

    /// Fill `rect` with `colour`.
    fn fill_rect(&mut self, rect: Rect, colour: Rgb) -> Result<(), Self::Error>;

    /// Fill the ellipse inscribed in `rect`.
    fn draw_ellipse(&mut self, rect: Rect, colour: Rgb) -> Result<(), Self::Error>;

    /// Draw `text` with its left edge at `x` and its baseline at `baseline`.
    fn draw_text(
        &mut self,
        x: f64,
        baseline: f64,
        text: &str,
        font: Font,
        colour: Rgb,
    ) -> Result<(), Self::Error>;

    /// Measure `text` as [`draw_text`](Painter::draw_text) would lay it out.
    fn measure_text(&mut self, text: &str, font: Font) -> Result<TextMetrics, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    //  Mock DisplaySource

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    struct FixedDisplays(Vec<DisplayInfo>);

    impl DisplaySource for FixedDisplays {
        type Error = MockError;

        fn displays(&self) -> Result<Vec<DisplayInfo>, MockError> {
            Ok(self.0.clone())
        }
    }

    struct Unplugged;

    impl DisplaySource for Unplugged {
        type Error = MockError;

        fn displays(&self) -> Result<Vec<DisplayInfo>, MockError> {
            Err(MockError)
        }
    }

    #[test]
    fn each_display_gets_its_own_context() {
        let src = FixedDisplays(vec![
            DisplayInfo {
                name: "DP-1".into(),
                width: 1920,
                height: 1080,
                x: 0,
                y: 0,
            },
            DisplayInfo {
                name: "DP-2".into(),
                width: 1080,
                height: 1920,
                x: 1920,
                y: 0,
            },
        ]);
        let contexts: Vec<_> = src
            .displays()
            .unwrap()
            .iter()
            .map(DisplayInfo::render_context)
            .collect();
        assert_eq!(contexts.len(), 2);
        assert_eq!(contexts[0].bounds, Rect::sized(1920.0, 1080.0));
        assert_eq!(contexts[1].bounds, Rect::sized(1080.0, 1920.0));
    }

    #[test]
    fn source_errors_propagate() {
        assert!(Unplugged.displays().is_err());
    }

    #[test]
    fn rgb_to_unit() {
        assert_eq!(Rgb(255, 0, 51).to_unit(), (1.0, 0.0, 0.2));
    }
}
