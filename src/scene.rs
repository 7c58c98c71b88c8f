//! Composition of one overlay frame.
//!
//! [`render_frame`] turns a [`Frame`] into [`Painter`] calls for a single
//! display.  Two arrangements exist, picked by the display's
//! [`Orientation`]:
//!
//! ```text
//! Portrait                    Landscape
//! ┌──────────────┐            ┌────────┬──────────────────────────┐
//! │              │            │ 09:41  │   ● ● ● ● ● ● ● ● ● ● ●  │
//! │    09:41     │            │ Wed, … │   ● ● ● ● ● ● ○ ○ ○ ○ ○  │
//! │  Wed, Oct 14 │            │        │   ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○  │
//! │              │            │ Days…  │   ○ ○ ○ ○ ○ ○ ○ ○ ○ ○ ○  │
//! └──────────────┘            │ Prog…  │                          │
//!                             └────────┴──────────────────────────┘
//! ```
//!
//! Text in the landscape info panel is aligned to the grid area: the top
//! of the clock with its top edge, the stats row with its bottom edge.

use crate::display::{Orientation, Rect, RenderContext};
use crate::format::ClockFormatter;
use crate::layout::{GridLayout, LayoutError};
use crate::traits::{Font, Painter, Rgb, TextMetrics};
use crate::year::{classify_dot, compute_snapshot, CalendarSnapshot, DotState};
use chrono::{DateTime, TimeZone};
use log::debug;
use std::fmt;

//  Palette

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const TEXT: Rgb = Rgb(255, 255, 255);
pub const MUTED: Rgb = Rgb(150, 150, 150);
pub const HIGHLIGHT: Rgb = Rgb(255, 69, 0);
pub const DOT_PAST: Rgb = Rgb(255, 255, 255);
pub const DOT_CURRENT: Rgb = HIGHLIGHT;
pub const DOT_FUTURE: Rgb = Rgb(50, 50, 50);

//  Layout constants

/// Left margin of the landscape info panel.
const MARGIN: f64 = 60.0;
/// Extra indent of the clock beyond [`MARGIN`].
const CLOCK_INDENT: f64 = 40.0;
/// Share of the width taken by the landscape info panel.
const INFO_SPLIT: f64 = 0.3;
/// Share of the grid panel (per axis) available to the dots.
const GRID_SCALE: f64 = 0.7;
/// Vertical gap between clock and date in portrait.
const PORTRAIT_SPACING: f64 = 20.0;
/// Extra height of the portrait date box.
const PORTRAIT_DATE_PAD: f64 = 20.0;
/// Gap between the clock line and the date line in landscape.
const DATE_SPACING: f64 = 15.0;
/// Vertical gap between the two stat rows.
const STAT_ROW_SPACING: f64 = 10.0;
/// Horizontal gap between a stat label and its value.
const STAT_LABEL_GAP: f64 = 15.0;

/// Everything that changes between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub snapshot: CalendarSnapshot,
    /// Clock line, already formatted.
    pub time: String,
    /// Date line, already formatted.
    pub date: String,
}

impl Frame {
    /// Snapshot `now` and format its clock and date lines.
    pub fn capture<Tz: TimeZone>(now: &DateTime<Tz>, formatter: &ClockFormatter) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            snapshot: compute_snapshot(now),
            time: formatter.time(now),
            date: formatter.date(now),
        }
    }

    /// Progress with one decimal, e.g. `"78.6%"`.
    pub fn progress_text(&self) -> String {
        format!("{:.1}%", self.snapshot.progress_percent)
    }
}

/// Failure to render one frame.
#[derive(Debug, thiserror::Error)]
pub enum SceneError<E: std::error::Error + 'static> {
    #[error("painter error: {0}")]
    Paint(#[source] E),
    #[error("grid layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Colour of a dot in the given state.
pub fn dot_colour(state: DotState) -> Rgb {
    match state {
        DotState::Past => DOT_PAST,
        DotState::Current => DOT_CURRENT,
        DotState::Future => DOT_FUTURE,
    }
}

/// Area of a landscape display reserved for the dot grid.
///
/// The right `1 - INFO_SPLIT` of the display is the grid panel; the grid
/// area is [`GRID_SCALE`] of that panel in each axis, centred in it.
/// Intermediate values are truncated to whole pixels.
pub fn landscape_grid_area(bounds: Rect) -> Rect {
    let split_x = (bounds.width * INFO_SPLIT).trunc();
    let panel_w = bounds.width - split_x;
    let panel_h = bounds.height;
    let grid_w = (panel_w * GRID_SCALE).trunc();
    let grid_h = (panel_h * GRID_SCALE).trunc();
    Rect::new(
        bounds.x + split_x + ((panel_w - grid_w) / 2.0).floor(),
        bounds.y + ((panel_h - grid_h) / 2.0).floor(),
        grid_w,
        grid_h,
    )
}

/// Paint `frame` onto a surface described by `ctx`.
///
/// In landscape, a grid layout error is reported only after the
/// background and text have been painted, so a frame with a bad grid still
/// shows the time.
pub fn render_frame<P: Painter>(
    painter: &mut P,
    ctx: &RenderContext,
    frame: &Frame,
    columns: u32,
) -> Result<(), SceneError<P::Error>> {
    let bounds = ctx.bounds;
    painter
        .fill_rect(bounds, BACKGROUND)
        .map_err(SceneError::Paint)?;

    match ctx.orientation() {
        Orientation::Portrait => {
            debug!("portrait frame {}x{}", bounds.width, bounds.height);
            render_portrait(painter, bounds, frame).map_err(SceneError::Paint)
        }
        Orientation::Landscape => {
            debug!("landscape frame {}x{}", bounds.width, bounds.height);
            let area = landscape_grid_area(bounds);
            render_info_panel(painter, bounds, area, frame).map_err(SceneError::Paint)?;
            let layout = GridLayout::fit(frame.snapshot.total_days, columns, area)?;
            render_dots(painter, &layout, frame.snapshot.day_of_year).map_err(SceneError::Paint)
        }
    }
}

//  Portrait

fn render_portrait<P: Painter>(
    painter: &mut P,
    bounds: Rect,
    frame: &Frame,
) -> Result<(), P::Error> {
    let clock_font = Font::bold((bounds.width * 0.12).trunc());
    let date_font = Font::regular((clock_font.size * 0.35).trunc());

    let time_m = painter.measure_text(&frame.time, clock_font)?;
    let date_m = painter.measure_text(&frame.date, date_font)?;

    let total_h = time_m.height + date_m.height + PORTRAIT_SPACING;
    let start_y = bounds.y + ((bounds.height - total_h) / 2.0).floor();

    let clock_box = Rect::new(bounds.x, start_y, bounds.width, time_m.height);
    draw_centred(painter, clock_box, &frame.time, clock_font, time_m, TEXT)?;

    let date_y = start_y + time_m.height + PORTRAIT_SPACING;
    let date_box = Rect::new(bounds.x, date_y, bounds.width, date_m.height + PORTRAIT_DATE_PAD);
    draw_centred(painter, date_box, &frame.date, date_font, date_m, MUTED)
}

fn draw_centred<P: Painter>(
    painter: &mut P,
    rect: Rect,
    text: &str,
    font: Font,
    metrics: TextMetrics,
    colour: Rgb,
) -> Result<(), P::Error> {
    let x = rect.x + (rect.width - metrics.width) / 2.0;
    let baseline = rect.y + (rect.height - metrics.height) / 2.0 + metrics.ascent;
    painter.draw_text(x, baseline, text, font, colour)
}

//  Landscape

fn render_info_panel<P: Painter>(
    painter: &mut P,
    bounds: Rect,
    grid_area: Rect,
    frame: &Frame,
) -> Result<(), P::Error> {
    let h = bounds.height;
    let clock_x = bounds.x + MARGIN + CLOCK_INDENT;

    // Clock: top of the glyphs level with the top of the grid area.
    let clock_font = Font::bold((h * 0.12).trunc());
    let clock_m = painter.measure_text(&frame.time, clock_font)?;
    let clock_y = grid_area.y + clock_m.ascent;
    painter.draw_text(clock_x, clock_y, &frame.time, clock_font, TEXT)?;

    let date_font = Font::regular((clock_font.size * 0.35).trunc());
    let date_m = painter.measure_text(&frame.date, date_font)?;
    let date_y = clock_y + date_m.height + DATE_SPACING;
    painter.draw_text(clock_x + 2.0, date_y, &frame.date, date_font, MUTED)?;

    // Stats: bottom row level with the bottom of the grid area.
    let value_font = Font::bold((h * 0.035).trunc());
    let label_font = Font::regular((value_font.size * 0.7).trunc());
    let value_height = painter.measure_text("0", value_font)?.height;

    let bottom_y = grid_area.bottom();
    let progress = frame.progress_text();
    draw_stat(painter, clock_x, bottom_y, "Progress", &progress, label_font, value_font)?;

    let days_left = frame.snapshot.days_left.to_string();
    let row2_y = bottom_y - value_height - STAT_ROW_SPACING;
    draw_stat(painter, clock_x, row2_y, "Days Left", &days_left, label_font, value_font)
}

fn draw_stat<P: Painter>(
    painter: &mut P,
    x: f64,
    baseline: f64,
    label: &str,
    value: &str,
    label_font: Font,
    value_font: Font,
) -> Result<(), P::Error> {
    let label_w = painter.measure_text(label, label_font)?.width;
    painter.draw_text(x, baseline, label, label_font, MUTED)?;
    painter.draw_text(x + label_w + STAT_LABEL_GAP, baseline, value, value_font, HIGHLIGHT)
}

fn render_dots<P: Painter>(
    painter: &mut P,
    layout: &GridLayout,
    day_of_year: u32,
) -> Result<(), P::Error> {
    for (day, rect) in layout.dots() {
        painter.draw_ellipse(rect, dot_colour(classify_dot(day, day_of_year)))?;
    }
    Ok(())
}

//  Tests
