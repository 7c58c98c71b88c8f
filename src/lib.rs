//! **lifecal** — the year as a grid of dots, drawn on the desktop.
//!
//! Each display gets a wallpaper-layer overlay showing the time, the date
//! and one dot per day of the current year: elapsed days filled, today
//! highlighted, the rest dim.  Everything is recomputed from the wall clock
//! on each redraw (once a minute by default).
//!
//! # Architecture
//!
//! The calendar itself is pure arithmetic:
//!
//! * [`year`] — leap years, ordinal day, days left, progress percentage,
//!   and past/current/future classification of a day.
//! * [`layout`] — fitting a year's worth of dots into a rectangle.
//!
//! Drawing goes through two traits so the calendar is not coupled to any
//! toolkit:
//!
//! * [`traits::DisplaySource`] — which displays exist.
//! * [`traits::Painter`] — fill, ellipse and text primitives.
//!
//! [`scene`] composes one frame against a [`traits::Painter`]; the GTK4
//! layer-shell backend in [`surface`] implements both traits.

pub mod config;
pub mod display;
pub mod format;
pub mod layout;
pub mod scene;
pub mod surface;
pub mod traits;
pub mod year;
