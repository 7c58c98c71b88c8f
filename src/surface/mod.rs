//! Concrete drawing surfaces.
//!
//! When the `surface-gtk` feature is enabled, [`gtk::run_main_loop`] takes
//! over the main thread, opens one wallpaper window per monitor and redraws
//! them all on a fixed interval through the GLib main loop.

#[cfg(feature = "surface-gtk")]
pub mod gtk;
