//! Entry point for the **lifecal** wallpaper daemon.
//!
//! With the `surface-gtk` feature the main thread runs the GLib main loop
//! and paints one overlay per monitor.  Without it, a headless loop logs the
//! year progress on every tick instead.
//!
//! `lifecal --print` prints a single progress line and exits.

use chrono::Local;
use lifecal::config::Config;
use lifecal::format::ClockFormatter;
use lifecal::scene::Frame;
use log::{error, info};

/// Resolve the config directory (`$XDG_CONFIG_HOME/lifecal`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("lifecal")
}

/// Load `$XDG_CONFIG_HOME/lifecal/config.json`, falling back to compiled-in
/// defaults when the file is absent.  A file that exists but is malformed
/// is fatal.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) if e.is_missing() => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn summary(frame: &Frame) -> String {
    format!(
        "{} {} | day {}/{} of {} | {} days left | {}",
        frame.time,
        frame.date,
        frame.snapshot.day_of_year,
        frame.snapshot.total_days,
        frame.snapshot.year,
        frame.snapshot.days_left,
        frame.progress_text()
    )
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let formatter = match config.validate() {
        Ok(f) => f,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if std::env::args().any(|a| a == "--print") {
        println!("{}", summary(&Frame::capture(&Local::now(), &formatter)));
        return;
    }

    start_event_loop(config, formatter);
}

//  Event loops

#[cfg(feature = "surface-gtk")]
fn start_event_loop(config: Config, formatter: ClockFormatter) {
    if let Err(e) = lifecal::surface::gtk::run_main_loop(&config, formatter) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "surface-gtk"))]
fn start_event_loop(config: Config, formatter: ClockFormatter) {
    let interval = std::time::Duration::from_secs(config.surface.refresh_secs);
    info!(
        "lifecal running headless, ticking every {}s",
        interval.as_secs()
    );
    loop {
        let frame = Frame::capture(&Local::now(), &formatter);
        info!("{}", summary(&frame));
        std::thread::sleep(interval);
    }
}
