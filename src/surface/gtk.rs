//! GTK4 + layer-shell wallpaper surface.
//!
//! # Window tree
//!
//! ```text
//! window              (layer-shell, Background layer, anchored to all edges)
//! └ DrawingArea      (cairo draw func → scene::render_frame)
//! ```
//!
//! One window is opened per `gdk::Monitor`, including monitors plugged in
//! after startup.  A single GLib timer queues a redraw on every area each
//! `surface.refresh_secs`; each draw captures the wall clock afresh, so no
//! window carries calendar state between frames.

use crate::config::Config;
use crate::display::{display_name, DisplayInfo, Rect, RenderContext};
use crate::format::ClockFormatter;
use crate::scene::{render_frame, Frame};
use crate::traits::{DisplaySource, Font, Painter, Rgb, TextMetrics, FONT_FAMILY};
use chrono::Local;
use gtk4::prelude::*;
use gtk4::{cairo, gdk, glib};
use gtk4_layer_shell::{Edge, KeyboardMode, Layer, LayerShell};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Errors from bringing up the GTK surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("failed to initialise GTK4: {0}")]
    Init(String),
    #[error("no GDK display available")]
    NoDisplay,
}

//  Cairo painter

/// [`Painter`] over a cairo context, using cairo's built-in text API.
pub struct CairoPainter<'a> {
    cr: &'a cairo::Context,
}

impl<'a> CairoPainter<'a> {
    pub fn new(cr: &'a cairo::Context) -> Self {
        cr.set_antialias(cairo::Antialias::Best);
        Self { cr }
    }

    fn set_colour(&self, colour: Rgb) {
        let (r, g, b) = colour.to_unit();
        self.cr.set_source_rgb(r, g, b);
    }

    fn set_font(&self, font: Font) {
        let weight = if font.bold {
            cairo::FontWeight::Bold
        } else {
            cairo::FontWeight::Normal
        };
        self.cr.select_font_face(FONT_FAMILY, cairo::FontSlant::Normal, weight);
        self.cr.set_font_size(font.size);
    }
}

impl Painter for CairoPainter<'_> {
    type Error = cairo::Error;

    fn fill_rect(&mut self, rect: Rect, colour: Rgb) -> Result<(), cairo::Error> {
        self.set_colour(colour);
        self.cr.rectangle(rect.x, rect.y, rect.width, rect.height);
        self.cr.fill()
    }

    fn draw_ellipse(&mut self, rect: Rect, colour: Rgb) -> Result<(), cairo::Error> {
        self.set_colour(colour);
        self.cr.save()?;
        self.cr.translate(rect.center_x(), rect.center_y());
        self.cr.scale(rect.width / 2.0, rect.height / 2.0);
        self.cr.new_sub_path();
        self.cr.arc(0.0, 0.0, 1.0, 0.0, std::f64::consts::TAU);
        self.cr.restore()?;
        self.cr.fill()
    }

    fn draw_text(
        &mut self,
        x: f64,
        baseline: f64,
        text: &str,
        font: Font,
        colour: Rgb,
    ) -> Result<(), cairo::Error> {
        self.set_font(font);
        self.set_colour(colour);
        self.cr.move_to(x, baseline);
        self.cr.show_text(text)
    }

    fn measure_text(&mut self, text: &str, font: Font) -> Result<TextMetrics, cairo::Error> {
        self.set_font(font);
        let text_ext = self.cr.text_extents(text)?;
        let font_ext = self.cr.font_extents()?;
        Ok(TextMetrics {
            width: text_ext.x_advance(),
            height: font_ext.height(),
            ascent: font_ext.ascent(),
        })
    }
}

//  Monitor enumeration

/// [`DisplaySource`] over the monitors of a GDK display.
pub struct GdkDisplays {
    display: gdk::Display,
}

impl GdkDisplays {
    pub fn new(display: gdk::Display) -> Self {
        Self { display }
    }

    fn monitors(&self) -> Vec<gdk::Monitor> {
        let model = self.display.monitors();
        (0..model.n_items())
            .filter_map(|i| model.item(i))
            .filter_map(|obj| obj.downcast::<gdk::Monitor>().ok())
            .collect()
    }
}

impl DisplaySource for GdkDisplays {
    type Error = SurfaceError;

    fn displays(&self) -> Result<Vec<DisplayInfo>, SurfaceError> {
        Ok(self
            .monitors()
            .iter()
            .enumerate()
            .map(|(i, m)| display_info(i, m))
            .collect())
    }
}

fn display_info(index: usize, monitor: &gdk::Monitor) -> DisplayInfo {
    let geometry = monitor.geometry();
    DisplayInfo {
        name: display_name(
            monitor.connector().map(|s| s.to_string()),
            monitor.manufacturer().map(|s| s.to_string()),
            monitor.model().map(|s| s.to_string()),
            index,
        ),
        width: geometry.width().max(0) as u32,
        height: geometry.height().max(0) as u32,
        x: geometry.x(),
        y: geometry.y(),
    }
}

//  Overlay windows

/// Settings every overlay window needs at draw time.
struct OverlaySettings {
    formatter: ClockFormatter,
    columns: u32,
    namespace: String,
}

/// Open a background-layer window covering `monitor`.
fn open_overlay(
    monitor: &gdk::Monitor,
    info: DisplayInfo,
    settings: Rc<OverlaySettings>,
) -> gtk4::DrawingArea {
    let window = gtk4::Window::new();
    window.init_layer_shell();
    window.set_layer(Layer::Background);
    window.set_namespace(&settings.namespace);
    window.set_keyboard_mode(KeyboardMode::None);
    window.set_monitor(monitor);
    for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
        window.set_anchor(edge, true);
    }
    window.set_exclusive_zone(-1);
    window.set_decorated(false);

    let area = gtk4::DrawingArea::new();
    area.set_hexpand(true);
    area.set_vexpand(true);

    let name = info.name.clone();
    area.set_draw_func(move |_, cr, width, height| {
        let frame = Frame::capture(&Local::now(), &settings.formatter);
        let ctx = RenderContext::new(f64::from(width), f64::from(height));
        let mut painter = CairoPainter::new(cr);
        match render_frame(&mut painter, &ctx, &frame, settings.columns) {
            Ok(()) => debug!(
                "{}: drew {} day {}/{} at {}x{}",
                name,
                frame.time,
                frame.snapshot.day_of_year,
                frame.snapshot.total_days,
                width,
                height
            ),
            Err(e) => warn!("{}: frame failed: {}", name, e),
        }
    });
    window.set_child(Some(&area));

    {
        let window = window.downgrade();
        let name = info.name.clone();
        monitor.connect_invalidate(move |_| {
            info!("{}: monitor removed, closing overlay", name);
            if let Some(window) = window.upgrade() {
                window.close();
            }
        });
    }

    window.present();
    info!(
        "overlay on {} ({}x{} at {},{})",
        info.name, info.width, info.height, info.x, info.y
    );
    area
}

//  Public API

/// Run the GTK4 main loop on the **current** (main) thread.
///
/// Blocks until the main loop exits.
pub fn run_main_loop(config: &Config, formatter: ClockFormatter) -> Result<(), SurfaceError> {
    gtk4::init().map_err(|e| SurfaceError::Init(e.to_string()))?;
    info!("GTK4 initialised on main thread");

    let display = gdk::Display::default().ok_or(SurfaceError::NoDisplay)?;
    let source = GdkDisplays::new(display.clone());

    let settings = Rc::new(OverlaySettings {
        formatter,
        columns: config.grid.columns,
        namespace: config.surface.namespace.clone(),
    });

    let areas: Rc<RefCell<Vec<gtk4::DrawingArea>>> = Rc::new(RefCell::new(Vec::new()));
    let monitors = source.monitors();
    let infos = source.displays()?;
    info!("found {} monitor(s)", infos.len());
    for (monitor, info) in monitors.iter().zip(infos) {
        let area = open_overlay(monitor, info, settings.clone());
        areas.borrow_mut().push(area);
    }

    //  Hotplug
    {
        let areas = areas.clone();
        let settings = settings.clone();
        display
            .monitors()
            .connect_items_changed(move |model, position, _removed, added| {
                for i in position..position + added {
                    let monitor = model
                        .item(i)
                        .and_then(|o| o.downcast::<gdk::Monitor>().ok());
                    let Some(monitor) = monitor else {
                        continue;
                    };
                    let info = display_info(i as usize, &monitor);
                    let area = open_overlay(&monitor, info, settings.clone());
                    areas.borrow_mut().push(area);
                }
            });
    }

    //  Redraw timer
    let refresh = u32::try_from(config.surface.refresh_secs).unwrap_or(u32::MAX);
    glib::timeout_add_seconds_local(refresh, move || {
        let mut areas = areas.borrow_mut();
        areas.retain(|a| a.root().is_some_and(|r| r.is_visible()));
        debug!("tick: redrawing {} overlay(s)", areas.len());
        for area in areas.iter() {
            area.queue_draw();
        }
        glib::ControlFlow::Continue
    });

    info!(
        "redrawing every {}s, {} columns, namespace {}",
        refresh, config.grid.columns, config.surface.namespace
    );

    info!("entering GLib main loop");
    let main_loop = glib::MainLoop::new(None, false);
    main_loop.run();
    info!("GLib main loop exited");
    Ok(())
}
