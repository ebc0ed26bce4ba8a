//! Interactive line art app
//!
//! Hosts the [`Scene`] inside an egui central panel. egui's continuous
//! repaint is the frame scheduler and its pointer events are the pointer
//! tracker.

use eframe::egui;
use tracing::{debug, info};

use crate::core::{Params, Rgba, Scene, Surface, Viewport};
use crate::fps::FpsCounter;
use crate::theme::{canvas_visuals, colors, to_color32};
use crate::time::now_millis;

/// Default canvas stroke width, in points
const LINE_WIDTH: f32 = 1.0;

/// [`Surface`] backed by an egui painter, with (0, 0) at the canvas corner
struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    stroke_color: egui::Color32,
    path: Vec<egui::Pos2>,
    closed: bool,
}

impl<'a> EguiSurface<'a> {
    fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self {
            painter,
            origin,
            stroke_color: to_color32(Rgba::BLACK),
            path: Vec::with_capacity(2),
            closed: false,
        }
    }

    fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.origin + egui::vec2(x as f32, y as f32)
    }
}

impl Surface for EguiSurface<'_> {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        let rect = egui::Rect::from_min_size(
            self.to_screen(x, y),
            egui::vec2(width as f32, height as f32),
        );
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke_color = to_color32(color);
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let p = self.to_screen(x, y);
        self.path.push(p);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let p = self.to_screen(x, y);
        self.path.push(p);
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn stroke(&mut self) {
        let stroke = egui::Stroke::new(LINE_WIDTH, self.stroke_color);
        let points = self.path.clone();
        // Closing a two-point path retraces the same segment
        let shape = if self.closed && points.len() > 2 {
            egui::Shape::closed_line(points, stroke)
        } else {
            egui::Shape::line(points, stroke)
        };
        self.painter.add(shape);
    }
}

pub struct LineArtApp {
    scene: Scene,
    fps_counter: FpsCounter,
    last_fps_log: f64,
}

impl LineArtApp {
    pub fn new(cc: &eframe::CreationContext<'_>, viewport: Viewport) -> Self {
        cc.egui_ctx.set_visuals(canvas_visuals());
        info!(
            width = viewport.width,
            height = viewport.height,
            "Line art canvas ready"
        );

        Self {
            scene: Scene::new(Params::default(), viewport),
            fps_counter: FpsCounter::new(),
            last_fps_log: 0.0,
        }
    }

    /// Apply the most recent pointer move, relative to the canvas rect
    fn track_pointer(&mut self, ctx: &egui::Context, canvas: egui::Rect) {
        let moved = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::PointerMoved(pos) => Some(*pos),
                    _ => None,
                })
                .last()
        });
        if let Some(pos) = moved {
            let rel = pos - canvas.min;
            self.scene.set_pointer(rel.x as f64, rel.y as f64);
        }
    }

    fn log_fps(&mut self, now: f64) {
        self.fps_counter.tick(now);
        if now - self.last_fps_log >= 1000.0 {
            debug!(
                fps = format!("{:.0}", self.fps_counter.fps()),
                lines = self.scene.lines().len(),
                "frame stats"
            );
            self.last_fps_log = now;
        }
    }
}

impl eframe::App for LineArtApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Next frame, indefinitely
        ctx.request_repaint();

        let now = now_millis();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_CANVAS))
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) = ui.allocate_painter(available, egui::Sense::hover());
                let canvas = response.rect;

                self.track_pointer(ctx, canvas);

                let mut surface = EguiSurface::new(&painter, canvas.min);
                self.scene.frame(now, &mut surface);
            });

        self.log_fps(now);
    }
}
