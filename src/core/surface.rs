//! Immediate-mode drawing surface
//!
//! The frame loop and lines draw through [`Surface`], a canvas-2d shaped
//! trait. The browser app backs it with an egui painter; tests and the CLI
//! use [`RecordingSurface`].

/// RGBA color with 0..=255 color channels and a 0..=1 alpha (CSS `rgba()`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }
}

/// 2D immediate-mode drawing context
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
}

// ============================================================================
// RecordingSurface
// ============================================================================

/// One recorded drawing call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    /// A stroked path, with the stroke style active when `stroke()` ran
    Stroke {
        points: Vec<(f64, f64)>,
        closed: bool,
        color: Rgba,
    },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Debug)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
    stroke_style: Rgba,
    path: Vec<(f64, f64)>,
    closed: bool,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            stroke_style: Rgba::BLACK,
            path: Vec::new(),
            closed: false,
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of `stroke()` calls recorded
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count()
    }

    /// Drop recorded ops, keeping the allocation
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.ops.push(DrawOp::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.stroke_style = color;
    }

    fn begin_path(&mut self) {
        self.path.clear();
        self.closed = false;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push((x, y));
    }

    fn close_path(&mut self) {
        self.closed = true;
    }

    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke {
            points: self.path.clone(),
            closed: self.closed,
            color: self.stroke_style,
        });
    }
}
