//! Per-frame animation driver state
//!
//! [`Scene`] owns everything the animation mutates: oscillator, line
//! registry and pointer position. The host calls [`Scene::frame`] once per
//! display refresh and feeds pointer moves in between frames.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, trace};

use super::error::Viewport;
use super::line::Line;
use super::oscillator::AngleOscillator;
use super::params::Params;
use super::registry::LineRegistry;
use super::surface::{Rgba, Surface};

/// Counters for a single frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrameStats {
    /// Lines appended this frame (always 1)
    pub spawned: usize,
    /// Lines updated and painted
    pub painted: usize,
    /// Dead lines skipped
    pub skipped: usize,
    /// Registry size after the frame
    pub total: usize,
}

pub struct Scene {
    params: Params,
    viewport: Viewport,
    oscillator: AngleOscillator,
    lines: LineRegistry,
    /// Pointer position relative to the surface
    pointer: (f64, f64),
    rng: StdRng,
    frames: u64,
}

impl Scene {
    /// Scene with entropy-seeded line lengths
    pub fn new(params: Params, viewport: Viewport) -> Self {
        Self::with_rng(params, viewport, StdRng::from_entropy())
    }

    /// Scene with reproducible line lengths
    pub fn with_seed(params: Params, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(params, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(params: Params, viewport: Viewport, rng: StdRng) -> Self {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "Scene created, pointer at viewport center"
        );
        Self {
            oscillator: AngleOscillator::new(
                params.degree_delta,
                params.base_angle,
                params.angle_swing,
            ),
            params,
            viewport,
            lines: LineRegistry::new(),
            pointer: viewport.center(),
            rng,
            frames: 0,
        }
    }

    /// Record the latest pointer position; used by the next spawn
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn oscillator(&self) -> &AngleOscillator {
        &self.oscillator
    }

    pub fn lines(&self) -> &LineRegistry {
        &self.lines
    }

    /// Frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Lines whose last computed age is still within the lifetime
    pub fn live_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| !line.is_dead(&self.params))
            .count()
    }

    /// Run one frame at time `now` (ms): clear, advance, spawn, update and
    /// paint every live line in insertion order.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: f64, surface: &mut S) -> FrameStats {
        surface.fill_rect(
            0.0,
            0.0,
            self.viewport.width,
            self.viewport.height,
            Rgba::WHITE,
        );
        self.oscillator.advance();

        let (x, y) = self.pointer;
        let angle = self.oscillator.line_angle();
        let line = Line::spawn(x, y, angle, now, &self.params, &mut self.rng);
        trace!(x, y, angle, len = line.len, "Line spawned");
        self.lines.push(line);

        let drift = self.oscillator.radians();
        let mut stats = FrameStats {
            spawned: 1,
            ..FrameStats::default()
        };
        for line in self.lines.iter_mut() {
            // Not a break: later lines may still be alive
            if line.is_dead(&self.params) {
                stats.skipped += 1;
                continue;
            }
            line.update(now, drift, &self.params);
            line.paint(surface, &self.params);
            stats.painted += 1;
        }
        stats.total = self.lines.len();

        self.frames += 1;
        stats
    }
}
