//! A single fading, growing, drifting line segment

use rand::Rng;

use super::oscillator::TO_RAD;
use super::params::Params;
use super::surface::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Creation time (ms, same clock as `now` passed to `update`)
    pub birth: f64,
    /// Elapsed ms since birth, as of the last `update`
    pub age: f64,
    /// Midpoint X
    pub x: f64,
    /// Midpoint Y
    pub y: f64,
    /// Full length of the segment
    pub len: f64,
    /// Orientation in degrees, fixed at birth
    degree: f64,
}

impl Line {
    /// Spawn a line with a random initial length in `[min_length, max_length)`.
    pub fn spawn<R: Rng>(
        x: f64,
        y: f64,
        degree: f64,
        now: f64,
        params: &Params,
        rng: &mut R,
    ) -> Self {
        let len = rng.gen_range(params.min_length..params.max_length);
        Self::with_length(x, y, degree, len, now)
    }

    pub fn with_length(x: f64, y: f64, degree: f64, len: f64, now: f64) -> Self {
        Self {
            birth: now,
            age: 0.0,
            x,
            y,
            len,
            degree,
        }
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// Advance age, length and position.
    ///
    /// `drift_rad` is the oscillator's current angle, not this line's own
    /// orientation, so every live line drifts in the same direction. Callers
    /// skip dead lines; this method does not check.
    pub fn update(&mut self, now: f64, drift_rad: f64, params: &Params) {
        self.age = now - self.birth;
        self.len += params.length_delta;
        self.x += drift_rad.sin() * params.position_delta;
        self.y -= drift_rad.cos() * params.position_delta;
    }

    /// Stroke opacity for the current age; slightly negative just past death.
    pub fn alpha(&self, params: &Params) -> f64 {
        1.0 - self.age / params.line_lifetime_ms
    }

    /// Both endpoints, half a length away from the midpoint along `degree`.
    pub fn endpoints(&self) -> ((f64, f64), (f64, f64)) {
        let rad = self.degree * TO_RAD;
        let half_x = rad.cos() * (self.len / 2.0);
        let half_y = rad.sin() * (self.len / 2.0);
        (
            (self.x + half_x, self.y + half_y),
            (self.x - half_x, self.y - half_y),
        )
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S, params: &Params) {
        let ((x1, y1), (x2, y2)) = self.endpoints();

        surface.set_stroke_style(Rgba::BLACK.with_alpha(self.alpha(params)));
        surface.begin_path();
        surface.move_to(x1, y1);
        surface.line_to(x2, y2);
        surface.close_path();
        surface.stroke();
    }

    #[inline]
    pub fn is_dead(&self, params: &Params) -> bool {
        self.age > params.line_lifetime_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::{DrawOp, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn test_spawn_initial_state() {
        let params = Params::default();
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..1000 {
            let line = Line::spawn(10.0, 20.0, 45.0, 500.0, &params, &mut rng);
            assert!(
                (300.0..400.0).contains(&line.len),
                "length {} out of range on spawn {}",
                line.len,
                i
            );
            assert_eq!(line.age, 0.0);
            assert_eq!(line.birth, 500.0);
            assert_eq!(line.degree(), 45.0);
        }
    }

    #[test]
    fn test_update_grows_and_ages_monotonically() {
        let params = Params::default();
        let mut line = Line::with_length(0.0, 0.0, 30.0, 300.0, 1000.0);
        let mut prev_len = line.len;
        let mut prev_age = line.age;
        for frame in 1..=50 {
            let now = 1000.0 + frame as f64 * 16.0;
            line.update(now, 0.3, &params);
            assert!(line.len > prev_len);
            assert!(line.age >= prev_age);
            prev_len = line.len;
            prev_age = line.age;
        }
        assert_eq!(line.len, 300.0 + 50.0 * 3.0);
        assert_eq!(line.age, 800.0);
        assert_eq!(line.degree(), 30.0, "orientation never changes");
    }

    #[test]
    fn test_update_drifts_along_given_angle() {
        let params = Params::default();
        let mut line = Line::with_length(100.0, 100.0, 0.0, 300.0, 0.0);

        // drift angle 0: straight up by 1.5
        line.update(16.0, 0.0, &params);
        assert!(approx(line.x, 100.0));
        assert!(approx(line.y, 98.5));

        // drift angle 90 deg: right by 1.5, independent of the line's own 0 deg
        line.update(32.0, 90.0 * TO_RAD, &params);
        assert!(approx(line.x, 101.5));
        assert!(approx(line.y, 98.5));
    }

    #[test]
    fn test_is_dead_boundary() {
        let params = Params::default();
        let mut line = Line::with_length(0.0, 0.0, 0.0, 300.0, 0.0);

        line.update(2000.0, 0.0, &params);
        assert!(!line.is_dead(&params), "exactly at lifetime is alive");

        line.update(2000.0001, 0.0, &params);
        assert!(line.is_dead(&params));
    }

    #[test]
    fn test_alpha_half_life() {
        let params = Params::default();
        let mut line = Line::with_length(0.0, 0.0, 0.0, 300.0, 0.0);
        line.age = 1000.0;
        assert_eq!(line.alpha(&params), 0.5);
        line.age = 2010.0;
        assert!(line.alpha(&params) < 0.0);
    }

    #[test]
    fn test_endpoints_diagonal() {
        let line = Line::with_length(100.0, 100.0, 45.0, 300.0, 0.0);
        let ((x1, y1), (x2, y2)) = line.endpoints();
        assert!(approx(x1, 206.07) && approx(y1, 206.07), "({}, {})", x1, y1);
        assert!(approx(x2, -6.07) && approx(y2, -6.07), "({}, {})", x2, y2);
    }

    #[test]
    fn test_paint_strokes_black_segment() {
        let params = Params::default();
        let mut line = Line::with_length(100.0, 100.0, 45.0, 300.0, 0.0);
        line.age = 500.0;
        let mut surface = RecordingSurface::new();
        line.paint(&mut surface, &params);

        match &surface.ops()[0] {
            DrawOp::Stroke {
                points,
                closed,
                color,
            } => {
                assert_eq!(points.len(), 2);
                assert!(*closed);
                assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
                assert_eq!(color.a, 0.75);
            }
            other => panic!("expected stroke, got {:?}", other),
        }
    }
}
