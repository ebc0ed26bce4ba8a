//! Oscillating spawn angle
//!
//! A degree accumulator that only ever grows. `sin` folds it back into a
//! bounded pendulum, so there is no wraparound.

/// Converts degrees to radians.
pub const TO_RAD: f64 = std::f64::consts::PI / 180.0;

#[derive(Clone, Debug)]
pub struct AngleOscillator {
    /// Current accumulator value in degrees, unbounded
    degree: f64,
    delta: f64,
    base_angle: f64,
    swing: f64,
}

impl AngleOscillator {
    pub fn new(delta: f64, base_angle: f64, swing: f64) -> Self {
        Self {
            degree: 0.0,
            delta,
            base_angle,
            swing,
        }
    }

    /// Advance the accumulator by one frame
    #[inline]
    pub fn advance(&mut self) {
        self.degree += self.delta;
    }

    pub fn degree(&self) -> f64 {
        self.degree
    }

    /// Accumulator in radians, used for the shared drift direction
    #[inline]
    pub fn radians(&self) -> f64 {
        self.degree * TO_RAD
    }

    /// Orientation in degrees for a line spawned now.
    ///
    /// Swings between `base - swing` and `base + swing`.
    pub fn line_angle(&self) -> f64 {
        self.base_angle + self.radians().sin() * self.swing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_oscillator() -> AngleOscillator {
        AngleOscillator::new(0.5, 45.0, 360.0)
    }

    #[test]
    fn test_advance_is_unbounded() {
        let mut osc = default_oscillator();
        for _ in 0..2000 {
            osc.advance();
        }
        // 1000 degrees, no wraparound at 360
        assert_eq!(osc.degree(), 1000.0);
    }

    #[test]
    fn test_line_angle_starts_at_base() {
        let osc = default_oscillator();
        assert_eq!(osc.line_angle(), 45.0);
    }

    #[test]
    fn test_line_angle_extremes_are_diagonal() {
        let mut osc = default_oscillator();
        // 90 degrees -> sin = 1
        for _ in 0..180 {
            osc.advance();
        }
        assert!((osc.line_angle() - 405.0).abs() < 1e-9);
        // 270 degrees -> sin = -1
        for _ in 0..360 {
            osc.advance();
        }
        assert!((osc.line_angle() + 315.0).abs() < 1e-9);
    }

    #[test]
    fn test_line_angle_stays_in_range() {
        let mut osc = default_oscillator();
        for step in 0..10_000 {
            osc.advance();
            let a = osc.line_angle();
            assert!(
                (-315.0..=405.0).contains(&a),
                "angle {} out of range at step {}",
                a,
                step
            );
        }
    }
}
