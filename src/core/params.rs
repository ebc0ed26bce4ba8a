//! Fixed animation constants
//!
//! One place for every tuning value of the line animation. The interactive
//! app always runs with `Params::default()`.

use serde::{Deserialize, Serialize};

/// Animation constants shared by the oscillator, lines and the frame loop
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Lifetime of a line in milliseconds
    pub line_lifetime_ms: f64,
    /// Oscillator advance per frame (degrees)
    pub degree_delta: f64,
    /// Length growth per update
    pub length_delta: f64,
    /// Position drift per update
    pub position_delta: f64,
    /// Lower bound of the initial line length (inclusive)
    pub min_length: f64,
    /// Upper bound of the initial line length (exclusive)
    pub max_length: f64,
    /// Center of the spawn angle pendulum (degrees)
    pub base_angle: f64,
    /// Amplitude of the spawn angle pendulum (degrees)
    pub angle_swing: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            line_lifetime_ms: 2000.0,
            degree_delta: 0.5,
            length_delta: 3.0,
            position_delta: 1.5,
            min_length: 300.0,
            max_length: 400.0,
            // Pendulum extremes land on diagonals: -315 and +405
            base_angle: 45.0,
            angle_swing: 360.0,
        }
    }
}
