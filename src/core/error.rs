//! Setup-time errors
//!
//! The per-frame loop cannot fail; only the surface handed to it at startup
//! is validated.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

/// Drawing surface size, fixed at startup
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, SetupError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SetupError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_positive_size() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.center(), (400.0, 300.0));
    }

    #[test]
    fn test_rejects_degenerate_size() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, -1.0).is_err());
        assert!(Viewport::new(f64::NAN, 600.0).is_err());
        assert!(Viewport::new(f64::INFINITY, 600.0).is_err());
    }

    #[test]
    fn test_error_message_names_size() {
        let err = Viewport::new(0.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "invalid viewport size 0x0");
    }
}
