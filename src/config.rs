//! Headless run configuration from `LINESCAPE_*` environment overrides

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Run shape, from `LINESCAPE_*` environment overrides
#[derive(Debug)]
pub struct RunConfig {
    pub frames: u64,
    pub fps: f64,
    pub width: f64,
    pub height: f64,
    pub seed: Option<u64>,
}

impl RunConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let fps: f64 = parse(&lookup, "LINESCAPE_FPS", "positive number", 60.0)?;
        if !(fps.is_finite() && fps > 0.0) {
            return Err(ConfigError::Invalid {
                var: "LINESCAPE_FPS",
                value: fps.to_string(),
                expected: "positive number",
            });
        }
        Ok(Self {
            frames: parse(&lookup, "LINESCAPE_FRAMES", "frame count", 600)?,
            fps,
            width: parse(&lookup, "LINESCAPE_WIDTH", "width", 1280.0)?,
            height: parse(&lookup, "LINESCAPE_HEIGHT", "height", 720.0)?,
            seed: match lookup("LINESCAPE_SEED") {
                Some(value) => Some(value.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: "LINESCAPE_SEED",
                    value,
                    expected: "u64 seed",
                })?),
                None => None,
            },
        })
    }

    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.fps
    }
}

fn parse<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            value,
            expected,
        }),
        None => Ok(default),
    }
}
