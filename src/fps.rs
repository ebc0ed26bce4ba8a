//! Rolling frames-per-second counter over the last 60 ticks

pub struct FpsCounter {
    frames: Vec<f64>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: Vec::with_capacity(60),
        }
    }

    /// Record a frame at `now_ms`
    pub fn tick(&mut self, now_ms: f64) {
        self.frames.push(now_ms);
        if self.frames.len() > 60 {
            self.frames.remove(0);
        }
    }

    pub fn fps(&self) -> f64 {
        let (Some(first), Some(last)) = (self.frames.first(), self.frames.last()) else {
            return 0.0;
        };
        let elapsed = last - first;
        if elapsed <= 0.0 {
            return 0.0;
        }
        (self.frames.len() as f64 - 1.0) / (elapsed / 1000.0)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counter_reports_zero() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.fps(), 0.0);
        fps.tick(5.0);
        assert_eq!(fps.fps(), 0.0);
    }

    #[test]
    fn test_steady_ticks_give_rate() {
        let mut fps = FpsCounter::new();
        for i in 0..100 {
            fps.tick(i as f64 * 20.0);
        }
        // window keeps 60 ticks, 20ms apart
        assert!((fps.fps() - 50.0).abs() < 1e-9);
    }
}
