//! Append-only store of every line ever spawned
//!
//! Dead lines stay in place as tombstones; the frame loop skips them. The
//! store therefore grows by one line per frame for the whole session.

use tracing::debug;

use super::line::Line;

/// Log a milestone every this many lines
const GROWTH_LOG_INTERVAL: usize = 10_000;

#[derive(Debug, Default)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line; insertion order is draw order
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
        if self.lines.len() % GROWTH_LOG_INTERVAL == 0 {
            debug!(lines = self.lines.len(), "Line registry grew");
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Line> {
        self.lines.iter_mut()
    }

    /// Total number of lines, dead ones included
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut registry = LineRegistry::new();
        assert!(registry.is_empty());

        for i in 0..5 {
            registry.push(Line::with_length(i as f64, 0.0, 0.0, 300.0, i as f64));
        }

        assert_eq!(registry.len(), 5);
        let xs: Vec<f64> = registry.iter().map(|l| l.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut registry = LineRegistry::new();
        registry.push(Line::with_length(0.0, 0.0, 0.0, 300.0, 0.0));
        for line in registry.iter_mut() {
            line.len += 10.0;
        }
        assert_eq!(registry.iter().next().map(|l| l.len), Some(310.0));
    }
}
