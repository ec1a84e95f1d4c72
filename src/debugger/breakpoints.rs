use std::collections::HashSet;

use tracing::debug;

/// Set of breakpoint line numbers (1-based). Membership is the only semantic.
#[derive(Debug, Clone, Default)]
pub struct Breakpoints {
    points: HashSet<u32>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, line: u32) {
        if self.points.insert(line) {
            debug!(line, "breakpoint set");
        }
    }

    pub fn remove(&mut self, line: u32) {
        if self.points.remove(&line) {
            debug!(line, "breakpoint removed");
        }
    }

    /// Add if absent, remove if present. Returns whether the line is now set.
    pub fn toggle(&mut self, line: u32) -> bool {
        if self.points.contains(&line) {
            self.remove(line);
            false
        } else {
            self.add(line);
            true
        }
    }

    pub fn contains(&self, line: u32) -> bool {
        self.points.contains(&line)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current membership in ascending line order.
    pub fn to_sorted_vec(&self) -> Vec<u32> {
        let mut lines: Vec<u32> = self.points.iter().copied().collect();
        lines.sort_unstable();
        lines
    }
}
