/// Running hit/miss tally for one sprint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScoreCounter {
    hits: u32,
    misses: u32,
}

impl ScoreCounter {
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    /// Percentage of keystrokes that were correct, in [0, 100]. An
    /// untouched counter reports exactly 0 rather than dividing by zero.
    pub fn accuracy(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64 * 100.0
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
