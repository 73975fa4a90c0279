//! High score tracking
//!
//! Kept in memory for the lifetime of the process; survives restarts but
//! is never persisted.

/// Best score seen so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score beats the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Offer a score. Returns true if it became the new best.
    pub fn record(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        log::info!("New high score: {}", score);
        true
    }

    pub fn best(&self) -> u32 {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_max() {
        let mut hs = HighScore::new();
        assert_eq!(hs.best(), 0);
        assert!(!hs.record(0));
        assert!(hs.record(5));
        assert!(!hs.record(3));
        assert!(!hs.record(5));
        assert!(hs.record(9));
        assert_eq!(hs.best(), 9);
    }
}
