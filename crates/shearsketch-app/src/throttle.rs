//! Rate-limited diagnostics.

/// Lets one call through every `every` calls.
#[derive(Debug, Clone)]
pub struct LogThrottle {
    every: u64,
    seen: u64,
}

impl LogThrottle {
    /// `every` of zero is treated as one (no throttling).
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            seen: 0,
        }
    }

    /// Count a call; returns true when this one should be logged.
    pub fn tick(&mut self) -> bool {
        let emit = self.seen % self.every == 0;
        self.seen += 1;
        emit
    }

    /// Total calls counted so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_first_of_each_window() {
        let mut throttle = LogThrottle::new(3);
        let emitted: Vec<bool> = (0..7).map(|_| throttle.tick()).collect();
        assert_eq!(emitted, vec![true, false, false, true, false, false, true]);
        assert_eq!(throttle.seen(), 7);
    }

    #[test]
    fn test_zero_means_every_call() {
        let mut throttle = LogThrottle::new(0);
        assert!(throttle.tick());
        assert!(throttle.tick());
    }
}
