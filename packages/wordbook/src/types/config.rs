//! Configuration for batch runs.

use std::time::Duration;

/// Configuration for a batch pipeline run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Pause between words. A courtesy delay for provider rate limits,
    /// not a retry backoff.
    pub delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }
}

impl BatchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pause between words.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(BatchConfig::default().delay, Duration::from_millis(500));
    }

    #[test]
    fn test_with_delay() {
        let config = BatchConfig::new().with_delay(Duration::ZERO);
        assert_eq!(config.delay, Duration::ZERO);
    }
}
