//! Tolerant hill climbing configuration.

use crate::error::Result;

/// Configuration parameters for tolerant hill climbing.
///
/// # Examples
///
/// ```
/// use tour_metaheur::tolerant::TolerantConfig;
///
/// let config = TolerantConfig::default()
///     .with_max_no_improvement_streak(500)
///     .with_seed(7);
/// assert_eq!(config.max_no_improvement_streak, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TolerantConfig {
    /// Consecutive non-improving draws tolerated before stopping.
    pub max_no_improvement_streak: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TolerantConfig {
    fn default() -> Self {
        Self {
            max_no_improvement_streak: 1000,
            seed: None,
        }
    }
}

impl TolerantConfig {
    /// Sets the no-improvement budget.
    pub fn with_max_no_improvement_streak(mut self, n: usize) -> Self {
        self.max_no_improvement_streak = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Every streak length is accepted; zero returns the initial tour
    /// without drawing.
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TolerantConfig::default();
        assert_eq!(config.max_no_improvement_streak, 1000);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_accepts_any_streak() {
        assert!(TolerantConfig::default().validate().is_ok());
        assert!(TolerantConfig::default()
            .with_max_no_improvement_streak(0)
            .validate()
            .is_ok());
    }
}
