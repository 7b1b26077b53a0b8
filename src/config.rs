//! Loader configuration.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Tuning knobs for [`VehicleLoader`](crate::dispatch::VehicleLoader).
///
/// # Examples
///
/// ```
/// use u_parcel::LoaderConfig;
///
/// let config = LoaderConfig::default().with_trials(10).with_max_attempts(5);
/// assert_eq!(config.trials(), 10);
/// assert_eq!(config.max_attempts(), 5);
/// assert_eq!(config.precision(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    trials: usize,
    max_attempts: usize,
    precision: u32,
}

impl LoaderConfig {
    /// Randomized load-search trials per attempt.
    pub const DEFAULT_TRIALS: usize = 30;
    /// Pipeline attempts before a vehicle load is abandoned.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
    /// Decimal places kept in tour costs.
    pub const DEFAULT_PRECISION: u32 = 2;
    /// Largest accepted precision.
    pub const MAX_PRECISION: u32 = 10;

    /// Sets the number of load-search trials.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Sets the attempt ceiling for deadline restarts.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the number of decimal places kept in tour costs.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Load-search trials per attempt.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Attempt ceiling.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Decimal places kept in tour costs.
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.trials == 0 {
            return Err(LoadError::InvalidConfig {
                field: "trials",
                reason: "must be at least 1",
            });
        }
        if self.max_attempts == 0 {
            return Err(LoadError::InvalidConfig {
                field: "max_attempts",
                reason: "must be at least 1",
            });
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(LoadError::InvalidConfig {
                field: "precision",
                reason: "must be at most 10",
            });
        }
        Ok(())
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            trials: Self::DEFAULT_TRIALS,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            precision: Self::DEFAULT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = LoaderConfig::default();
        assert_eq!(c.trials(), 30);
        assert_eq!(c.max_attempts(), 100);
        assert_eq!(c.precision(), 2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let c = LoaderConfig::default().with_trials(0);
        assert!(matches!(
            c.validate(),
            Err(LoadError::InvalidConfig { field: "trials", .. })
        ));
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let c = LoaderConfig::default().with_max_attempts(0);
        assert!(matches!(
            c.validate(),
            Err(LoadError::InvalidConfig {
                field: "max_attempts",
                ..
            })
        ));
    }

    #[test]
    fn test_precision_ceiling() {
        assert!(LoaderConfig::default().with_precision(10).validate().is_ok());
        assert!(LoaderConfig::default().with_precision(11).validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let c: LoaderConfig = serde_json::from_str(r#"{"trials": 5}"#).expect("valid json");
        assert_eq!(c.trials(), 5);
        assert_eq!(c.max_attempts(), LoaderConfig::DEFAULT_MAX_ATTEMPTS);
        assert_eq!(c.precision(), LoaderConfig::DEFAULT_PRECISION);
    }

    #[test]
    fn test_json_round_trip() {
        let c = LoaderConfig::default().with_trials(7).with_precision(3);
        let text = serde_json::to_string(&c).expect("serializable");
        let back: LoaderConfig = serde_json::from_str(&text).expect("valid json");
        assert_eq!(back, c);
    }
}
