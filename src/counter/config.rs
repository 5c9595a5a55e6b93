//! Counter configuration and the range invariants it must satisfy.
//!
//! A configuration is replaced wholesale (from the settings window or the
//! config file) and revalidated on every use; an invalid configuration
//! never panics, it fails closed with a diagnostic message instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// When the falloff perturbation displaces the ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FalloffMode {
    /// Only while a drag is in flight (default).
    #[default]
    WhileActive,
    /// On every frame, regardless of interaction state.
    Always,
}

/// A configuration that violates one of the range invariants.
///
/// Variants are ordered the way validation checks them; the first
/// violation wins and its `Display` text is shown verbatim to the user.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_value` is not strictly greater than `min_value`.
    #[error("max must exceed min")]
    MaxNotAboveMin,
    /// `step` is zero or negative.
    #[error("step must be positive")]
    StepNotPositive,
    /// `step` does not evenly divide `max_value - min_value`.
    #[error("step must divide range")]
    StepDoesNotDivide,
    /// `major_division` does not evenly divide the range.
    #[error("major division must divide range")]
    MajorDoesNotDivide,
    /// `numbered_division` does not evenly divide the range.
    #[error("numbered division must divide range")]
    NumberedDoesNotDivide,
}

/// Full configuration of the counter control.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Show the internal-state overlay next to the control.
    pub debug: bool,
    /// Render the selected range in the foreground color instead of the
    /// accent color.
    pub monochrome: bool,
    /// Master toggle for the numeric tick labels.
    pub numbers: bool,
    /// Lateral spacing between a numeric label and its tick, in pixels.
    pub numbers_offset: f32,
    /// Smallest selectable value.
    pub min_value: i64,
    /// Largest selectable value.
    pub max_value: i64,
    /// Distance between adjacent selectable values.
    pub step: i64,
    /// Every Nth tick renders wider.
    pub major_division: i64,
    /// Every Nth tick shows its numeric value.
    pub numbered_division: i64,
    /// Step the selection with the mouse wheel.
    pub wheel: bool,
    /// Falloff gating; see [`FalloffMode`].
    pub falloff: FalloffMode,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            debug: true,
            monochrome: true,
            numbers: true,
            numbers_offset: 8.0,
            min_value: 0,
            max_value: 120,
            step: 1,
            major_division: 5,
            numbered_division: 10,
            wheel: false,
            falloff: FalloffMode::default(),
        }
    }
}

impl CounterConfig {
    /// Check the five range invariants in order and report the first
    /// violation. No side effects.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value <= self.min_value {
            return Err(ConfigError::MaxNotAboveMin);
        }
        if self.step <= 0 {
            return Err(ConfigError::StepNotPositive);
        }
        let range = self.max_value - self.min_value;
        if range % self.step != 0 {
            return Err(ConfigError::StepDoesNotDivide);
        }
        // A non-positive division cannot divide the range; treating it as
        // this violation also keeps the remainder well-defined.
        if self.major_division <= 0 || range % self.major_division != 0 {
            return Err(ConfigError::MajorDoesNotDivide);
        }
        if self.numbered_division <= 0 || range % self.numbered_division != 0 {
            return Err(ConfigError::NumberedDoesNotDivide);
        }
        Ok(())
    }

    /// True when the tick at `index` renders with the emphasized width.
    pub fn is_major_tick(&self, index: usize) -> bool {
        self.major_division > 0 && index as i64 % self.major_division == 0
    }

    /// True when the tick at `index` shows its numeric label.
    pub fn is_numbered_tick(&self, index: usize) -> bool {
        self.numbered_division > 0 && index as i64 % self.numbered_division == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CounterConfig::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_range_is_reported_first() {
        let config = CounterConfig {
            min_value: 10,
            max_value: 5,
            step: 0,
            ..CounterConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error, ConfigError::MaxNotAboveMin);
        assert_eq!(error.to_string(), "max must exceed min");
    }

    #[test]
    fn zero_step_is_rejected() {
        let config = CounterConfig {
            min_value: 0,
            max_value: 100,
            step: 0,
            ..CounterConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error, ConfigError::StepNotPositive);
        assert_eq!(error.to_string(), "step must be positive");
    }

    #[test]
    fn step_must_divide_range() {
        let config = CounterConfig {
            min_value: 0,
            max_value: 100,
            step: 7,
            ..CounterConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error, ConfigError::StepDoesNotDivide);
        assert_eq!(error.to_string(), "step must divide range");
    }

    #[test]
    fn major_division_must_divide_range() {
        let config = CounterConfig {
            major_division: 7,
            ..CounterConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MajorDoesNotDivide));
    }

    #[test]
    fn numbered_division_must_divide_range() {
        let config = CounterConfig {
            numbered_division: 7,
            ..CounterConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert_eq!(error.to_string(), "numbered division must divide range");
    }

    #[test]
    fn non_positive_divisions_fail_closed() {
        let major_zero = CounterConfig {
            major_division: 0,
            ..CounterConfig::default()
        };
        assert_eq!(major_zero.validate(), Err(ConfigError::MajorDoesNotDivide));

        let numbered_negative = CounterConfig {
            numbered_division: -5,
            ..CounterConfig::default()
        };
        assert_eq!(
            numbered_negative.validate(),
            Err(ConfigError::NumberedDoesNotDivide)
        );
    }

    #[test]
    fn tick_emphasis_follows_index_modulo() {
        let config = CounterConfig::default();
        assert!(config.is_major_tick(0));
        assert!(config.is_major_tick(5));
        assert!(!config.is_major_tick(3));
        assert!(config.is_numbered_tick(10));
        assert!(!config.is_numbered_tick(5));
    }
}
