//! Unit-interval score types.

use super::AgentDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance score constrained to the unit interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// The lowest representable score.
    pub const ZERO: Self = Self(0.0);

    /// Creates a score, rejecting values outside the unit interval.
    ///
    /// # Errors
    ///
    /// Returns [`AgentDomainError::ScoreOutOfRange`] when the value is not a
    /// finite number in `[0, 1]`.
    pub const fn new(value: f64) -> Result<Self, AgentDomainError> {
        if value.is_nan() || value < 0.0 || value > 1.0 {
            return Err(AgentDomainError::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a score by saturating the value into the unit interval.
    ///
    /// Values below zero collapse to `0.0`, values above one collapse to
    /// `1.0`, and `NaN` collapses to `0.0`.
    #[must_use]
    pub const fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        if value < 0.0 {
            return Self(0.0);
        }
        if value > 1.0 {
            return Self(1.0);
        }
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Risk score produced by the anti-fraud check, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(f64);

impl RiskScore {
    /// Creates a risk score by saturating the value into the unit interval.
    ///
    /// `NaN` collapses to `0.0`.
    #[must_use]
    pub const fn clamped(value: f64) -> Self {
        Self(Score::clamped(value).value())
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns whether this risk score strictly exceeds the threshold.
    #[must_use]
    pub const fn exceeds(self, threshold: f64) -> bool {
        self.0 > threshold
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
