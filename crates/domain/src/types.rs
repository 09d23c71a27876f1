//! Clamped score newtypes shared across the engine.

use serde::{Deserialize, Serialize};

/// Confidence score clamped to [0.0, 1.0] range.
///
/// # Examples
///
/// ```
/// use careerpath_domain::Confidence;
///
/// let c = Confidence::new(0.75);
/// assert_eq!(c.value(), 0.75);
///
/// assert_eq!(Confidence::new(1.5).value(), 1.0);
/// assert_eq!(Confidence::new(-0.5).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping the value to [0.0, 1.0].
    ///
    /// NaN collapses to zero.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Confidence derived from a relevance score as `min(cap, base + score * slope)`.
    #[must_use]
    pub fn scaled(score: f64, base: f64, slope: f64, cap: f64) -> Self {
        Self::new((base + score * slope).min(cap))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(conf: Confidence) -> Self {
        conf.0
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Urgency of a recommendation or skill gap, clamped to 1 (low) ..= 5 (act now).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const MAX: Priority = Priority(5);

    /// Create a priority, clamping into 1..=5.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 5))
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.0
    }

    /// One step more urgent, saturating at 5.
    #[must_use]
    pub fn raised(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("priority must be between 1 and 5, got {value}"))
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        p.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
