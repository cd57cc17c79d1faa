//! Circuit descriptors shared by conductor and power models.

use std::{cmp::Ordering, fmt, ops::Deref};

use serde::{Deserialize, Serialize};
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{ConstraintError, ConstraintResult};

/// Number of phases in an AC circuit.
///
/// Single-phase voltage drop counts both the outgoing and return conductor,
/// so the drop multiplier is 2. Balanced three-phase circuits use √3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Single,
    Three,
}

impl Phase {
    /// Multiplier applied to `I × R` to obtain conductor voltage drop.
    #[must_use]
    pub fn drop_multiplier(self) -> f64 {
        match self {
            Self::Single => 2.0,
            Self::Three => 3.0_f64.sqrt(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single-phase"),
            Self::Three => f.write_str("three-phase"),
        }
    }
}

/// Power factor of an AC load, in the half-open interval (0, 1].
///
/// # Examples
///
/// ```
/// use electrical_models::support::circuit::PowerFactor;
///
/// let pf = PowerFactor::new(0.85).unwrap();
/// assert_eq!(pf.value(), 0.85);
///
/// assert!(PowerFactor::new(0.0).is_err());
/// assert!(PowerFactor::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct PowerFactor(Ratio);

impl PowerFactor {
    /// Unity power factor (purely resistive load).
    #[must_use]
    pub fn unity() -> Self {
        Self(Ratio::new::<ratio>(1.0))
    }

    /// Creates a [`PowerFactor`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not in (0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(Self(Ratio::new::<ratio>(value))),
        }
    }

    /// Returns the power factor as a plain number.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0.get::<ratio>()
    }
}

impl Default for PowerFactor {
    fn default() -> Self {
        Self::unity()
    }
}

impl Deref for PowerFactor {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Supply system feeding a load.
///
/// Three-phase voltages are line-to-line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Supply {
    /// Direct current.
    Dc,
    /// Single-phase alternating current.
    SinglePhase(PowerFactor),
    /// Balanced three-phase alternating current.
    ThreePhase(PowerFactor),
}

impl Supply {
    /// Factor `k` such that real power is `P = k × V × I`.
    #[must_use]
    pub(crate) fn real_power_factor(&self) -> f64 {
        match self {
            Self::Dc => 1.0,
            Self::SinglePhase(pf) => pf.value(),
            Self::ThreePhase(pf) => 3.0_f64.sqrt() * pf.value(),
        }
    }

    /// Factor `k` such that apparent power is `S = k × V × I`.
    #[must_use]
    pub(crate) fn apparent_power_factor(&self) -> f64 {
        match self {
            Self::Dc | Self::SinglePhase(_) => 1.0,
            Self::ThreePhase(_) => 3.0_f64.sqrt(),
        }
    }
}

impl From<Phase> for Supply {
    /// Maps a phase count to an AC supply at unity power factor.
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Single => Self::SinglePhase(PowerFactor::unity()),
            Phase::Three => Self::ThreePhase(PowerFactor::unity()),
        }
    }
}
