//! Closed-form conductor voltage drop.

use serde::Serialize;
use uom::si::{
    f64::{ElectricPotential, ElectricalResistance, Ratio},
    ratio,
};

use crate::support::nec::wire_property;

use super::VoltageDropInput;

/// Qualitative classification of a voltage drop percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropRating {
    /// At most 2%.
    Excellent,
    /// Above 2%, at most 3%.
    Good,
    /// Above 3%, at most 5%.
    Marginal,
    /// Above 5%.
    Poor,
}

impl DropRating {
    /// Classifies a voltage drop percentage.
    #[must_use]
    pub fn from_percent(value: Ratio) -> Self {
        let pct = value.get::<ratio::percent>();
        if pct <= 2.0 {
            Self::Excellent
        } else if pct <= 3.0 {
            Self::Good
        } else if pct <= 5.0 {
            Self::Marginal
        } else {
            Self::Poor
        }
    }

    /// Fixed advisory text for this rating.
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent: voltage drop is well within recommended limits.",
            Self::Good => "Good: voltage drop is within the 3% recommended for branch circuits.",
            Self::Marginal => {
                "Marginal: voltage drop is above 3% but within the 5% recommended for \
                 feeders and branch circuits combined. Consider a larger conductor."
            }
            Self::Poor => {
                "Poor: voltage drop exceeds 5%. Use a larger conductor, a higher \
                 voltage, or a shorter run."
            }
        }
    }
}

/// Voltage drop along a conductor run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoltageDropResult {
    /// Voltage lost along the run.
    pub drop: ElectricPotential,

    /// Drop as a share of supply voltage.
    pub percent: Ratio,

    /// Supply voltage less the drop.
    pub voltage_at_load: ElectricPotential,

    /// Classification of `percent`.
    pub rating: DropRating,
}

impl VoltageDropResult {
    /// The drop percentage as a plain number (3.0 for 3%).
    #[must_use]
    pub fn percent_value(&self) -> f64 {
        self.percent.get::<ratio::percent>()
    }
}

/// Computes voltage drop for a conductor run.
///
/// `drop = k × I × R × L`, where `R` is the tabulated DC resistance per length
/// for the gauge and material, `L` is the one-way run length, and `k` is 2 for
/// single-phase (outgoing and return conductors) or √3 for three-phase.
///
/// # Example
///
/// ```
/// use electrical_models::models::electrical::conductor::{VoltageDropInput, voltage_drop};
/// use electrical_models::support::{circuit::Phase, nec::{Gauge, Material}};
/// use uom::si::{
///     electric_current::ampere, electric_potential::volt,
///     f64::{ElectricCurrent, ElectricPotential, Length}, length::foot,
/// };
///
/// let input = VoltageDropInput::new(
///     Gauge::Awg12,
///     Length::new::<foot>(50.0),
///     ElectricCurrent::new::<ampere>(16.0),
///     ElectricPotential::new::<volt>(120.0),
///     Material::Copper,
///     Phase::Single,
/// )
/// .unwrap();
///
/// let result = voltage_drop(&input);
/// // 2 × 16 A × 1.98 Ω/kft × 0.05 kft = 3.168 V
/// assert!((result.drop.get::<volt>() - 3.168).abs() < 1e-9);
/// assert!((result.percent_value() - 2.64).abs() < 1e-9);
/// ```
#[must_use]
pub fn voltage_drop(input: &VoltageDropInput) -> VoltageDropResult {
    let resistance: ElectricalResistance =
        wire_property(input.gauge).resistance(input.material) * input.distance();
    let drop: ElectricPotential = input.current() * resistance * input.phase.drop_multiplier();
    let fraction: Ratio = drop / input.voltage();

    VoltageDropResult {
        drop,
        percent: fraction,
        voltage_at_load: input.voltage() - drop,
        rating: DropRating::from_percent(fraction),
    }
}
