//! Result type for conductor selection.

use serde::Serialize;
use uom::si::{
    f64::{ElectricCurrent, Ratio},
    ratio::percent,
};

use crate::support::nec::{Gauge, Material, TemperatureRating};

use super::{VoltageDropResult, Warning};

/// Selected conductor, its voltage drop, and any advisory warnings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireSizeResult {
    /// Selected conductor size.
    pub gauge: Gauge,

    /// Conductor material.
    pub material: Material,

    /// Insulation temperature rating used for the ampacity lookup.
    pub rating: TemperatureRating,

    /// Allowable ampacity of the selected conductor.
    pub ampacity: ElectricCurrent,

    /// Voltage drop on the selected conductor.
    pub voltage_drop: VoltageDropResult,

    /// Voltage drop limit the selection was checked against.
    pub max_voltage_drop: Ratio,

    /// Whether ampacity covers the load and voltage drop is within the limit.
    pub compliant: bool,

    /// Minimum equipment grounding conductor, same material.
    pub ground: Gauge,

    /// Number of sizes stepped up from the ampacity-based choice.
    pub upsized: usize,

    pub warnings: Vec<Warning>,
}

impl WireSizeResult {
    /// Human-readable recommendation summarizing the selection.
    #[must_use]
    pub fn recommendation(&self) -> String {
        let conductor = format!("{} {}", self.gauge.label(), self.material);
        let ground = format!("{} {}", self.ground.label(), self.material);
        let drop_pct = self.voltage_drop.percent_value();

        if self.compliant {
            format!(
                "Use {conductor} conductors rated {} with a {ground} equipment grounding \
                 conductor. Voltage drop is {drop_pct:.2}%. {}",
                self.rating,
                self.voltage_drop.rating.advisory()
            )
        } else {
            format!(
                "{conductor} carries the load, but voltage drop of {drop_pct:.2}% exceeds the \
                 {:.2}% limit. Consider a higher supply voltage, parallel conductors, or a \
                 shorter run.",
                self.max_voltage_drop.get::<percent>()
            )
        }
    }

    /// Whether any warning of the given shape is present.
    #[must_use]
    pub fn has_warning(&self, predicate: impl Fn(&Warning) -> bool) -> bool {
        self.warnings.iter().any(predicate)
    }
}
