use serde::{Deserialize, Serialize};
use uom::si::{f64::Ratio, ratio::percent};

/// Configuration for conductor selection.
///
/// Deserializes with missing fields taking their defaults, so a host can
/// override only what it needs. `max_voltage_drop` is expressed as a fraction
/// (0.03 for 3%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireSizeConfig {
    /// Largest acceptable voltage drop, as a share of supply voltage.
    ///
    /// Must be non-negative; selection rejects a negative or NaN limit.
    pub max_voltage_drop: Ratio,

    /// Maximum number of upsizing steps taken to satisfy `max_voltage_drop`.
    pub max_iters: usize,
}

impl Default for WireSizeConfig {
    fn default() -> Self {
        Self {
            max_voltage_drop: Ratio::new::<percent>(3.0),
            max_iters: 20,
        }
    }
}

impl WireSizeConfig {
    /// Returns this configuration with a different voltage drop limit, in percent.
    #[must_use]
    pub fn with_max_voltage_drop_percent(self, max: f64) -> Self {
        Self {
            max_voltage_drop: Ratio::new::<percent>(max),
            ..self
        }
    }
}
