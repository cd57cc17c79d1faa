use thiserror::Error;
use uom::si::{electric_current::ampere, f64::ElectricCurrent};

use crate::support::nec::{Material, TemperatureRating};

use super::InvalidInput;

/// Errors that can occur while selecting a conductor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WireSizeError {
    /// An input value violated its constraint.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),

    /// The required current exceeds every tabulated ampacity.
    ///
    /// Returned instead of silently picking the largest conductor.
    #[error(
        "no wire large enough: {} A exceeds the largest {material} ampacity at {rating} ({} A)",
        amps(.required),
        amps(.largest)
    )]
    NoWireLargeEnough {
        required: ElectricCurrent,
        largest: ElectricCurrent,
        material: Material,
        rating: TemperatureRating,
    },
}

fn amps(current: &ElectricCurrent) -> f64 {
    current.get::<ampere>()
}
