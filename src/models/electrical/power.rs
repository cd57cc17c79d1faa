//! Power conversion models.
//!
//! Conversions between load current and real or apparent power for DC,
//! single-phase, and three-phase supplies. The [`LoadCurrent`] adapter exposes
//! the most common one, watts to amps, as a [`twine_core::Model`].

mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{ElectricCurrent, ElectricPotential, Power};

use crate::support::{
    circuit::Supply,
    constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive},
};

pub use self::core::{
    apparent_power_from_current, current_from_apparent_power, current_from_power,
    power_from_current,
};

/// A real power demand on a supply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    power: Constrained<Power, NonNegative>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    pub supply: Supply,
}

impl Load {
    /// Constructs a validated load.
    ///
    /// # Errors
    ///
    /// Returns an error if `power` is negative or `voltage` is not strictly positive.
    pub fn new(power: Power, voltage: ElectricPotential, supply: Supply) -> ConstraintResult<Self> {
        Ok(Self {
            power: NonNegative::new(power)?,
            voltage: StrictlyPositive::new(voltage)?,
            supply,
        })
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power.into_inner()
    }

    #[must_use]
    pub fn voltage(&self) -> ElectricPotential {
        self.voltage.into_inner()
    }
}

/// Computes the current drawn by a [`Load`].
///
/// # Example
///
/// ```
/// use electrical_models::models::electrical::power::{Load, LoadCurrent};
/// use electrical_models::support::circuit::{PowerFactor, Supply};
/// use twine_core::Model;
/// use uom::si::{
///     electric_current::ampere, electric_potential::volt,
///     f64::{ElectricPotential, Power}, power::watt,
/// };
///
/// let load = Load::new(
///     Power::new::<watt>(1800.0),
///     ElectricPotential::new::<volt>(120.0),
///     Supply::SinglePhase(PowerFactor::unity()),
/// )
/// .unwrap();
///
/// let amps = LoadCurrent.call(&load).unwrap();
/// assert!((amps.get::<ampere>() - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadCurrent;

impl Model for LoadCurrent {
    type Input = Load;
    type Output = ElectricCurrent;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(current_from_power(input.power, input.voltage, input.supply))
    }
}
