//! Conductor models.
//!
//! This module provides [`twine_core::Model`] implementations for wire sizing,
//! voltage drop, and equipment grounding conductor sizing. The computational
//! core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use electrical_models::models::electrical::conductor::{
//!     WireSizeConfig, WireSizeInput, WireSizer,
//! };
//! use electrical_models::support::{
//!     circuit::Phase,
//!     nec::{Gauge, Material, TemperatureRating},
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     electric_current::ampere, electric_potential::volt,
//!     f64::{ElectricCurrent, ElectricPotential, Length}, length::foot,
//! };
//!
//! let input = WireSizeInput::new(
//!     ElectricCurrent::new::<ampere>(50.0),
//!     Length::new::<foot>(100.0),
//!     ElectricPotential::new::<volt>(240.0),
//!     Material::Copper,
//!     Phase::Single,
//!     TemperatureRating::C75,
//! )
//! .unwrap();
//!
//! let result = WireSizer::new(WireSizeConfig::default()).call(&input).unwrap();
//! assert_eq!(result.gauge, Gauge::Awg6);
//! assert!(result.compliant);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ElectricCurrent;

use crate::support::nec::{Gauge, Material, grounding_conductor};

pub use self::core::{
    DropRating, InvalidInput, MIN_PRACTICAL_ALUMINUM, VoltageDropInput, VoltageDropResult,
    Warning, WireSizeConfig, WireSizeError, WireSizeInput, WireSizeResult, max_distance,
    voltage_drop,
};

/// Selects a conductor for a circuit.
///
/// Delegates to the ampacity-first, voltage-drop-upsizing selector using the
/// wrapped [`WireSizeConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WireSizer {
    config: WireSizeConfig,
}

impl WireSizer {
    #[must_use]
    pub fn new(config: WireSizeConfig) -> Self {
        Self { config }
    }

    /// The configuration this sizer applies.
    #[must_use]
    pub fn config(&self) -> &WireSizeConfig {
        &self.config
    }
}

impl Model for WireSizer {
    type Input = WireSizeInput;
    type Output = WireSizeResult;
    type Error = WireSizeError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::select_wire_size(input, &self.config)
    }
}

/// Computes voltage drop for a fixed conductor.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoltageDropCalculator;

impl Model for VoltageDropCalculator {
    type Input = VoltageDropInput;
    type Output = VoltageDropResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(voltage_drop(input))
    }
}

/// Sizes the equipment grounding conductor for a circuit rating.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundConductorSizer {
    pub material: Material,
}

impl Model for GroundConductorSizer {
    type Input = ElectricCurrent;
    type Output = Gauge;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(grounding_conductor(*input, self.material))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        electric_current::ampere,
        electric_potential::volt,
        f64::{ElectricPotential, Length},
        length::foot,
    };

    use crate::support::{circuit::Phase, nec::TemperatureRating};

    #[test]
    fn wire_sizer_uses_its_config() {
        let input = WireSizeInput::new(
            ElectricCurrent::new::<ampere>(50.0),
            Length::new::<foot>(100.0),
            ElectricPotential::new::<volt>(240.0),
            Material::Copper,
            Phase::Single,
            TemperatureRating::C75,
        )
        .unwrap();

        let strict = WireSizer::default().call(&input).unwrap();
        let loose = WireSizer::new(WireSizeConfig::default().with_max_voltage_drop_percent(5.0))
            .call(&input)
            .unwrap();

        assert_eq!(strict.gauge, Gauge::Awg6);
        assert_eq!(loose.gauge, Gauge::Awg8);
    }

    #[test]
    fn voltage_drop_calculator_delegates() {
        let input = VoltageDropInput::new(
            Gauge::Awg10,
            Length::new::<foot>(75.0),
            ElectricCurrent::new::<ampere>(24.0),
            ElectricPotential::new::<volt>(240.0),
            Material::Copper,
            Phase::Single,
        )
        .unwrap();

        assert_eq!(
            VoltageDropCalculator.call(&input).unwrap(),
            voltage_drop(&input)
        );
    }

    #[test]
    fn ground_conductor_sizer() {
        let copper = GroundConductorSizer::default();
        let aluminum = GroundConductorSizer {
            material: Material::Aluminum,
        };
        let amps = ElectricCurrent::new::<ampere>(100.0);

        assert_eq!(copper.call(&amps).unwrap(), Gauge::Awg8);
        assert_eq!(aluminum.call(&amps).unwrap(), Gauge::Awg6);
    }
}
