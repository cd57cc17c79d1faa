//! Validated inputs for conductor calculations.

use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ElectricPotential, Length};

use crate::support::{
    circuit::Phase,
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    nec::{Gauge, Material, TemperatureRating},
};

/// An input value that failed its numeric constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field}: {source}")]
pub struct InvalidInput {
    /// Name of the offending input.
    pub field: &'static str,
    #[source]
    pub source: ConstraintError,
}

impl InvalidInput {
    pub(super) fn on(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self { field, source }
    }
}

/// Circuit description for conductor selection.
///
/// The current must be strictly positive, the one-way distance non-negative,
/// and the supply voltage strictly positive. A zero distance requests sizing
/// for ampacity alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireSizeInput {
    current: ElectricCurrent,
    distance: Length,
    voltage: ElectricPotential,
    pub material: Material,
    pub phase: Phase,
    pub rating: TemperatureRating,
}

impl WireSizeInput {
    /// Constructs a validated wire size input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the first value that violates its bound.
    pub fn new(
        current: ElectricCurrent,
        distance: Length,
        voltage: ElectricPotential,
        material: Material,
        phase: Phase,
        rating: TemperatureRating,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            current: StrictlyPositive::new(current)
                .map_err(InvalidInput::on("current"))?
                .into_inner(),
            distance: NonNegative::new(distance)
                .map_err(InvalidInput::on("distance"))?
                .into_inner(),
            voltage: StrictlyPositive::new(voltage)
                .map_err(InvalidInput::on("voltage"))?
                .into_inner(),
            material,
            phase,
            rating,
        })
    }

    /// Target load current.
    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.current
    }

    /// One-way length of the conductor run.
    #[must_use]
    pub fn distance(&self) -> Length {
        self.distance
    }

    /// Supply voltage (line-to-line for three-phase).
    #[must_use]
    pub fn voltage(&self) -> ElectricPotential {
        self.voltage
    }

    /// Voltage drop input for this circuit on the given conductor.
    pub(super) fn with_gauge(&self, gauge: Gauge) -> VoltageDropInput {
        VoltageDropInput {
            gauge,
            distance: self.distance,
            current: self.current,
            voltage: self.voltage,
            material: self.material,
            phase: self.phase,
        }
    }
}

/// Conductor run description for a voltage drop calculation.
///
/// The current and distance must be non-negative and the supply voltage
/// strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageDropInput {
    pub gauge: Gauge,
    distance: Length,
    current: ElectricCurrent,
    voltage: ElectricPotential,
    pub material: Material,
    pub phase: Phase,
}

impl VoltageDropInput {
    /// Constructs a validated voltage drop input.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] naming the first value that violates its bound.
    pub fn new(
        gauge: Gauge,
        distance: Length,
        current: ElectricCurrent,
        voltage: ElectricPotential,
        material: Material,
        phase: Phase,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            gauge,
            distance: NonNegative::new(distance)
                .map_err(InvalidInput::on("distance"))?
                .into_inner(),
            current: NonNegative::new(current)
                .map_err(InvalidInput::on("current"))?
                .into_inner(),
            voltage: StrictlyPositive::new(voltage)
                .map_err(InvalidInput::on("voltage"))?
                .into_inner(),
            material,
            phase,
        })
    }

    /// One-way length of the conductor run.
    #[must_use]
    pub fn distance(&self) -> Length {
        self.distance
    }

    /// Load current.
    #[must_use]
    pub fn current(&self) -> ElectricCurrent {
        self.current
    }

    /// Supply voltage (line-to-line for three-phase).
    #[must_use]
    pub fn voltage(&self) -> ElectricPotential {
        self.voltage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{electric_current::ampere, electric_potential::volt, length::foot};

    fn wire_size(amps: f64, feet: f64, volts: f64) -> Result<WireSizeInput, InvalidInput> {
        WireSizeInput::new(
            ElectricCurrent::new::<ampere>(amps),
            Length::new::<foot>(feet),
            ElectricPotential::new::<volt>(volts),
            Material::Copper,
            Phase::Single,
            TemperatureRating::C75,
        )
    }

    #[test]
    fn accepts_valid_circuits() {
        let input = wire_size(30.0, 0.0, 120.0).unwrap();
        assert_eq!(input.current().get::<ampere>(), 30.0);
        assert_eq!(input.distance().get::<foot>(), 0.0);
    }

    #[test]
    fn rejects_non_positive_current() {
        let err = wire_size(0.0, 50.0, 120.0).unwrap_err();
        assert_eq!(err.field, "current");
        assert_eq!(err.source, ConstraintError::Zero);

        let err = wire_size(-10.0, 50.0, 120.0).unwrap_err();
        assert_eq!(err.source, ConstraintError::Negative);
    }

    #[test]
    fn rejects_negative_distance() {
        let err = wire_size(10.0, -1.0, 120.0).unwrap_err();
        assert_eq!(err.field, "distance");
        assert_eq!(err.to_string(), "invalid distance: value must not be negative");
    }

    #[test]
    fn rejects_bad_voltage() {
        assert_eq!(wire_size(10.0, 10.0, 0.0).unwrap_err().field, "voltage");
        assert_eq!(
            wire_size(10.0, 10.0, f64::NAN).unwrap_err().source,
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn voltage_drop_allows_zero_current() {
        let input = VoltageDropInput::new(
            Gauge::Awg10,
            Length::new::<foot>(100.0),
            ElectricCurrent::new::<ampere>(0.0),
            ElectricPotential::new::<volt>(120.0),
            Material::Copper,
            Phase::Single,
        );
        assert!(input.is_ok());
    }
}
