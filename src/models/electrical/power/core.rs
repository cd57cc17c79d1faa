//! Amps, watts, and volt-amperes.
//!
//! For a supply voltage `V` and load current `I`:
//!
//! | Supply       | Real power `P`     | Apparent power `S` |
//! |--------------|--------------------|--------------------|
//! | DC           | `V·I`              | `V·I`              |
//! | Single-phase | `V·I·pf`           | `V·I`              |
//! | Three-phase  | `√3·V·I·pf`        | `√3·V·I`           |
//!
//! Three-phase voltages are line-to-line. Apparent power is carried in a
//! [`Power`] quantity; one watt here reads as one volt-ampere.

use uom::si::f64::{ElectricCurrent, ElectricPotential, Power};

use crate::support::{
    circuit::Supply,
    constraint::{Constrained, NonNegative, StrictlyPositive},
};

/// Load current drawn by a real power demand.
#[must_use]
pub fn current_from_power(
    power: Constrained<Power, NonNegative>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    supply: Supply,
) -> ElectricCurrent {
    power.into_inner() / (voltage.into_inner() * supply.real_power_factor())
}

/// Load current drawn by an apparent power demand (VA).
#[must_use]
pub fn current_from_apparent_power(
    apparent: Constrained<Power, NonNegative>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    supply: Supply,
) -> ElectricCurrent {
    apparent.into_inner() / (voltage.into_inner() * supply.apparent_power_factor())
}

/// Real power delivered by a load current.
#[must_use]
pub fn power_from_current(
    current: Constrained<ElectricCurrent, NonNegative>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    supply: Supply,
) -> Power {
    current.into_inner() * voltage.into_inner() * supply.real_power_factor()
}

/// Apparent power (VA) delivered by a load current.
#[must_use]
pub fn apparent_power_from_current(
    current: Constrained<ElectricCurrent, NonNegative>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    supply: Supply,
) -> Power {
    current.into_inner() * voltage.into_inner() * supply.apparent_power_factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current::ampere,
        electric_potential::volt,
        power::{kilowatt, watt},
    };

    use crate::support::circuit::PowerFactor;

    fn volts(v: f64) -> Constrained<ElectricPotential, StrictlyPositive> {
        StrictlyPositive::new(ElectricPotential::new::<volt>(v)).unwrap()
    }

    fn watts(w: f64) -> Constrained<Power, NonNegative> {
        NonNegative::new(Power::new::<watt>(w)).unwrap()
    }

    fn amps(a: f64) -> Constrained<ElectricCurrent, NonNegative> {
        NonNegative::new(ElectricCurrent::new::<ampere>(a)).unwrap()
    }

    #[test]
    fn dc() {
        let i = current_from_power(watts(1200.0), volts(12.0), Supply::Dc);
        assert_relative_eq!(i.get::<ampere>(), 100.0);

        let p = power_from_current(amps(100.0), volts(12.0), Supply::Dc);
        assert_relative_eq!(p.get::<watt>(), 1200.0);
    }

    #[test]
    fn single_phase_with_power_factor() {
        let supply = Supply::SinglePhase(PowerFactor::new(0.8).unwrap());

        let i = current_from_power(watts(1920.0), volts(240.0), supply);
        assert_relative_eq!(i.get::<ampere>(), 10.0, epsilon = 1e-12);

        let s = apparent_power_from_current(amps(10.0), volts(240.0), supply);
        assert_relative_eq!(s.get::<watt>(), 2400.0, epsilon = 1e-9);
    }

    #[test]
    fn three_phase() {
        let supply = Supply::ThreePhase(PowerFactor::new(0.9).unwrap());

        // 50 kW at 480 V, pf 0.9: 50000 / (√3 × 480 × 0.9) ≈ 66.82 A
        let i = current_from_power(
            NonNegative::new(Power::new::<kilowatt>(50.0)).unwrap(),
            volts(480.0),
            supply,
        );
        assert_relative_eq!(i.get::<ampere>(), 66.822_947_8, epsilon = 1e-6);

        let i = current_from_apparent_power(watts(75_000.0), volts(208.0), supply);
        assert_relative_eq!(
            i.get::<ampere>(),
            75_000.0 / (3.0_f64.sqrt() * 208.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn conversions_invert_each_other() {
        let supply = Supply::ThreePhase(PowerFactor::new(0.85).unwrap());
        let p = power_from_current(amps(42.0), volts(415.0), supply);
        let i = current_from_power(NonNegative::new(p).unwrap(), volts(415.0), supply);
        assert_relative_eq!(i.get::<ampere>(), 42.0, epsilon = 1e-12);
    }
}
