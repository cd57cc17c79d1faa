//! Longest run a conductor supports within a voltage drop limit.

use uom::si::{
    f64::{ElectricCurrent, ElectricPotential, Length, Ratio},
    ratio::ratio,
};

use crate::support::{
    circuit::Phase,
    constraint::{Constrained, NonNegative, StrictlyPositive},
    nec::{Gauge, Material, wire_property},
};

/// Returns the longest one-way run that keeps voltage drop at or below `max_drop`.
///
/// This inverts [`voltage_drop`](super::voltage_drop):
/// `L = (max_drop × V) / (k × I × R)`.
#[must_use]
pub fn max_distance(
    gauge: Gauge,
    material: Material,
    phase: Phase,
    current: Constrained<ElectricCurrent, StrictlyPositive>,
    voltage: Constrained<ElectricPotential, StrictlyPositive>,
    max_drop: Constrained<Ratio, NonNegative>,
) -> Length {
    let allowed: ElectricPotential = voltage.into_inner() * max_drop.into_inner().get::<ratio>();
    let per_length = wire_property(gauge).resistance(material);
    allowed / (current.into_inner() * per_length * phase.drop_multiplier())
}
