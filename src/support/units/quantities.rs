use uom::{
    si::{
        ISQ, Quantity, SI, electrical_resistance::ohm, f64::ElectricalResistance, length::foot,
    },
    typenum::{N2, N3, P1, Z0},
};

/// Resistance per unit length, Ω/m in SI.
pub type ResistancePerLength = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`ResistancePerLength`] from a value in ohms per 1000 feet.
///
/// NEC Chapter 9 tables tabulate conductor resistance in Ω/kft.
#[must_use]
pub fn per_thousand_feet(ohms: f64) -> ResistancePerLength {
    ElectricalResistance::new::<ohm>(ohms) / uom::si::f64::Length::new::<foot>(1000.0)
}
