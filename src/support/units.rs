//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (current, potential, length,
//! power, resistance). This module adds quantities that conductor tables need
//! but [`uom`] doesn't name.
//!
//! ## Resistance per length
//!
//! Conductor resistance is tabulated per length of run. Dividing an
//! [`ElectricalResistance`](uom::si::f64::ElectricalResistance) by a
//! [`Length`](uom::si::f64::Length) yields a [`ResistancePerLength`], and
//! multiplying it back by a run length gives a resistance:
//!
//! ```
//! use uom::si::{
//!     electrical_resistance::ohm,
//!     f64::{ElectricalResistance, Length},
//!     length::foot,
//! };
//! use electrical_models::support::units::ResistancePerLength;
//!
//! let per_kft: ResistancePerLength =
//!     ElectricalResistance::new::<ohm>(1.24) / Length::new::<foot>(1000.0);
//! let run: ElectricalResistance = per_kft * Length::new::<foot>(500.0);
//! assert!((run.get::<ohm>() - 0.62).abs() < 1e-12);
//! ```

mod quantities;

pub use quantities::{ResistancePerLength, per_thousand_feet};
