//! National Electrical Code reference data.
//!
//! Regulatory tables transcribed from the NEC, plus the identifiers used to
//! index them.
//!
//! - [`Gauge`]: conductor sizes from 14 AWG to 2000 kcmil, ordered smallest first
//! - [`Material`], [`TemperatureRating`]: conductor material and insulation class
//! - [`ampacity()`]: Table 310.16 allowable ampacities
//! - [`wire_property()`]: Chapter 9 Table 8 conductor properties
//! - [`grounding_conductor()`]: Table 250.122 equipment grounding conductors
//! - [`small_conductor_limit()`]: 240.4(D) overcurrent limits for small conductors
//!
//! Every table is ordered by [`Gauge`] (or by threshold, for grounding) and is
//! monotonic in that order. Conductor selection relies on this: stepping to the
//! next larger gauge never lowers ampacity or raises resistance.
//!
//! # Example
//!
//! ```
//! use electrical_models::support::nec::{Gauge, Material, TemperatureRating, ampacity};
//! use uom::si::electric_current::ampere;
//!
//! let amps = ampacity(Gauge::Awg6, Material::Copper, TemperatureRating::C75).unwrap();
//! assert_eq!(amps.get::<ampere>(), 65.0);
//! ```

mod ampacity;
mod gauge;
mod grounding;
mod material;
mod overcurrent;
mod properties;

pub use ampacity::{AMPACITY_TABLE, AmpacityEntry, Ampacities, ampacity, rated_conductors};
pub use gauge::{Gauge, UnknownGauge};
pub use grounding::{GROUNDING_TABLE, GroundingEntry, grounding_conductor};
pub use material::{Material, TemperatureRating};
pub use overcurrent::small_conductor_limit;
pub use properties::{WIRE_PROPERTIES, WireProperty, wire_property};
