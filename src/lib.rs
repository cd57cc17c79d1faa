//! # Electrical Models
//!
//! Conductor sizing, voltage drop, and power conversion models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: NEC reference tables, circuit descriptors, numeric
//!   constraints, and unit extensions used by models.
//!
//! ## Conventions
//!
//! All physical quantities are [`uom`] `f64` SI quantities. Inputs are
//! validated once when constructed, and every calculation after that is a
//! pure function of its inputs. Conditions an installer should review are
//! reported as warnings on the result rather than as errors.
//!
//! Modules in [`support`] are public because they're useful to front ends,
//! but their APIs are not stable.

pub mod models;
pub mod support;
