//! Supporting utilities used by models.
//!
//! These modules are public because hosts building calculator front ends
//! need the identifiers and tables directly, but their APIs are not stable.

pub mod circuit;
pub mod constraint;
pub mod nec;
pub mod units;
