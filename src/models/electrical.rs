//! Electrical systems models.
//!
//! This module contains models for building and industrial power wiring:
//! conductor sizing, voltage drop, and power conversions.

pub mod conductor;
pub mod power;
