//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The [`twine_core::Model`]
//! implementations are thin adapters that delegate to the core. Types the core
//! needs callers to construct (inputs, results, errors) are re-exported from the
//! model module.

pub mod electrical;
