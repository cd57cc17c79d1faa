//! Conductor sizing and voltage drop.
//!
//! Selection is ampacity-first: the smallest conductor whose NEC Table 310.16
//! rating covers the load is chosen, then stepped up through the table until
//! voltage drop is within the configured limit. Table monotonicity
//! guarantees each step lowers voltage drop without lowering ampacity, so the
//! bounded walk either satisfies the limit or reports the largest size tried.

mod config;
mod error;
mod input;
mod max_distance;
mod results;
mod select;
mod voltage_drop;
mod warning;

pub use config::WireSizeConfig;
pub use error::WireSizeError;
pub use input::{InvalidInput, VoltageDropInput, WireSizeInput};
pub use max_distance::max_distance;
pub use results::WireSizeResult;
pub use voltage_drop::{DropRating, VoltageDropResult, voltage_drop};
pub use warning::{MIN_PRACTICAL_ALUMINUM, Warning};

pub(crate) use select::select_wire_size;
