//! # Room Planner Core
//!
//! Core types and utilities shared by the room planner crates.
//! Provides unit conversion, the error taxonomy, and shared constants.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{DocumentError, ValidationError};
pub use units::{
    format_dimension, from_canonical, parse_length, pixels_per_unit, to_canonical, LengthUnit,
};
