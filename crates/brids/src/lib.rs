//! Validation, formatting and synthetic generation of Brazilian identifiers.
//!
//! Two independent modules: [`license_plate`] for vehicle plates (legacy and
//! Mercosul patterns) and [`phone`] for landline and mobile numbers. Every
//! function is pure and operates on string slices; the generators draw from a
//! caller-supplied or process-wide random source and always produce output
//! that passes the matching validity predicate.
//!
//! Only structural validity is checked — no function verifies that a plate
//! or number actually exists.

pub mod errors;
pub mod license_plate;
pub mod phone;

pub use errors::ParseFormatError;
pub use license_plate::PlateFormat;
