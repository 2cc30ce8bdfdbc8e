//! `roster-io` — File loading and export for roster sheets.
//!
//! Loaders hand the engine raw cell rows; character encoding, delimiter
//! sniffing, and blank-row filtering are handled here so the engine never
//! sees them. Export writes the normalized roster back out for archival
//! or further editing in a spreadsheet.

pub mod csv;
pub mod error;
pub mod export;
pub mod xlsx;

pub use error::IoError;
