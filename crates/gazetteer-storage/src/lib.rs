//! # Gazetteer Storage
//!
//! Flat-file persistence for country catalogues.
//!
//! This crate reads and writes the comma-separated data files used by the
//! gazetteer tools, one country record per line.
//!
//! ## Features
//!
//! - **read_catalogue**: Load a catalogue from a data file, with line-numbered parse errors
//! - **write_catalogue**: Save a catalogue in the same data file format
//! - **write_listing**: Save a catalogue as its human-readable listing
//!
//! ## Example
//!
//! ```rust,ignore
//! use gazetteer_storage::{read_catalogue, write_catalogue};
//!
//! let catalogue = read_catalogue("country_data.csv").unwrap();
//! let dense = catalogue.filter_by_density(200.0, 300.0).unwrap();
//! write_catalogue("dense_countries.csv", &dense).unwrap();
//! ```

pub mod error;
pub mod flat_file;

// Re-exports
pub use error::StorageError;
pub use flat_file::{data_line, read_catalogue, write_catalogue, write_listing};
