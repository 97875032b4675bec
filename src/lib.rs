//! RIB Parser Library
//!
//! A Rust library for decoding Recon Instruments flight HUD track logs
//! (`.RIB` files) and converting them to GPX.
//!
//! A RIB file is a 9-byte header followed by fixed 20-byte records. A record
//! whose first byte has the high bit set starts a new track and carries its
//! date; every other record is a telemetry sample belonging to the most
//! recently started track.
//!
//! # Features
//!
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rib_parser::{export_to_gpx, parse_rib_file, ExportOptions};
//! use std::path::Path;
//!
//! let input = Path::new("FLIGHT.RIB");
//! match parse_rib_file(input).unwrap() {
//!     Some(log) => {
//!         let report = export_to_gpx(&log, input, &ExportOptions::default()).unwrap();
//!         println!("Wrote {} points", report.points_written);
//!     }
//!     None => println!("No tracks found"),
//! }
//! ```
//!
//! # Public API
//!
//! ## Parsing Functions
//! - [`parse_rib_file`] - Decode a RIB file from disk
//! - [`parse_rib_bytes`] - Decode RIB data from memory
//! - [`decode_record`] - Decode a single 20-byte record
//!
//! ## Data Types
//! - [`RibLog`] - Decoded tracks plus header and record statistics
//! - [`Track`] / [`TrackPoint`] - Recording sessions and their samples
//! - [`ExportOptions`] / [`ExportReport`] - GPX export configuration and results
//!
//! ## Export Functions
//! - [`write_gpx`] - Render tracks as GPX text
//! - [`export_to_gpx`] - Write a decoded log to a `.gpx` file
//! - [`compute_export_path`] - Output path for an input file

pub mod conversion;
pub mod error;
pub mod export;
pub mod filters;
pub mod gpx;
pub mod parser;
pub mod types;

pub use conversion::*;
pub use error::*;
pub use export::*;
pub use filters::*;
pub use gpx::*;
pub use parser::*;
pub use types::*;
