//! `bouquet` command-line front end.
//!
//! Reads a design section and then a stem section, composing bouquets while
//! the stems stream in:
//!
//! 1. [`ingest::ingest_designs`] builds the catalog (fail-fast on bad records)
//! 2. `Composer::new(catalog)` switches to the stem phase
//! 3. [`ingest::ingest_stems`] feeds stems and publishes each bouquet

pub mod config;
pub mod dto;
pub mod ingest;
pub mod output;

pub use config::{Config, ConfigError, InputSource, OutputFormat};
pub use ingest::{IngestError, Records, Section, StreamSummary, ingest_designs, ingest_stems};
pub use output::LineSink;
