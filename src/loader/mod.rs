//! Record loader module
//!
//! Parse record sets from JSON documents.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_records` - read a JSON file into a `RecordSet`
//! - `load_records_from_str` - parse JSON text
//! - Validation of the uniform field layout

mod parser;

pub use parser::{load_records, load_records_from_str};
