//! Output encoder module
//!
//! Supports: JSON (escaped and Unicode), CSV, XML, YAML
//!
//! # Overview
//!
//! Every encoder implements `RecordEncoder` and renders a whole `RecordSet`
//! to text. Encoders never mutate the records they are given; normalization
//! and flattening happen on private copies.

mod encoders;
mod types;
mod yaml;

pub use encoders::{normalize_empty_objects, CsvEncoder, JsonEncoder, XmlEncoder};
pub use types::{
    CsvEncoderConfig, JsonEncoderConfig, RecordEncoder, XmlEncoderConfig, YamlEncoderConfig,
    DEFAULT_CSV_GLUE,
};
pub use yaml::YamlEncoder;
