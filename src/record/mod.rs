//! Record model
//!
//! The in-memory data every encoder consumes.
//!
//! # Overview
//!
//! - `RecordSet` - ordered, uniformly-shaped records
//! - `FieldSpec` - optional subset of fields to keep
//! - `flatten` - reduces nested values to one delimited string

mod flatten;
mod projection;
mod set;

pub use flatten::flatten;
pub use projection::{project_record, FieldSpec};
pub use set::RecordSet;
