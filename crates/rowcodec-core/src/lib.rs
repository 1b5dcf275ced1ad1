//! # rowcodec-core
//!
//! Core types and primitives shared across all RowCodec crates.
//! The delimited-text decoder and encoder in `rowcodec-csv` are built on
//! the records, headers, and transform hooks defined here.

pub mod error;
pub mod header;
pub mod record;
pub mod transform;
pub mod value;

pub use error::{DecodeError, EncodeError, TransformError};
pub use header::Header;
pub use record::Record;
pub use transform::RecordTransform;
pub use value::FieldValue;
