//! Error types for the RowCodec decode/encode pipeline.
//!
//! Malformed input is not an error surface here: rows with mismatched field
//! counts resolve through the header pairing rule. The only decode failure
//! is a caller-supplied transform refusing a record.

use thiserror::Error;

/// Boxed error returned by a caller-supplied [`RecordTransform`].
///
/// [`RecordTransform`]: crate::transform::RecordTransform
pub type TransformError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while decoding a stream.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Record transform failed at row {row}")]
    Transform {
        /// Zero-based index of the record within the failing call's batch.
        row: usize,
        #[source]
        source: TransformError,
    },
}

/// Errors that can occur while constructing or driving an encoder.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Encoder requires at least one field name")]
    NoFields,
}
