//! # rowcodec-csv
//!
//! Streaming codec for the comma/newline wire format: `value,value,...\n`
//! with no quoting or escaping. The [`Decoder`] turns arbitrarily split text
//! chunks into batches of [`Record`]s without ever emitting a partial row;
//! the [`Encoder`] turns records back into delimited text with the header
//! emitted exactly once and no trailing newline after the final row.
//!
//! Both components are push-based and synchronous: call `feed` once per
//! chunk, in order, then `finish` exactly once. Neither depends on the
//! other; they compose only because the decoder's output shape matches the
//! encoder's input shape, which is what makes decode→encode round trips
//! byte-exact.
//!
//! Embedded delimiters or newlines inside a field value are out of contract
//! for this format, not detected and not repaired.
//!
//! [`Record`]: rowcodec_core::Record

pub mod decoder;
pub mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

/// Field delimiter: the comma separating values within a row.
pub const DELIMITER: char = ',';

/// Row terminator: the newline marking the end of one line.
pub const TERMINATOR: char = '\n';
