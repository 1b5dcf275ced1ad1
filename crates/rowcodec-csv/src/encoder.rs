//! `Encoder` — records back out as comma/newline delimited text.

use crate::{DELIMITER, TERMINATOR};
use rowcodec_core::{EncodeError, FieldValue, Record};
use tracing::trace;

/// Streaming encoder for comma/newline delimited text.
///
/// The field list given at construction defines both the header line and
/// the column order of every emitted row, independent of any record's own
/// key order. The header is emitted exactly once, on the first `feed`, even
/// if that call carries no records.
///
/// The terminator after each call's final row is deferred: it is prepended
/// to the next call's output instead, or dropped entirely if no next call
/// comes. Eagerly appending it would leave a trailing blank line at
/// end-of-stream; deferring guarantees the terminator separates rows rather
/// than following the last one.
///
/// # Usage
/// ```
/// use rowcodec_core::Record;
/// use rowcodec_csv::Encoder;
///
/// let mut encoder = Encoder::new(["id", "v"]).unwrap();
/// let mut record = Record::new();
/// record.set("id", "foo");
/// record.set("v", 1u64);
/// assert_eq!(encoder.feed_record(&record), "id,v\nfoo,1");
/// encoder.finish();
/// ```
#[derive(Debug)]
pub struct Encoder {
    fields: Vec<String>,
    header_emitted: bool,
    terminator_pending: bool,
}

impl Encoder {
    /// Create an encoder emitting columns in `fields` order.
    ///
    /// # Errors
    /// Returns [`EncodeError::NoFields`] if `fields` is empty — there is no
    /// sensible header or row shape without at least one column.
    pub fn new<I, S>(fields: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(EncodeError::NoFields);
        }
        Ok(Self {
            fields,
            header_emitted: false,
            terminator_pending: false,
        })
    }

    /// The configured column order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Encode one batch of records into one output text chunk.
    ///
    /// An empty batch is permitted and produces no output beyond the header
    /// on the first call. Fields a record does not carry (or carries as
    /// [`FieldValue::Absent`]) render as empty text, never a placeholder.
    pub fn feed(&mut self, records: &[Record]) -> String {
        let mut out = String::new();

        if !self.header_emitted {
            for (i, name) in self.fields.iter().enumerate() {
                if i > 0 {
                    out.push(DELIMITER);
                }
                out.push_str(name);
            }
            out.push(TERMINATOR);
            self.header_emitted = true;
        }

        if records.is_empty() {
            return out;
        }

        if self.terminator_pending {
            out.push(TERMINATOR);
            self.terminator_pending = false;
        }

        let last_row = records.len() - 1;
        let last_field = self.fields.len() - 1;

        for (r, record) in records.iter().enumerate() {
            for (f, name) in self.fields.iter().enumerate() {
                match record.get(name) {
                    Some(FieldValue::Str(s)) => out.push_str(s),
                    Some(FieldValue::Absent) | None => {}
                    Some(value) => out.push_str(&value.to_string()),
                }
                if f < last_field {
                    out.push(DELIMITER);
                } else if r < last_row {
                    out.push(TERMINATOR);
                } else {
                    // Last row of the call: defer the terminator to the next
                    // feed, or drop it if this turns out to be the stream end.
                    self.terminator_pending = true;
                }
            }
        }

        trace!(rows = records.len(), bytes = out.len(), "chunk encoded");
        out
    }

    /// Encode a single record, as a one-element batch.
    pub fn feed_record(&mut self, record: &Record) -> String {
        self.feed(std::slice::from_ref(record))
    }

    /// Signal end of input. No flush output is required: a deferred
    /// terminator, if any, is simply never emitted.
    pub fn finish(&mut self) {}
}
