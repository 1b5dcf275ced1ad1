//! `Decoder` — push-based decode of chunked delimited text into record batches.

use crate::{DELIMITER, TERMINATOR};
use rowcodec_core::{DecodeError, Header, Record, RecordTransform};
use tracing::{debug, trace};

/// Streaming decoder for comma/newline delimited text.
///
/// Input arrives as text chunks of any size and any split: a row's
/// terminator may land chunks after its fields, and the header line itself
/// may be split. The decoder buffers the unterminated suffix of everything
/// seen so far (`remainder`) and only ever parses complete lines, so no
/// partial row is emitted and no bytes are lost across chunk seams.
///
/// The first complete line establishes the [`Header`] for the lifetime of
/// the instance; it is never emitted as a record and never re-derived.
///
/// Each instance owns its state exclusively. Create one decoder per stream;
/// never share one across concurrent streams.
///
/// # Usage
/// ```
/// use rowcodec_csv::Decoder;
///
/// let mut decoder = Decoder::new();
/// assert!(decoder.feed("foo,bar\n1").unwrap().is_none()); // "1" not terminated yet
/// let batch = decoder.feed(",2\n").unwrap().unwrap();
/// assert_eq!(batch.len(), 1);
/// assert!(decoder.finish().unwrap().is_none());
/// ```
pub struct Decoder {
    header: Option<Header>,
    remainder: String,
    transform: Option<Box<dyn RecordTransform>>,
}

impl Decoder {
    /// Create a decoder with the identity transform.
    pub fn new() -> Self {
        Self {
            header: None,
            remainder: String::new(),
            transform: None,
        }
    }

    /// Create a decoder that applies `transform` to every decoded record,
    /// in row order, before it joins a batch.
    pub fn with_transform(transform: impl RecordTransform + 'static) -> Self {
        Self {
            header: None,
            remainder: String::new(),
            transform: Some(Box::new(transform)),
        }
    }

    /// The header inferred from the first complete row, once one has been
    /// observed.
    pub fn header(&self) -> Option<&Header> {
        self.header.as_ref()
    }

    /// Consume one input chunk, returning a batch if the chunk completed at
    /// least one data row.
    ///
    /// Chunks may be any length, including empty. Rows without a terminator
    /// stay buffered; which records land in which batch is a performance
    /// artifact of the chunking, not a format guarantee — the concatenation
    /// of all batches, in order, is the authoritative record sequence.
    ///
    /// # Errors
    /// Only a failing record transform errors here. The error aborts this
    /// call without emitting a partial batch.
    pub fn feed(&mut self, chunk: &str) -> Result<Option<Vec<Record>>, DecodeError> {
        self.remainder.push_str(chunk);

        // Everything up to (and including) the last terminator is parseable;
        // the rest stays buffered until more input or finish().
        let cut = match self.remainder.rfind(TERMINATOR) {
            Some(idx) => idx + TERMINATOR.len_utf8(),
            None => return Ok(None),
        };
        let tail = self.remainder.split_off(cut);
        let complete = std::mem::replace(&mut self.remainder, tail);

        // Drop the trailing terminator before splitting so the final empty
        // element does not masquerade as an empty row.
        let mut lines = complete[..complete.len() - TERMINATOR.len_utf8()].split(TERMINATOR);

        if self.header.is_none() {
            if let Some(first) = lines.next() {
                let header = Header::from_line(first, DELIMITER);
                debug!(columns = header.len(), "header established");
                self.header = Some(header);
            }
        }
        let header = match self.header.as_ref() {
            Some(h) => h,
            // The chunk completed the header line and nothing else.
            None => return Ok(None),
        };

        let mut batch = Vec::new();
        for (row, line) in lines.enumerate() {
            let record = header.pair(line.split(DELIMITER));
            let record = match self.transform.as_ref() {
                Some(t) => t
                    .apply(record)
                    .map_err(|source| DecodeError::Transform { row, source })?,
                None => record,
            };
            batch.push(record);
        }

        if batch.is_empty() {
            Ok(None)
        } else {
            trace!(
                rows = batch.len(),
                buffered = self.remainder.len(),
                "batch ready"
            );
            Ok(Some(batch))
        }
    }

    /// Signal end of input, draining any buffered remainder.
    ///
    /// A non-empty remainder is one final, unterminated line: if no header
    /// has been established yet it is consumed as the header and no batch is
    /// emitted; otherwise it yields a single-record batch. Call exactly
    /// once, after the last `feed`.
    ///
    /// # Errors
    /// Same surface as [`feed`](Self::feed): only the record transform.
    pub fn finish(&mut self) -> Result<Option<Vec<Record>>, DecodeError> {
        if self.remainder.is_empty() {
            return Ok(None);
        }
        let line = std::mem::take(&mut self.remainder);

        let record = match self.header.as_ref() {
            Some(header) => header.pair(line.split(DELIMITER)),
            None => {
                // Stream ended before any terminator: the lone line is the
                // header, with no data rows at all.
                self.header = Some(Header::from_line(&line, DELIMITER));
                return Ok(None);
            }
        };
        let record = match self.transform.as_ref() {
            Some(t) => t
                .apply(record)
                .map_err(|source| DecodeError::Transform { row: 0, source })?,
            None => record,
        };
        trace!("final unterminated row drained");
        Ok(Some(vec![record]))
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
