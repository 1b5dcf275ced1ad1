//! Header — the ordered field names inferred from a stream's first row.

use crate::record::Record;
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// The ordered sequence of field names established by the first complete
/// row of a decoded stream.
///
/// A header is built exactly once per decoder instance and never re-derived
/// from later input. Duplicate names are kept as-is (not deduplicated), and
/// no column is ever removed after being set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    /// Build a header by splitting one line of text on `delimiter`.
    pub fn from_line(line: &str, delimiter: char) -> Self {
        Self {
            names: line.split(delimiter).map(str::to_string).collect(),
        }
    }

    /// The field names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the header declares no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Pair one row's raw fields against this header, positionally.
    ///
    /// Header name `i` takes row field `i`. A row shorter than the header
    /// leaves the trailing names mapped to [`FieldValue::Absent`] (the key
    /// is still present); row fields beyond the header length are silently
    /// discarded.
    pub fn pair<'a, I>(&self, row_fields: I) -> Record
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = row_fields.into_iter();
        self.names
            .iter()
            .map(|name| {
                let value = match fields.next() {
                    Some(raw) => FieldValue::Str(raw.to_string()),
                    None => FieldValue::Absent,
                };
                (name.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_line_splits_on_delimiter() {
        let h = Header::from_line("foo,bar,baz", ',');
        assert_eq!(h.names(), &["foo", "bar", "baz"]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let h = Header::from_line("a,b,a", ',');
        assert_eq!(h.names(), &["a", "b", "a"]);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn pair_exact_arity() {
        let h = Header::from_line("foo,bar", ',');
        let r = h.pair("1,2".split(','));
        assert_eq!(r.get("foo"), Some(&FieldValue::Str("1".into())));
        assert_eq!(r.get("bar"), Some(&FieldValue::Str("2".into())));
    }

    #[test]
    fn pair_short_row_marks_absent() {
        let h = Header::from_line("foo,bar,baz", ',');
        let r = h.pair("1".split(','));
        assert_eq!(r.get("foo"), Some(&FieldValue::Str("1".into())));
        assert_eq!(r.get("bar"), Some(&FieldValue::Absent));
        assert_eq!(r.get("baz"), Some(&FieldValue::Absent));
    }

    #[test]
    fn pair_long_row_drops_extras() {
        let h = Header::from_line("foo", ',');
        let r = h.pair("1,2,3".split(','));
        assert_eq!(r.len(), 1);
        assert_eq!(r.get("foo"), Some(&FieldValue::Str("1".into())));
    }

    #[test]
    fn pair_empty_field_is_empty_string() {
        let h = Header::from_line("a,b,c", ',');
        let r = h.pair("1,,3".split(','));
        assert_eq!(r.get("b"), Some(&FieldValue::Str(String::new())));
        assert_ne!(r.get("b"), Some(&FieldValue::Absent));
    }
}
