//! The caller-supplied record transform hook.

use crate::error::TransformError;
use crate::record::Record;

/// Hook applied to every decoded record before it joins a batch.
///
/// Invoked once per record, in row order, synchronously inside the decoder's
/// `feed`/`finish` call. Implementations should be pure: the decoder may not
/// be the only consumer of the transform and gives no replay guarantees.
///
/// # Errors
/// An error returned here aborts the `feed` call that triggered it; the
/// decoder emits no partial batch for that call.
pub trait RecordTransform: Send + Sync {
    fn apply(&self, record: Record) -> Result<Record, TransformError>;
}

/// Blanket impl so closures can be used as transforms.
impl<F> RecordTransform for F
where
    F: Fn(Record) -> Result<Record, TransformError> + Send + Sync,
{
    fn apply(&self, record: Record) -> Result<Record, TransformError> {
        self(record)
    }
}
