//! Core traits for consuming simulation output.

use crate::error::SinkError;
use crate::field::Field;

/// Consumer of a completed space-time [`Field`].
///
/// The simulation hands over the field once every step has run; nothing
/// flows back. Renderers, exporters and test recorders implement this.
///
/// # Examples
///
/// ```
/// use strata_core::{Alphabet, Field, FieldSink, SinkError, State};
///
/// struct Heights(Vec<usize>);
///
/// impl FieldSink for Heights {
///     fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
///         self.0.push(field.height());
///         Ok(())
///     }
/// }
///
/// let field = Field::new(Alphabet::Binary, State::from(vec![0, 1])).unwrap();
/// let mut sink = Heights(Vec::new());
/// sink.consume(&field).unwrap();
/// assert_eq!(sink.0, vec![1]);
/// ```
pub trait FieldSink {
    /// Take the completed field.
    fn consume(&mut self, field: &Field) -> Result<(), SinkError>;
}

impl<S: FieldSink + ?Sized> FieldSink for &mut S {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        (**self).consume(field)
    }
}

impl<S: FieldSink + ?Sized> FieldSink for Box<S> {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        (**self).consume(field)
    }
}
