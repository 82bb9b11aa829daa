//! Error types for the sounding-prep crate.
use crate::prepare::Field;
use std::fmt;

/// Error type for the crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrepareError {
    /// A required per-level field of the raw record was absent or empty.
    MissingField(Field),
    /// A per-level array length did not match the rest of the record.
    MalformedRecord {
        /// The field with the offending length.
        field: Field,
        /// The length of the pressure array.
        expected: usize,
        /// The length actually found.
        found: usize,
    },
    /// A value (surface level, parcel, etc.) that is required is not available.
    MissingValue,
    /// Error bubbled up from the metfor crate.
    MetForError,
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::error::PrepareError::*;

        match *self {
            MissingField(field) => write!(f, "required field {} is absent or empty", field.name()),
            MalformedRecord {
                field,
                expected,
                found,
            } => write!(
                f,
                "the {} array has length {} but the pressure array has length {}",
                field.name(),
                found,
                expected
            ),
            MissingValue => write!(f, "missing value required for preparation or analysis"),
            MetForError => write!(f, "error bubbled up from metfor"),
        }
    }
}

impl std::error::Error for PrepareError {}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, PrepareError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_the_offending_field() {
        let msg = format!(
            "{}",
            PrepareError::MalformedRecord {
                field: Field::Temperature,
                expected: 2,
                found: 3,
            }
        );
        assert!(msg.contains("temperature"));
        assert!(msg.contains('2') && msg.contains('3'));

        let msg = format!("{}", PrepareError::MissingField(Field::WindSpeed));
        assert!(msg.contains("wind speed"));
    }
}
