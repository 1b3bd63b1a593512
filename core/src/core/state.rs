//! Positional save/restore of adapter state.
//!
//! The format is a flat sequence of integers and booleans with no tags,
//! versions or optional fields. A reader must request values in exactly
//! the order the writer produced them; anything else is a caller error
//! and is reported as a [`StateError`].

use serde::{Deserialize, Serialize};

/// Append-only sink for checkpoint values.
pub trait StateWriter {
    fn put_int(&mut self, value: i64);
    fn put_bool(&mut self, value: bool);
}

/// Positional source matching a [`StateWriter`]'s output.
pub trait StateReader {
    fn get_int(&mut self) -> Result<i64, StateError>;
    fn get_bool(&mut self) -> Result<bool, StateError>;
}

/// Kind of a stored value, used in mismatch diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Bool,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Int => f.write_str("int"),
            FieldKind::Bool => f.write_str("bool"),
        }
    }
}

/// Errors raised while restoring state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The reader ran out of values.
    Exhausted,

    /// The next stored value has a different kind than requested.
    TypeMismatch {
        expected: FieldKind,
        found: FieldKind,
    },

    /// A stored integer does not fit the field it is loaded into.
    OutOfRange { field: &'static str, value: i64 },
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "state record ended early"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "state record: expected {expected}, found {found}")
            }
            Self::OutOfRange { field, value } => {
                write!(f, "state record: {value} is out of range for {field}")
            }
        }
    }
}

impl std::error::Error for StateError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum Field {
    Int(i64),
    Bool(bool),
}

impl Field {
    fn kind(self) -> FieldKind {
        match self {
            Field::Int(_) => FieldKind::Int,
            Field::Bool(_) => FieldKind::Bool,
        }
    }
}

/// In-memory checkpoint implementing both ends of the protocol.
///
/// Writes append; reads consume from a cursor that starts at the first
/// value. Serializes as a plain JSON/TOML array of numbers and booleans.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBuffer {
    fields: Vec<Field>,
    #[serde(skip)]
    cursor: usize,
}

impl StateBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values written.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Move the read cursor back to the first value.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    fn peek(&self) -> Result<Field, StateError> {
        self.fields
            .get(self.cursor)
            .copied()
            .ok_or(StateError::Exhausted)
    }
}

impl StateWriter for StateBuffer {
    fn put_int(&mut self, value: i64) {
        self.fields.push(Field::Int(value));
    }

    fn put_bool(&mut self, value: bool) {
        self.fields.push(Field::Bool(value));
    }
}

impl StateReader for StateBuffer {
    fn get_int(&mut self) -> Result<i64, StateError> {
        match self.peek()? {
            Field::Int(v) => {
                self.cursor += 1;
                Ok(v)
            }
            found => Err(StateError::TypeMismatch {
                expected: FieldKind::Int,
                found: found.kind(),
            }),
        }
    }

    fn get_bool(&mut self) -> Result<bool, StateError> {
        match self.peek()? {
            Field::Bool(v) => {
                self.cursor += 1;
                Ok(v)
            }
            found => Err(StateError::TypeMismatch {
                expected: FieldKind::Bool,
                found: found.kind(),
            }),
        }
    }
}
