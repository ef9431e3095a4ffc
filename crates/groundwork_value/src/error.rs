//! Error types for the value crate.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding attribute values.
///
/// Decode errors indicate corrupt stored data or schema drift. They are
/// never retryable and are never silently defaulted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A stored UUID literal is not in canonical textual form.
    #[error("invalid UUID literal: {value:?}")]
    InvalidUuid {
        /// The offending literal.
        value: String,
    },

    /// A stored timestamp literal does not match the fixed date-time format.
    #[error("invalid timestamp literal: {value:?}")]
    InvalidTimestamp {
        /// The offending literal.
        value: String,
    },

    /// A stored enum text does not exactly match any declared constant.
    #[error("unknown {enum_name} variant: {value:?}")]
    UnknownEnumVariant {
        /// Name of the enum type.
        enum_name: &'static str,
        /// The offending text.
        value: String,
    },

    /// A number literal cannot be parsed.
    #[error("invalid number literal: {literal:?}")]
    InvalidNumber {
        /// The offending literal.
        literal: String,
    },

    /// A number does not fit the supported 64-bit signed range.
    #[error("integer overflow: {literal} does not fit in a 64-bit signed integer")]
    IntegerOverflow {
        /// The offending literal.
        literal: String,
    },

    /// A value carries a different tag than the field requires.
    #[error("expected {expected} value, got {actual}")]
    WrongKind {
        /// The tag the decoder expected.
        expected: ValueKind,
        /// The tag actually present.
        actual: ValueKind,
    },

    /// A required field is absent from the item (or explicitly null).
    #[error("missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: String,
    },
}

impl CodecError {
    /// Creates an invalid UUID error.
    pub fn invalid_uuid(value: impl Into<String>) -> Self {
        Self::InvalidUuid {
            value: value.into(),
        }
    }

    /// Creates an invalid timestamp error.
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    /// Creates an unknown enum variant error.
    pub fn unknown_enum_variant(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumVariant {
            enum_name,
            value: value.into(),
        }
    }

    /// Creates an invalid number error.
    pub fn invalid_number(literal: impl Into<String>) -> Self {
        Self::InvalidNumber {
            literal: literal.into(),
        }
    }

    /// Creates an integer overflow error.
    pub fn integer_overflow(literal: impl Into<String>) -> Self {
        Self::IntegerOverflow {
            literal: literal.into(),
        }
    }

    /// Creates a wrong kind error.
    pub fn wrong_kind(expected: ValueKind, actual: ValueKind) -> Self {
        Self::WrongKind { expected, actual }
    }

    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
