// ============================================================================
// Formatting Errors
// Error types for place selection, rounding and rendering
// ============================================================================

use std::fmt;

/// Which offset of an interval an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    /// The upper (superscript) offset
    Plus,
    /// The lower (subscript) offset
    Minus,
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Plus => write!(f, "plus"),
            Offset::Minus => write!(f, "minus"),
        }
    }
}

/// The precondition an input violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputKind {
    /// The number group has no values
    EmptyGroup,
    /// Every value is zero, so there is no significance reference
    AllZero,
    /// Value at `index` is NaN or infinite
    NonFinite { index: usize },
    /// Value at `index` is too large for exact decimal arithmetic
    OutOfRange { index: usize },
    /// Rounding place is finer than the decimal type can hold
    PlaceOutOfRange { place: i32 },
    /// An interval offset is negative
    NegativeOffset { offset: Offset },
}

impl fmt::Display for InvalidInputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInputKind::EmptyGroup => write!(f, "number group is empty"),
            InvalidInputKind::AllZero => {
                write!(f, "all numbers are zero: no significant digit to anchor on")
            },
            InvalidInputKind::NonFinite { index } => {
                write!(f, "value at index {} is not finite", index)
            },
            InvalidInputKind::OutOfRange { index } => {
                write!(f, "value at index {} is outside the decimal range", index)
            },
            InvalidInputKind::PlaceOutOfRange { place } => {
                write!(f, "decimal place 10^{} is not representable", place)
            },
            InvalidInputKind::NegativeOffset { offset } => {
                write!(f, "{} offset must be non-negative", offset)
            },
        }
    }
}

/// Errors that can occur while selecting a place, rounding or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// A caller-supplied value violated a precondition
    InvalidInput(InvalidInputKind),
    /// Rounding carried a value past the decimal range
    Overflow,
    /// Engine configuration failed validation
    InvalidConfig(String),
}

impl FormatError {
    /// True for every input precondition failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, FormatError::InvalidInput(_))
    }

    /// The violated precondition, if this is an input error.
    pub fn invalid_input_kind(&self) -> Option<InvalidInputKind> {
        match self {
            FormatError::InvalidInput(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Attribute an `Overflow` to the group member at `index`.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            FormatError::Overflow => InvalidInputKind::OutOfRange { index }.into(),
            other => other,
        }
    }
}

impl From<InvalidInputKind> for FormatError {
    fn from(kind: InvalidInputKind) -> Self {
        FormatError::InvalidInput(kind)
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::InvalidInput(kind) => write!(f, "invalid input: {}", kind),
            FormatError::Overflow => {
                write!(f, "arithmetic overflow: rounded value exceeded decimal range")
            },
            FormatError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for FormatError {}

/// Result type alias for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;
