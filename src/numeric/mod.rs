// ============================================================================
// Numeric Module
// Exact decimal arithmetic for consistent rounding
// ============================================================================
//
// This module provides:
// - DecimalPlace: the power-of-ten place a group is rounded to
// - RoundingMode: tie-break rule for halfway values
// - round_to_place / leading_exponent: exact rounding primitives
// - FormatError: error types shared by the whole crate
//
// Design principles:
// - No floating-point logarithms or rounding
// - All fallible operations return Result (no panics)
// - Rounded values carry their scale, so trailing zeros are never lost

mod decimal_place;
mod errors;
mod rounding;

pub use decimal_place::{DecimalPlace, MAX_FRACTION_DIGITS};
pub use errors::{FormatError, FormatResult, InvalidInputKind, Offset};
pub use rounding::{leading_exponent, round_to_place, RoundingMode};
