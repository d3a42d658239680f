// ============================================================================
// Consistent Rounding Library
// Shared-precision rounding and rendering for groups of related measurements
// ============================================================================

//! # Consistent Rounding
//!
//! Formats groups of numbers that belong together (a value and its error
//! bounds, a row of a results table) at one shared decimal place.
//!
//! ## Features
//!
//! - **One place per group**: the value needing the most fractional digits
//!   to keep two significant digits sets the place for all of them
//! - **Exact decimal rounding** via `rust_decimal`, with half-away-from-zero or
//!   half-to-even tie-breaks decided on the exact decimal
//! - **Trailing zeros preserved**: `1.2` next to `0.034` prints as `1.200`
//! - **LaTeX offset notation**: `1.23^{+0.06}_{-0.08}`
//!
//! ## Example
//!
//! ```rust
//! use consistent_rounding::prelude::*;
//!
//! assert_eq!(format_group(&[0.034, 1.2]).unwrap(), vec!["0.034", "1.200"]);
//! assert_eq!(
//!     format_latex_group(1.234, 0.056, 0.078).unwrap(),
//!     "1.234^{+0.056}_{-0.078}"
//! );
//!
//! // Custom precision and tie-break
//! let engine = RoundingEngineBuilder::new()
//!     .min_significant_digits(1)
//!     .half_even_rounding()
//!     .build()
//!     .unwrap();
//! assert_eq!(engine.format_group(&[2.5, 3.5]).unwrap(), vec!["2", "4"]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

use domain::NumberGroup;
use engine::RoundingEngine;
use numeric::{DecimalPlace, FormatResult};
use rust_decimal::Decimal;

// ============================================================================
// Entry Points (default configuration)
// ============================================================================

/// Shared decimal place keeping two significant digits in every nonzero value.
///
/// # Errors
/// `InvalidInput` for an empty or all-zero group, or a non-finite value.
pub fn select_decimal_place(numbers: &[f64]) -> FormatResult<DecimalPlace> {
    RoundingEngine::default().select_decimal_place(&NumberGroup::from_f64s(numbers)?)
}

/// Round every number to `place`, half away from zero.
pub fn round_group(numbers: &[f64], place: DecimalPlace) -> FormatResult<Vec<Decimal>> {
    let group = NumberGroup::from_f64s(numbers)?;
    Ok(RoundingEngine::default().round_group(&group, place)?.into_vec())
}

/// Fixed-point text for `value` with `place.fraction_digits()` fractional digits.
pub fn format_plain(value: f64, place: DecimalPlace) -> FormatResult<String> {
    let group = NumberGroup::from_f64s(&[value])?;
    RoundingEngine::default().format_plain(group.values()[0], place)
}

/// `center^{+plus}_{-minus}` at a caller-chosen `place`.
///
/// # Errors
/// `InvalidInput(NegativeOffset)` if either offset is negative.
pub fn format_latex(
    center: f64,
    plus: f64,
    minus: f64,
    place: DecimalPlace,
) -> FormatResult<String> {
    let interval = domain::IntervalEstimate::from_f64(center, plus, minus)?;
    RoundingEngine::default().format_latex(
        interval.center(),
        interval.plus(),
        interval.minus(),
        place,
    )
}

/// Plain text for each number at the group's shared place.
pub fn format_group(numbers: &[f64]) -> FormatResult<Vec<String>> {
    RoundingEngine::default().format_group(numbers)
}

/// `center^{+plus}_{-minus}` at the place selected over all three values.
pub fn format_latex_group(center: f64, plus: f64, minus: f64) -> FormatResult<String> {
    RoundingEngine::default().format_latex_group(center, plus, minus)
}

/// Numbers rounded at the group's shared place, back as floats.
pub fn round_consistently(numbers: &[f64]) -> FormatResult<Vec<f64>> {
    RoundingEngine::default().round_consistently(numbers)
}

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        FormatConfig, IntervalEstimate, NumberGroup, RoundedGroup, ZeroGroupPolicy,
    };
    pub use crate::engine::{
        create_from_config, LatexRenderer, PlainRenderer, RoundingEngine, RoundingEngineBuilder,
    };
    pub use crate::interfaces::Renderer;
    pub use crate::numeric::{
        DecimalPlace, FormatError, FormatResult, InvalidInputKind, Offset, RoundingMode,
    };
    pub use crate::{
        format_group, format_latex, format_latex_group, format_plain, round_consistently,
        round_group, select_decimal_place,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_mixed_magnitudes_share_finest_place() {
        assert_eq!(select_decimal_place(&[0.034, 1.2]).unwrap().exponent(), -3);
        assert_eq!(format_group(&[0.034, 1.2]).unwrap(), vec!["0.034", "1.200"]);
    }

    #[test]
    fn test_similar_magnitudes_round_to_integers() {
        assert_eq!(
            format_group(&[12.3, 45.6, 78.9]).unwrap(),
            vec!["12", "46", "79"]
        );
    }

    #[test]
    fn test_latex_at_fixed_place() {
        let place = DecimalPlace::new(-2).unwrap();
        assert_eq!(
            format_latex(1.234, 0.056, 0.078, place).unwrap(),
            "1.23^{+0.06}_{-0.08}"
        );
    }

    #[test]
    fn test_zero_does_not_drive_place() {
        assert_eq!(format_group(&[0.0, 5.0]).unwrap(), vec!["0.0", "5.0"]);
    }

    #[test]
    fn test_empty_group_rejected() {
        let err = format_group(&[]).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.invalid_input_kind(), Some(InvalidInputKind::EmptyGroup));
        assert!(select_decimal_place(&[]).is_err());
    }

    #[test]
    fn test_all_zero_rejected() {
        assert_eq!(
            format_group(&[0.0, 0.0]).unwrap_err(),
            FormatError::InvalidInput(InvalidInputKind::AllZero)
        );
    }

    #[test]
    fn test_negative_offsets_rejected() {
        let place = DecimalPlace::new(-2).unwrap();
        assert!(format_latex(1.0, -0.1, 0.1, place)
            .unwrap_err()
            .is_invalid_input());
        assert!(format_latex_group(1.0, 0.1, -0.1)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_round_consistently_examples() {
        let (x, y, z) = (1.0584378784847064, -0.8138475623409628, -0.6127108398864638);

        assert_eq!(round_consistently(&[x, y, z]).unwrap(), vec![1.06, -0.81, -0.61]);
        assert_eq!(
            round_consistently(&[x, y, 0.01 * z]).unwrap(),
            vec![1.0584, -0.8138, -0.0061]
        );
        assert_eq!(
            round_consistently(&[100.0 * x, y, z]).unwrap(),
            vec![105.84, -0.81, -0.61]
        );

        let engine = RoundingEngineBuilder::new()
            .min_significant_digits(4)
            .build()
            .unwrap();
        assert_eq!(
            engine.round_consistently(&[x, y, z]).unwrap(),
            vec![1.0584, -0.8138, -0.6127]
        );
    }

    #[test]
    fn test_values_beyond_decimal_range_rejected() {
        let err = round_consistently(&[1.0e30, 2.0e29]).unwrap_err();
        assert_eq!(
            err.invalid_input_kind(),
            Some(InvalidInputKind::OutOfRange { index: 0 })
        );
    }

    #[test]
    fn test_wide_magnitude_span_rejected_with_index() {
        let err = format_group(&[5e27, 0.01]).unwrap_err();
        assert_eq!(
            err.invalid_input_kind(),
            Some(InvalidInputKind::OutOfRange { index: 0 })
        );
    }

    #[test]
    fn test_round_group_and_format_plain() {
        let place = select_decimal_place(&[-0.00347, 2.0]).unwrap();
        assert_eq!(place.exponent(), -4);

        let rounded = round_group(&[-0.00347, 2.0], place).unwrap();
        assert_eq!(rounded[0].to_string(), "-0.0035");
        assert_eq!(rounded[1].to_string(), "2.0000");

        assert_eq!(format_plain(-0.00347, place).unwrap(), "-0.0035");
        assert_eq!(format_plain(1234.5, DecimalPlace::new(2).unwrap()).unwrap(), "1200");
    }
}
