// ============================================================================
// Decimal Rounding
// Exact rounding of decimals to a power-of-ten place
// ============================================================================

use super::decimal_place::DecimalPlace;
use super::errors::{FormatError, FormatResult};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tie-break rule for values exactly halfway between two candidates.
///
/// Ties are decided on the exact decimal, so `0.125` at hundredths is a tie
/// while a float that merely prints as `0.125` is not reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// 2.5 -> 3, -2.5 -> -3
    #[default]
    HalfAwayFromZero,
    /// 2.5 -> 2, 3.5 -> 4 (banker's rounding)
    HalfEven,
}

impl RoundingMode {
    /// The `rust_decimal` strategy implementing this mode.
    #[inline]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Exponent of ten of the leading significant digit, `None` for zero.
///
/// Computed from the mantissa digit count, never from a float logarithm,
/// so exact powers of ten land on the right exponent.
#[inline]
pub fn leading_exponent(value: Decimal) -> Option<i32> {
    if value.is_zero() {
        return None;
    }
    let digits = value.mantissa().unsigned_abs().ilog10() as i32;
    Some(digits - value.scale() as i32)
}

/// Round `value` to `place`.
///
/// The result always carries exactly `place.fraction_digits()` fractional
/// digits, so trailing zeros survive into `Display`. Values that round to
/// zero lose their sign.
///
/// # Errors
/// Returns `Overflow` if the rounded value, at that scale, does not fit in
/// 96 bits of mantissa.
pub fn round_to_place(
    value: Decimal,
    place: DecimalPlace,
    mode: RoundingMode,
) -> FormatResult<Decimal> {
    let mut rounded = match u32::try_from(place.exponent()) {
        Ok(0) | Err(_) => {
            let digits = place.fraction_digits();
            let mut r = value.round_dp_with_strategy(digits, mode.strategy());
            r.rescale(digits);
            if r.scale() != digits {
                return Err(FormatError::Overflow);
            }
            r
        },
        Ok(exponent) => round_to_power_of_ten(value, exponent, mode)?,
    };

    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Ok(rounded)
}

/// Round to a multiple of 10^exponent (exponent > 0) on the exact mantissa.
///
/// The tie-break compares the exact remainder against half of 10^(scale +
/// exponent); no intermediate quotient is rounded.
fn round_to_power_of_ten(
    value: Decimal,
    exponent: u32,
    mode: RoundingMode,
) -> FormatResult<Decimal> {
    let mantissa = value.mantissa();

    // A 96-bit mantissa is always below half of 10^30, so anything coarser
    // than the i128 range rounds to zero
    let Some(divisor) = 10i128.checked_pow(value.scale() + exponent) else {
        return Ok(Decimal::ZERO);
    };

    let mut quotient = mantissa / divisor;
    let twice_remainder = (mantissa % divisor).unsigned_abs() * 2;
    let divisor = divisor.unsigned_abs();
    let away = match mode {
        _ if twice_remainder > divisor => true,
        _ if twice_remainder < divisor => false,
        RoundingMode::HalfAwayFromZero => true,
        RoundingMode::HalfEven => quotient % 2 != 0,
    };
    if away {
        quotient += mantissa.signum();
    }

    let unit = 10i128.checked_pow(exponent).ok_or(FormatError::Overflow)?;
    let whole = quotient.checked_mul(unit).ok_or(FormatError::Overflow)?;
    Decimal::try_from_i128_with_scale(whole, 0).map_err(|_| FormatError::Overflow)
}
