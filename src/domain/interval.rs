// ============================================================================
// Interval Estimate
// A central value with asymmetric non-negative offsets
// ============================================================================

use super::number_group::NumberGroup;
use crate::numeric::{
    round_to_place, DecimalPlace, FormatError, FormatResult, InvalidInputKind, Offset,
    RoundingMode,
};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A credible interval written as `center^{+plus}_{-minus}`.
///
/// Offsets are magnitudes: the sign comes from the notation, so both must be
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct IntervalEstimate {
    center: Decimal,
    plus: Decimal,
    minus: Decimal,
}

impl IntervalEstimate {
    /// Create from a center and its two offsets.
    ///
    /// # Errors
    /// Returns `NegativeOffset` naming the first negative offset.
    pub fn new(center: Decimal, plus: Decimal, minus: Decimal) -> FormatResult<Self> {
        check_offset(plus, Offset::Plus)?;
        check_offset(minus, Offset::Minus)?;
        Ok(Self {
            center,
            plus,
            minus,
        })
    }

    /// Create from floats, converting them like a [`NumberGroup`] does.
    ///
    /// # Errors
    /// `NegativeOffset` is checked first, then `NonFinite`/`OutOfRange`
    /// with index 0 = center, 1 = plus, 2 = minus.
    pub fn from_f64(center: f64, plus: f64, minus: f64) -> FormatResult<Self> {
        if plus < 0.0 {
            return Err(InvalidInputKind::NegativeOffset {
                offset: Offset::Plus,
            }
            .into());
        }
        if minus < 0.0 {
            return Err(InvalidInputKind::NegativeOffset {
                offset: Offset::Minus,
            }
            .into());
        }
        let group = NumberGroup::from_f64s(&[center, plus, minus])?;
        let v = group.values();
        Self::new(v[0], v[1], v[2])
    }

    /// Create from a center and the absolute bounds around it.
    ///
    /// # Errors
    /// Returns `NegativeOffset` if `center` lies outside `[lower, upper]`.
    pub fn from_bounds(center: Decimal, lower: Decimal, upper: Decimal) -> FormatResult<Self> {
        let plus = upper.checked_sub(center).ok_or(FormatError::Overflow)?;
        let minus = center.checked_sub(lower).ok_or(FormatError::Overflow)?;
        Self::new(center, plus, minus)
    }

    /// The central value.
    #[inline]
    pub fn center(&self) -> Decimal {
        self.center
    }

    /// Amount added to the center to reach the upper bound.
    #[inline]
    pub fn plus(&self) -> Decimal {
        self.plus
    }

    /// Amount subtracted from the center to reach the lower bound.
    #[inline]
    pub fn minus(&self) -> Decimal {
        self.minus
    }

    /// `center + plus`
    pub fn upper(&self) -> FormatResult<Decimal> {
        self.center
            .checked_add(self.plus)
            .ok_or(FormatError::Overflow)
    }

    /// `center - minus`
    pub fn lower(&self) -> FormatResult<Decimal> {
        self.center
            .checked_sub(self.minus)
            .ok_or(FormatError::Overflow)
    }

    /// The three components as a group, in center, plus, minus order.
    pub fn as_group(&self) -> NumberGroup {
        NumberGroup::from_array([self.center, self.plus, self.minus])
    }

    /// Round all three components to `place`.
    ///
    /// # Errors
    /// `OutOfRange` with index 0 = center, 1 = plus, 2 = minus.
    pub fn rounded(&self, place: DecimalPlace, mode: RoundingMode) -> FormatResult<Self> {
        let round = |index: usize, value: Decimal| {
            round_to_place(value, place, mode).map_err(|e| e.at_index(index))
        };
        Ok(Self {
            center: round(0, self.center)?,
            plus: round(1, self.plus)?,
            minus: round(2, self.minus)?,
        })
    }
}

/// Unchecked wire form; deserialization goes through `IntervalEstimate::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawInterval {
    center: Decimal,
    plus: Decimal,
    minus: Decimal,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for IntervalEstimate {
    type Error = FormatError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.center, raw.plus, raw.minus)
    }
}

fn check_offset(value: Decimal, offset: Offset) -> FormatResult<()> {
    if value < Decimal::ZERO {
        return Err(InvalidInputKind::NegativeOffset { offset }.into());
    }
    Ok(())
}
