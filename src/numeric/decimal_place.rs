// ============================================================================
// Decimal Place
// Power-of-ten position shared by every value in a rounded group
// ============================================================================

use super::errors::{FormatResult, InvalidInputKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits `rust_decimal::Decimal` can carry.
pub const MAX_FRACTION_DIGITS: u32 = 28;

/// Exponent of ten that a group is rounded to.
///
/// `-2` rounds to hundredths, `0` to units, `1` to tens.
///
/// # Range
/// Exponents from `-28` to `28`, the span `rust_decimal` can represent.
///
/// # Example
/// ```
/// use consistent_rounding::numeric::DecimalPlace;
///
/// let hundredths = DecimalPlace::new(-2).unwrap();
/// assert_eq!(hundredths.fraction_digits(), 2);
/// assert_eq!(hundredths.to_string(), "10^-2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
#[repr(transparent)]
pub struct DecimalPlace(i32);

impl DecimalPlace {
    /// Finest representable place (10^-28)
    pub const MIN: Self = Self(-(MAX_FRACTION_DIGITS as i32));

    /// Coarsest representable place (10^28)
    pub const MAX: Self = Self(MAX_FRACTION_DIGITS as i32);

    /// Units place (10^0)
    pub const UNITS: Self = Self(0);

    /// Create a place from its exponent.
    ///
    /// # Errors
    /// Returns `InvalidInput(PlaceOutOfRange)` outside `-28..=28`.
    #[inline]
    pub fn new(exponent: i32) -> FormatResult<Self> {
        if exponent < Self::MIN.0 || exponent > Self::MAX.0 {
            return Err(InvalidInputKind::PlaceOutOfRange { place: exponent }.into());
        }
        Ok(Self(exponent))
    }

    /// The place at which a number whose leading digit sits at
    /// `10^leading_exponent` keeps exactly `digits` significant digits.
    ///
    /// # Errors
    /// Returns `InvalidInput(PlaceOutOfRange)` if that place is not representable.
    #[inline]
    pub fn for_significant_digits(leading_exponent: i32, digits: u32) -> FormatResult<Self> {
        let exponent = i64::from(leading_exponent) - i64::from(digits) + 1;
        let exponent = i32::try_from(exponent).map_err(|_| InvalidInputKind::PlaceOutOfRange {
            place: if exponent < 0 { i32::MIN } else { i32::MAX },
        })?;
        Self::new(exponent)
    }

    /// The exponent of ten.
    #[inline]
    pub const fn exponent(self) -> i32 {
        self.0
    }

    /// Digits printed after the decimal point: `max(0, -exponent)`.
    #[inline]
    pub const fn fraction_digits(self) -> u32 {
        if self.0 < 0 {
            self.0.unsigned_abs()
        } else {
            0
        }
    }

    /// The finer (more fractional digits) of two places.
    #[inline]
    pub fn finer(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// The coarser (fewer fractional digits) of two places.
    #[inline]
    pub fn coarser(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }
}

impl Default for DecimalPlace {
    #[inline]
    fn default() -> Self {
        Self::UNITS
    }
}

impl TryFrom<i32> for DecimalPlace {
    type Error = super::errors::FormatError;

    fn try_from(exponent: i32) -> Result<Self, Self::Error> {
        Self::new(exponent)
    }
}

impl From<DecimalPlace> for i32 {
    fn from(place: DecimalPlace) -> Self {
        place.0
    }
}

impl fmt::Display for DecimalPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "10^{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::FormatError;

    #[test]
    fn test_range() {
        assert_eq!(DecimalPlace::new(-28).unwrap(), DecimalPlace::MIN);
        assert_eq!(DecimalPlace::new(28).unwrap(), DecimalPlace::MAX);
        assert_eq!(
            DecimalPlace::new(-29),
            Err(FormatError::InvalidInput(InvalidInputKind::PlaceOutOfRange {
                place: -29
            }))
        );
        assert!(DecimalPlace::new(29).is_err());
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(DecimalPlace::new(-4).unwrap().fraction_digits(), 4);
        assert_eq!(DecimalPlace::UNITS.fraction_digits(), 0);
        assert_eq!(DecimalPlace::new(2).unwrap().fraction_digits(), 0);
    }

    #[test]
    fn test_for_significant_digits() {
        // 0.0034: leading digit at 10^-3, two digits reach 10^-4
        let place = DecimalPlace::for_significant_digits(-3, 2).unwrap();
        assert_eq!(place.exponent(), -4);

        // 78.9: leading digit at 10^1
        let place = DecimalPlace::for_significant_digits(1, 2).unwrap();
        assert_eq!(place.exponent(), 0);

        let place = DecimalPlace::for_significant_digits(3, 1).unwrap();
        assert_eq!(place.exponent(), 3);

        assert!(DecimalPlace::for_significant_digits(-28, 2).is_err());
    }

    #[test]
    fn test_ordering() {
        let tenths = DecimalPlace::new(-1).unwrap();
        let thousandths = DecimalPlace::new(-3).unwrap();
        assert!(thousandths < tenths);
        assert_eq!(tenths.finer(thousandths), thousandths);
        assert_eq!(tenths.coarser(thousandths), tenths);
    }

    #[test]
    fn test_display() {
        assert_eq!(DecimalPlace::new(-2).unwrap().to_string(), "10^-2");
        assert_eq!(DecimalPlace::UNITS.to_string(), "10^0");
    }
}
