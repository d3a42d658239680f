// ============================================================================
// Number Group
// Values that must be presented with one shared precision
// ============================================================================

use crate::numeric::{leading_exponent, DecimalPlace, FormatResult, InvalidInputKind};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Inline capacity covers a value with its two offsets plus one spare.
pub(crate) type GroupStorage = SmallVec<[Decimal; 4]>;

/// An ordered, non-empty sequence of finite numbers.
///
/// Floats are converted once, on construction, to the shortest decimal that
/// round-trips to the same `f64` (`0.1_f64` becomes exactly `0.1`). Every
/// later step, tie detection included, works on those decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberGroup {
    values: GroupStorage,
}

impl NumberGroup {
    /// Build a group from floats.
    ///
    /// # Errors
    /// - `EmptyGroup` for an empty slice
    /// - `NonFinite` for NaN or infinity
    /// - `OutOfRange` for magnitudes the decimal type cannot hold
    pub fn from_f64s(values: &[f64]) -> FormatResult<Self> {
        let values = values
            .iter()
            .enumerate()
            .map(|(index, &x)| decimal_from_f64(index, x))
            .collect::<FormatResult<GroupStorage>>()?;
        Self::from_storage(values)
    }

    /// Build a group from decimals that are already exact.
    ///
    /// # Errors
    /// Returns `EmptyGroup` if the iterator yields nothing.
    pub fn from_decimals<I>(values: I) -> FormatResult<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        Self::from_storage(values.into_iter().collect())
    }

    /// Fixed-size groups can never be empty.
    pub(crate) fn from_array<const N: usize>(values: [Decimal; N]) -> Self {
        debug_assert!(N > 0);
        Self {
            values: values.into_iter().collect(),
        }
    }

    fn from_storage(values: GroupStorage) -> FormatResult<Self> {
        if values.is_empty() {
            return Err(InvalidInputKind::EmptyGroup.into());
        }
        Ok(Self { values })
    }

    /// Number of values in the group.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in input order.
    #[inline]
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Iterate the values in input order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.values.iter()
    }

    /// True when no value can anchor significance.
    pub fn is_all_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// Leading-digit exponents of the nonzero values.
    pub fn leading_exponents(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().filter_map(|v| leading_exponent(*v))
    }
}

impl<'a> IntoIterator for &'a NumberGroup {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

fn decimal_from_f64(index: usize, x: f64) -> FormatResult<Decimal> {
    if !x.is_finite() {
        return Err(InvalidInputKind::NonFinite { index }.into());
    }
    // `{:e}` prints the shortest round-trip digits; very long tiny values
    // exceed 28 fractional digits and fall back to the rounded conversion
    let value = Decimal::from_scientific(&format!("{:e}", x))
        .ok()
        .or_else(|| Decimal::from_f64(x))
        .ok_or(InvalidInputKind::OutOfRange { index })?;
    // Subnormal-scale floats collapse to zero at 28 fractional digits
    if value.is_zero() && x != 0.0 {
        return Err(InvalidInputKind::OutOfRange { index }.into());
    }
    Ok(value)
}

// ============================================================================
// Rounded Group
// ============================================================================

/// A group after rounding: every value shares `place` and its scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundedGroup {
    values: GroupStorage,
    place: DecimalPlace,
}

impl RoundedGroup {
    pub(crate) fn new(values: GroupStorage, place: DecimalPlace) -> Self {
        Self { values, place }
    }

    /// The shared rounding place.
    #[inline]
    pub fn place(&self) -> DecimalPlace {
        self.place
    }

    /// The rounded values in input order.
    #[inline]
    pub fn values(&self) -> &[Decimal] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for groups produced by the engine.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the rounded values.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.values.iter()
    }

    /// Convert back to floats (nearest `f64` to each rounded decimal).
    pub fn to_f64s(&self) -> Vec<f64> {
        // Parsing the printed decimal is correctly rounded
        self.values
            .iter()
            .map(|v| v.to_string().parse::<f64>().unwrap_or(f64::NAN))
            .collect()
    }

    /// Take the rounded decimals.
    pub fn into_vec(self) -> Vec<Decimal> {
        self.values.into_vec()
    }
}

impl<'a> IntoIterator for &'a RoundedGroup {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
