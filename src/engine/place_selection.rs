// ============================================================================
// Place Selection
// Shared decimal place for a group and rounding the group to it
// ============================================================================

use crate::domain::{NumberGroup, RoundedGroup, ZeroGroupPolicy};
use crate::numeric::{
    round_to_place, DecimalPlace, FormatResult, InvalidInputKind, RoundingMode,
};

/// Select the coarsest place at which every nonzero value keeps at least
/// `min_significant_digits` significant digits.
///
/// Each nonzero value `x` needs `floor(log10|x|) - (min_significant_digits - 1)`;
/// the group takes the minimum, so the value with the most fractional digits
/// to spare dictates the place. Zeros are skipped.
///
/// # Errors
/// - `AllZero` when every value is zero and `zero_group` is `Reject`
/// - `PlaceOutOfRange` when the place is finer than 10^-28
pub fn select_place(
    group: &NumberGroup,
    min_significant_digits: u32,
    zero_group: ZeroGroupPolicy,
) -> FormatResult<DecimalPlace> {
    match group.leading_exponents().min() {
        Some(leading) => DecimalPlace::for_significant_digits(leading, min_significant_digits),
        None => match zero_group {
            ZeroGroupPolicy::Reject => Err(InvalidInputKind::AllZero.into()),
            ZeroGroupPolicy::Fallback(place) => Ok(place),
        },
    }
}

/// Round every value of `group` to `place`.
///
/// # Errors
/// Returns `OutOfRange` naming the first value that cannot be held at
/// `place`'s scale.
pub fn round_group(
    group: &NumberGroup,
    place: DecimalPlace,
    mode: RoundingMode,
) -> FormatResult<RoundedGroup> {
    let values = group
        .iter()
        .enumerate()
        .map(|(index, value)| {
            round_to_place(*value, place, mode).map_err(|e| e.at_index(index))
        })
        .collect::<FormatResult<_>>()?;
    Ok(RoundedGroup::new(values, place))
}
