// ============================================================================
// Renderer Interface
// Defines the contract for pluggable output notations
// ============================================================================

use crate::domain::{IntervalEstimate, RoundedGroup};
use crate::numeric::{DecimalPlace, FormatResult};
use rust_decimal::Decimal;

/// Strategy pattern interface for output notations
/// Implementations: PlainRenderer (fixed-point text), LatexRenderer
pub trait Renderer: Send + Sync {
    /// Render one value at `place`
    ///
    /// # Arguments
    /// * `value` - The value, rounded or not; it is rounded to `place` first
    /// * `place` - The shared decimal place of its group
    ///
    /// # Returns
    /// Fixed-point text with exactly `place.fraction_digits()` fractional digits
    fn render_value(&self, value: Decimal, place: DecimalPlace) -> FormatResult<String>;

    /// Render an interval whose components share `place`
    fn render_interval(
        &self,
        interval: &IntervalEstimate,
        place: DecimalPlace,
    ) -> FormatResult<String>;

    /// Get the renderer name for logging
    fn name(&self) -> &str;

    /// Render every value of a rounded group at the group's place
    fn render_group(&self, group: &RoundedGroup) -> FormatResult<Vec<String>> {
        group
            .iter()
            .map(|value| self.render_value(*value, group.place()))
            .collect()
    }
}
