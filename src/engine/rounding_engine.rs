// ============================================================================
// Rounding Engine
// Core business logic for consistent group rounding and rendering
// ============================================================================

use super::place_selection::{round_group, select_place};
use super::renderers::{LatexRenderer, PlainRenderer};
use crate::domain::{FormatConfig, IntervalEstimate, NumberGroup, RoundedGroup};
use crate::interfaces::Renderer;
use crate::numeric::{DecimalPlace, FormatError, FormatResult};
use rust_decimal::Decimal;

/// Stateless formatter: every call is independent, so one engine can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct RoundingEngine {
    /// Validated configuration
    config: FormatConfig,

    /// Fixed-point text renderer
    plain: PlainRenderer,

    /// LaTeX offset-notation renderer
    latex: LatexRenderer,
}

impl RoundingEngine {
    /// Create a new rounding engine
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config.validate()` fails.
    pub fn new(config: FormatConfig) -> FormatResult<Self> {
        config.validate().map_err(FormatError::InvalidConfig)?;

        let plain = PlainRenderer::new(config.rounding_mode);
        let latex = LatexRenderer::new(config.rounding_mode)
            .with_math_delimiters(config.latex_math_delimiters);

        Ok(Self {
            config,
            plain,
            latex,
        })
    }

    /// Get the engine configuration
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Get the plain-text renderer
    pub fn plain_renderer(&self) -> &PlainRenderer {
        &self.plain
    }

    /// Get the LaTeX renderer
    pub fn latex_renderer(&self) -> &LatexRenderer {
        &self.latex
    }

    // ========================================================================
    // Place Selection and Rounding
    // ========================================================================

    /// Shared decimal place for `group`
    pub fn select_decimal_place(&self, group: &NumberGroup) -> FormatResult<DecimalPlace> {
        let place = select_place(
            group,
            self.config.min_significant_digits,
            self.config.zero_group,
        )?;

        tracing::trace!(
            group_size = group.len(),
            place = place.exponent(),
            "Selected decimal place"
        );
        Ok(place)
    }

    /// Round every value of `group` to `place`
    pub fn round_group(
        &self,
        group: &NumberGroup,
        place: DecimalPlace,
    ) -> FormatResult<RoundedGroup> {
        round_group(group, place, self.config.rounding_mode)
    }

    /// Select the group's place and round to it
    pub fn round(&self, group: &NumberGroup) -> FormatResult<RoundedGroup> {
        let place = self.select_decimal_place(group)?;
        self.round_group(group, place)
    }

    /// Consistently rounded floats, each the nearest `f64` to its rounded decimal
    pub fn round_consistently(&self, numbers: &[f64]) -> FormatResult<Vec<f64>> {
        let group = NumberGroup::from_f64s(numbers)?;
        Ok(self.round(&group)?.to_f64s())
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Fixed-point text for `value` at `place`
    pub fn format_plain(&self, value: Decimal, place: DecimalPlace) -> FormatResult<String> {
        self.plain.render_value(value, place)
    }

    /// `center^{+plus}_{-minus}` with all three components at `place`
    ///
    /// # Errors
    /// Returns `InvalidInput(NegativeOffset)` if either offset is negative.
    pub fn format_latex(
        &self,
        center: Decimal,
        plus: Decimal,
        minus: Decimal,
        place: DecimalPlace,
    ) -> FormatResult<String> {
        let interval = IntervalEstimate::new(center, plus, minus)?;
        self.latex.render_interval(&interval, place)
    }

    /// Plain text for each number, all at the group's shared place
    pub fn format_group(&self, numbers: &[f64]) -> FormatResult<Vec<String>> {
        self.format_group_with(numbers, &self.plain)
    }

    /// Render each number through `renderer` at the group's shared place
    pub fn format_group_with(
        &self,
        numbers: &[f64],
        renderer: &dyn Renderer,
    ) -> FormatResult<Vec<String>> {
        let group = NumberGroup::from_f64s(numbers)?;
        let rounded = self.round(&group)?;

        tracing::debug!(
            renderer = renderer.name(),
            group_size = rounded.len(),
            place = rounded.place().exponent(),
            "Formatting number group"
        );
        renderer.render_group(&rounded)
    }

    /// LaTeX for a center with offsets, at the place selected over all three
    pub fn format_latex_group(&self, center: f64, plus: f64, minus: f64) -> FormatResult<String> {
        let interval = IntervalEstimate::from_f64(center, plus, minus)?;
        self.format_interval(&interval, &self.latex)
    }

    /// Render an interval through `renderer` at the place selected over its
    /// center and both offsets
    pub fn format_interval(
        &self,
        interval: &IntervalEstimate,
        renderer: &dyn Renderer,
    ) -> FormatResult<String> {
        let place = self.select_decimal_place(&interval.as_group())?;

        tracing::debug!(
            renderer = renderer.name(),
            place = place.exponent(),
            "Formatting interval"
        );
        renderer.render_interval(interval, place)
    }

    /// Plain `center +plus -minus` at the place selected over all three
    pub fn format_interval_plain(&self, center: f64, plus: f64, minus: f64) -> FormatResult<String> {
        let interval = IntervalEstimate::from_f64(center, plus, minus)?;
        self.format_interval(&interval, &self.plain)
    }
}

impl Default for RoundingEngine {
    fn default() -> Self {
        let config = FormatConfig::default();
        Self {
            plain: PlainRenderer::new(config.rounding_mode),
            latex: LatexRenderer::new(config.rounding_mode)
                .with_math_delimiters(config.latex_math_delimiters),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ZeroGroupPolicy;
    use crate::numeric::{InvalidInputKind, Offset, RoundingMode};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = RoundingEngine::new(FormatConfig::new().with_min_significant_digits(0));
        assert!(matches!(result, Err(FormatError::InvalidConfig(_))));
    }

    #[test]
    fn test_format_group() {
        let engine = RoundingEngine::default();
        assert_eq!(
            engine.format_group(&[12.3, 45.6, 78.9]).unwrap(),
            vec!["12", "46", "79"]
        );
        assert_eq!(engine.format_group(&[0.0, 5.0]).unwrap(), vec!["0.0", "5.0"]);
    }

    #[test]
    fn test_format_group_with_latex_renderer() {
        let engine =
            RoundingEngine::new(FormatConfig::new().with_latex_math_delimiters(true)).unwrap();
        let values = engine
            .format_group_with(&[0.5, -1.25], engine.latex_renderer())
            .unwrap();
        assert_eq!(values, vec!["$0.50$", "$-1.25$"]);
    }

    #[test]
    fn test_format_latex_at_given_place() {
        let engine = RoundingEngine::default();
        let latex = engine
            .format_latex(
                dec("1.234"),
                dec("0.056"),
                dec("0.078"),
                DecimalPlace::new(-2).unwrap(),
            )
            .unwrap();
        assert_eq!(latex, "1.23^{+0.06}_{-0.08}");
    }

    #[test]
    fn test_format_latex_negative_offset() {
        let engine = RoundingEngine::default();
        let err = engine
            .format_latex(dec("1"), dec("0.1"), dec("-0.1"), DecimalPlace::UNITS)
            .unwrap_err();
        assert_eq!(
            err.invalid_input_kind(),
            Some(InvalidInputKind::NegativeOffset {
                offset: Offset::Minus
            })
        );
    }

    #[test]
    fn test_format_latex_group_selects_place() {
        let engine = RoundingEngine::default();
        assert_eq!(
            engine.format_latex_group(1.234, 0.056, 0.078).unwrap(),
            "1.234^{+0.056}_{-0.078}"
        );
        assert_eq!(
            engine.format_latex_group(105.3, 12.0, 9.5).unwrap(),
            "105.3^{+12.0}_{-9.5}"
        );
        assert!(engine.format_latex_group(1.0, -0.5, 0.5).is_err());
    }

    #[test]
    fn test_format_interval_plain() {
        let engine = RoundingEngine::default();
        assert_eq!(
            engine.format_interval_plain(10.0, 2.5, 1.25).unwrap(),
            "10.0 +2.5 -1.3"
        );
    }

    #[test]
    fn test_zero_fallback() {
        let engine = RoundingEngine::new(
            FormatConfig::new().with_zero_group(ZeroGroupPolicy::Fallback(
                DecimalPlace::new(-2).unwrap(),
            )),
        )
        .unwrap();
        assert_eq!(engine.format_group(&[0.0, -0.0]).unwrap(), vec!["0.00", "0.00"]);

        let strict = RoundingEngine::default();
        assert_eq!(
            strict.format_group(&[0.0]).unwrap_err(),
            FormatError::InvalidInput(InvalidInputKind::AllZero)
        );
    }

    #[test]
    fn test_half_even_engine() {
        let engine = RoundingEngine::new(FormatConfig::statistical()).unwrap();
        // 0.125 and 0.375 are exact in binary, so these are true ties
        assert_eq!(engine.format_group(&[0.125, 0.375]).unwrap(), vec!["0.12", "0.38"]);

        let engine = RoundingEngine::new(
            FormatConfig::statistical().with_min_significant_digits(1),
        )
        .unwrap();
        assert_eq!(engine.format_group(&[2.5, 3.5]).unwrap(), vec!["2", "4"]);

        let away = RoundingEngine::new(
            FormatConfig::new()
                .with_min_significant_digits(1)
                .with_rounding_mode(RoundingMode::HalfAwayFromZero),
        )
        .unwrap();
        assert_eq!(away.format_group(&[2.5, -3.5]).unwrap(), vec!["3", "-4"]);
    }

    #[test]
    fn test_round_consistently() {
        let engine = RoundingEngine::default();
        assert_eq!(
            engine.round_consistently(&[1234.5, 0.98]).unwrap(),
            vec![1234.50, 0.98]
        );
    }
}
