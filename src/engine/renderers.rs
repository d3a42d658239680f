// ============================================================================
// Renderers
// Plain fixed-point text and LaTeX offset notation
// ============================================================================

use crate::domain::IntervalEstimate;
use crate::interfaces::Renderer;
use crate::numeric::{round_to_place, DecimalPlace, FormatResult, RoundingMode};
use rust_decimal::Decimal;

/// Fixed-point decimal text.
///
/// - `1.2` at 10^-4 -> `1.2000`
/// - `-0.81` at 10^-2 -> `-0.81`
/// - interval -> `1.23 +0.06 -0.08`
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer {
    mode: RoundingMode,
}

impl PlainRenderer {
    /// Create a plain renderer rounding ties with `mode`
    pub fn new(mode: RoundingMode) -> Self {
        Self { mode }
    }
}

impl Renderer for PlainRenderer {
    fn render_value(&self, value: Decimal, place: DecimalPlace) -> FormatResult<String> {
        Ok(round_to_place(value, place, self.mode)?.to_string())
    }

    fn render_interval(
        &self,
        interval: &IntervalEstimate,
        place: DecimalPlace,
    ) -> FormatResult<String> {
        let rounded = interval.rounded(place, self.mode)?;
        Ok(format!(
            "{} +{} -{}",
            rounded.center(),
            rounded.plus(),
            rounded.minus()
        ))
    }

    fn name(&self) -> &str {
        "plain"
    }
}

/// LaTeX superscript/subscript offset notation: `1.23^{+0.06}_{-0.08}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer {
    mode: RoundingMode,
    math_delimiters: bool,
}

impl LatexRenderer {
    /// Create a LaTeX renderer rounding ties with `mode`
    pub fn new(mode: RoundingMode) -> Self {
        Self {
            mode,
            math_delimiters: false,
        }
    }

    /// Builder method: wrap output in `$...$`
    pub fn with_math_delimiters(mut self, enabled: bool) -> Self {
        self.math_delimiters = enabled;
        self
    }

    fn wrap(&self, body: String) -> String {
        if self.math_delimiters {
            format!("${}$", body)
        } else {
            body
        }
    }
}

impl Renderer for LatexRenderer {
    fn render_value(&self, value: Decimal, place: DecimalPlace) -> FormatResult<String> {
        let rounded = round_to_place(value, place, self.mode)?;
        Ok(self.wrap(rounded.to_string()))
    }

    fn render_interval(
        &self,
        interval: &IntervalEstimate,
        place: DecimalPlace,
    ) -> FormatResult<String> {
        let rounded = interval.rounded(place, self.mode)?;
        Ok(self.wrap(format!(
            "{}^{{+{}}}_{{-{}}}",
            rounded.center(),
            rounded.plus(),
            rounded.minus()
        )))
    }

    fn name(&self) -> &str {
        "latex"
    }
}
