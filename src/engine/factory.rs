// ============================================================================
// Rounding Engine Factory
// Creates rounding engines with proper configuration
// ============================================================================

use crate::domain::config::{FormatConfig, ZeroGroupPolicy};
use crate::engine::RoundingEngine;
use crate::numeric::{DecimalPlace, FormatResult, RoundingMode};

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a rounding engine from configuration
///
/// # Arguments
/// * `config` - Formatting configuration
///
/// # Returns
/// * `FormatResult<RoundingEngine>` - Configured engine or `InvalidConfig`
///
/// # Example
/// ```
/// use consistent_rounding::prelude::*;
///
/// let engine = create_from_config(FormatConfig::statistical()).unwrap();
/// assert_eq!(engine.format_group(&[0.125, 0.375]).unwrap(), vec!["0.12", "0.38"]);
/// ```
pub fn create_from_config(config: FormatConfig) -> FormatResult<RoundingEngine> {
    tracing::debug!(
        min_significant_digits = config.min_significant_digits,
        rounding_mode = ?config.rounding_mode,
        "Creating rounding engine"
    );
    RoundingEngine::new(config)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating rounding engines with fluent API
///
/// # Example
/// ```
/// use consistent_rounding::engine::factory::RoundingEngineBuilder;
///
/// let engine = RoundingEngineBuilder::new()
///     .min_significant_digits(3)
///     .half_even_rounding()
///     .latex_math_delimiters(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     engine.format_latex_group(1.2345, 0.0456, 0.0789).unwrap(),
///     "$1.2345^{+0.0456}_{-0.0789}$"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoundingEngineBuilder {
    config: FormatConfig,
}

impl RoundingEngineBuilder {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Set the minimum significant digits every nonzero value keeps
    pub fn min_significant_digits(mut self, digits: u32) -> Self {
        self.config.min_significant_digits = digits;
        self
    }

    // ========================================================================
    // Tie-Break Configuration
    // ========================================================================

    /// Round halfway values away from zero (default)
    pub fn half_away_from_zero_rounding(mut self) -> Self {
        self.config.rounding_mode = RoundingMode::HalfAwayFromZero;
        self
    }

    /// Round halfway values to the even neighbour
    pub fn half_even_rounding(mut self) -> Self {
        self.config.rounding_mode = RoundingMode::HalfEven;
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Fail on all-zero groups (default)
    pub fn reject_all_zero(mut self) -> Self {
        self.config.zero_group = ZeroGroupPolicy::Reject;
        self
    }

    /// Round all-zero groups to a fixed place
    pub fn all_zero_fallback(mut self, place: DecimalPlace) -> Self {
        self.config.zero_group = ZeroGroupPolicy::Fallback(place);
        self
    }

    /// Wrap LaTeX output in `$...$`
    pub fn latex_math_delimiters(mut self, enabled: bool) -> Self {
        self.config.latex_math_delimiters = enabled;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply publication configuration
    pub fn publication() -> Self {
        Self {
            config: FormatConfig::publication(),
        }
    }

    /// Apply statistical-reporting configuration
    pub fn statistical() -> Self {
        Self {
            config: FormatConfig::statistical(),
        }
    }

    /// Apply inline-display configuration
    pub fn display(min_significant_digits: u32) -> Self {
        Self {
            config: FormatConfig::display(min_significant_digits),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the rounding engine
    pub fn build(self) -> FormatResult<RoundingEngine> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FormatConfig {
        &self.config
    }
}
