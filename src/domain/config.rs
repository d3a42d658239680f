// ============================================================================
// Formatting Configuration
// Precision, tie-break and rendering options for the rounding engine
// ============================================================================

use crate::numeric::{DecimalPlace, RoundingMode, MAX_FRACTION_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// All-Zero Group Policy
// ============================================================================

/// What to do when every value in a group is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroGroupPolicy {
    /// Fail with `InvalidInput(AllZero)`
    #[default]
    Reject,

    /// Round to a fixed place instead
    /// - `Fallback(DecimalPlace::UNITS)` prints `0`
    /// - `Fallback(DecimalPlace::new(-2)?)` prints `0.00`
    Fallback(DecimalPlace),
}

// ============================================================================
// Complete Formatting Configuration
// ============================================================================

/// Configuration for a [`RoundingEngine`](crate::engine::RoundingEngine)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatConfig {
    /// Minimum significant digits every nonzero value keeps (1-28)
    pub min_significant_digits: u32,

    /// Tie-break for values exactly halfway between candidates
    pub rounding_mode: RoundingMode,

    /// Behavior for groups whose values are all zero
    pub zero_group: ZeroGroupPolicy,

    /// Wrap LaTeX output in `$...$`
    pub latex_math_delimiters: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            min_significant_digits: 2,
            rounding_mode: RoundingMode::HalfAwayFromZero,
            zero_group: ZeroGroupPolicy::Reject,
            latex_math_delimiters: false,
        }
    }
}

impl FormatConfig {
    /// Create a configuration with the default two significant digits
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set minimum significant digits
    pub fn with_min_significant_digits(mut self, digits: u32) -> Self {
        self.min_significant_digits = digits;
        self
    }

    /// Builder method: Set tie-break rule
    pub fn with_rounding_mode(mut self, mode: RoundingMode) -> Self {
        self.rounding_mode = mode;
        self
    }

    /// Builder method: Set all-zero group policy
    pub fn with_zero_group(mut self, policy: ZeroGroupPolicy) -> Self {
        self.zero_group = policy;
        self
    }

    /// Builder method: Toggle `$...$` around LaTeX output
    pub fn with_latex_math_delimiters(mut self, enabled: bool) -> Self {
        self.latex_math_delimiters = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.min_significant_digits == 0 {
            return Err("Minimum significant digits must be at least 1".to_string());
        }

        if self.min_significant_digits > MAX_FRACTION_DIGITS {
            return Err(format!(
                "Minimum significant digits cannot exceed {}",
                MAX_FRACTION_DIGITS
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| e.to_string())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl FormatConfig {
    /// Publication tables
    /// - Two significant digits
    /// - Half away from zero
    /// - All-zero groups rejected
    pub fn publication() -> Self {
        Self::default()
    }

    /// Statistical reporting
    /// - Two significant digits
    /// - Half to even, so repeated rounding does not drift upward
    pub fn statistical() -> Self {
        Self::default().with_rounding_mode(RoundingMode::HalfEven)
    }

    /// Inline display in documents
    /// - Configurable significant digits
    /// - LaTeX wrapped in math delimiters
    /// - All-zero groups print as `0`
    pub fn display(min_significant_digits: u32) -> Self {
        Self::default()
            .with_min_significant_digits(min_significant_digits)
            .with_latex_math_delimiters(true)
            .with_zero_group(ZeroGroupPolicy::Fallback(DecimalPlace::UNITS))
    }
}
