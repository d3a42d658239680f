// ============================================================================
// Domain Models Module
// Contains the value types the engine rounds and renders
// ============================================================================

pub mod config;
pub mod interval;
pub mod number_group;

pub use config::{FormatConfig, ZeroGroupPolicy};
pub use interval::IntervalEstimate;
pub use number_group::{NumberGroup, RoundedGroup};
