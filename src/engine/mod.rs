// ============================================================================
// Engine Module
// Contains the core rounding and rendering business logic
// ============================================================================

mod place_selection;
mod renderers;
mod rounding_engine;

pub mod factory;

pub use factory::{create_from_config, RoundingEngineBuilder};
pub use place_selection::{round_group, select_place};
pub use renderers::{LatexRenderer, PlainRenderer};
pub use rounding_engine::RoundingEngine;
