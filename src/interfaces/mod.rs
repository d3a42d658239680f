// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod renderer;

pub use renderer::Renderer;
