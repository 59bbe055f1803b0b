//! Simulation support around the core.

/// Program-image parsing and loading.
pub mod loader;
