//! Common types shared throughout the emulator.
//!
//! This module holds the leaves every other component builds on:
//! 1. **Constants:** Architectural fixed points (memory size, register count,
//!    stack sentinel, reset vector).
//! 2. **Error Handling:** Machine faults and program-image load failures.
//! 3. **Flags:** The comparison-flags byte written by `CMP` and read by the
//!    conditional jumps.
//! 4. **Registers:** The 8-slot register file with its reserved stack
//!    pointer.

/// Architectural constants of the machine.
pub mod constants;

/// Error types for machine faults and image loading.
pub mod error;

/// The comparison-flags byte.
pub mod flags;

/// Register file implementation.
pub mod reg;

pub use error::{ImageError, MachineError};
pub use flags::Flags;
pub use reg::RegisterFile;
