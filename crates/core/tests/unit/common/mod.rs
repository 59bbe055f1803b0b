//! Unit tests for shared components.

/// Tests for the comparison-flags byte.
pub mod flags;

/// Tests for the register file.
pub mod registers;
