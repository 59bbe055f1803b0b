//! The comparison-flags byte.

use std::cmp::Ordering;

/// Bit set when the most recent `CMP` found `a < b`.
pub const FLAG_LESS: u8 = 0b0000_0100;

/// Bit set when the most recent `CMP` found `a > b`.
pub const FLAG_GREATER: u8 = 0b0000_0010;

/// Bit set when the most recent `CMP` found `a == b`.
pub const FLAG_EQUAL: u8 = 0b0000_0001;

/// Comparison flags in `00000LGE` form.
///
/// Exactly one of L/G/E is set by each `CMP`; the byte persists unchanged
/// across unrelated instructions until the next `CMP` rewrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// A cleared flags byte: no comparison recorded yet.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Records a comparison outcome, clearing the other bits.
    pub fn set_compare(&mut self, ordering: Ordering) {
        self.0 = match ordering {
            Ordering::Less => FLAG_LESS,
            Ordering::Greater => FLAG_GREATER,
            Ordering::Equal => FLAG_EQUAL,
        };
    }

    /// True when the last comparison found the operands equal.
    #[must_use]
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// True when the last comparison found the first operand smaller.
    #[must_use]
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }

    /// True when the last comparison found the first operand larger.
    #[must_use]
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// The raw `00000LGE` byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}
