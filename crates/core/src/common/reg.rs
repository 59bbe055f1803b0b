//! The 8-slot register file.

use crate::common::constants::{NUM_REGISTERS, REG_SP, STACK_EMPTY};

/// General-purpose registers R0–R7.
///
/// R7 is architecturally the stack pointer: it resets to the empty-stack
/// sentinel while every other register resets to zero. Operand bytes can
/// name any index 0–255, so both accessors range-check and report an
/// out-of-range index instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in the reset state.
    #[must_use]
    pub fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[REG_SP] = STACK_EMPTY;
        Self { regs }
    }

    /// Reads register `index`, or `None` when the index is out of range.
    #[must_use]
    pub fn read(&self, index: u8) -> Option<u8> {
        self.regs.get(usize::from(index)).copied()
    }

    /// Writes `value` to register `index`, or `None` when the index is out
    /// of range.
    pub fn write(&mut self, index: u8, value: u8) -> Option<()> {
        self.regs.get_mut(usize::from(index)).map(|slot| *slot = value)
    }

    /// Current stack pointer (R7).
    #[must_use]
    pub const fn sp(&self) -> u8 {
        self.regs[REG_SP]
    }

    /// Sets the stack pointer (R7).
    pub fn set_sp(&mut self, value: u8) {
        self.regs[REG_SP] = value;
    }

    /// Raw view of every register, R0 first.
    #[must_use]
    pub const fn raw(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Prints the register file, one row per register.
    pub fn dump(&self) {
        for (i, value) in self.regs.iter().enumerate() {
            println!("R{i}: {value:#04x} ({value})");
        }
    }
}
