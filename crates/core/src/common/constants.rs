//! Architectural constants of the LS-8.

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Index of the register reserved as the stack pointer.
pub const REG_SP: usize = 7;

/// Reset value of the stack pointer; doubles as the empty-stack sentinel.
/// The stack grows upward from here, so `SP == STACK_EMPTY` means nothing
/// has been pushed.
pub const STACK_EMPTY: u8 = 0xF4;

/// Address of the first instruction fetched after reset.
pub const RESET_VECTOR: u8 = 0x00;
