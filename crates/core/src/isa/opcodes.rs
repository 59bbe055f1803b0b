//! Instruction byte values and encoding field masks.

/// Bit shift for the 2-bit operand count (bits 7–6).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Mask for the ALU-routing bit (bit 5).
pub const ALU_FLAG: u8 = 0b0010_0000;

/// Mask for the sets-PC bit (bit 4).
pub const SETS_PC_FLAG: u8 = 0b0001_0000;

/// Mask for the 4-bit instruction identifier (bits 3–0).
pub const IDENT_MASK: u8 = 0b0000_1111;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Print a register's value in decimal.
pub const PRN: u8 = 0b0100_0111;

/// Halt execution.
pub const HLT: u8 = 0b0000_0001;

/// Push a register's value onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine at a register's address.
pub const CALL: u8 = 0b0101_0000;

/// Return from the current subroutine.
pub const RET: u8 = 0b0001_0001;

/// Jump to a register's address.
pub const JMP: u8 = 0b0101_0100;

/// Jump to a register's address if the equal flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump to a register's address if the equal flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Subtract the second register from the first.
pub const SUB: u8 = 0b1010_0001;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Divide the first register by the second.
pub const DIV: u8 = 0b1010_0011;

/// Remainder of dividing the first register by the second.
pub const MOD: u8 = 0b1010_0100;

/// Increment a register.
pub const INC: u8 = 0b0110_0101;

/// Decrement a register.
pub const DEC: u8 = 0b0110_0110;

/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;

/// Bitwise AND of two registers.
pub const AND: u8 = 0b1010_1000;

/// Bitwise complement of a register.
pub const NOT: u8 = 0b0110_1001;

/// Bitwise OR of two registers.
pub const OR: u8 = 0b1010_1010;

/// Bitwise XOR of two registers.
pub const XOR: u8 = 0b1010_1011;

/// Shift the first register left by the second.
pub const SHL: u8 = 0b1010_1100;

/// Shift the first register right by the second.
pub const SHR: u8 = 0b1010_1101;

/// Low-nibble selector values for ALU operations.
pub mod alu_code {
    /// `ADD` selector.
    pub const ADD: u8 = 0x0;
    /// `SUB` selector.
    pub const SUB: u8 = 0x1;
    /// `MUL` selector.
    pub const MUL: u8 = 0x2;
    /// `DIV` selector.
    pub const DIV: u8 = 0x3;
    /// `MOD` selector.
    pub const MOD: u8 = 0x4;
    /// `INC` selector.
    pub const INC: u8 = 0x5;
    /// `DEC` selector.
    pub const DEC: u8 = 0x6;
    /// `CMP` selector.
    pub const CMP: u8 = 0x7;
    /// `AND` selector.
    pub const AND: u8 = 0x8;
    /// `NOT` selector.
    pub const NOT: u8 = 0x9;
    /// `OR` selector.
    pub const OR: u8 = 0xA;
    /// `XOR` selector.
    pub const XOR: u8 = 0xB;
    /// `SHL` selector.
    pub const SHL: u8 = 0xC;
    /// `SHR` selector.
    pub const SHR: u8 = 0xD;
}
