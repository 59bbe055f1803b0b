//! Instruction disassembly for listings and diagnostics.

use crate::common::constants::NUM_REGISTERS;
use crate::isa::decode::{AluOp, InstructionBits, Opcode};

/// Register names, R0 first.
pub const REG_NAMES: [&str; NUM_REGISTERS] = ["R0", "R1", "R2", "R3", "R4", "R5", "R6", "R7"];

/// Printable name of a register operand; out-of-range indices render as
/// `R?` rather than failing, since listings must survive malformed images.
#[must_use]
pub fn reg_name(index: u8) -> &'static str {
    REG_NAMES.get(usize::from(index)).copied().unwrap_or("R?")
}

/// Renders one instruction as assembly text.
///
/// `a` and `b` are the operand bytes following `raw`; callers pass zeros
/// for operands the instruction does not take. Bytes that name no
/// instruction render as data: `DB 0x??`.
#[must_use]
pub fn disassemble(raw: u8, a: u8, b: u8) -> String {
    if raw.is_alu() {
        return match AluOp::from_code(raw.ident()) {
            Some(op) if op.is_unary() => format!("{op} {}", reg_name(a)),
            Some(op) => format!("{op} {},{}", reg_name(a), reg_name(b)),
            None => format!("DB {raw:#04x}"),
        };
    }

    match Opcode::from_byte(raw) {
        Some(Opcode::Ldi) => format!("LDI {},{b}", reg_name(a)),
        Some(op @ (Opcode::Hlt | Opcode::Ret)) => op.mnemonic().to_string(),
        Some(op) => format!("{op} {}", reg_name(a)),
        None => format!("DB {raw:#04x}"),
    }
}
