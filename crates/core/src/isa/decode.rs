//! Bit-level instruction decoding.
//!
//! Decoding happens in two layers:
//! 1. **Field extraction** ([`InstructionBits`], [`decode`]): total over all
//!    256 byte values; pulls out the operand count and routing bits.
//! 2. **Identification** ([`Opcode::from_byte`], [`AluOp::from_code`]):
//!    partial; bytes that name no instruction are rejected here, at
//!    dispatch time, never during field extraction.

use std::fmt;

use crate::isa::opcodes::{
    self, ALU_FLAG, IDENT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_FLAG, alu_code,
};

/// Field extraction over a raw instruction byte.
pub trait InstructionBits {
    /// Operand count encoded in bits 7–6.
    fn operand_count(&self) -> u8;
    /// True when bit 5 routes this byte to the ALU.
    fn is_alu(&self) -> bool;
    /// True when bit 4 marks the instruction as setting the PC itself.
    fn sets_pc(&self) -> bool;
    /// The low-nibble identifier (the ALU selector for ALU bytes).
    fn ident(&self) -> u8;
}

impl InstructionBits for u8 {
    #[inline]
    fn operand_count(&self) -> u8 {
        self >> OPERAND_COUNT_SHIFT
    }

    #[inline]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG != 0
    }

    #[inline]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_FLAG != 0
    }

    #[inline]
    fn ident(&self) -> u8 {
        self & IDENT_MASK
    }
}

/// A decoded instruction descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The raw fetched byte.
    pub raw: u8,
    /// Operand bytes following the instruction (0–2 for valid encodings).
    pub operand_count: u8,
    /// Routed to the ALU rather than the general dispatcher.
    pub is_alu: bool,
    /// Sets the PC itself; the loop must not auto-advance.
    pub sets_pc: bool,
}

/// Decodes one fetched byte into its descriptor.
///
/// Decoding is total: unrecognized bytes still produce a descriptor and are
/// rejected at dispatch instead.
#[must_use]
pub fn decode(raw: u8) -> Decoded {
    Decoded {
        raw,
        operand_count: raw.operand_count(),
        is_alu: raw.is_alu(),
        sets_pc: raw.sets_pc(),
    }
}

/// The non-ALU instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// Load an immediate into a register.
    Ldi,
    /// Print a register's value.
    Prn,
    /// Halt execution.
    Hlt,
    /// Push a register onto the stack.
    Push,
    /// Pop the stack into a register.
    Pop,
    /// Call a subroutine through a register.
    Call,
    /// Return from a subroutine.
    Ret,
    /// Unconditional jump through a register.
    Jmp,
    /// Jump if the equal flag is set.
    Jeq,
    /// Jump if the equal flag is clear.
    Jne,
}

impl Opcode {
    /// Maps a full instruction byte to its opcode, or `None` for bytes that
    /// name no instruction.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            opcodes::LDI => Some(Self::Ldi),
            opcodes::PRN => Some(Self::Prn),
            opcodes::HLT => Some(Self::Hlt),
            opcodes::PUSH => Some(Self::Push),
            opcodes::POP => Some(Self::Pop),
            opcodes::CALL => Some(Self::Call),
            opcodes::RET => Some(Self::Ret),
            opcodes::JMP => Some(Self::Jmp),
            opcodes::JEQ => Some(Self::Jeq),
            opcodes::JNE => Some(Self::Jne),
            _ => None,
        }
    }

    /// Assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Hlt => "HLT",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// ALU operation selectors (the low nibble of an ALU instruction byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Integer division.
    Div,
    /// Remainder.
    Mod,
    /// Increment by one.
    Inc,
    /// Decrement by one.
    Dec,
    /// Comparison; writes the flags instead of a register.
    Cmp,
    /// Bitwise AND.
    And,
    /// Bitwise complement.
    Not,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Left shift.
    Shl,
    /// Right shift.
    Shr,
}

impl AluOp {
    /// Maps a low-nibble selector to its operation, or `None` for the two
    /// unassigned nibble values.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            alu_code::ADD => Some(Self::Add),
            alu_code::SUB => Some(Self::Sub),
            alu_code::MUL => Some(Self::Mul),
            alu_code::DIV => Some(Self::Div),
            alu_code::MOD => Some(Self::Mod),
            alu_code::INC => Some(Self::Inc),
            alu_code::DEC => Some(Self::Dec),
            alu_code::CMP => Some(Self::Cmp),
            alu_code::AND => Some(Self::And),
            alu_code::NOT => Some(Self::Not),
            alu_code::OR => Some(Self::Or),
            alu_code::XOR => Some(Self::Xor),
            alu_code::SHL => Some(Self::Shl),
            alu_code::SHR => Some(Self::Shr),
            _ => None,
        }
    }

    /// Assembly mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Inc => "INC",
            Self::Dec => "DEC",
            Self::Cmp => "CMP",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Shl => "SHL",
            Self::Shr => "SHR",
        }
    }

    /// True for the single-operand operations.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
