//! Error types surfaced by the machine and the image loader.
//!
//! Every runtime fault carries the address of the failing instruction so a
//! diagnostic can point back into the program. Faults are terminal: the
//! machine transitions to the halted state before the error is returned, and
//! no partial state from the failing instruction is committed.

use thiserror::Error;

/// A fatal fault raised while executing a program.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// The fetched byte matched no instruction and no ALU operation.
    #[error("unknown opcode {byte:#04x} at pc={pc:#04x}")]
    UnknownOpcode {
        /// Address of the offending byte.
        pc: u8,
        /// The byte that failed to dispatch.
        byte: u8,
    },

    /// `DIV` or `MOD` with a zero divisor. No register write occurs.
    #[error("{op} by zero at pc={pc:#04x}")]
    DivideByZero {
        /// Address of the failing instruction.
        pc: u8,
        /// Mnemonic of the operation (`DIV` or `MOD`).
        op: &'static str,
    },

    /// `POP` or `RET` with the stack pointer at the empty-stack sentinel.
    #[error("stack underflow on {op} at pc={pc:#04x}")]
    StackUnderflow {
        /// Address of the failing instruction.
        pc: u8,
        /// Mnemonic of the instruction (`POP` or `RET`).
        op: &'static str,
    },

    /// An operand byte named a register index outside 0–7.
    #[error("register index {index} out of range at pc={pc:#04x}")]
    RegisterOutOfRange {
        /// Address of the failing instruction.
        pc: u8,
        /// The out-of-range index.
        index: u8,
    },

    /// The configured step budget ran out before the program halted.
    #[error("step limit of {steps} exceeded at pc={pc:#04x}")]
    StepLimitExceeded {
        /// Address the machine was about to fetch from.
        pc: u8,
        /// The exhausted budget.
        steps: u64,
    },
}

/// A failure while reading, parsing, or loading a program image.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The image file could not be read.
    #[error("failed to read program image")]
    Io(#[from] std::io::Error),

    /// A line was neither blank, a comment, nor an 8-bit binary literal.
    #[error("line {line}: `{text}` is not an 8-bit binary literal")]
    InvalidLiteral {
        /// 1-based source line number.
        line: usize,
        /// The offending text with comments and whitespace stripped.
        text: String,
    },

    /// The image holds more bytes than the machine's memory.
    #[error("program image is {len} bytes; memory holds 256")]
    TooLarge {
        /// Byte length of the parsed image.
        len: usize,
    },
}
