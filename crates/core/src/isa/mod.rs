//! Instruction Set Architecture (ISA) definitions.
//!
//! Every LS-8 instruction is a single byte laid out as `AABCDDDD`:
//!
//! * `AA` (bits 7–6): operand count, the number of bytes that follow.
//! * `B` (bit 5): routes the low nibble to the ALU as an operation selector.
//! * `C` (bit 4): the instruction sets the program counter itself.
//! * `DDDD` (bits 3–0): instruction identifier.

/// Bit-level instruction decoding and the typed opcode enums.
pub mod decode;

/// Instruction disassembler for listings and diagnostics.
pub mod disasm;

/// Instruction byte values and encoding field masks.
pub mod opcodes;
