//! LS-8 machine emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit register machine
//! with a 256-byte address space, built from the following parts:
//! 1. **Core:** CPU state (registers, RAM, flags, PC), the ALU, and the
//!    fetch-decode-execute loop.
//! 2. **ISA:** Instruction byte values, bit-level decoding, typed opcode
//!    enums, and a disassembler.
//! 3. **Simulation:** Program-image loader for the textual `.ls8` format.
//! 4. **Support:** Shared constants and error types, run configuration,
//!    statistics collection, and the output-sink abstraction.
//!
//! A program is run by constructing a fresh machine, loading exactly one
//! image, and running it to completion:
//!
//! ```
//! use ls8_core::config::Config;
//! use ls8_core::core::Cpu;
//! use ls8_core::io::CaptureSink;
//! use ls8_core::sim::loader;
//!
//! let config = Config::default();
//! let mut cpu = Cpu::new(Box::new(CaptureSink::new()), &config);
//! // LDI R0,42 / PRN R0 / HLT
//! loader::load_image(&mut cpu, &[0b1000_0010, 0, 42, 0b0100_0111, 0, 0b0000_0001])?;
//! cpu.run()?;
//! assert_eq!(cpu.recorded_output(), Some(&[42u8][..]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Common types and constants (architectural constants, errors, flags, registers).
pub mod common;
/// Run configuration (defaults, hierarchical config structures).
pub mod config;
/// Machine core (RAM, ALU, CPU state, execution loop).
pub mod core;
/// Output collaborators receiving `PRN` values.
pub mod io;
/// Instruction set (opcode bytes, decoding, disassembly).
pub mod isa;
/// Program-image loading.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// The machine itself; owns all architectural state plus the output sink.
pub use crate::core::Cpu;
