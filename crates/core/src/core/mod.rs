//! The machine core.
//!
//! This module owns all architectural state and the logic that advances it:
//! 1. **RAM** ([`mem`]): the 256-byte backing store.
//! 2. **ALU** ([`alu`]): pure value computation and comparison.
//! 3. **CPU** ([`Cpu`]): registers, memory, PC, flags, and run collaborators
//!    in one owned struct.
//! 4. **Execution** ([`execution`]): the fetch-decode-execute loop.

/// Arithmetic/logic unit.
pub mod alu;

/// The fetch-decode-execute loop.
pub mod execution;

/// The 256-byte memory.
pub mod mem;

use crate::common::constants::RESET_VECTOR;
use crate::common::flags::Flags;
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::core::mem::Ram;
use crate::io::OutputSink;
use crate::stats::SimStats;

/// Execution state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The loop keeps fetching and executing.
    Running,
    /// Terminal: no further instruction is fetched.
    Halted,
}

/// The LS-8 machine: all architectural state plus run collaborators.
///
/// A `Cpu` is constructed fresh for each run, loaded with exactly one
/// program image, and driven by [`Cpu::step`] or [`Cpu::run`]. There is no
/// interface for reloading or resuming after a halt.
pub struct Cpu {
    /// General-purpose registers (R7 is the stack pointer).
    pub regs: RegisterFile,
    /// The 256-byte memory.
    pub ram: Ram,
    /// Address of the next instruction to fetch.
    pub pc: u8,
    /// Comparison flags written by `CMP`.
    pub flags: Flags,
    /// Current execution state.
    pub state: State,
    /// Print a trace line before each executed instruction.
    pub trace: bool,
    /// Step budget enforced by [`Cpu::run`]; `None` disables the guard.
    pub step_limit: Option<u64>,
    /// Counters accumulated over the run.
    pub stats: SimStats,
    pub(crate) output: Box<dyn OutputSink>,
}

impl Cpu {
    /// Creates a machine in the reset state.
    ///
    /// # Arguments
    ///
    /// * `output` - Sink that receives each `PRN` value.
    /// * `config` - Run options (tracing, step budget).
    #[must_use]
    pub fn new(output: Box<dyn OutputSink>, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            ram: Ram::new(),
            pc: RESET_VECTOR,
            flags: Flags::new(),
            state: State::Running,
            trace: config.general.trace,
            step_limit: config.general.step_limit,
            stats: SimStats::new(),
            output,
        }
    }

    /// Values the output sink recorded, for sinks that record them.
    #[must_use]
    pub fn recorded_output(&self) -> Option<&[u8]> {
        self.output.recorded()
    }

    /// Prints the PC, the flags byte, and the register file.
    pub fn dump_state(&self) {
        println!("PC:    {:#04x}", self.pc);
        println!("FL:    {:#05b} (LGE)", self.flags.bits());
        self.regs.dump();
    }
}
