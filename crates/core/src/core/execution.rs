//! The fetch-decode-execute loop.
//!
//! Each cycle performs the following:
//! 1. **Fetch/Decode:** Read the byte at the PC and extract its fields.
//! 2. **Operand Fetch:** Read as many following bytes as the operand count
//!    names; missing operands are passed as zero.
//! 3. **Route:** ALU-flagged bytes resolve their register operands and go to
//!    the ALU; everything else goes through the exhaustive opcode dispatch.
//! 4. **Advance:** The PC moves past the instruction and its operands unless
//!    the instruction set the PC itself.
//!
//! Any fault transitions the machine to [`State::Halted`] with no partial
//! state committed from the failing instruction.

use crate::common::constants::STACK_EMPTY;
use crate::common::error::MachineError;
use crate::core::alu::{Alu, AluError, AluOutcome};
use crate::core::{Cpu, State};
use crate::isa::decode::{AluOp, Decoded, InstructionBits, Opcode, decode};

/// What a handler decided about the program counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    /// Advance the PC past the instruction and its operands.
    Advance,
    /// The handler set the PC; leave it alone.
    Redirect,
}

impl Cpu {
    /// Executes one instruction and returns the state after the cycle.
    ///
    /// The halted state is terminal: stepping a halted machine fetches
    /// nothing and reports [`State::Halted`].
    ///
    /// # Errors
    ///
    /// Any [`MachineError`] halts the machine; the failing instruction
    /// commits nothing.
    pub fn step(&mut self) -> Result<State, MachineError> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }
        match self.step_inner() {
            Ok(()) => Ok(self.state),
            Err(e) => {
                self.state = State::Halted;
                tracing::error!(error = %e, "machine fault");
                Err(e)
            }
        }
    }

    /// Runs until the machine halts.
    ///
    /// # Errors
    ///
    /// Propagates the first [`MachineError`]; when a step budget is
    /// configured, exhausting it surfaces
    /// [`MachineError::StepLimitExceeded`].
    pub fn run(&mut self) -> Result<(), MachineError> {
        while self.state == State::Running {
            if let Some(limit) = self.step_limit {
                if self.stats.steps >= limit {
                    self.state = State::Halted;
                    return Err(MachineError::StepLimitExceeded {
                        pc: self.pc,
                        steps: limit,
                    });
                }
            }
            if self.step()? == State::Halted {
                break;
            }
        }
        tracing::debug!(steps = self.stats.steps, "run complete");
        Ok(())
    }

    fn step_inner(&mut self) -> Result<(), MachineError> {
        let pc = self.pc;
        let inst = decode(self.ram.read(pc));

        if self.trace {
            self.trace_cycle();
        }

        let (a, b) = self.fetch_operands(inst.operand_count);
        let control = if inst.is_alu {
            self.execute_alu(inst, a, b)?
        } else {
            self.execute_op(inst, a, b)?
        };
        debug_assert_eq!(control == Control::Redirect, inst.sets_pc);

        self.stats.steps += 1;
        if control == Control::Advance {
            self.pc = pc.wrapping_add(inst.operand_count + 1);
        }
        Ok(())
    }

    /// Reads up to two operand bytes following the PC. Operands beyond
    /// `count` are zero.
    fn fetch_operands(&self, count: u8) -> (u8, u8) {
        let a = if count >= 1 {
            self.ram.read(self.pc.wrapping_add(1))
        } else {
            0
        };
        let b = if count >= 2 {
            self.ram.read(self.pc.wrapping_add(2))
        } else {
            0
        };
        (a, b)
    }

    /// Routes an ALU-flagged byte: resolves the register operands, applies
    /// the operation, and stores the result into the first register.
    fn execute_alu(&mut self, inst: Decoded, reg_a: u8, reg_b: u8) -> Result<Control, MachineError> {
        // No ALU operation sets the PC, so a byte carrying both the ALU
        // bit and the sets-PC bit names nothing.
        if inst.sets_pc {
            return Err(MachineError::UnknownOpcode {
                pc: self.pc,
                byte: inst.raw,
            });
        }
        let op = AluOp::from_code(inst.raw.ident()).ok_or(MachineError::UnknownOpcode {
            pc: self.pc,
            byte: inst.raw,
        })?;

        let a = self.read_reg(reg_a)?;
        let b = if inst.operand_count >= 2 {
            self.read_reg(reg_b)?
        } else {
            0
        };

        match Alu::apply(op, a, b) {
            Ok(AluOutcome::Value(value)) => self.write_reg(reg_a, value)?,
            Ok(AluOutcome::Compare(flags)) => self.flags = flags,
            Err(AluError::DivideByZero { op }) => {
                return Err(MachineError::DivideByZero { pc: self.pc, op });
            }
        }

        self.stats.inst_alu += 1;
        Ok(Control::Advance)
    }

    /// Dispatches a non-ALU instruction.
    fn execute_op(&mut self, inst: Decoded, a: u8, b: u8) -> Result<Control, MachineError> {
        let op = Opcode::from_byte(inst.raw).ok_or(MachineError::UnknownOpcode {
            pc: self.pc,
            byte: inst.raw,
        })?;

        let control = match op {
            Opcode::Ldi => {
                self.write_reg(a, b)?;
                self.stats.inst_load += 1;
                Control::Advance
            }
            Opcode::Prn => {
                let value = self.read_reg(a)?;
                self.output.emit(value);
                self.stats.inst_output += 1;
                Control::Advance
            }
            Opcode::Hlt => {
                self.state = State::Halted;
                Control::Advance
            }
            Opcode::Push => {
                let value = self.read_reg(a)?;
                self.push(value);
                self.stats.inst_stack += 1;
                Control::Advance
            }
            Opcode::Pop => {
                let value = self.stack_top("POP")?;
                self.write_reg(a, value)?;
                self.regs.set_sp(self.regs.sp().wrapping_sub(1));
                self.stats.inst_stack += 1;
                Control::Advance
            }
            Opcode::Call => {
                let target = self.read_reg(a)?;
                self.push(self.pc.wrapping_add(2));
                self.pc = target;
                self.stats.inst_control += 1;
                Control::Redirect
            }
            Opcode::Ret => {
                let target = self.stack_top("RET")?;
                self.regs.set_sp(self.regs.sp().wrapping_sub(1));
                self.pc = target;
                self.stats.inst_control += 1;
                Control::Redirect
            }
            Opcode::Jmp => {
                self.pc = self.read_reg(a)?;
                self.stats.inst_control += 1;
                Control::Redirect
            }
            Opcode::Jeq => {
                if self.flags.equal() {
                    self.pc = self.read_reg(a)?;
                } else {
                    self.pc = self.pc.wrapping_add(2);
                }
                self.stats.inst_control += 1;
                Control::Redirect
            }
            Opcode::Jne => {
                if self.flags.equal() {
                    self.pc = self.pc.wrapping_add(2);
                } else {
                    self.pc = self.read_reg(a)?;
                }
                self.stats.inst_control += 1;
                Control::Redirect
            }
        };
        Ok(control)
    }

    /// Pushes `value`: increments SP, then stores at the new SP.
    fn push(&mut self, value: u8) {
        let sp = self.regs.sp().wrapping_add(1);
        self.regs.set_sp(sp);
        self.ram.write(sp, value);
    }

    /// Reads the value at the top of the stack without moving SP, failing
    /// on an empty stack. Callers commit the SP decrement only after their
    /// own mutations have succeeded.
    fn stack_top(&self, op: &'static str) -> Result<u8, MachineError> {
        let sp = self.regs.sp();
        if sp == STACK_EMPTY {
            return Err(MachineError::StackUnderflow { pc: self.pc, op });
        }
        Ok(self.ram.read(sp))
    }

    fn read_reg(&self, index: u8) -> Result<u8, MachineError> {
        self.regs
            .read(index)
            .ok_or(MachineError::RegisterOutOfRange {
                pc: self.pc,
                index,
            })
    }

    fn write_reg(&mut self, index: u8, value: u8) -> Result<(), MachineError> {
        self.regs
            .write(index, value)
            .ok_or(MachineError::RegisterOutOfRange {
                pc: self.pc,
                index,
            })
    }

    /// Prints the pre-execution trace line: the PC, the next three memory
    /// bytes, and every register, all in two-digit uppercase hex.
    pub fn trace_cycle(&self) {
        eprint!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.ram.read(self.pc),
            self.ram.read(self.pc.wrapping_add(1)),
            self.ram.read(self.pc.wrapping_add(2)),
        );
        for value in self.regs.raw() {
            eprint!(" {value:02X}");
        }
        eprintln!();
    }
}
