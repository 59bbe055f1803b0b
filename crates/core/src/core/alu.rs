//! Arithmetic/logic unit.
//!
//! The ALU is pure value computation: it sees two resolved operand values
//! and an operation selector, never instruction encodings or register
//! indices. Operand resolution and result storage belong to the execution
//! loop.

use thiserror::Error;

use crate::common::flags::Flags;
use crate::isa::decode::AluOp;

/// A violation of an operation's value domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AluError {
    /// `DIV` or `MOD` with a zero divisor.
    #[error("{op} by zero")]
    DivideByZero {
        /// Mnemonic of the failing operation.
        op: &'static str,
    },
}

/// What an operation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOutcome {
    /// A value to store into the first operand's register.
    Value(u8),
    /// A flags update from `CMP`; no register is written.
    Compare(Flags),
}

/// The arithmetic/logic unit.
#[derive(Debug, Clone, Copy)]
pub struct Alu;

impl Alu {
    /// Applies `op` to `a` and `b`, reducing results modulo 256.
    ///
    /// Unary operations (`NOT`, `INC`, `DEC`) ignore `b`. Shifting by 8 or
    /// more produces 0. `CMP` yields a flags update instead of a value.
    /// Division and remainder reject a zero divisor before producing any
    /// result.
    ///
    /// ```
    /// use ls8_core::core::alu::{Alu, AluError, AluOutcome};
    /// use ls8_core::isa::decode::AluOp;
    ///
    /// let sum = Alu::apply(AluOp::Add, 200, 100)?;
    /// assert_eq!(sum, AluOutcome::Value(44)); // 300 mod 256
    /// # Ok::<(), AluError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AluError::DivideByZero`] for `DIV` or `MOD` with `b == 0`.
    pub fn apply(op: AluOp, a: u8, b: u8) -> Result<AluOutcome, AluError> {
        let value = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
            AluOp::Div => {
                if b == 0 {
                    return Err(AluError::DivideByZero { op: op.mnemonic() });
                }
                a / b
            }
            AluOp::Mod => {
                if b == 0 {
                    return Err(AluError::DivideByZero { op: op.mnemonic() });
                }
                a % b
            }
            AluOp::And => a & b,
            AluOp::Or => a | b,
            AluOp::Xor => a ^ b,
            AluOp::Not => !a,
            AluOp::Shl => a.checked_shl(u32::from(b)).unwrap_or(0),
            AluOp::Shr => a.checked_shr(u32::from(b)).unwrap_or(0),
            AluOp::Inc => a.wrapping_add(1),
            AluOp::Dec => a.wrapping_sub(1),
            AluOp::Cmp => {
                let mut flags = Flags::new();
                flags.set_compare(a.cmp(&b));
                return Ok(AluOutcome::Compare(flags));
            }
        };
        Ok(AluOutcome::Value(value))
    }
}
