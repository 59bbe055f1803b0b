//! # ALU Operation Tests
//!
//! Deterministic edge-case tests for every ALU operation. All value
//! arithmetic is defined modulo 256; shifts of 8 or more produce 0; `CMP`
//! yields a flags update instead of a value.

use ls8_core::core::alu::{Alu, AluError, AluOutcome};
use ls8_core::isa::decode::AluOp;
use proptest::prelude::*;

/// Apply a value-producing operation. Thin wrapper to keep test lines short.
fn alu(op: AluOp, a: u8, b: u8) -> u8 {
    match Alu::apply(op, a, b) {
        Ok(AluOutcome::Value(v)) => v,
        other => panic!("expected a value from {op}, got {other:?}"),
    }
}

// ─── Arithmetic ──────────────────────────────────────────────────────────

#[test]
fn add_wraps_modulo_256() {
    assert_eq!(alu(AluOp::Add, 200, 100), 44);
    assert_eq!(alu(AluOp::Add, 255, 1), 0);
    assert_eq!(alu(AluOp::Add, 0, 0), 0);
}

#[test]
fn sub_wraps_below_zero() {
    assert_eq!(alu(AluOp::Sub, 0, 1), 255);
    assert_eq!(alu(AluOp::Sub, 5, 5), 0);
    assert_eq!(alu(AluOp::Sub, 10, 3), 7);
}

#[test]
fn mul_wraps_modulo_256() {
    assert_eq!(alu(AluOp::Mul, 8, 9), 72);
    assert_eq!(alu(AluOp::Mul, 16, 16), 0);
    assert_eq!(alu(AluOp::Mul, 15, 17), 255);
}

#[test]
fn div_truncates() {
    assert_eq!(alu(AluOp::Div, 7, 2), 3);
    assert_eq!(alu(AluOp::Div, 255, 16), 15);
    assert_eq!(alu(AluOp::Div, 0, 9), 0);
}

#[test]
fn modulo_takes_remainder() {
    assert_eq!(alu(AluOp::Mod, 7, 2), 1);
    assert_eq!(alu(AluOp::Mod, 255, 16), 15);
}

#[test]
fn div_by_zero_is_a_domain_error() {
    assert_eq!(
        Alu::apply(AluOp::Div, 10, 0),
        Err(AluError::DivideByZero { op: "DIV" })
    );
}

#[test]
fn mod_by_zero_is_a_domain_error() {
    assert_eq!(
        Alu::apply(AluOp::Mod, 10, 0),
        Err(AluError::DivideByZero { op: "MOD" })
    );
}

#[test]
fn inc_and_dec_wrap() {
    assert_eq!(alu(AluOp::Inc, 41, 0), 42);
    assert_eq!(alu(AluOp::Inc, 255, 0), 0);
    assert_eq!(alu(AluOp::Dec, 42, 0), 41);
    assert_eq!(alu(AluOp::Dec, 0, 0), 255);
}

// ─── Bitwise ─────────────────────────────────────────────────────────────

#[test]
fn bitwise_and_or_xor() {
    assert_eq!(alu(AluOp::And, 0b1010_1010, 0b1100_1100), 0b1000_1000);
    assert_eq!(alu(AluOp::Or, 0b1010_1010, 0b0101_0101), 0b1111_1111);
    assert_eq!(alu(AluOp::Xor, 0b1010_1010, 0b1111_1111), 0b0101_0101);
    assert_eq!(alu(AluOp::Xor, 0xAB, 0xAB), 0);
}

#[test]
fn not_complements_ignoring_second_operand() {
    assert_eq!(alu(AluOp::Not, 0, 0), 255);
    assert_eq!(alu(AluOp::Not, 0b1111_0000, 99), 0b0000_1111);
}

#[test]
fn shifts_discard_bits() {
    assert_eq!(alu(AluOp::Shl, 1, 1), 2);
    assert_eq!(alu(AluOp::Shl, 0b1000_0001, 1), 0b0000_0010);
    assert_eq!(alu(AluOp::Shr, 0b1000_0000, 7), 1);
    assert_eq!(alu(AluOp::Shr, 0b0000_0011, 1), 0b0000_0001);
}

#[test]
fn shifts_of_eight_or_more_produce_zero() {
    assert_eq!(alu(AluOp::Shl, 0xFF, 8), 0);
    assert_eq!(alu(AluOp::Shr, 0xFF, 8), 0);
    assert_eq!(alu(AluOp::Shl, 1, 255), 0);
    assert_eq!(alu(AluOp::Shr, 0xFF, 200), 0);
}

// ─── Comparison ──────────────────────────────────────────────────────────

#[test]
fn cmp_yields_flags_not_a_value() {
    let outcome = Alu::apply(AluOp::Cmp, 3, 7).unwrap();
    let AluOutcome::Compare(flags) = outcome else {
        panic!("expected flags from CMP, got {outcome:?}");
    };
    assert!(flags.less());
    assert!(!flags.equal());
    assert!(!flags.greater());
}

#[test]
fn cmp_covers_all_three_orderings() {
    for (a, b, check) in [
        (1u8, 2u8, "less"),
        (2, 1, "greater"),
        (9, 9, "equal"),
    ] {
        let Ok(AluOutcome::Compare(flags)) = Alu::apply(AluOp::Cmp, a, b) else {
            panic!("CMP must produce flags");
        };
        match check {
            "less" => assert!(flags.less()),
            "greater" => assert!(flags.greater()),
            _ => assert!(flags.equal()),
        }
        assert_eq!(flags.bits().count_ones(), 1);
    }
}

// ─── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_add_is_mod_256(a in any::<u8>(), b in any::<u8>()) {
        let expected = ((u16::from(a) + u16::from(b)) % 256) as u8;
        prop_assert_eq!(alu(AluOp::Add, a, b), expected);
    }

    #[test]
    fn prop_sub_undoes_add(a in any::<u8>(), b in any::<u8>()) {
        let sum = alu(AluOp::Add, a, b);
        prop_assert_eq!(alu(AluOp::Sub, sum, b), a);
    }

    #[test]
    fn prop_div_never_fails_for_nonzero_divisor(a in any::<u8>(), b in 1u8..) {
        prop_assert_eq!(alu(AluOp::Div, a, b), a / b);
    }

    #[test]
    fn prop_cmp_sets_exactly_one_flag(a in any::<u8>(), b in any::<u8>()) {
        let Ok(AluOutcome::Compare(flags)) = Alu::apply(AluOp::Cmp, a, b) else {
            panic!("CMP must produce flags");
        };
        prop_assert_eq!(flags.bits().count_ones(), 1);
    }
}
