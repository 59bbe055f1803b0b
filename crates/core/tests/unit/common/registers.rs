//! # Register File Tests
//!
//! The register file resets R7 to the empty-stack sentinel and everything
//! else to zero, and both accessors range-check the index.

use ls8_core::common::constants::{NUM_REGISTERS, STACK_EMPTY};
use ls8_core::common::reg::RegisterFile;

#[test]
fn test_reset_state() {
    let regs = RegisterFile::new();
    for i in 0..7u8 {
        assert_eq!(regs.read(i), Some(0));
    }
    assert_eq!(regs.read(7), Some(STACK_EMPTY));
    assert_eq!(regs.sp(), STACK_EMPTY);
}

#[test]
fn test_write_then_read_round_trip() {
    let mut regs = RegisterFile::new();
    for i in 0..NUM_REGISTERS as u8 {
        assert_eq!(regs.write(i, i * 10), Some(()));
        assert_eq!(regs.read(i), Some(i * 10));
    }
}

#[test]
fn test_read_out_of_range_is_none() {
    let regs = RegisterFile::new();
    assert_eq!(regs.read(8), None);
    assert_eq!(regs.read(255), None);
}

#[test]
fn test_write_out_of_range_is_none_and_changes_nothing() {
    let mut regs = RegisterFile::new();
    let before = *regs.raw();
    assert_eq!(regs.write(8, 0xAB), None);
    assert_eq!(*regs.raw(), before);
}

#[test]
fn test_sp_accessors_alias_r7() {
    let mut regs = RegisterFile::new();
    regs.set_sp(0xF7);
    assert_eq!(regs.sp(), 0xF7);
    assert_eq!(regs.read(7), Some(0xF7));

    assert_eq!(regs.write(7, 0xF5), Some(()));
    assert_eq!(regs.sp(), 0xF5);
}

#[test]
fn test_raw_view_is_r0_first() {
    let mut regs = RegisterFile::new();
    assert_eq!(regs.write(0, 1), Some(()));
    assert_eq!(regs.write(6, 66), Some(()));
    let raw = regs.raw();
    assert_eq!(raw[0], 1);
    assert_eq!(raw[6], 66);
    assert_eq!(raw[7], STACK_EMPTY);
}
