//! # Comparison Flags Tests
//!
//! The flags byte is `00000LGE`: every `CMP` sets exactly one of the three
//! bits and clears the other two.

use std::cmp::Ordering;

use ls8_core::common::flags::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS, Flags};
use rstest::rstest;

#[test]
fn test_flags_start_cleared() {
    let flags = Flags::new();
    assert_eq!(flags.bits(), 0);
    assert!(!flags.equal());
    assert!(!flags.less());
    assert!(!flags.greater());
}

#[rstest]
#[case(Ordering::Less, FLAG_LESS)]
#[case(Ordering::Greater, FLAG_GREATER)]
#[case(Ordering::Equal, FLAG_EQUAL)]
fn test_set_compare_sets_exactly_one_bit(#[case] ordering: Ordering, #[case] expected: u8) {
    let mut flags = Flags::new();
    flags.set_compare(ordering);
    assert_eq!(flags.bits(), expected);
    assert_eq!(flags.bits().count_ones(), 1);
}

#[test]
fn test_set_compare_overwrites_previous_result() {
    let mut flags = Flags::new();
    flags.set_compare(Ordering::Less);
    flags.set_compare(Ordering::Equal);
    assert_eq!(flags.bits(), FLAG_EQUAL);
    assert!(flags.equal());
    assert!(!flags.less());
}

#[test]
fn test_accessors_match_bits() {
    let mut flags = Flags::new();

    flags.set_compare(Ordering::Less);
    assert!(flags.less() && !flags.greater() && !flags.equal());

    flags.set_compare(Ordering::Greater);
    assert!(flags.greater() && !flags.less() && !flags.equal());

    flags.set_compare(Ordering::Equal);
    assert!(flags.equal() && !flags.less() && !flags.greater());
}
