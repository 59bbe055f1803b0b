//! # Memory Tests
//!
//! The 256-byte RAM is total over `u8` addresses; the only fallible
//! operation is loading an oversized image.

use ls8_core::common::error::ImageError;
use ls8_core::core::mem::Ram;

#[test]
fn test_new_ram_is_zeroed() {
    let ram = Ram::new();
    assert!(ram.raw().iter().all(|&cell| cell == 0));
}

#[test]
fn test_write_then_read_every_address() {
    let mut ram = Ram::new();
    for addr in 0..=255u8 {
        ram.write(addr, addr.wrapping_mul(3));
    }
    for addr in 0..=255u8 {
        assert_eq!(ram.read(addr), addr.wrapping_mul(3));
    }
}

#[test]
fn test_load_image_starts_at_address_zero() {
    let mut ram = Ram::new();
    ram.write(200, 0xEE);
    ram.load_image(&[1, 2, 3]).unwrap();

    assert_eq!(ram.read(0), 1);
    assert_eq!(ram.read(1), 2);
    assert_eq!(ram.read(2), 3);
    assert_eq!(ram.read(3), 0);
    assert_eq!(ram.read(200), 0xEE, "cells past the image keep their contents");
}

#[test]
fn test_load_image_may_fill_memory_exactly() {
    let mut ram = Ram::new();
    let image = [0xAB; 256];
    ram.load_image(&image).unwrap();
    assert_eq!(ram.read(255), 0xAB);
}

#[test]
fn test_load_oversized_image_fails_without_writing() {
    let mut ram = Ram::new();
    let image = [0xAB; 257];
    let err = ram.load_image(&image).unwrap_err();

    assert!(matches!(err, ImageError::TooLarge { len: 257 }));
    assert!(ram.raw().iter().all(|&cell| cell == 0));
}
