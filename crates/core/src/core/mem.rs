//! The 256-byte memory.

use crate::common::constants::MEMORY_SIZE;
use crate::common::error::ImageError;

/// Flat byte memory.
///
/// Addresses are `u8`, so every representable address is in range by
/// construction and access is total. The only bounds check that can fail at
/// runtime is loading an image longer than memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    /// Creates zeroed memory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads the byte at `addr`.
    #[inline]
    #[must_use]
    pub const fn read(&self, addr: u8) -> u8 {
        self.cells[addr as usize]
    }

    /// Writes `value` at `addr`.
    #[inline]
    pub fn write(&mut self, addr: u8, value: u8) {
        self.cells[addr as usize] = value;
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// Cells beyond the image keep their previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::TooLarge`] when the image exceeds memory.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), ImageError> {
        if image.len() > MEMORY_SIZE {
            return Err(ImageError::TooLarge { len: image.len() });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Raw view of all cells.
    #[must_use]
    pub const fn raw(&self) -> &[u8; MEMORY_SIZE] {
        &self.cells
    }
}
