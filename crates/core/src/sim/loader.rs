//! Program-image parsing and loading.
//!
//! Images are text: one binary literal per line, `#` starts a comment
//! (whole-line or trailing), blank lines are skipped. Each literal decodes
//! to one byte; bytes load into memory at sequential addresses starting
//! at 0.

use std::fs;
use std::path::Path;

use crate::common::error::ImageError;
use crate::core::Cpu;

/// Parses image text into its byte sequence.
///
/// # Errors
///
/// Returns [`ImageError::InvalidLiteral`] with the 1-based line number for
/// any line that is neither blank, a comment, nor an 8-bit binary literal.
pub fn parse_image(source: &str) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }
        let byte = u8::from_str_radix(text, 2).map_err(|_| ImageError::InvalidLiteral {
            line: idx + 1,
            text: text.to_string(),
        })?;
        bytes.push(byte);
    }
    tracing::debug!(bytes = bytes.len(), "parsed program image");
    Ok(bytes)
}

/// Copies parsed image bytes into a machine's memory at address 0.
///
/// # Errors
///
/// Returns [`ImageError::TooLarge`] when the image exceeds memory.
pub fn load_image(cpu: &mut Cpu, image: &[u8]) -> Result<(), ImageError> {
    cpu.ram.load_image(image)
}

/// Reads, parses, and loads an image file.
///
/// # Errors
///
/// I/O failures, malformed literals, and oversized images all surface as
/// [`ImageError`].
pub fn load_file(cpu: &mut Cpu, path: &Path) -> Result<(), ImageError> {
    let source = fs::read_to_string(path)?;
    let image = parse_image(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "loading program");
    load_image(cpu, &image)
}
