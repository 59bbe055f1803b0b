//! Output collaborators for the `PRN` instruction.
//!
//! The machine's only user-visible output channel is the sequence of values
//! printed by `PRN`. The CPU owns a boxed [`OutputSink`] injected at
//! construction; the console sink prints, the capture sink records for
//! inspection by tests and embedders.

/// Receives each value the program prints, in program order.
pub trait OutputSink {
    /// Emits one printed value.
    fn emit(&mut self, value: u8);

    /// Values recorded so far, for sinks that keep them.
    fn recorded(&self) -> Option<&[u8]> {
        None
    }
}

/// Prints each value in decimal on its own line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn emit(&mut self, value: u8) {
        println!("{value}");
    }
}

/// Records printed values instead of writing them anywhere.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    values: Vec<u8>,
}

impl CaptureSink {
    /// Creates an empty capture sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }
}

impl OutputSink for CaptureSink {
    fn emit(&mut self, value: u8) {
        self.values.push(value);
    }

    fn recorded(&self) -> Option<&[u8]> {
        Some(&self.values)
    }
}
