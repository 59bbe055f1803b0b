//! Run statistics collection and reporting.

use std::time::Instant;

/// Counters accumulated over one run.
///
/// The execution loop increments one category counter per executed
/// instruction; `HLT` counts toward `steps` only.
#[derive(Debug, Clone)]
pub struct SimStats {
    /// Wall-clock start of the run, set at machine construction.
    pub start_time: Instant,
    /// Instructions executed.
    pub steps: u64,
    /// `LDI` instructions executed.
    pub inst_load: u64,
    /// ALU instructions executed, `CMP` included.
    pub inst_alu: u64,
    /// `PUSH`/`POP` instructions executed.
    pub inst_stack: u64,
    /// `CALL`/`RET` and jump instructions executed.
    pub inst_control: u64,
    /// `PRN` instructions executed.
    pub inst_output: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    /// Creates zeroed counters, starting the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            inst_load: 0,
            inst_alu: 0,
            inst_stack: 0,
            inst_control: 0,
            inst_output: 0,
        }
    }

    /// Prints a bannered summary of the run.
    pub fn print(&self) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        println!("\n==========================================");
        println!("            LS-8 RUN STATISTICS");
        println!("==========================================");
        println!("  Host time:          {elapsed:.3} s");
        println!("  Steps executed:     {}", self.steps);
        if self.steps > 0 && elapsed > 0.0 {
            println!(
                "  Steps per second:   {:.0}",
                self.steps as f64 / elapsed
            );
        }

        println!("\n  --- Instruction Mix ---");
        self.print_mix("Load immediate", self.inst_load);
        self.print_mix("ALU", self.inst_alu);
        self.print_mix("Stack", self.inst_stack);
        self.print_mix("Control flow", self.inst_control);
        self.print_mix("Output", self.inst_output);
        println!("==========================================");
    }

    fn print_mix(&self, label: &str, count: u64) {
        let pct = if self.steps == 0 {
            0.0
        } else {
            count as f64 / self.steps as f64 * 100.0
        };
        println!("  {label:<16} {count:>10}  ({pct:>5.1}%)");
    }
}
