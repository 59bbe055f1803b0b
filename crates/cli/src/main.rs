//! LS-8 microcomputer simulator CLI.
//!
//! This binary provides a single entry point for working with LS-8 program
//! images. It performs:
//! 1. **Run:** Load an image at address zero and execute it until `HLT`.
//! 2. **Disassemble:** Print a listing of an image without executing it.
//! 3. **Bare path:** `ls8 <image>` is shorthand for `ls8 run -f <image>`.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ls8_core::config::Config;
use ls8_core::core::Cpu;
use ls8_core::io::ConsoleSink;
use ls8_core::isa::decode::InstructionBits;
use ls8_core::isa::disasm;
use ls8_core::sim::loader;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "LS-8 microcomputer simulator",
    long_about = "Run or disassemble LS-8 program images.\n\nImages are text files of 8-bit binary literals, one byte per line, with `#` comments.\n\nExamples:\n  ls8 demos/print8.ls8\n  ls8 run -f demos/mult.ls8 --trace\n  ls8 disasm -f demos/call.ls8",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Program image to run (shorthand for `run -f <IMAGE>`).
    image: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a program image and execute it until HLT.
    Run {
        /// Program image to execute.
        #[arg(short, long)]
        file: PathBuf,

        /// Print a TRACE line for every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Step budget before the run is aborted (0 disables the limit).
        #[arg(long)]
        step_limit: Option<u64>,

        /// JSON configuration file (flags override its values).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print run statistics after a clean halt.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a program image.
    Disasm {
        /// Program image to disassemble.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            file,
            trace,
            step_limit,
            config,
            stats,
        }) => cmd_run(&file, trace, step_limit, config.as_deref(), stats),
        Some(Commands::Disasm { file }) => cmd_disasm(&file),
        None => match cli.image {
            Some(image) => cmd_run(&image, false, None, None, false),
            None => {
                eprintln!("LS-8 simulator - pass a subcommand or a program image");
                eprintln!();
                eprintln!("  ls8 <image.ls8>            Run an image with defaults");
                eprintln!("  ls8 run -f <image.ls8>     Run with options (--trace, --stats, ...)");
                eprintln!("  ls8 disasm -f <image.ls8>  Print a listing without executing");
                eprintln!();
                eprintln!("  ls8 --help  for full options");
                process::exit(1);
            }
        },
    }
}

/// Runs the simulator: loads the image at address zero, then executes until halt.
///
/// Configuration is layered: built-in defaults, then the optional JSON config
/// file, then command-line flags. A machine fault prints the final state and
/// run statistics before exiting with code 1.
fn cmd_run(
    image: &Path,
    trace: bool,
    step_limit: Option<u64>,
    config_path: Option<&Path>,
    stats: bool,
) {
    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading config: {}", e);
            process::exit(1);
        }
    };
    if trace {
        config.general.trace = true;
    }
    if let Some(limit) = step_limit {
        config.general.step_limit = if limit == 0 { None } else { Some(limit) };
    }

    let mut cpu = Cpu::new(Box::new(ConsoleSink), &config);

    if let Err(e) = loader::load_file(&mut cpu, image) {
        eprintln!("Error loading {}: {}", image.display(), e);
        process::exit(1);
    }

    if let Err(e) = cpu.run() {
        eprintln!("\n[!] FATAL: {}", e);
        cpu.dump_state();
        cpu.stats.print();
        process::exit(1);
    }

    if stats {
        cpu.stats.print();
    }
}

/// Loads the JSON config file if one was given, otherwise built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(Config::from_json(&text)?)
        }
        None => Ok(Config::default()),
    }
}

/// Prints a disassembly listing: one line per instruction with its address.
///
/// Operand bytes are folded into their instruction's line, mirroring how the
/// machine fetches them.
fn cmd_disasm(image: &Path) {
    let source = match fs::read_to_string(image) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", image.display(), e);
            process::exit(1);
        }
    };
    let bytes = match loader::parse_image(&source) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error parsing {}: {}", image.display(), e);
            process::exit(1);
        }
    };

    let mut addr = 0usize;
    while addr < bytes.len() {
        let raw = bytes[addr];
        let a = bytes.get(addr + 1).copied().unwrap_or(0);
        let b = bytes.get(addr + 2).copied().unwrap_or(0);
        println!("{:#04x}: {}", addr, disasm::disassemble(raw, a, b));
        addr += usize::from(raw.operand_count()) + 1;
    }
}
