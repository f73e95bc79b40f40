use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use crate::RunOptions;

#[derive(Parser, Debug)]
#[command(
	name = "zloxc",
	version,
	about = "Compile a Lox arithmetic expression to stack machine instructions",
	after_long_help = "Prints one instruction mnemonic per line. `RUST_LOG` overrides --verbose."
)]
pub struct Cli {
	/// Log more, repeat for more detail (-v info, -vv debug, -vvv trace)
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,
	#[command(subcommand)]
	pub mode:    Mode,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
	/// Input file
	File {
		path:    PathBuf,
		/// Dump the scanned tokens
		#[arg(long)]
		tokens:  bool,
		/// Do not print the emitted instructions
		#[arg(long)]
		no_code: bool,
	},
	/// Input prompt
	Repl {
		/// Dump the scanned tokens
		#[arg(long)]
		tokens: bool,
	},
}

impl Cli {
	pub fn log_level(&self) -> LevelFilter {
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}
}

impl Mode {
	pub fn run_options(&self) -> RunOptions {
		match *self {
			Mode::File { tokens, no_code, .. } => RunOptions { show_tokens: tokens, show_code: !no_code },
			Mode::Repl { tokens } => RunOptions { show_tokens: tokens, show_code: true },
		}
	}
}
