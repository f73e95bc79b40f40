use std::{fs::read, io::Write, path::Path};

use anyhow::Context;
use log::info;

use crate::{
	LoxError,
	compiler::{Chunk, ParseRules, compile},
	scanner::{Scanner, Token},
};

/// Loxer is the entry point of the compiler, the one place where scanning and
/// compiling errors surface.
pub struct Loxer;

/// What [`Loxer`] prints while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
	/// Dump every token before compiling.
	pub show_tokens: bool,
	/// Print the emitted instructions.
	pub show_code:   bool,
}

impl Default for RunOptions {
	fn default() -> Self { Self { show_tokens: false, show_code: true } }
}

impl Loxer {
	/// Compile the source file at `path`.
	pub fn run_file<P: AsRef<Path>>(&self, path: P, options: &RunOptions) -> Result<Chunk, LoxError> {
		let path = path.as_ref();
		let source = read(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		info!("Compiling {} ({} bytes)", path.display(), source.len());
		self.run(&source, options)
	}

	/// Run the REPL prompt, every line is compiled on its own.
	pub fn run_prompt(&self, options: &RunOptions) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("> ");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited zloxc repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			if let Err(e) = self.run(input.trim().as_bytes(), options) {
				eprintln!("Failed compile prompt: {e}");
			}
		}
	}

	/// Scan `source` into tokens, whitespace dropped and `Eof` last.
	pub fn tokenize<'a>(&self, source: &'a [u8]) -> Result<Vec<Token<'a>>, LoxError> {
		Ok(Scanner::new(source).scan_tokens()?)
	}

	/// Compile `source`, a single expression optionally ended by `;`.
	pub fn compile(&self, source: &[u8]) -> Result<Chunk, LoxError> {
		let tokens = self.tokenize(source)?;
		Ok(compile(&tokens, &ParseRules::new())?)
	}
}

impl Loxer {
	fn run(&self, source: &[u8], options: &RunOptions) -> Result<Chunk, LoxError> {
		let tokens = self.tokenize(source)?;
		if options.show_tokens {
			for token in &tokens {
				println!("{token}");
			}
		}

		let chunk = compile(&tokens, &ParseRules::new())?;
		if options.show_code {
			print!("{chunk}");
		}
		Ok(chunk)
	}
}
