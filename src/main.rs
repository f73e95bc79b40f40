use std::process::ExitCode;

use clap::Parser;
use zloxc::cli::*;

fn main() -> ExitCode {
	let cli = Cli::parse();
	env_logger::Builder::new().filter_level(cli.log_level()).parse_default_env().init();

	let loxer = zloxc::Loxer;
	let options = cli.mode.run_options();

	match cli.mode {
		Mode::File { path, .. } => {
			if let Err(e) = loxer.run_file(&path, &options) {
				eprintln!("Failed compile file: {e}");
				return ExitCode::FAILURE;
			}
		}
		Mode::Repl { .. } => loxer.run_prompt(&options),
	}
	ExitCode::SUCCESS
}
