pub mod compiler;
pub mod scanner;

use crate::{
	ParseError, ScanError,
	error::{compiler::CompilerError, scanner::ScannerError},
};

/// LoxError is the top-level error type of the compiler. Every variant is
/// fatal, the first one raised aborts the compilation.
#[derive(thiserror::Error, Debug)]
pub enum LoxError {
	/// Internal compiler error, should never happen
	#[error("CompilerInternalError: {0}")]
	InternalError(#[from] anyhow::Error),
	/// Lexical error raised while scanning
	#[error("Scan error, {0}")]
	ScanError(#[from] ScanError),
	/// Syntax error raised while compiling
	#[error("Parse error, {0}")]
	ParseError(#[from] ParseError),
}

impl From<ScannerError> for LoxError {
	fn from(error: ScannerError) -> Self {
		match error {
			ScannerError::InternalError(e) => LoxError::InternalError(e),
			ScannerError::ScanError(e) => LoxError::ScanError(e),
		}
	}
}

impl From<CompilerError> for LoxError {
	fn from(error: CompilerError) -> Self {
		match error {
			CompilerError::InternalError(e) => LoxError::InternalError(e),
			CompilerError::ParseError(e) => LoxError::ParseError(e),
		}
	}
}
