/// Scanner related errors
#[derive(thiserror::Error, Debug)]
pub enum ScannerError {
	/// Internal compiler error, should never happen
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	/// Errors encountered during scanning
	#[error(transparent)]
	ScanError(#[from] ScanError),
}

/// A specific scanning error with line number and type.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("line {line}: {type}")]
pub struct ScanError {
	/// The line number where the error occurred.
	line:   usize,
	/// The type of scanning error.
	r#type: ScanErrorType,
}

impl ScanError {
	pub fn new(line: usize, r#type: ScanErrorType) -> Self { Self { line, r#type } }

	pub fn line(&self) -> usize { self.line }

	pub fn error_type(&self) -> &ScanErrorType { &self.r#type }
}

/// Types of scanning errors.
#[derive(Debug, PartialEq)]
pub enum ScanErrorType {
	/// A byte outside `\n` and printable ASCII anywhere in the source.
	InvalidSourceByte(u8),
	/// Error for unexpected characters.
	UnexpectedCharacter(char),
	/// Error for unterminated strings.
	UnterminatedString,
	/// Non printable byte between the quotes of a string.
	UnexpectedCharacterInString(u8),
}

impl std::fmt::Display for ScanErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ScanErrorType::*;
		match self {
			InvalidSourceByte(b) => {
				write!(f, "Invalid source byte 0x{b:02x}")
			}
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character {c:?}")
			}
			UnterminatedString => {
				write!(f, "Unterminated string")
			}
			UnexpectedCharacterInString(b) => {
				write!(f, "Unexpected character 0x{b:02x} in string literal")
			}
		}
	}
}
