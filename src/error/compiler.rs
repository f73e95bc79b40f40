use crate::scanner::{Token, TokenType};

/// Errors of the expression compiler
#[derive(thiserror::Error, Debug)]
pub enum CompilerError {
	#[error("{0}")]
	InternalError(#[from] anyhow::Error),
	#[error(transparent)]
	ParseError(#[from] ParseError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("line {line} {}: {type}", display_location(.lexeme))]
pub struct ParseError {
	line:   usize,
	/// `None` when the offending token is the end of file
	lexeme: Option<String>,
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(line: usize, lexeme: Option<String>, r#type: ParseErrorType) -> Self { Self { line, lexeme, r#type } }

	/// Error located at `token`.
	pub fn at(token: &Token<'_>, r#type: ParseErrorType) -> Self {
		let lexeme = (token.r#type != TokenType::Eof).then(|| token.lexeme.to_string());
		Self::new(token.line, lexeme, r#type)
	}

	pub fn line(&self) -> usize { self.line }

	pub fn lexeme(&self) -> Option<&str> { self.lexeme.as_deref() }

	pub fn error_type(&self) -> &ParseErrorType { &self.r#type }
}

fn display_location(lexeme: &Option<String>) -> String {
	match lexeme {
		Some(lexeme) => format!("at '{lexeme}'"),
		None => "at end".to_string(),
	}
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorType {
	/// The token has no prefix rule, it cannot start an expression.
	ExpectedExpression,
	ExpectedRightParen,
	ExpectedEndOfFile,
	/// The token has a precedence but no infix rule.
	MissingInfixRule,
	/// The token type has no entry in the rule table at all.
	MissingParseRule(TokenType),
	/// Literal that does not parse to a finite `f64`.
	InvalidNumber,
	/// Operands nest deeper than the compiler's depth limit.
	TooDeeplyNested,
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			ExpectedExpression => {
				write!(f, "Expected expression, prefix rule not found")
			}
			ExpectedRightParen => {
				write!(f, "Expected ')' after expression")
			}
			ExpectedEndOfFile => {
				write!(f, "Expected end of file")
			}
			MissingInfixRule => {
				write!(f, "Infix rule not found")
			}
			MissingParseRule(kind) => {
				write!(f, "No parse rule registered for {kind:?}")
			}
			InvalidNumber => {
				write!(f, "Invalid number literal")
			}
			TooDeeplyNested => {
				write!(f, "Expression nested too deeply")
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_with_lexeme() {
		let token = Token::new(TokenType::Semicolon, ";", 3);
		let error = ParseError::at(&token, ParseErrorType::ExpectedExpression);
		assert_eq!(error.to_string(), "line 3 at ';': Expected expression, prefix rule not found");
	}

	#[test]
	fn display_at_end() {
		let token = Token::new(TokenType::Eof, "", 1);
		let error = ParseError::at(&token, ParseErrorType::ExpectedRightParen);
		assert_eq!(error.lexeme(), None);
		assert_eq!(error.to_string(), "line 1 at end: Expected ')' after expression");
	}
}
