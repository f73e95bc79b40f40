//! Turns the raw source bytes into tokens.
//!
//! The scanner works on bytes, not `char`s: the only accepted source
//! characters are `\n` and printable ASCII, so every byte is one character and
//! every lexeme is a valid `&str` slice of the source.
//!
//! Tokens are produced one at a time by [`Scanner::scan_token`], each one the
//! longest lexeme that matches (`maximal munch`), looking at most two bytes
//! ahead. Whitespace still comes out as `Space` and `NewLine` tokens so the line
//! counter stays right; [`Scanner::scan_tokens`] drops them.
mod token;

use TokenType::*;
use anyhow::Context;
use log::{debug, trace};
pub use token::*;

use crate::{ScanError, ScanErrorType, ScannerError};

/// Only `\n` and printable ASCII may appear in a source file.
fn is_source_byte(byte: u8) -> bool { byte == b'\n' || is_printable(byte) }

fn is_printable(byte: u8) -> bool { (0x20..=0x7e).contains(&byte) }

/// A scanner for Lox source code
pub struct Scanner<'a> {
	/// User input source code
	source: &'a [u8],
	/// Points at the beginning of the current lexeme
	start:  usize,
	/// Points at the byte currently being considered
	cursor: usize,
	/// Tracks what source line `cursor` is on so we can produce tokens that know
	/// their location.
	line:   usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a [u8]) -> Self { Self { source, start: 0, cursor: 0, line: 1 } }

	/// Scan all tokens from the source code.
	///
	/// The whole buffer is checked for foreign bytes before the first token is
	/// scanned. Whitespace tokens are dropped, the returned tokens always end
	/// with exactly one `Eof`.
	pub fn scan_tokens(mut self) -> Result<Vec<Token<'a>>, ScannerError> {
		self.validate_source()?;

		let mut tokens = Vec::new();
		loop {
			let token = self.scan_token()?;
			trace!("Scanned {token}");
			if token.r#type.is_ignored() {
				continue;
			}
			tokens.push(token);
			if token.r#type == Eof {
				break;
			}
		}
		debug!("Scanned {} tokens over {} lines", tokens.len(), self.line);
		Ok(tokens)
	}

	/// Scan a single token from the source code, `Eof` once the input is
	/// exhausted.
	pub fn scan_token(&mut self) -> Result<Token<'a>, ScannerError> {
		// We are at the beginning of the next lexeme.
		self.start = self.cursor;
		let Some(next_byte) = self.advance() else {
			return Ok(Token::new(Eof, "", self.line));
		};

		#[rustfmt::skip]
		let r#type = match next_byte {
			b'(' => LeftParen,
			b')' => RightParen,
			b'{' => LeftBrace,
			b'}' => RightBrace,
			b',' => Comma,
			b'.' => Dot,
			b'-' => Minus,
			b'+' => Plus,
			b';' => Semicolon,
			b'*' => Star,
			b'/' => Slash,
			b'!' => if self.match_next(b'=') { BangEqual } else { Bang },
			b'=' => if self.match_next(b'=') { EqualEqual } else { Equal },
			b'<' => if self.match_next(b'=') { LessEqual } else { Less },
			b'>' => if self.match_next(b'=') { GreaterEqual } else { Greater },
			b' ' => Space,
			b'\n' => {
				let token = self.make_token(NewLine)?;
				self.line += 1;
				return Ok(token);
			}
			b'"' => return self.string(),
			c if c.is_ascii_digit() => self.number(),
			c if c.is_ascii_alphabetic() || c == b'_' => self.identifier()?,
			c if is_source_byte(c) => {
				return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacter(c as char)).into())
			}
			c => return Err(ScanError::new(self.line, ScanErrorType::InvalidSourceByte(c)).into()),
		};

		self.make_token(r#type)
	}

	/// Reject the whole buffer if any byte is neither `\n` nor printable ASCII.
	fn validate_source(&self) -> Result<(), ScanError> {
		let mut line = 1;
		for &byte in self.source {
			match byte {
				b'\n' => line += 1,
				b if is_printable(b) => {}
				b => return Err(ScanError::new(line, ScanErrorType::InvalidSourceByte(b))),
			}
		}
		Ok(())
	}

	fn make_token(&self, r#type: TokenType) -> Result<Token<'a>, ScannerError> {
		Ok(Token::new(r#type, self.lexeme(self.start, self.cursor)?, self.line))
	}

	fn lexeme(&self, from: usize, to: usize) -> anyhow::Result<&'a str> {
		let source = self.source;
		std::str::from_utf8(&source[from..to]).context("Lexeme is not valid UTF-8")
	}

	fn is_at_end(&self) -> bool { self.cursor >= self.source.len() }

	/// Match the next byte if it is the expected one
	fn match_next(&mut self, expected: u8) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next byte
	fn advance(&mut self) -> Option<u8> {
		let c = *self.source.get(self.cursor)?;
		self.cursor += 1;
		Some(c)
	}

	/// Peek the current byte
	fn peek(&self) -> Option<u8> { self.source.get(self.cursor).copied() }

	/// Peek the byte after the current one
	fn peek_next(&self) -> Option<u8> { self.source.get(self.cursor + 1).copied() }

	/// Scan a string literal, the lexeme excludes both quotes
	fn string(&mut self) -> Result<Token<'a>, ScannerError> {
		while let Some(c) = self.peek() {
			if c == b'"' {
				break;
			}
			if !is_printable(c) {
				return Err(ScanError::new(self.line, ScanErrorType::UnexpectedCharacterInString(c)).into());
			}
			self.advance();
		}

		if self.is_at_end() {
			return Err(ScanError::new(self.line, ScanErrorType::UnterminatedString).into());
		}
		self.advance(); // The closing "
		let value = self.lexeme(self.start + 1, self.cursor - 1)?;
		Ok(Token::new(String, value, self.line))
	}

	/// Scan a number literal
	fn number(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_digit()) {
			self.advance();
		}

		// A '.' not followed by a digit is left alone, it may be a field access.
		if self.peek() == Some(b'.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
			self.advance(); // consume '.'
			while self.peek().is_some_and(|c| c.is_ascii_digit()) {
				self.advance();
			}
		}

		Number
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> Result<TokenType, ScannerError> {
		while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == b'_') {
			self.advance();
		}
		let text = self.lexeme(self.start, self.cursor)?;
		Ok(TokenType::keyword_or_identifier(text))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scan(input: &str, ok: bool) {
		let result = Scanner::new(input.as_bytes()).scan_tokens();
		assert!(result.is_ok() == ok, "{input:?}");
	}

	fn types(input: &str) -> Vec<TokenType> {
		Scanner::new(input.as_bytes()).scan_tokens().unwrap().iter().map(|t| t.r#type).collect()
	}

	fn scan_error(input: &[u8]) -> ScanError {
		match Scanner::new(input).scan_tokens() {
			Err(ScannerError::ScanError(e)) => e,
			other => panic!("expected scan error, got {other:?}"),
		}
	}

	#[test]
	fn scan_tokens() {
		scan("", true);
		scan("(", true);
		scan("(){}", true);
		scan(" ( ) ", true);
		scan("@", false);
		scan("#", false);
		scan("你好", false);
		scan("12345", true);
		scan("user", true);
		scan("return", true);
		scan("\t", false);
		scan("\r\n", false);
	}

	#[test]
	fn scan_operators() {
		assert_eq!(types("!"), [Bang, Eof]);
		assert_eq!(types("!="), [BangEqual, Eof]);
		assert_eq!(types("="), [Equal, Eof]);
		assert_eq!(types("=="), [EqualEqual, Eof]);
		assert_eq!(types("<"), [Less, Eof]);
		assert_eq!(types("<="), [LessEqual, Eof]);
		assert_eq!(types(">"), [Greater, Eof]);
		assert_eq!(types(">="), [GreaterEqual, Eof]);
		assert_eq!(types("==="), [EqualEqual, Equal, Eof]);
		assert_eq!(types("! ="), [Bang, Equal, Eof]);
		assert_eq!(types("-+*/;,."), [Minus, Plus, Star, Slash, Semicolon, Comma, Dot, Eof]);
	}

	#[test]
	fn scan_numbers() {
		assert_eq!(types("0"), [Number, Eof]);
		assert_eq!(types("3.14"), [Number, Eof]);
		assert_eq!(types("1."), [Number, Dot, Eof]);
		assert_eq!(types(".5"), [Dot, Number, Eof]);
		assert_eq!(types("1.2.3"), [Number, Dot, Number, Eof]);

		let tokens = Scanner::new(b"123.456.x").scan_tokens().unwrap();
		assert_eq!(tokens[0].lexeme, "123.456");
		assert_eq!(tokens[1].r#type, Dot);
		assert_eq!(tokens[2].lexeme, "x");
	}

	#[test]
	fn scan_strings() {
		let tokens = Scanner::new(br#""hello world""#).scan_tokens().unwrap();
		assert_eq!(tokens[0].r#type, String);
		assert_eq!(tokens[0].lexeme, "hello world");

		let tokens = Scanner::new(br#""""#).scan_tokens().unwrap();
		assert_eq!(tokens[0].lexeme, "");

		let error = scan_error(b"\"unterminated");
		assert_eq!(error.error_type(), &ScanErrorType::UnterminatedString);

		let error = scan_error(b"1\n\"multi\nline\"");
		assert_eq!(error.line(), 2);
		assert_eq!(error.error_type(), &ScanErrorType::UnexpectedCharacterInString(b'\n'));
	}

	#[test]
	fn scan_keywords() {
		assert_eq!(
			types("if else for while func nil print return true false var"),
			[If, Else, For, While, Func, Nil, Print, Return, True, False, Var, Eof]
		);
		assert_eq!(types("_name myVariable123 and123 class"), [Identifier, Identifier, Identifier, Identifier, Eof]);
	}

	#[test]
	fn scan_whitespace_is_dropped() {
		assert_eq!(types(" "), [Eof]);
		assert_eq!(types("\n\n"), [Eof]);
		assert_eq!(types("  1 \n +  2\n"), [Number, Plus, Number, Eof]);
	}

	#[test]
	fn scan_token_keeps_whitespace() {
		let mut scanner = Scanner::new(b"1 \n2");
		let kinds: Vec<TokenType> = std::iter::from_fn(|| {
			let token = scanner.scan_token().unwrap();
			(token.r#type != Eof).then_some(token.r#type)
		})
		.collect();
		assert_eq!(kinds, [Number, Space, NewLine, Number]);
		assert_eq!(scanner.scan_token().unwrap().r#type, Eof);
		assert_eq!(scanner.scan_token().unwrap().r#type, Eof);
	}

	#[test]
	fn scan_lines() {
		let tokens = Scanner::new(b"1\n+\n\n2").scan_tokens().unwrap();
		let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();
		assert_eq!(lines, [1, 2, 4, 4]);

		let error = scan_error(b"1\n2\n@");
		assert_eq!(error.line(), 3);
		assert_eq!(error.error_type(), &ScanErrorType::UnexpectedCharacter('@'));
	}

	#[test]
	fn invalid_byte_fails_before_scanning() {
		// The '@' on line 1 would fail first if the buffer was not checked up front.
		let error = scan_error(b"@\n1 + \x01");
		assert_eq!(error.line(), 2);
		assert_eq!(error.error_type(), &ScanErrorType::InvalidSourceByte(0x01));

		let error = scan_error(b"\"abc\tdef\"");
		assert_eq!(error.error_type(), &ScanErrorType::InvalidSourceByte(b'\t'));
	}

	#[test]
	fn single_eof() {
		let tokens = Scanner::new(b"1 + 2").scan_tokens().unwrap();
		assert_eq!(tokens.iter().filter(|t| t.r#type == Eof).count(), 1);
		assert_eq!(tokens.last().map(|t| t.r#type), Some(Eof));
	}

	#[test]
	fn rescanning_lexemes_is_stable() {
		let source = "var x=(1.5+foo)*-2;print \"a b\" != nil\nwhile(x<=10.){x}";
		let tokens = Scanner::new(source.as_bytes()).scan_tokens().unwrap();
		let rebuilt = tokens
			.iter()
			.map(|t| if t.r#type == String { format!("\"{}\"", t.lexeme) } else { t.lexeme.to_string() })
			.collect::<Vec<_>>()
			.join(" ");
		let rescanned = Scanner::new(rebuilt.as_bytes()).scan_tokens().unwrap();

		assert_eq!(tokens.len(), rescanned.len());
		for (a, b) in tokens.iter().zip(&rescanned) {
			assert_eq!((a.r#type, a.lexeme), (b.r#type, b.lexeme));
		}
	}
}
