use std::fmt::Display;

/// A token produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
	pub r#type: TokenType,
	/// Slice of the source, string literals exclude their quotes
	pub lexeme: &'a str,
	pub line:   usize,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str, line: usize) -> Self { Self { r#type, lexeme, line } }
}

impl Display for Token<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:>4} {:?} '{}'", self.line, self.r#type, self.lexeme)
	}
}

/// The different kinds of tokens. Field-less so it can index the parse rule
/// table directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// New Line Character `\n`.
	NewLine,
	/// Space ` `.
	Space,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// Dot `.`.
	Dot,
	/// Minus `-`.
	Minus,
	/// Plus `+`.
	Plus,
	/// Semicolon `;`.
	Semicolon,
	/// Slash `/`.
	Slash,
	/// Asterisk `*`.
	Star,
	/// Bang `!`.
	Bang,
	/// Bang equal `!=`.
	BangEqual,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Greater than `>`.
	Greater,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Less than `<`.
	Less,
	/// Less than or equal `<=`.
	LessEqual,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// String literal, e.g. `"hello"`.
	String,
	/// Number literal, e.g. `123.45`.
	Number,
	Else,
	False,
	For,
	Func,
	If,
	Nil,
	Print,
	Return,
	True,
	Var,
	While,
	/// End of file/input.
	Eof,
}

impl TokenType {
	/// Number of variants, the size of any table indexed by token type.
	pub const COUNT: usize = TokenType::Eof as usize + 1;

	/// Whitespace tokens only exist to keep `line` accurate.
	pub fn is_ignored(&self) -> bool { matches!(self, TokenType::Space | TokenType::NewLine) }

	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"else" => TokenType::Else,
			"false" => TokenType::False,
			"for" => TokenType::For,
			"func" => TokenType::Func,
			"if" => TokenType::If,
			"nil" => TokenType::Nil,
			"print" => TokenType::Print,
			"return" => TokenType::Return,
			"true" => TokenType::True,
			"var" => TokenType::Var,
			"while" => TokenType::While,
			_ => TokenType::Identifier,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keywords() {
		assert_eq!(TokenType::keyword_or_identifier("func"), TokenType::Func);
		assert_eq!(TokenType::keyword_or_identifier("while"), TokenType::While);
		assert_eq!(TokenType::keyword_or_identifier("fun"), TokenType::Identifier);
		assert_eq!(TokenType::keyword_or_identifier("iff"), TokenType::Identifier);
		assert_eq!(TokenType::keyword_or_identifier("If"), TokenType::Identifier);
	}

	#[test]
	fn count_covers_every_variant() {
		assert_eq!(TokenType::NewLine as usize, 0);
		assert_eq!(TokenType::COUNT, 36);
	}

	#[test]
	fn display() {
		let token = Token::new(TokenType::Number, "3.5", 12);
		assert_eq!(token.to_string(), "  12 Number '3.5'");
	}
}
