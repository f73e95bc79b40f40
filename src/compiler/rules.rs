//! The parse rule table driving the Pratt parser.
//!
//! |Token|Prefix|Infix|Precedence
//! --|--|--|--
//! `(`|grouping||None
//! `)`|||None
//! Number|number||None
//! `-`|unary|binary|Term
//! `+`||binary|Term
//! `*` `/`||binary|Factor
//! `;`|||None
//! Eof|||None
//!
//! Token types missing from the table behave like `None` precedence when the
//! parser only asks how tightly they bind.

use crate::scanner::TokenType;

/// Binding power of an operator, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	None,
	Assignment,
	Or,
	And,
	Equality,
	Comparison,
	Term,
	Factor,
	Unary,
	Call,
	Primary,
}

impl Precedence {
	/// One level tighter, used for the right operand of left associative
	/// operators.
	pub fn next(self) -> Self {
		use Precedence::*;
		match self {
			None => Assignment,
			Assignment => Or,
			Or => And,
			And => Equality,
			Equality => Comparison,
			Comparison => Term,
			Term => Factor,
			Factor => Unary,
			Unary => Call,
			Call | Primary => Primary,
		}
	}
}

/// What the compiler does when a token starts an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
	Grouping,
	Number,
	Unary,
}

/// What the compiler does when a token follows a complete operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
	Binary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
	pub prefix:     Option<PrefixRule>,
	pub infix:      Option<InfixRule>,
	pub precedence: Precedence,
}

impl ParseRule {
	pub const fn new(prefix: Option<PrefixRule>, infix: Option<InfixRule>, precedence: Precedence) -> Self {
		Self { prefix, infix, precedence }
	}
}

/// Immutable table from token type to its parse rule, indexed by
/// `TokenType as usize`.
#[derive(Debug, Clone)]
pub struct ParseRules {
	rules: [Option<ParseRule>; TokenType::COUNT],
}

impl Default for ParseRules {
	fn default() -> Self { Self::new() }
}

impl ParseRules {
	pub fn new() -> Self {
		use InfixRule::*;
		use TokenType::*;

		let mut rules: [Option<ParseRule>; TokenType::COUNT] = [None; TokenType::COUNT];
		let mut register = |r#type: TokenType, rule: ParseRule| rules[r#type as usize] = Some(rule);

		register(LeftParen, ParseRule::new(Some(PrefixRule::Grouping), None, Precedence::None));
		register(RightParen, ParseRule::new(None, None, Precedence::None));
		register(Number, ParseRule::new(Some(PrefixRule::Number), None, Precedence::None));
		register(Minus, ParseRule::new(Some(PrefixRule::Unary), Some(Binary), Precedence::Term));
		register(Plus, ParseRule::new(None, Some(Binary), Precedence::Term));
		register(Star, ParseRule::new(None, Some(Binary), Precedence::Factor));
		register(Slash, ParseRule::new(None, Some(Binary), Precedence::Factor));
		register(Semicolon, ParseRule::new(None, None, Precedence::None));
		register(Eof, ParseRule::new(None, None, Precedence::None));

		Self { rules }
	}

	/// Replace the entry of a token type before the table is handed to a
	/// compiler.
	#[cfg(test)]
	pub(crate) fn with(mut self, r#type: TokenType, rule: ParseRule) -> Self {
		self.rules[r#type as usize] = Some(rule);
		self
	}

	/// The registered rule, `None` if the token type has no entry.
	pub fn get(&self, r#type: TokenType) -> Option<&ParseRule> { self.rules[r#type as usize].as_ref() }

	pub fn prefix(&self, r#type: TokenType) -> Option<PrefixRule> { self.get(r#type).and_then(|rule| rule.prefix) }

	/// A token type with no entry binds like `None`, which ends any operator
	/// loop instead of failing.
	pub fn precedence(&self, r#type: TokenType) -> Precedence {
		self.get(r#type).map_or(Precedence::None, |rule| rule.precedence)
	}
}
