//! Single-pass expression compiler.
//!
//! The compiler never builds a syntax tree: while it walks the tokens it
//! directly emits the instructions of a stack machine, operands first and the
//! operator that consumes them afterwards.
//!
//! Parsing is `Pratt parsing` (or `precedence climbing`). Every token type
//! has an entry in the [`ParseRules`] table telling what to do when the token
//! starts an expression (prefix), what to do when it follows a complete operand
//! (infix), and how tightly it binds as an infix operator.
//!
//! `parse_precedence(min)` parses one prefix expression, then keeps absorbing
//! infix operators while they bind at least as tightly as `min`. A binary
//! operator parses its right operand one level tighter than itself, so
//! `1 - 2 - 3` is `(1 - 2) - 3`.
//!
//! ``` markdown
//! (1 + 2) * -3
//!
//! PUSH_FLOAT 1
//! PUSH_FLOAT 2
//! ADD
//! PUSH_FLOAT 3
//! NEGATE
//! MULTIPLY
//! ```

mod chunk;
mod rules;

use TokenType::*;
use anyhow::anyhow;
pub use chunk::{Chunk, Instruction};
use log::{debug, trace};
pub use rules::{InfixRule, ParseRule, ParseRules, Precedence, PrefixRule};

use crate::{
	error::compiler::{CompilerError, ParseError, ParseErrorType},
	scanner::{Token, TokenType},
};

/// Compile one expression, optionally followed by `;`, into a chunk.
pub fn compile(tokens: &[Token<'_>], rules: &ParseRules) -> Result<Chunk, CompilerError> {
	Compiler::new(tokens, rules).compile()
}

/// Compiles a token stream ending with `Eof`.
pub struct Compiler<'t, 'a> {
	/// The tokens to compile.
	tokens:    &'t [Token<'a>],
	/// Index of the current token, the previous one is right before it.
	position:  usize,
	rules:     &'t ParseRules,
	chunk:     Chunk,
	/// Nesting of `parse_precedence` calls, each one costs stack.
	depth:     usize,
	max_depth: usize,
}

impl<'t, 'a> Compiler<'t, 'a> {
	/// Default limit of nested prefix and infix operands.
	pub const MAX_DEPTH: usize = 256;

	pub fn new(tokens: &'t [Token<'a>], rules: &'t ParseRules) -> Self {
		Self { tokens, position: 0, rules, chunk: Chunk::new(), depth: 0, max_depth: Self::MAX_DEPTH }
	}

	/// Fail with `TooDeeplyNested` once operands nest deeper than `max`.
	pub fn with_max_depth(mut self, max: usize) -> Self {
		self.max_depth = max;
		self
	}

	pub fn compile(mut self) -> Result<Chunk, CompilerError> {
		debug!("Compiling {} tokens", self.tokens.len());

		self.expression()?;
		if self.peek()?.r#type == Semicolon {
			self.advance()?;
		}
		let token = self.peek()?;
		if token.r#type != Eof {
			return Err(ParseError::at(token, ParseErrorType::ExpectedEndOfFile).into());
		}

		debug!("Emitted {} instructions", self.chunk.len());
		Ok(self.chunk)
	}

	fn expression(&mut self) -> Result<(), CompilerError> { self.parse_precedence(Precedence::Assignment) }

	/// Parse an expression whose operators bind at least as tightly as
	/// `precedence`.
	fn parse_precedence(&mut self, precedence: Precedence) -> Result<(), CompilerError> {
		if self.depth >= self.max_depth {
			return Err(ParseError::at(self.peek()?, ParseErrorType::TooDeeplyNested).into());
		}
		self.depth += 1;
		let result = self.parse_operand(precedence);
		self.depth -= 1;
		result
	}

	fn parse_operand(&mut self, precedence: Precedence) -> Result<(), CompilerError> {
		let token = self.advance()?;
		let Some(prefix) = self.rules.prefix(token.r#type) else {
			return Err(ParseError::at(token, ParseErrorType::ExpectedExpression).into());
		};
		self.prefix(prefix, token)?;

		while precedence <= self.rules.precedence(self.peek()?.r#type) {
			let operator = self.advance()?;
			let Some(infix) = self.rule(operator)?.infix else {
				return Err(ParseError::at(operator, ParseErrorType::MissingInfixRule).into());
			};
			self.infix(infix, operator)?;
		}
		Ok(())
	}

	fn prefix(&mut self, rule: PrefixRule, token: &Token<'a>) -> Result<(), CompilerError> {
		match rule {
			PrefixRule::Grouping => self.grouping(),
			PrefixRule::Number => self.number(token),
			PrefixRule::Unary => self.unary(token),
		}
	}

	fn infix(&mut self, rule: InfixRule, operator: &Token<'a>) -> Result<(), CompilerError> {
		match rule {
			InfixRule::Binary => self.binary(operator),
		}
	}

	/// `(` was consumed, compile the inner expression and the closing `)`.
	fn grouping(&mut self) -> Result<(), CompilerError> {
		self.expression()?;
		self.consume(RightParen, ParseErrorType::ExpectedRightParen)
	}

	fn number(&mut self, token: &Token<'a>) -> Result<(), CompilerError> {
		let invalid = || ParseError::at(token, ParseErrorType::InvalidNumber);
		let value: f64 = token.lexeme.parse().map_err(|_| invalid())?;
		// Too many digits parse as infinity.
		if !value.is_finite() {
			return Err(invalid().into());
		}
		self.emit(Instruction::PushFloat(value));
		Ok(())
	}

	fn unary(&mut self, operator: &Token<'a>) -> Result<(), CompilerError> {
		self.parse_precedence(Precedence::Unary)?;
		match operator.r#type {
			Minus => self.emit(Instruction::Negate),
			other => return Err(anyhow!("{other:?} is not a unary operator").into()),
		}
		Ok(())
	}

	fn binary(&mut self, operator: &Token<'a>) -> Result<(), CompilerError> {
		let precedence = self.rule(operator)?.precedence;
		self.parse_precedence(precedence.next())?;

		#[rustfmt::skip]
		let instruction = match operator.r#type {
			Plus => Instruction::Add,
			Minus => Instruction::Subtract,
			Star => Instruction::Multiply,
			Slash => Instruction::Divide,
			other => return Err(anyhow!("{other:?} is not a binary operator").into()),
		};
		self.emit(instruction);
		Ok(())
	}

	/// The table entry of `token`, a missing entry means the table is
	/// incomplete.
	fn rule(&self, token: &Token<'a>) -> Result<&'t ParseRule, CompilerError> {
		let rules = self.rules;
		rules.get(token.r#type).ok_or_else(|| ParseError::at(token, ParseErrorType::MissingParseRule(token.r#type)).into())
	}

	fn emit(&mut self, instruction: Instruction) {
		trace!("Emit {instruction}");
		self.chunk.emit(instruction);
	}

	/// Consume the current token if it has the expected type.
	fn consume(&mut self, r#type: TokenType, error: ParseErrorType) -> Result<(), CompilerError> {
		let token = self.peek()?;
		if token.r#type != r#type {
			return Err(ParseError::at(token, error).into());
		}
		self.advance()?;
		Ok(())
	}

	/// Advance to the next token, returning the one just consumed.
	fn advance(&mut self) -> Result<&'t Token<'a>, CompilerError> {
		let token = self.peek()?;
		self.position += 1;
		Ok(token)
	}

	/// Peek at the current token.
	fn peek(&self) -> Result<&'t Token<'a>, CompilerError> {
		let tokens = self.tokens;
		tokens.get(self.position).ok_or_else(|| anyhow!("Unexpected end of token stream").into())
	}
}
