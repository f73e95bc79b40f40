//! # From bare text to stack machine instructions
//!
//! User's source code: `(min + max) / 2;` with numbers in place of names,
//! say `(1 + 3) / 2;`.

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `,`, `.`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces are scanned but dropped. So the tokens are
//! `["(", "1", "+", "3", ")", "/", "2", ";", EOF]`.
//!
//! Only `\n` and printable ASCII are valid source characters, anything else is
//! rejected before the first token is produced.

//! ## Single-pass compiling
//!
//! A single-pass compiler interleaves parsing and code generation without ever
//! allocating a syntax tree. As soon as the parser recognizes a piece of the
//! expression it emits the instructions for it:
//!
//! ``` markdown
//! PUSH_FLOAT 1
//! PUSH_FLOAT 3
//! ADD
//! PUSH_FLOAT 2
//! DIVIDE
//! ```
//!
//! The instructions target a stack machine: every operand is pushed before
//! the operator that pops it. Only the mnemonics are produced, nothing runs
//! them yet.

//! ## What is left out
//!
//! Keywords such as `var`, `if` or `print` are scanned but never parsed. One
//! source compiles to exactly one arithmetic expression.

pub mod cli;
mod compiler;
mod error;
mod loxer;
mod scanner;

pub use compiler::{Chunk, Compiler, InfixRule, Instruction, ParseRule, ParseRules, Precedence, PrefixRule, compile};
pub use error::{
	LoxError,
	compiler::{CompilerError, ParseError, ParseErrorType},
	scanner::{ScanError, ScanErrorType, ScannerError},
};
pub use loxer::{Loxer, RunOptions};
pub use scanner::{Scanner, Token, TokenType};
