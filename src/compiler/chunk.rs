//! The compiler's output: a flat trace of stack-machine instructions, every
//! operand emitted before the operator that consumes it.

use std::fmt::Display;

/// A single stack-machine instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
	/// Push a number literal onto the stack.
	PushFloat(f64),
	Add,
	Subtract,
	Multiply,
	Divide,
	/// Negate the value on top of the stack.
	Negate,
}

impl Display for Instruction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Instruction::*;
		match self {
			PushFloat(value) => write!(f, "PUSH_FLOAT {value}"),
			Add => write!(f, "ADD"),
			Subtract => write!(f, "SUBTRACT"),
			Multiply => write!(f, "MULTIPLY"),
			Divide => write!(f, "DIVIDE"),
			Negate => write!(f, "NEGATE"),
		}
	}
}

/// Instructions emitted by one compilation, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chunk {
	code: Vec<Instruction>,
}

impl Chunk {
	pub fn new() -> Self { Self::default() }

	pub fn emit(&mut self, instruction: Instruction) { self.code.push(instruction) }

	pub fn instructions(&self) -> &[Instruction] { &self.code }

	pub fn len(&self) -> usize { self.code.len() }

	pub fn is_empty(&self) -> bool { self.code.is_empty() }
}

impl Display for Chunk {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for instruction in &self.code {
			writeln!(f, "{instruction}")?;
		}
		Ok(())
	}
}
