#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use zloxc::{Instruction::*, LoxError, ParseErrorType, RunOptions};

	fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

	#[test]
	fn test_lox_file() {
		let loxer = zloxc::Loxer;
		let options = RunOptions { show_tokens: true, show_code: true };
		let chunk = loxer.run_file(fixture("expression.lox"), &options).unwrap();
		assert_eq!(
			chunk.instructions(),
			[
				PushFloat(1.5),
				PushFloat(2.0),
				Add,
				PushFloat(3.0),
				Negate,
				Multiply,
				PushFloat(4.0),
				Divide,
				PushFloat(5.0),
				Subtract,
			]
		);
	}

	#[test]
	fn test_statements_are_not_parsed() {
		let loxer = zloxc::Loxer;
		match loxer.compile(b"var x = 1;") {
			Err(LoxError::ParseError(e)) => {
				assert_eq!(e.error_type(), &ParseErrorType::ExpectedExpression);
				assert_eq!(e.lexeme(), Some("var"));
			}
			other => panic!("expected parse error, got {other:?}"),
		}
	}

	#[test]
	fn test_each_compile_is_independent() {
		let loxer = zloxc::Loxer;
		assert!(loxer.compile(b"1 +").is_err());
		let chunk = loxer.compile(b"2 * 2").unwrap();
		assert_eq!(chunk.instructions(), [PushFloat(2.0), PushFloat(2.0), Multiply]);
	}
}
