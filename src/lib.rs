//! A single-pass bytecode compiler and small stack VM for a dynamically
//! typed scripting language in the spirit of `clox`.

pub mod chunk;
pub mod compiler;
pub mod constants;
pub mod debug;
pub mod scanner;
pub mod value;
pub mod vm;

use crate::compiler::{CompilationContext, errors::CompilerError};
use crate::value::objects::FunctionObject;

/// Compiles `source` into a top-level script function.
///
/// Syntax and semantic errors (e.g. a malformed expression, shadowing a
/// local twice in one scope) are written to stderr as `[line N] Error:
/// <message>` and don't stop the parse; `Err(CompilerError::HadErrors)` is
/// returned once the whole pass completes if any were seen. A capacity
/// error (too many constants, locals, or call arguments) aborts the
/// compile immediately as `Err(CompilerError::Capacity(..))`. Either way,
/// whatever bytecode had been emitted so far is discarded.
pub fn compile(source: &str) -> Result<FunctionObject, CompilerError> {
    let mut context = CompilationContext::new(source);
    context.compile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::OpCode;

    #[test]
    fn compiles_a_trivial_expression_statement() {
        let function = compile("1 + 2;").unwrap();
        assert_eq!(
            function.chunk.code,
            vec![
                OpCode::OpConstant as u8,
                0,
                OpCode::OpConstant as u8,
                1,
                OpCode::OpAdd as u8,
                OpCode::OpPop as u8,
                OpCode::OpNull as u8,
                OpCode::OpReturn as u8,
            ]
        );
    }

    #[test]
    fn reports_error_for_malformed_initializer() {
        let result = compile("var a = ;");
        assert!(result.is_err());
    }
}
