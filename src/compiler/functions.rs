use crate::{
    chunk::OpCode,
    compiler::{CompilationContext, Local, errors::CompilerError, types::FunctionType},
    constants::MAX_CALL_ARITY,
    scanner::token::TokenType,
    value::objects::FunctionObject,
};

impl<'a> CompilationContext<'a> {
    /// Compiles a function body into its own chunk, pushing a fresh
    /// compiler frame for the duration. Parameters are declared as locals
    /// of the new frame directly (not through `declare_variable`, which
    /// special-cases the outer frame's global scope): a parameter can
    /// never itself be global.
    pub(super) fn compile_function(&mut self) -> Result<(), CompilerError> {
        let name = self
            .parser
            .previous
            .as_ref()
            .expect("previous token present after first advance")
            .as_str(self.source);
        let mut fun_obj = FunctionObject::new();
        fun_obj.name = Some(name.to_string());

        self.push(super::CompilerState::new(FunctionType::from(fun_obj)));
        self.begin_scope();

        self.consume(TokenType::LeftParen, "Expected '(' after function name");

        if !self.check_current(TokenType::RightParen) {
            loop {
                let arity = self.compiler().function_type.function().arity + 1;
                if arity > i32::from(MAX_CALL_ARITY) {
                    return Err(self.construct_capacity_error(
                        true,
                        &format!("Can't have more than {MAX_CALL_ARITY} parameters"),
                    ));
                }
                self.compiler_mut().function_type.function_mut().arity = arity;

                self.consume(TokenType::Identifier, "Expected parameter name");
                let param_name = self
                    .parser
                    .previous
                    .clone()
                    .expect("previous token present after first advance");
                self.compiler_mut().locals.push(Local {
                    name: param_name,
                    depth: 0,
                });

                if !self.match_curr_ty(TokenType::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenType::RightParen, "Expected ')' after parameters");
        self.consume(TokenType::LeftBrace, "Expected '{' before function body");
        self.block()?;
        // Pops the parameter locals before the inner compiler frame is torn
        // down, matching `funStatement`'s `endScope(); endCompiler();` — the
        // resulting dead `OpPop`s after the function's own `OpReturn` are
        // harmless since the VM never falls past a return.
        self.end_scope()?;

        let function_object = self.end_compiler();

        let constant = self.make_constant(function_object.into())?;
        self.emit_bytes(OpCode::OpConstant as u8, constant);
        Ok(())
    }

    pub(super) fn arguments_list(&mut self) -> Result<u8, CompilerError> {
        let mut arg_count = 0u8;

        if !self.check_current(TokenType::RightParen) {
            loop {
                self.expression()?;

                if arg_count == MAX_CALL_ARITY {
                    return Err(self.construct_capacity_error(
                        false,
                        &format!("Can't have more than {MAX_CALL_ARITY} arguments."),
                    ));
                }

                arg_count += 1;

                if !self.match_curr_ty(TokenType::Comma) {
                    break;
                }
            }
        }
        self.consume(TokenType::RightParen, "Expected ')' after arguments.");
        Ok(arg_count)
    }

    pub(super) fn call(&mut self, _: bool) -> Result<(), CompilerError> {
        let arg_count = self.arguments_list()?;
        let opcode = OpCode::call_opcode(arg_count)
            .expect("arguments_list already bounds arg_count to MAX_CALL_ARITY");
        self.emit_byte(opcode as u8);
        Ok(())
    }
}
