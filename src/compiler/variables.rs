use crate::{
    chunk::OpCode,
    compiler::{CompilationContext, Local, errors::CompilerError},
    constants::UINT8_COUNT,
    scanner::token::{Token, TokenType},
};

impl<'a> CompilationContext<'a> {
    /// Declares `name` in the current scope: as a new slot in the current
    /// frame's locals table if we're inside a function or block
    /// (`scope_depth != -1`), or, for the outermost/global scope, as a
    /// name constant whose index is returned for `define_variable` to use.
    pub(super) fn declare_variable(&mut self, name: &Token) -> Result<u8, CompilerError> {
        if self.compiler().scope_depth == -1 {
            return self.identifier_constant(name);
        }

        let scope_depth = self.compiler().scope_depth;
        for local in self.compiler().locals.iter().rev() {
            if local.depth < scope_depth {
                break;
            }
            if self.are_identifiers_equal(name, &local.name) {
                // Reported, not fatal: the original still declares the
                // local afterwards rather than bailing out of the scope.
                self.parser
                    .error_at(name, "Already a variable with this name in this scope.");
            }
        }
        self.add_local_variable(name.clone())?;
        // Dummy table index; locals aren't looked up by constant-pool index.
        Ok(0)
    }

    fn are_identifiers_equal(&self, token_a: &Token, token_b: &Token) -> bool {
        if token_a.length != token_b.length {
            return false;
        }
        token_a.as_str(self.source) == token_b.as_str(self.source)
    }

    /// Scans innermost-first so that a shadowing declaration in a nested
    /// block resolves to the most recent one with that name.
    fn resolve_local(&mut self, name: &Token) -> i32 {
        for (i, local) in self.compiler().locals.iter().enumerate().rev() {
            if self.are_identifiers_equal(name, &local.name) {
                return i as i32;
            }
        }
        -1
    }

    fn add_local_variable(&mut self, name: Token) -> Result<(), CompilerError> {
        if self.compiler().locals.len() == UINT8_COUNT {
            return Err(self.construct_capacity_error(false, "Too many local variables in scope"));
        }

        let depth = self.compiler().scope_depth;
        let local = Local { name, depth };
        self.compiler_mut().locals.push(local);

        Ok(())
    }

    /// Writes bytecode to define a variable: globals get an explicit
    /// `OpDefineGlobal`, while a local's value is simply left in place on
    /// the stack at the slot `declare_variable` reserved for it.
    pub(super) fn define_variable(&mut self, global: u8) {
        if self.compiler().scope_depth != -1 {
            return;
        }
        // Emits opcode and index of global variable
        self.emit_bytes(OpCode::OpDefineGlobal as u8, global);
    }

    /// Evaluates the variable declaration and initialization
    pub(super) fn variable(&mut self, can_assign: bool) -> Result<(), CompilerError> {
        let prev_token = self
            .parser
            .previous
            .clone()
            .expect("previous token present after first advance");
        self.named_variable(&prev_token, can_assign)
    }

    fn named_variable(&mut self, name: &Token, can_assign: bool) -> Result<(), CompilerError> {
        let get_opcode: OpCode;
        let set_opcode: OpCode;

        let arg = self.resolve_local(name);
        let variable_offset;
        if arg != -1 {
            // It's a local variable. `arg` is offset/index in `locals` vector
            variable_offset = arg as u8;
            get_opcode = OpCode::OpGetLocal;
            set_opcode = OpCode::OpSetLocal;
        } else {
            variable_offset = self.identifier_constant(name)?;
            get_opcode = OpCode::OpGetGlobal;
            set_opcode = OpCode::OpSetGlobal;
        }

        if can_assign && self.match_curr_ty(TokenType::Equal) {
            // Current variable can assign, and current token is `Equal`, evaluate the expression on the right
            self.expression()?;
            // Emit the OpCode to set global variable, alongside the variable name index.
            self.emit_bytes(set_opcode as u8, variable_offset);
        } else {
            // Can't assign, or current token is not `Equal`, parse it as reading the global variable
            self.emit_bytes(get_opcode as u8, variable_offset);
        }
        Ok(())
    }
}
