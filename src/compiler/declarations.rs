use crate::{
    compiler::{CompilationContext, errors::CompilerError},
    scanner::token::TokenType,
};

impl<'a> CompilationContext<'a> {
    /// Responsible to handle all top level statements and declarations
    pub(super) fn declaration(&mut self) -> Result<(), CompilerError> {
        if self.match_curr_ty(TokenType::Fun) {
            self.fun_declaration()?;
        }
        // If current token type is var, emit bytecode for variable declaration, otherwise proceed with other types of statements
        else if self.match_curr_ty(TokenType::Var) {
            // If token is variable declaration, generate bytecode to declare the variable
            self.var_declaration()?;
        } else {
            // Generate bytecode to process the statement
            self.statement()?;
        }

        Ok(())
    }

    /// A function's own name is declared only after its body is fully
    /// compiled and the frame popped, so it isn't visible inside its own
    /// body (matching the rest of this crate's single-pass recursion
    /// scheme, which has no forward declarations of any kind).
    fn fun_declaration(&mut self) -> Result<(), CompilerError> {
        self.consume(TokenType::Identifier, "Expected function name");
        let name = self
            .parser
            .previous
            .clone()
            .expect("previous token present after first advance");

        self.compile_function()?;

        let global = self.declare_variable(&name)?;
        self.define_variable(global);
        Ok(())
    }

    /// Generates bytecode to declare a variable. Initializers are
    /// mandatory: there's no implicit `null` default. The name is declared
    /// only after its initializer expression is compiled, so a variable
    /// can't refer to itself (`var a = a;` resolves `a` as whatever it
    /// meant in an enclosing scope, not the new, not-yet-initialized slot).
    pub(super) fn var_declaration(&mut self) -> Result<(), CompilerError> {
        self.consume(TokenType::Identifier, "Expected variable name");
        let name = self
            .parser
            .previous
            .clone()
            .expect("previous token present after first advance");

        self.consume(TokenType::Equal, "Expected '=' after variable name");
        self.expression()?;

        self.consume(TokenType::Semicolon, "Expected ';' after variable declaration");

        let global = self.declare_variable(&name)?;
        self.define_variable(global);

        Ok(())
    }
}
