use crate::{
    chunk::OpCode,
    compiler::{CompilationContext, errors::CompilerError},
    scanner::token::TokenType,
    value::Value,
};

impl<'a> CompilationContext<'a> {
    pub(super) fn number(&mut self, _: bool) -> Result<(), CompilerError> {
        // Get previous token, which should be a number
        let (start, length) = {
            let token = self
                .parser
                .previous
                .as_ref()
                .expect("previous token present after first advance");
            (token.start, token.length as usize)
        };
        // Extract number from source code.
        let val = &self.source[start..start + length];
        // Try to parse number to the `Value`; a malformed literal is reported,
        // not fatal, and compiles as if it were `0`.
        let val: f64 = match val.parse::<f64>() {
            Ok(val) => val,
            Err(e) => {
                self.parser.error_at_previous(&e.to_string());
                0.0
            }
        };

        // Write this in chunk
        self.emit_constant(val.into())?;

        Ok(())
    }

    /// Generates bytecode for keywords that generate literal values.
    /// `true`/`false` go through the constant pool like any other literal;
    /// `null` has its own dedicated opcode since there's no `Value` payload
    /// to store for it.
    pub(super) fn literal(&mut self, _: bool) -> Result<(), CompilerError> {
        let operator = self.get_previous_token_ty();
        match operator {
            TokenType::False => self.emit_constant(Value::Bool(false))?,
            TokenType::True => self.emit_constant(Value::Bool(true))?,
            TokenType::Null => self.emit_byte(OpCode::OpNull as u8),
            _ => unreachable!(),
        }

        Ok(())
    }

    pub(super) fn string(&mut self, _: bool) -> Result<(), CompilerError> {
        let token = self
            .parser
            .previous
            .as_ref()
            .expect("previous token present after first advance");
        // Skip the double quotes character '"'
        let start_index = token.start + 1;
        // Last index of token would be `length - 1`, and has ending double quotes
        // So, also skipping ending '"'
        let end_index = start_index + (token.length as usize - 2);
        // String value from source code is getting copied into virtual machine
        let str = self.source[start_index..end_index].to_owned();
        // Create a Value object from String
        let value = Value::from(str);
        // Emit that value as constant
        self.emit_constant(value)?;

        Ok(())
    }
}
