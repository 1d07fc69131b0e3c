//! This module is responsible for taking source code, parsing it and
//! generating bytecode. It's a single-pass compiler: bytecode gets emitted
//! as soon as an expression or statement has been parsed. There's no AST;
//! parsing and code generation happen in the same walk.
use crate::{
    chunk::Chunk,
    compiler::{errors::CompilerError, parser::Parser, types::FunctionType},
    scanner::{Scanner, token::Token, token::TokenType},
    value::Value,
    value::objects::FunctionObject,
};

#[cfg(feature = "debug_trace_execution")]
use crate::debug::Debug;

pub mod bytecode;
pub mod declarations;
pub mod errors;
pub mod expressions;
pub mod functions;
pub mod literals;
pub mod operations;
pub mod parser;
pub mod precedence;
pub mod scope;
pub mod statements;
pub mod types;
pub mod variables;

#[cfg(test)]
mod tests;

/// A declared local variable: the token that named it, and the lexical
/// depth at which it was declared. Depth is assigned once, at declaration
/// time, and never mutated afterwards (see `DESIGN.md` for why this crate
/// doesn't use a two-phase "mark initialized" sentinel).
#[derive(Clone)]
pub(crate) struct Local {
    pub(crate) name: Token,
    pub(crate) depth: i32,
}

/// Per-function compilation state: the function-in-progress, its locals
/// table, and the current lexical scope depth. One of these exists per
/// frame of the compiler context stack (`CompilationContext::compilers`).
pub(crate) struct CompilerState {
    pub(crate) function_type: FunctionType,
    pub(crate) locals: Vec<Local>,
    /// -1 is global scope (outside any function and outside any block).
    /// 0 is the outermost local scope of a function body; each nested
    /// block increments it further.
    pub(crate) scope_depth: i32,
}

impl CompilerState {
    pub fn new(function_type: FunctionType) -> Self {
        Self {
            function_type,
            locals: Vec::new(),
            scope_depth: -1,
        }
    }

    pub(super) fn chunk(&self) -> &Chunk {
        &self.function_type.function().chunk
    }

    pub(super) fn chunk_mut(&mut self) -> &mut Chunk {
        &mut self.function_type.function_mut().chunk
    }
}

/// Where a constant gets rooted while `add_constant` grows the pool, per
/// `addConstant`'s `push(value); ...; pop();` in the original. When a live
/// `VM` is driving the compile (`VM::interpret_source`), this borrows that
/// VM's own value stack, exactly as the original does (there's only ever
/// one VM, so `push`/`pop` in C always mean the real thing). The public,
/// VM-less `compile()`/`CompilationContext::new()` entry point has no VM to
/// borrow, so it falls back to a scratch stack of its own — the protocol is
/// still exercised on every constant, just against a stack nothing else
/// reads from.
enum ProtectionStack<'a> {
    Vm(&'a mut Vec<Value>),
    Scratch(Vec<Value>),
}

impl ProtectionStack<'_> {
    fn push(&mut self, value: Value) {
        match self {
            Self::Vm(stack) => stack.push(value),
            Self::Scratch(stack) => stack.push(value),
        }
    }

    fn pop(&mut self) -> Option<Value> {
        match self {
            Self::Vm(stack) => stack.pop(),
            Self::Scratch(stack) => stack.pop(),
        }
    }
}

/// Threads one active compilation through every parse/emit handler: the
/// source text, the one-token-lookahead parser, and a stack of compiler
/// frames (innermost function last). A nested `fun` declaration pushes a
/// new frame and pops it back off when the function body is done, so an
/// outer compilation in progress is preserved across the recursive dive
/// into the inner one.
pub struct CompilationContext<'a> {
    pub(super) source: &'a str,
    pub(super) parser: Parser<'a>,
    compilers: Vec<CompilerState>,
    protection_stack: ProtectionStack<'a>,
}

impl<'a> CompilationContext<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        let scanner = Scanner::new(source);
        let parser = Parser::new(scanner);
        Self {
            source,
            parser,
            compilers: Vec::new(),
            protection_stack: ProtectionStack::Scratch(Vec::new()),
        }
    }

    /// Same as `new`, but constants get rooted against `stack` (a live VM's
    /// value stack) instead of a scratch one of this context's own, so the
    /// GC-root protection around `add_constant` is the real coordination
    /// described in `SPEC_FULL.md` §5, not just an exercised-but-unwatched
    /// protocol.
    #[must_use]
    pub fn with_vm_stack(source: &'a str, stack: &'a mut Vec<Value>) -> Self {
        let scanner = Scanner::new(source);
        let parser = Parser::new(scanner);
        Self {
            source,
            parser,
            compilers: Vec::new(),
            protection_stack: ProtectionStack::Vm(stack),
        }
    }

    pub(super) fn protect_constant(&mut self, value: Value) {
        self.protection_stack.push(value);
    }

    pub(super) fn release_constant(&mut self) -> Option<Value> {
        self.protection_stack.pop()
    }

    /// Pushes a new compiler frame, making it the "current" one for every
    /// subsequent emission until it's popped by `end_compiler`.
    pub(super) fn push(&mut self, state: CompilerState) {
        self.compilers.push(state);
    }

    pub(super) fn compiler(&self) -> &CompilerState {
        self.compilers
            .last()
            .expect("no active compiler frame: push() should precede any emission")
    }

    pub(super) fn compiler_mut(&mut self) -> &mut CompilerState {
        self.compilers
            .last_mut()
            .expect("no active compiler frame: push() should precede any emission")
    }

    /// Compiles `self.source` into a top-level script function.
    ///
    /// Syntax and semantic errors are reported to stderr and don't stop the
    /// parse: a single pass surfaces every diagnostic it finds, not just the
    /// first one. Only a capacity overflow (too many constants/locals/call
    /// arguments, a jump too far to encode) aborts the compile outright.
    ///
    /// # Errors
    ///
    /// Returns `CompilerError::Capacity` if a capacity limit was exceeded,
    /// or `CompilerError::HadErrors` if the pass completed but recorded one
    /// or more diagnostics along the way. Either way the partially emitted
    /// bytecode is discarded.
    pub fn compile(&mut self) -> Result<FunctionObject, CompilerError> {
        self.push(CompilerState::new(FunctionType::default_script()));

        self.parser.advance();

        while !self.match_curr_ty(TokenType::Eof) {
            self.declaration()?;
        }

        let function = self.end_compiler();

        if self.parser.had_error {
            return Err(CompilerError::HadErrors);
        }

        Ok(function)
    }

    /// Emits the function's trailing `OP_NULL, OP_RETURN` and pops this
    /// frame, handing ownership of the completed function back to the
    /// caller (either the outer `fun` declaration or the public entry
    /// point).
    pub(super) fn end_compiler(&mut self) -> FunctionObject {
        self.emit_return();

        #[cfg(feature = "debug_trace_execution")]
        {
            let name = self
                .compiler()
                .function_type
                .function()
                .name
                .clone()
                .unwrap_or_else(|| "<script>".to_owned());
            Debug::dissassemble_chunk(self.compiler().chunk(), &name);
        }

        let state = self
            .compilers
            .pop()
            .expect("end_compiler called with no active compiler frame");
        state.function_type.into()
    }

    /// Exposes every function-in-progress across the whole frame chain,
    /// innermost first, as GC roots: each one is reachable and must be
    /// marked by a collector that runs mid-compile.
    #[must_use]
    pub fn gray_compiler_roots(&self) -> Vec<&FunctionObject> {
        self.compilers
            .iter()
            .rev()
            .map(|frame| frame.function_type.function())
            .collect()
    }

    pub(super) fn get_current_token_ty(&self) -> TokenType {
        self.parser
            .current
            .as_ref()
            .expect("current token present after first advance")
            .ty
    }

    pub(super) fn get_previous_token_ty(&self) -> TokenType {
        self.parser
            .previous
            .as_ref()
            .expect("previous token present after first advance")
            .ty
    }

    /// True iff the current token is of type `ty`. Never advances.
    pub(super) fn check_current(&self, ty: TokenType) -> bool {
        self.parser.current.as_ref().is_some_and(|t| t.ty == ty)
    }

    /// If `check_current(ty)`, advances and returns true; otherwise leaves
    /// the parser untouched and returns false.
    pub(super) fn match_curr_ty(&mut self, ty: TokenType) -> bool {
        if self.check_current(ty) {
            self.parser.advance();
            return true;
        }
        false
    }

    /// Consumes the current token if it matches `ty`, else reports `message`
    /// and advances anyway, so a single bad token never blocks the rest of
    /// the pass from parsing.
    pub(super) fn consume(&mut self, ty: TokenType, message: &str) {
        self.parser.consume(ty, message);
    }
}
