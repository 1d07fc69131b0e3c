use crate::compiler::CompilationContext;

/// Errors that justify aborting the current compile step outright, rather
/// than recording a diagnostic and continuing: a capacity overflow the
/// bytecode encoding genuinely can't represent (too many constants, locals,
/// or call arguments; a jump/loop distance that doesn't fit in `u16`), or
/// reaching the end of a pass that set the sticky `had_error` flag along
/// the way. Ordinary syntax and semantic errors don't appear here — they're
/// reported via `Parser::error_at*` and parsing keeps going.
#[derive(Debug)]
pub enum CompilerError {
    Capacity(String),
    HadErrors,
}

/// impl `Display` trait to show error nicely on console.
impl std::fmt::Display for CompilerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capacity(message) => write!(f, "{message}"),
            Self::HadErrors => write!(f, "compilation failed"),
        }
    }
}

impl CompilationContext<'_> {
    /// Reports `message` at the current or previous token (same `is_current`
    /// convention as the rest of this module) and returns a `Capacity`
    /// error for the caller to propagate with `?`.
    pub(super) fn construct_capacity_error(
        &mut self,
        is_current: bool,
        message: &str,
    ) -> CompilerError {
        if is_current {
            self.parser.error_at_current(message);
        } else {
            self.parser.error_at_previous(message);
        }
        CompilerError::Capacity(message.to_owned())
    }
}
