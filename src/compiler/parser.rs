use crate::scanner::{Scanner, token::{Token, TokenType}};

#[derive(Clone)]
/// Data structure to hold `Token`s and `Scanner` to scan tokens
pub struct Parser<'a> {
    /// Scanner object to scan tokens on demand
    scanner: Scanner<'a>,
    /// Holds the current parsed token
    pub current: Option<Token>,
    /// Holds the previously parsed token. One step behind the current token.
    pub previous: Option<Token>,
    /// Set the first time any diagnostic is reported and never cleared.
    /// Parsing keeps going past an error so a single pass can surface every
    /// diagnostic in the source, not just the first one; `compile()` checks
    /// this flag once, at the very end, to decide whether to hand back the
    /// function it built or discard it.
    pub had_error: bool,
}

impl<'a> Parser<'a> {
    /// Returns a fresh instance of the scanner
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            current: None,
            previous: None,
            had_error: false,
        }
    }

    /// Consumes the token, keeps track of past token and current token.
    /// A scanner error is reported immediately and skipped: scanning keeps
    /// retrying until a valid token (or `Eof`) turns up, rather than ever
    /// handing a bad token back to the parser.
    pub fn advance(&mut self) {
        // Assigns value to `self.previous`, we need `self.current` if error occures, so we
        // can't use `self.current.take()` to replace value of `self.current` by `None`
        self.previous = self.current.clone();

        loop {
            match self.scanner.scan_token() {
                Ok(token) => {
                    self.current = Some(token);
                    break;
                }
                Err(e) => {
                    self.had_error = true;
                    eprintln!("{e}");
                }
            }
        }
    }

    /// Consumes the current token if it matches `other_ty`; otherwise
    /// reports `message` at the current token. Either way, a token gets
    /// consumed: a mismatch is never allowed to stall the parse.
    pub fn consume(&mut self, other_ty: TokenType, message: &str) {
        if !self.current.as_ref().is_some_and(|t| t.ty == other_ty) {
            self.error_at_current(message);
        }
        self.advance();
    }

    /// Reports `message` anchored at the previous token's line.
    pub fn error_at_previous(&mut self, message: &str) {
        let token = self
            .previous
            .clone()
            .expect("previous token present after first advance");
        self.report_at(&token, message);
    }

    /// Reports `message` anchored at the current token's line.
    pub fn error_at_current(&mut self, message: &str) {
        let token = self
            .current
            .clone()
            .expect("current token present after first advance");
        self.report_at(&token, message);
    }

    /// Reports `message` anchored at an arbitrary token, for the handful of
    /// diagnostics (e.g. local redeclaration) that must point at a specific
    /// name token rather than whatever is current/previous by the time the
    /// check runs.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        self.report_at(token, message);
    }

    /// Sets the sticky error flag and writes the diagnostic to stderr the
    /// way the runtime reports them: `[line N] Error: <message>`.
    fn report_at(&mut self, token: &Token, message: &str) {
        self.had_error = true;
        eprintln!("[line {}] Error: {message}", token.line);
    }
}
