use crate::{
    compiler::{CompilationContext, errors::CompilerError},
    scanner::token::TokenType,
};

/// `#[repr(u8)] means its memory layout will be equivalent to byte`
#[repr(u8)]
#[derive(Debug, Clone, Copy)]
/// Order of `Precedence` variant matters. Because it will be converted to bytes and will be
/// incremented, order is important here.
pub enum Precedence {
    None,
    Assignment, // =
    Or,         // or
    And,        // and
    Equality,   // == !=
    Comparison, // < > <= >=
    Term,       // + -
    Factor,     // * /
    Unary,      // ! -
    Call,       // . ()
    Primary,
}

/// Converts a byte to `enum Precedence`
impl From<u8> for Precedence {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::None,
            1 => Self::Assignment,
            2 => Self::Or,
            3 => Self::And,
            4 => Self::Equality,
            5 => Self::Comparison,
            6 => Self::Term,
            7 => Self::Factor,
            8 => Self::Unary,
            9 => Self::Call,
            10 => Self::Primary,
            _ => unreachable!(),
        }
    }
}

/// This is type of pointer to the function, implemented in `CompilationContext`
pub type ParseFn<'a> = Option<fn(&mut CompilationContext<'a>, bool) -> Result<(), CompilerError>>;

#[derive(Clone, Copy)]
/// Data structure used to store infix and prefix rules of `TokenType`. Rules are just method
/// being executed dynamically if a specific `TokenType` has one.
/// Each `TokenType` has a separate `ParseRule`
pub struct ParseRule<'a> {
    pub prefix: ParseFn<'a>,
    pub infix: ParseFn<'a>,
    pub precedence: Precedence,
}

impl<'a> ParseRule<'a> {
    /// Gets all the rules for every token type
    /// We'll be accessing these rules by index, so order should be the same
    /// as the order of TokenType variants.
    fn get_rules() -> [ParseRule<'a>; 41] {
        [
            // TokenType::LeftParen
            ParseRule {
                prefix: Some(CompilationContext::grouping),
                infix: Some(CompilationContext::call),
                precedence: Precedence::Call,
            },
            // TokenType::RightParen
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::LeftBracket
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::RightBracket
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::LeftBrace
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::RightBrace
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Comma
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Dot
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Minus
            ParseRule {
                prefix: Some(CompilationContext::unary),
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Term,
            },
            // TokenType::Plus
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Term,
            },
            // TokenType::Semicolon
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Slash
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Factor,
            },
            // TokenType::Star
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Factor,
            },
            // TokenType::Bang
            ParseRule {
                prefix: Some(CompilationContext::unary),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::BangEqual
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Equality,
            },
            // TokenType::Equal
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::EqualEqual
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Equality,
            },
            // TokenType::Greater
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Comparison,
            },
            // TokenType::GreaterEqual
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Comparison,
            },
            // TokenType::Less
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Comparison,
            },
            // TokenType::LessEqual
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::binary),
                precedence: Precedence::Comparison,
            },
            // TokenType::Identifier
            ParseRule {
                prefix: Some(CompilationContext::variable),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::String
            ParseRule {
                prefix: Some(CompilationContext::string),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Number
            ParseRule {
                prefix: Some(CompilationContext::number),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::And
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::logical_and),
                precedence: Precedence::And,
            },
            // TokenType::Class
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Else
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::False
            ParseRule {
                prefix: Some(CompilationContext::literal),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::For
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Fun
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::If
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Null
            ParseRule {
                prefix: Some(CompilationContext::literal),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Or
            ParseRule {
                prefix: None,
                infix: Some(CompilationContext::logical_or),
                precedence: Precedence::Or,
            },
            // TokenType::Return
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Super
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::This
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::True
            ParseRule {
                prefix: Some(CompilationContext::literal),
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Var
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::While
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Error
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
            // TokenType::Eof
            ParseRule {
                prefix: None,
                infix: None,
                precedence: Precedence::None,
            },
        ]
    }

    /// Returns rule by type of token.
    pub fn get_parse_rule(ty: TokenType) -> ParseRule<'a> {
        let rules = Self::get_rules();
        // Since order of types in `TokenType` enum is same as rules specified for
        // the token type, it's safe to use type `ty` as index.
        rules[ty as usize]
    }
}
