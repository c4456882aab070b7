use logos::Logos;

use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::ParseError,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator language.
///
/// Note that the integer pattern accepts an optional leading `-`, so `-5` is
/// a single negative constant. Write `5 - 3` with spaces; `5-3` reads as `5`
/// followed by `-3`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `y_not`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `~` (negation)
    #[token("~")]
    Tilde,
    /// `@` (absolute value)
    #[token("@")]
    At,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `# Comments.`
    #[regex(r"#[^\n\r]*", logos::skip)]
    Comment,
    /// Newlines; skipped, but counted for error reporting.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// The category a token belongs to, as seen by the RPN builder.
///
/// Each category carries everything needed to build the matching AST node:
/// the constant's value, the identifier's name, or the operator tag. The
/// builder dispatches on the category alone and never inspects concrete
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenCat {
    /// An integer constant; becomes an `IntConst` leaf.
    Const(i64),
    /// An identifier; becomes a `Var` leaf.
    Ident(String),
    /// An operator taking one operand.
    Unop(UnaryOperator),
    /// An operator taking two operands.
    Binop(BinaryOperator),
    /// The assignment operator; its left operand must be a variable.
    Assign,
}

impl Token {
    /// Classifies `self` for the RPN builder.
    ///
    /// Returns `None` for tokens that have no meaning in postfix notation,
    /// such as parentheses.
    #[must_use]
    pub fn category(&self) -> Option<TokenCat> {
        match self {
            Self::Integer(value) => Some(TokenCat::Const(*value)),
            Self::Identifier(name) => Some(TokenCat::Ident(name.clone())),
            Self::Tilde => Some(TokenCat::Unop(UnaryOperator::Neg)),
            Self::At => Some(TokenCat::Unop(UnaryOperator::Abs)),
            Self::Plus => Some(TokenCat::Binop(BinaryOperator::Plus)),
            Self::Minus => Some(TokenCat::Binop(BinaryOperator::Minus)),
            Self::Star => Some(TokenCat::Binop(BinaryOperator::Times)),
            Self::Slash => Some(TokenCat::Binop(BinaryOperator::Div)),
            Self::Equals => Some(TokenCat::Assign),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Tilde => write!(f, "~"),
            Self::At => write!(f, "@"),
            Self::Equals => write!(f, "="),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Tokenizes `source` into a sequence of `(token, line)` pairs.
///
/// Input the lexer cannot match is reported as a `ParseError::UnexpectedToken`
/// carrying the offending slice and its line number.
///
/// # Errors
/// Returns an error if the source contains characters that do not form a
/// valid token.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
