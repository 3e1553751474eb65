//! Lexer for Modelica source using logos.
//!
//! Produces two explicit sequences sharing one absolute index space: the
//! ordinary tokens the parser consumes, and the comment tokens that only
//! the formatter sees. Splitting the channels here (instead of wrapping a
//! shared token source) keeps comment handling out of the parser entirely.

use logos::Logos;
use mo_ir::{CommentList, Span, Token, TokenKind, TokenList};

mod raw_token;

use raw_token::RawToken;

/// Output of lexing: the parser channel and the comment side channel.
#[derive(Clone, Debug, Default)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub comments: CommentList,
}

/// Lexer failure.
///
/// The formatter assumes well-formed input, so the lexer refuses anything
/// it cannot tokenize rather than attempting repair.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character at {span}")]
    UnexpectedCharacter { span: Span },
}

/// Lex source text into ordinary and comment token sequences.
///
/// Every scanned token receives the next absolute index regardless of its
/// channel, so relative order across channels is recoverable by comparing
/// indices. An `Eof` token is appended to the ordinary channel.
pub fn lex(source: &str) -> Result<LexOutput, LexError> {
    let mut out = LexOutput::default();
    let mut logos = RawToken::lexer(source);
    let mut index: u32 = 0;

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => {
                let kind = convert_token(raw);
                let token = Token::new(kind, slice, index, span);
                match raw {
                    RawToken::BlockComment | RawToken::LineComment => out.comments.push(token),
                    _ => out.tokens.push(token),
                }
                index += 1;
            }
            Err(()) => return Err(LexError::UnexpectedCharacter { span }),
        }
    }

    let eof_pos = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source exceeds {} bytes", u32::MAX));
    out.tokens
        .push(Token::new(TokenKind::Eof, "", index, Span::point(eof_pos)));

    Ok(out)
}

/// Map a raw logos token to its `TokenKind`.
fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::BlockComment => TokenKind::BlockComment,
        RawToken::LineComment => TokenKind::LineComment,

        RawToken::Within => TokenKind::Within,
        RawToken::Final => TokenKind::Final,
        RawToken::Encapsulated => TokenKind::Encapsulated,
        RawToken::Partial => TokenKind::Partial,
        RawToken::Class => TokenKind::Class,
        RawToken::Model => TokenKind::Model,
        RawToken::Record => TokenKind::Record,
        RawToken::Block => TokenKind::Block,
        RawToken::Connector => TokenKind::Connector,
        RawToken::Type => TokenKind::Type,
        RawToken::Package => TokenKind::Package,
        RawToken::Function => TokenKind::Function,
        RawToken::Operator => TokenKind::Operator,
        RawToken::Expandable => TokenKind::Expandable,
        RawToken::Pure => TokenKind::Pure,
        RawToken::Impure => TokenKind::Impure,
        RawToken::End => TokenKind::End,
        RawToken::Public => TokenKind::Public,
        RawToken::Protected => TokenKind::Protected,
        RawToken::Equation => TokenKind::Equation,
        RawToken::Algorithm => TokenKind::Algorithm,
        RawToken::Initial => TokenKind::Initial,
        RawToken::If => TokenKind::If,
        RawToken::Then => TokenKind::Then,
        RawToken::Else => TokenKind::Else,
        RawToken::Elseif => TokenKind::Elseif,
        RawToken::For => TokenKind::For,
        RawToken::Loop => TokenKind::Loop,
        RawToken::In => TokenKind::In,
        RawToken::While => TokenKind::While,
        RawToken::When => TokenKind::When,
        RawToken::Elsewhen => TokenKind::Elsewhen,
        RawToken::Connect => TokenKind::Connect,
        RawToken::Extends => TokenKind::Extends,
        RawToken::Constrainedby => TokenKind::Constrainedby,
        RawToken::Import => TokenKind::Import,
        RawToken::Parameter => TokenKind::Parameter,
        RawToken::Constant => TokenKind::Constant,
        RawToken::Input => TokenKind::Input,
        RawToken::Output => TokenKind::Output,
        RawToken::Flow => TokenKind::Flow,
        RawToken::Stream => TokenKind::Stream,
        RawToken::Discrete => TokenKind::Discrete,
        RawToken::Replaceable => TokenKind::Replaceable,
        RawToken::Redeclare => TokenKind::Redeclare,
        RawToken::Inner => TokenKind::Inner,
        RawToken::Outer => TokenKind::Outer,
        RawToken::Annotation => TokenKind::Annotation,
        RawToken::Der => TokenKind::Der,
        RawToken::Not => TokenKind::Not,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Each => TokenKind::Each,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Equals => TokenKind::Equals,
        RawToken::Assign => TokenKind::Assign,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Caret => TokenKind::Caret,
        RawToken::DotPlus => TokenKind::DotPlus,
        RawToken::DotMinus => TokenKind::DotMinus,
        RawToken::DotStar => TokenKind::DotStar,
        RawToken::DotSlash => TokenKind::DotSlash,
        RawToken::DotCaret => TokenKind::DotCaret,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Le => TokenKind::Le,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Ge => TokenKind::Ge,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Ne => TokenKind::Ne,

        RawToken::Ident => TokenKind::Ident,
        RawToken::Number => TokenKind::Number,
        RawToken::Str => TokenKind::Str,
    }
}
