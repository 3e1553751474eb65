//! Raw logos token definitions.
//!
//! Raw tokens are what logos recognizes directly; `lib.rs` converts them
//! to `mo_ir::TokenKind` and routes them onto the ordinary or comment
//! channel.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    // Comments (side channel)
    //
    // Stars inside the body are consumed by the `\*+` runs, so the final
    // `*/` is the first star run followed by a slash.
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,
    #[regex(r"//[^\n]*")]
    LineComment,

    // Keywords
    #[token("within")]
    Within,
    #[token("final")]
    Final,
    #[token("encapsulated")]
    Encapsulated,
    #[token("partial")]
    Partial,
    #[token("class")]
    Class,
    #[token("model")]
    Model,
    #[token("record")]
    Record,
    #[token("block")]
    Block,
    #[token("connector")]
    Connector,
    #[token("type")]
    Type,
    #[token("package")]
    Package,
    #[token("function")]
    Function,
    #[token("operator")]
    Operator,
    #[token("expandable")]
    Expandable,
    #[token("pure")]
    Pure,
    #[token("impure")]
    Impure,
    #[token("end")]
    End,
    #[token("public")]
    Public,
    #[token("protected")]
    Protected,
    #[token("equation")]
    Equation,
    #[token("algorithm")]
    Algorithm,
    #[token("initial")]
    Initial,
    #[token("if")]
    If,
    #[token("then")]
    Then,
    #[token("else")]
    Else,
    #[token("elseif")]
    Elseif,
    #[token("for")]
    For,
    #[token("loop")]
    Loop,
    #[token("in")]
    In,
    #[token("while")]
    While,
    #[token("when")]
    When,
    #[token("elsewhen")]
    Elsewhen,
    #[token("connect")]
    Connect,
    #[token("extends")]
    Extends,
    #[token("constrainedby")]
    Constrainedby,
    #[token("import")]
    Import,
    #[token("parameter")]
    Parameter,
    #[token("constant")]
    Constant,
    #[token("input")]
    Input,
    #[token("output")]
    Output,
    #[token("flow")]
    Flow,
    #[token("stream")]
    Stream,
    #[token("discrete")]
    Discrete,
    #[token("replaceable")]
    Replaceable,
    #[token("redeclare")]
    Redeclare,
    #[token("inner")]
    Inner,
    #[token("outer")]
    Outer,
    #[token("annotation")]
    Annotation,
    #[token("der")]
    Der,
    #[token("not")]
    Not,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("each")]
    Each,

    // Punctuation and operators
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("=")]
    Equals,
    #[token(":=")]
    Assign,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token(".+")]
    DotPlus,
    #[token(".-")]
    DotMinus,
    #[token(".*")]
    DotStar,
    #[token("./")]
    DotSlash,
    #[token(".^")]
    DotCaret,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token("==")]
    EqEq,
    #[token("<>")]
    Ne,

    // Literals and identifiers
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"'([^'\\]|\\.)*'")]
    Ident,
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    Number,
    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,
}
