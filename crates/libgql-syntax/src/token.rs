use crate::SourcePosition;
use smallvec::SmallVec;

/// A `#` comment preceding a token.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentTrivia<'src> {
    /// Raw text including the leading `#`.
    pub text: &'src str,
    pub position: SourcePosition,
}

/// Comments immediately preceding a token. Most tokens have none.
pub(crate) type CommentTriviaVec<'src> = SmallVec<[CommentTrivia<'src>; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenKind {
    Name,
    IntValue,
    FloatValue,
    /// A quoted (`"..."`) or block (`"""..."""`) string, quotes included.
    StringValue,
    /// `!`, `$`, `&`, `(`, `)`, `...`, `:`, `=`, `@`, `[`, `]`, `{`, `|`, `}`
    Punctuator,
    Error(String),
    Eof,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub position: SourcePosition,
    pub leading_comments: CommentTriviaVec<'src>,
}

impl Token<'_> {
    pub fn is_punctuator(&self, punct: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.text == punct
    }

    pub fn is_name(&self, name: &str) -> bool {
        self.kind == TokenKind::Name && self.text == name
    }
}
