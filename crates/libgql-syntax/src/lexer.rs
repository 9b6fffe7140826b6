//! Lexes GraphQL source text into [`Token`]s.
//!
//! Token text borrows directly from the source string. Whitespace and commas
//! are skipped; `#` comments are kept as trivia on the following token.
//! Invalid input produces `Error` tokens and lexing continues, so a single
//! stray character never hides the rest of the document.

use crate::token::CommentTrivia;
use crate::token::CommentTriviaVec;
use crate::token::Token;
use crate::token::TokenKind;
use crate::SourcePosition;
use smallvec::smallvec;
use std::sync::Arc;

pub(crate) struct Lexer<'src> {
    source: &'src str,

    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 1-based line number.
    curr_line: usize,

    /// Current 1-based character column.
    curr_column: usize,

    /// Used to treat `\r\n` as a single line terminator.
    last_char_was_cr: bool,

    pending_comments: CommentTriviaVec<'src>,
    source_name: Option<Arc<str>>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, source_name: Option<Arc<str>>) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 1,
            curr_column: 1,
            last_char_was_cr: false,
            pending_comments: smallvec![],
            source_name,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_column,
            self.curr_byte_offset,
            self.source_name.clone(),
        )
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character, keeping line/column tracking in sync.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                // Second half of `\r\n`; the line was already advanced.
                self.last_char_was_cr = false;
            },
            '\n' => {
                self.curr_line += 1;
                self.curr_column = 1;
            },
            '\r' => {
                self.curr_line += 1;
                self.curr_column = 1;
                self.last_char_was_cr = true;
            },
            _ => {
                self.curr_column += 1;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `byte_len` bytes. `byte_len` must land on a char boundary.
    fn consume_bytes(&mut self, byte_len: usize) {
        let target = self.curr_byte_offset + byte_len;
        while self.curr_byte_offset < target {
            if self.consume().is_none() {
                break;
            }
        }
    }

    fn make_token(
        &mut self,
        kind: TokenKind,
        start: SourcePosition,
    ) -> Token<'src> {
        let text = &self.source[start.byte_offset()..self.curr_byte_offset];
        Token {
            kind,
            text,
            position: start,
            leading_comments: std::mem::take(&mut self.pending_comments),
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.skip_whitespace();
            let start = self.curr_position();

            match self.peek_char() {
                None => return self.make_token(TokenKind::Eof, start),

                Some('#') => {
                    self.lex_comment(start);
                    continue;
                },

                Some('!' | '$' | '&' | '(' | ')' | ':' | '=' | '@' | '['
                    | ']' | '{' | '|' | '}') => {
                    self.consume();
                    return self.make_token(TokenKind::Punctuator, start);
                },

                Some('.') => return self.lex_ellipsis(start),

                Some('"') => return self.lex_string(start),

                Some(c) if is_name_start(c) => return self.lex_name(start),

                Some(c) if c == '-' || c.is_ascii_digit() => {
                    return self.lex_number(start);
                },

                Some(c) => {
                    self.consume();
                    return self.make_token(
                        TokenKind::Error(format!("Unexpected character `{c}`")),
                        start,
                    );
                },
            }
        }
    }

    /// Skips ignored tokens: whitespace, line terminators, commas and the
    /// Unicode BOM.
    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    fn lex_comment(&mut self, start: SourcePosition) {
        let rest = self.remaining().as_bytes();
        let comment_len = memchr::memchr2(b'\n', b'\r', rest)
            .unwrap_or(rest.len());
        self.consume_bytes(comment_len);
        let text = &self.source[start.byte_offset()..self.curr_byte_offset];
        self.pending_comments.push(CommentTrivia {
            text,
            position: start,
        });
    }

    fn lex_ellipsis(&mut self, start: SourcePosition) -> Token<'src> {
        if self.remaining().starts_with("...") {
            self.consume_bytes(3);
            return self.make_token(TokenKind::Punctuator, start);
        }
        while self.peek_char() == Some('.') {
            self.consume();
        }
        self.make_token(
            TokenKind::Error(
                "Unexpected `.` (use `...` for the spread operator)".to_string(),
            ),
            start,
        )
    }

    /// Names match `/[_A-Za-z][_0-9A-Za-z]*/`. Keywords are lexed as names;
    /// the parser decides where they are significant.
    fn lex_name(&mut self, start: SourcePosition) -> Token<'src> {
        self.consume();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.consume();
        }
        self.make_token(TokenKind::Name, start)
    }

    /// Lexes an integer or float literal:
    /// `-? (0 | [1-9][0-9]*) (\.[0-9]+)? ([eE][+-]?[0-9]+)?`
    fn lex_number(&mut self, start: SourcePosition) -> Token<'src> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        match self.peek_char() {
            Some('0') => {
                self.consume();
                if self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                    self.consume_digits();
                    return self.make_token(
                        TokenKind::Error(
                            "Invalid number: leading zeros are not allowed"
                                .to_string(),
                        ),
                        start,
                    );
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            _ => {
                return self.make_token(
                    TokenKind::Error("Unexpected `-`".to_string()),
                    start,
                );
            },
        }

        if self.peek_char() == Some('.')
            && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return self.make_token(
                    TokenKind::Error(
                        "Invalid number: exponent must have at least one digit"
                            .to_string(),
                    ),
                    start,
                );
            }
            self.consume_digits();
        }

        let kind =
            if is_float {
                TokenKind::FloatValue
            } else {
                TokenKind::IntValue
            };
        self.make_token(kind, start)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    fn lex_string(&mut self, start: SourcePosition) -> Token<'src> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        // Opening quote
        self.consume();
        loop {
            match self.peek_char() {
                None | Some('\n' | '\r') => {
                    return self.make_token(
                        TokenKind::Error(
                            "Unterminated string: missing closing quote"
                                .to_string(),
                        ),
                        start,
                    );
                },
                Some('"') => {
                    self.consume();
                    return self.make_token(TokenKind::StringValue, start);
                },
                Some('\\') => {
                    // Escapes are validated during AST conversion; here we
                    // only need to step over the escaped character.
                    self.consume();
                    if let Some(ch) = self.peek_char()
                        && ch != '\n'
                        && ch != '\r' {
                        self.consume();
                    }
                },
                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    fn lex_block_string(&mut self, start: SourcePosition) -> Token<'src> {
        self.consume_bytes(3);
        let finder = memchr::memmem::Finder::new("\"\"\"");
        loop {
            let rest = self.remaining();
            let Some(found) = finder.find(rest.as_bytes()) else {
                self.consume_bytes(rest.len());
                return self.make_token(
                    TokenKind::Error(
                        "Unterminated block string: missing closing `\"\"\"`"
                            .to_string(),
                    ),
                    start,
                );
            };

            let escaped = found > 0 && rest.as_bytes()[found - 1] == b'\\';
            self.consume_bytes(found + 3);
            if !escaped {
                return self.make_token(TokenKind::StringValue, start);
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields every token including a final `Eof`, then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.finished = true;
        }
        Some(token)
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
