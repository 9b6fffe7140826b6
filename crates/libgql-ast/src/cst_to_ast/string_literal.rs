//! Decoding of GraphQL string literal tokens into their values.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum StringLiteralError {
    #[error("Invalid escape sequence: `{0}`")]
    InvalidEscapeSequence(String),

    #[error("Invalid unicode escape: `{0}`")]
    InvalidUnicodeEscape(String),

    #[error("Unterminated string literal")]
    Unterminated,
}

/// A decoded string literal.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct DecodedString {
    pub value: String,
    pub block: bool,
}

/// Decodes a raw string token (quotes included) into its value.
pub(crate) fn decode_string_literal(
    raw: &str,
) -> Result<DecodedString, StringLiteralError> {
    if raw.starts_with("\"\"\"") {
        Ok(DecodedString {
            value: decode_block_string(raw)?,
            block: true,
        })
    } else {
        Ok(DecodedString {
            value: decode_quoted_string(raw)?,
            block: false,
        })
    }
}

fn decode_quoted_string(raw: &str) -> Result<String, StringLiteralError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(StringLiteralError::Unterminated)?;

    let mut value = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            Some('/') => value.push('/'),
            Some('b') => value.push('\u{0008}'),
            Some('f') => value.push('\u{000C}'),
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some('t') => value.push('\t'),
            Some('u') => value.push(decode_unicode_escape(&mut chars)?),
            Some(other) => {
                return Err(StringLiteralError::InvalidEscapeSequence(
                    format!("\\{other}"),
                ));
            },
            None => {
                return Err(StringLiteralError::InvalidEscapeSequence(
                    "\\".to_string(),
                ));
            },
        }
    }
    Ok(value)
}

/// Decodes the part of a unicode escape after `\u`: either exactly four hex
/// digits or a braced `{...}` code point. A leading surrogate written as
/// `\uXXXX` must be followed by a trailing one.
fn decode_unicode_escape(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<char, StringLiteralError> {
    if chars.peek() == Some(&'{') {
        chars.next();
        let mut hex = String::new();
        loop {
            match chars.next() {
                Some('}') => break,
                Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
                Some(ch) => {
                    return Err(StringLiteralError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}{ch}"),
                    ));
                },
                None => {
                    return Err(StringLiteralError::InvalidUnicodeEscape(
                        format!("\\u{{{hex}"),
                    ));
                },
            }
        }
        let invalid = || StringLiteralError::InvalidUnicodeEscape(format!("\\u{{{hex}}}"));
        if hex.is_empty() {
            return Err(invalid());
        }
        let code_point = u32::from_str_radix(&hex, 16).map_err(|_| invalid())?;
        return char::from_u32(code_point).ok_or_else(invalid);
    }

    let leading = read_four_hex_digits(chars)?;
    if !(0xD800..=0xDBFF).contains(&leading) {
        return char::from_u32(leading).ok_or_else(|| {
            StringLiteralError::InvalidUnicodeEscape(format!("\\u{leading:04X}"))
        });
    }

    // Surrogate pair, e.g. `\uD83D\uDE00`.
    let unpaired =
        || StringLiteralError::InvalidUnicodeEscape(format!("\\u{leading:04X}"));
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(unpaired());
    }
    let trailing = read_four_hex_digits(chars)?;
    if !(0xDC00..=0xDFFF).contains(&trailing) {
        return Err(unpaired());
    }
    let code_point = 0x10000 + ((leading - 0xD800) << 10) + (trailing - 0xDC00);
    char::from_u32(code_point).ok_or_else(unpaired)
}

fn read_four_hex_digits(
    chars: &mut Peekable<Chars<'_>>,
) -> Result<u32, StringLiteralError> {
    let mut hex = String::with_capacity(4);
    for _ in 0..4 {
        match chars.next() {
            Some(ch) if ch.is_ascii_hexdigit() => hex.push(ch),
            Some(ch) => {
                return Err(StringLiteralError::InvalidUnicodeEscape(
                    format!("\\u{hex}{ch}"),
                ));
            },
            None => {
                return Err(StringLiteralError::InvalidUnicodeEscape(
                    format!("\\u{hex}"),
                ));
            },
        }
    }
    u32::from_str_radix(&hex, 16)
        .map_err(|_| StringLiteralError::InvalidUnicodeEscape(format!("\\u{hex}")))
}

/// Applies the GraphQL `BlockStringValue` algorithm: common indentation is
/// removed from every line but the first, then leading and trailing blank
/// lines are dropped. `\"""` is the only escape.
fn decode_block_string(raw: &str) -> Result<String, StringLiteralError> {
    let content = raw
        .strip_prefix("\"\"\"")
        .and_then(|rest| rest.strip_suffix("\"\"\""))
        .ok_or(StringLiteralError::Unterminated)?;
    let content = content.replace("\\\"\"\"", "\"\"\"");

    let lines: Vec<&str> = split_lines(&content);
    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace_len(line))
        .min();

    let mut stripped: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| match common_indent {
            Some(indent) if idx > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while stripped.first().is_some_and(|line| is_blank(line)) {
        stripped.remove(0);
    }
    while stripped.last().is_some_and(|line| is_blank(line)) {
        stripped.pop();
    }
    Ok(stripped.join("\n"))
}

/// Splits on `\r\n`, `\n` and `\r`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        match bytes[idx] {
            b'\n' => {
                lines.push(&text[start..idx]);
                start = idx + 1;
            },
            b'\r' => {
                lines.push(&text[start..idx]);
                if bytes.get(idx + 1) == Some(&b'\n') {
                    idx += 1;
                }
                start = idx + 1;
            },
            _ => {},
        }
        idx += 1;
    }
    lines.push(&text[start..]);
    lines
}

fn leading_whitespace_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace_len(line) == line.len()
}
