//! JSON syntax highlighting.
//!
//! Serialized JSON is split into plain text and tokens by a small scanner
//! with three states:
//!
//! ```text
//! Outside --'"'--> InString --'\'--> Escape
//!    ^                |  ^              |
//!    +------'"'-------+  +---any byte---+
//! ```
//!
//! Outside a string the scanner also recognizes numbers and the literals
//! `true`, `false` and `null`. A string followed by optional whitespace and
//! a colon is an object key; the key token includes the colon.
//!
//! Rendering escapes `&`, `<` and `>` in every piece of text before it is
//! wrapped, so span markup itself is never escaped.

use serde_json::Value;

use crate::plan::to_pretty_json;

/// Category of a highlighted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    String,
    Key,
    Number,
    Boolean,
    Null,
}

impl TokenKind {
    /// CSS class applied to the token's span.
    pub fn css_class(self) -> &'static str {
        match self {
            TokenKind::String => "json-string",
            TokenKind::Key => "json-key",
            TokenKind::Number => "json-number",
            TokenKind::Boolean => "json-boolean",
            TokenKind::Null => "json-null",
        }
    }
}

/// A slice of the input, either untagged text or a categorized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Token(TokenKind, &'a str),
}

#[derive(Clone, Copy)]
enum Scan {
    Outside,
    InString { start: usize },
    Escape { start: usize },
}

/// Split serialized JSON into plain text and tokens.
///
/// Concatenating the text of all segments reproduces `json` exactly.
/// An unterminated string is left as plain text.
pub fn tokenize(json: &str) -> Vec<Segment<'_>> {
    let bytes = json.as_bytes();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut state = Scan::Outside;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match state {
            Scan::Outside => {
                if b == b'"' {
                    state = Scan::InString { start: i };
                    i += 1;
                } else if let Some(end) = scan_number(bytes, i) {
                    push_token(&mut segments, json, &mut plain_start, TokenKind::Number, i, end);
                    i = end;
                } else if let Some((kind, end)) = scan_literal(bytes, i) {
                    push_token(&mut segments, json, &mut plain_start, kind, i, end);
                    i = end;
                } else {
                    i += 1;
                }
            }
            Scan::InString { start } => {
                if b == b'\\' {
                    state = Scan::Escape { start };
                    i += 1;
                } else if b == b'"' {
                    let close = i + 1;
                    let (kind, end) = match key_colon(bytes, close) {
                        Some(colon) => (TokenKind::Key, colon + 1),
                        None => (TokenKind::String, close),
                    };
                    push_token(&mut segments, json, &mut plain_start, kind, start, end);
                    state = Scan::Outside;
                    i = end;
                } else {
                    i += 1;
                }
            }
            Scan::Escape { start } => {
                state = Scan::InString { start };
                i += 1;
            }
        }
    }

    if plain_start < bytes.len() {
        segments.push(Segment::Plain(&json[plain_start..]));
    }
    segments
}

fn push_token<'a>(
    segments: &mut Vec<Segment<'a>>,
    json: &'a str,
    plain_start: &mut usize,
    kind: TokenKind,
    start: usize,
    end: usize,
) {
    if *plain_start < start {
        segments.push(Segment::Plain(&json[*plain_start..start]));
    }
    segments.push(Segment::Token(kind, &json[start..end]));
    *plain_start = end;
}

/// Index of the colon if only whitespace separates `from` from it.
fn key_colon(bytes: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
        j += 1;
    }
    (j < bytes.len() && bytes[j] == b':').then_some(j)
}

fn digits(bytes: &[u8], from: usize) -> usize {
    let mut j = from;
    while j < bytes.len() && bytes[j].is_ascii_digit() {
        j += 1;
    }
    j
}

/// Scan `-?digits(.digits)?([eE][+-]?digits)?` starting at `i`.
fn scan_number(bytes: &[u8], i: usize) -> Option<usize> {
    let int_start = if bytes[i] == b'-' { i + 1 } else { i };
    let mut end = digits(bytes, int_start);
    if end == int_start {
        return None;
    }
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end = digits(bytes, end + 1);
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    Some(end)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Match `true`, `false` or `null` as a whole word at `i`.
fn scan_literal(bytes: &[u8], i: usize) -> Option<(TokenKind, usize)> {
    if i > 0 && is_word_byte(bytes[i - 1]) {
        return None;
    }
    let rest = &bytes[i..];
    let (kind, len) = if rest.starts_with(b"true") {
        (TokenKind::Boolean, 4)
    } else if rest.starts_with(b"false") {
        (TokenKind::Boolean, 5)
    } else if rest.starts_with(b"null") {
        (TokenKind::Null, 4)
    } else {
        return None;
    };
    let end = i + len;
    if end < bytes.len() && is_word_byte(bytes[end]) {
        return None;
    }
    Some((kind, end))
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Highlight already-serialized JSON text.
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    for segment in tokenize(json) {
        match segment {
            Segment::Plain(text) => escape_into(&mut out, text),
            Segment::Token(kind, text) => {
                out.push_str("<span class=\"");
                out.push_str(kind.css_class());
                out.push_str("\">");
                escape_into(&mut out, text);
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Highlight a JSON value after serializing it with 2-space indentation.
pub fn highlight_value(value: &Value) -> String {
    highlight_json(&to_pretty_json(value))
}
