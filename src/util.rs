//! Utility functions for the `Pebble` language.

use std::borrow::Cow;

/// Escapes `"`, `\` and line feeds in a string so that it reads back as the same literal.
#[must_use]
pub fn escape_str(s: &str) -> Cow<str> {
    if s.contains(['"', '\\', '\n']) {
        let mut escaped = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                _ => escaped.push(c),
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(s)
    }
}

/// Decodes the content of a quoted string literal, given the literal including its quotes.
///
/// `\"` and `\\` yield the escaped character. A backslash followed by anything else yields a
/// line feed, so `\n` and `\t` both decode to `'\n'`. A backslash right before the closing
/// quote is kept as is.
#[must_use]
pub fn unescape_string_literal(literal: &str) -> Cow<str> {
    let content = literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal);

    if !content.contains('\\') {
        return Cow::Borrowed(content);
    }

    let mut unescaped = String::with_capacity(content.len());
    let mut chars = content.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }

        match chars.next() {
            Some(escaped @ ('"' | '\\')) => unescaped.push(escaped),
            Some(_) => unescaped.push('\n'),
            None => unescaped.push('\\'),
        }
    }

    Cow::Owned(unescaped)
}
