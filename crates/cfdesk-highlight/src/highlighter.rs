//! Line-oriented lexical scanner.
//!
//! Every line is scanned on its own: no state (an open block comment, an
//! unterminated string) survives a newline.

use crate::languages::keywords_for;
use crate::span::{Role, Span};

/// Highlight `source` for the given language tag.
///
/// Newlines are emitted as their own plain spans, so joining the span texts
/// gives back `source` exactly. Empty input produces no spans.
pub fn highlight<'a>(source: &'a str, language_tag: &str) -> Vec<Span<'a>> {
    let keywords = keywords_for(language_tag);
    let mut spans = Vec::new();

    if source.is_empty() {
        return spans;
    }

    for (index, line) in source.split('\n').enumerate() {
        if index > 0 {
            spans.push(Span::plain("\n"));
        }
        scan_line(line, keywords, &mut spans);
    }

    spans
}

/// Highlight `source` and group the spans per line (newlines dropped).
///
/// There is always at least one line, matching how an editor numbers an empty buffer.
pub fn highlight_lines<'a>(source: &'a str, language_tag: &str) -> Vec<Vec<Span<'a>>> {
    let keywords = keywords_for(language_tag);

    source
        .split('\n')
        .map(|line| {
            let mut spans = Vec::new();
            scan_line(line, keywords, &mut spans);
            spans
        })
        .collect()
}

fn scan_line<'a>(line: &'a str, keywords: &[&str], out: &mut Vec<Span<'a>>) {
    let mut pos = 0;

    while pos < line.len() {
        let rest = &line[pos..];
        let (len, role) = next_token(rest, keywords);
        out.push(Span::new(&rest[..len], role));
        pos += len;
    }
}

/// Length in bytes and role of the token at the start of `rest` (non-empty).
fn next_token(rest: &str, keywords: &[&str]) -> (usize, Role) {
    if rest.starts_with("//") {
        return (rest.len(), Role::Comment);
    }
    if rest.starts_with("/*") {
        // The closer may share the opener's `*`, so `/*/` is a whole comment.
        let len = rest[1..].find("*/").map_or(rest.len(), |end| end + 3);
        return (len, Role::Comment);
    }
    if rest.starts_with('#') {
        return (rest.len(), Role::Comment);
    }

    let Some(first) = rest.chars().next() else {
        return (0, Role::Plain);
    };

    match first {
        '"' | '\'' => (string_len(rest, first), Role::String),
        c if c.is_ascii_digit() => (number_len(rest), Role::Number),
        c if c.is_alphabetic() || c == '_' => {
            let len = word_len(rest);
            let role = if keywords.contains(&&rest[..len]) {
                Role::Keyword
            } else {
                Role::Plain
            };
            (len, role)
        }
        c => (c.len_utf8(), Role::Plain),
    }
}

/// Quoted string up to the matching unescaped quote, or the rest of the line.
fn string_len(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices().skip(1);

    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            if chars.next().is_none() {
                break;
            }
            continue;
        }
        if c == quote {
            return i + c.len_utf8();
        }
    }

    rest.len()
}

/// Digits with at most one decimal point.
fn number_len(rest: &str) -> usize {
    let mut seen_dot = false;

    for (i, c) in rest.char_indices() {
        if c.is_ascii_digit() {
            continue;
        }
        if c == '.' && !seen_dot {
            seen_dot = true;
            continue;
        }
        return i;
    }

    rest.len()
}

fn word_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !(c.is_alphanumeric() || c == '_'))
        .map_or(rest.len(), |(i, _)| i)
}
