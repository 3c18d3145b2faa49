// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Glob pattern tokenizer.
//!
//! Splits a raw pattern into operator and literal tokens. Escape
//! sequences are resolved here, so downstream stages never reinterpret
//! an escaped character as an operator.

use crate::error::CompileError;

/// One syntactic unit of a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// A run of plain characters.
    Literal(String),
    /// `?` — exactly one character.
    Question,
    /// `*` — any run within one segment.
    Star,
    /// `**` — any run across segments.
    GlobStar,
    BraceOpen,
    BraceComma,
    BraceClose,
    /// A character forced literal by a backslash escape.
    Escaped(char),
}

/// Tokenize `pattern` left to right.
///
/// `,` and `}` are structural only while a brace scope is open; anywhere
/// else they are ordinary literal characters. An unclosed `{` is an
/// error, as is a trailing `\` with nothing to escape.
pub(crate) fn scan(pattern: &str) -> Result<Vec<Token>, CompileError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut tokens = Vec::new();
    let mut run = String::new();
    let mut depth = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&next) => {
                    flush(&mut tokens, &mut run);
                    tokens.push(Token::Escaped(next));
                    i += 1;
                }
                None => {
                    return Err(CompileError::InvalidEscape {
                        pattern: pattern.to_string(),
                    });
                }
            },
            '*' => {
                // Take the whole star run up front: `**` only counts as a
                // globstar when bounded by separators or the pattern ends.
                let mut stars = 1;
                while chars.get(i + stars) == Some(&'*') {
                    stars += 1;
                }
                let opens_segment = i == 0 || chars[i - 1] == '/';
                let closes_segment = matches!(chars.get(i + stars), None | Some(&'/'));

                flush(&mut tokens, &mut run);
                if stars == 2 && opens_segment && closes_segment {
                    tokens.push(Token::GlobStar);
                } else {
                    for _ in 0..stars {
                        tokens.push(Token::Star);
                    }
                }
                i += stars - 1;
            }
            '?' => {
                flush(&mut tokens, &mut run);
                tokens.push(Token::Question);
            }
            '{' => {
                depth += 1;
                flush(&mut tokens, &mut run);
                tokens.push(Token::BraceOpen);
            }
            '}' if depth > 0 => {
                depth -= 1;
                flush(&mut tokens, &mut run);
                tokens.push(Token::BraceClose);
            }
            ',' if depth > 0 => {
                flush(&mut tokens, &mut run);
                tokens.push(Token::BraceComma);
            }
            c => run.push(c),
        }
        i += 1;
    }

    if depth > 0 {
        return Err(CompileError::UnterminatedBrace {
            pattern: pattern.to_string(),
        });
    }

    flush(&mut tokens, &mut run);
    Ok(tokens)
}

fn flush(tokens: &mut Vec<Token>, run: &mut String) {
    if !run.is_empty() {
        tokens.push(Token::Literal(std::mem::take(run)));
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
