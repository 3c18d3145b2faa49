// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern tree builder.
//!
//! Recursive descent over the token stream. Brace groups become [`Group`]
//! nodes holding ordered alternatives, each itself a node sequence that
//! may nest further groups to any depth.
//!
//! [`Group`]: PatternNode::Group

use crate::error::CompileError;
use crate::scanner::Token;

/// The two wildcard flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WildcardKind {
    /// `*`: zero or more characters, confined to a single segment.
    Single,
    /// `**`: one or more characters, separators included. A zero-width
    /// span is deliberately not matched, so `a/**/z` never matches `a/z`.
    Globstar,
}

/// One node of a compiled pattern tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PatternNode {
    /// Exact character sequence.
    Literal(String),
    /// `?`: exactly one character of any kind.
    AnyChar,
    Wildcard(WildcardKind),
    /// Brace alternatives in declaration order.
    Group(Vec<Vec<PatternNode>>),
}

/// Build the pattern tree for `tokens`.
///
/// `pattern` is the original text, used only for error context.
pub(crate) fn build(pattern: &str, tokens: &[Token]) -> Result<Vec<PatternNode>, CompileError> {
    let mut pos = 0usize;
    let (nodes, stop) = sequence(pattern, tokens, &mut pos)?;
    // The scanner only emits structural commas and closers inside
    // balanced braces, so the top-level walk runs to the end of input.
    if stop != Stop::End {
        return Err(CompileError::UnterminatedBrace {
            pattern: pattern.to_string(),
        });
    }
    Ok(nodes)
}

/// Why a sequence walk stopped.
#[derive(Debug, PartialEq, Eq)]
enum Stop {
    End,
    Comma,
    Close,
}

fn sequence(
    pattern: &str,
    tokens: &[Token],
    pos: &mut usize,
) -> Result<(Vec<PatternNode>, Stop), CompileError> {
    let mut nodes: Vec<PatternNode> = Vec::new();

    while *pos < tokens.len() {
        let token = &tokens[*pos];
        *pos += 1;
        match token {
            Token::Literal(text) => push_literal(&mut nodes, text),
            Token::Escaped(c) => push_literal(&mut nodes, &c.to_string()),
            Token::Question => nodes.push(PatternNode::AnyChar),
            Token::Star => nodes.push(PatternNode::Wildcard(WildcardKind::Single)),
            Token::GlobStar => nodes.push(PatternNode::Wildcard(WildcardKind::Globstar)),
            Token::BraceOpen => nodes.push(group(pattern, tokens, pos)?),
            Token::BraceComma => return Ok((nodes, Stop::Comma)),
            Token::BraceClose => return Ok((nodes, Stop::Close)),
        }
    }

    Ok((nodes, Stop::End))
}

/// Collect comma-separated alternatives until the matching closer.
fn group(
    pattern: &str,
    tokens: &[Token],
    pos: &mut usize,
) -> Result<PatternNode, CompileError> {
    let mut alternatives = Vec::new();
    loop {
        let (alternative, stop) = sequence(pattern, tokens, pos)?;
        alternatives.push(alternative);
        match stop {
            Stop::Comma => continue,
            Stop::Close => return Ok(PatternNode::Group(alternatives)),
            // Defensive: the scanner already rejects unbalanced braces.
            Stop::End => {
                return Err(CompileError::UnterminatedBrace {
                    pattern: pattern.to_string(),
                });
            }
        }
    }
}

/// Append literal text, merging with a preceding literal node.
fn push_literal(nodes: &mut Vec<PatternNode>, text: &str) {
    if let Some(PatternNode::Literal(prev)) = nodes.last_mut() {
        prev.push_str(text);
    } else {
        nodes.push(PatternNode::Literal(text.to_string()));
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
