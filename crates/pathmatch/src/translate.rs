// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matcher synthesis.
//!
//! Walks the pattern tree and renders the anchored regex source that
//! backs a [`CompiledMatcher`](crate::CompiledMatcher). Renderings are
//! deterministic: `*` becomes the non-greedy single-segment `[^\/]*?`,
//! `**` the greedy cross-segment `[\s\S]+`, `?` a single `.`, and brace
//! groups an ordered alternation `(a|b)`.
//!
//! Case folding is not part of the rendering; it is applied when the
//! regex is built.

use crate::matcher::CompileOptions;
use crate::tree::{PatternNode, WildcardKind};

/// Fragment for `*`: any run within one segment, shortest match first so
/// adjacent literal suffixes bind as early as possible.
const SINGLE_STAR: &str = r"[^\/]*?";

/// Fragment for `**`: one or more characters of any kind, greedy.
const GLOB_STAR: &str = r"[\s\S]+";

/// Zero-width guard rejecting a dot at the start of a segment.
const DOT_GUARD: &str = r"(?!\.)";

/// Render the full, anchored source for `nodes`.
pub(crate) fn synthesize(nodes: &[PatternNode], options: &CompileOptions) -> String {
    let mut out = String::new();

    if options.match_base && basename_only(nodes) {
        // Anchor to the final path segment: any prefix must end at a
        // separator, and no fragment below can cross one.
        out.push_str(r"^(?:[\s\S]*\/)?");
    } else {
        out.push('^');
    }

    emit_sequence(&mut out, nodes, options, true);
    out.push('$');
    out
}

/// True when the pattern can be anchored to the candidate's final
/// segment: no literal separator and no globstar anywhere in the tree.
fn basename_only(nodes: &[PatternNode]) -> bool {
    nodes.iter().all(|node| match node {
        PatternNode::Literal(text) => !text.contains('/'),
        PatternNode::AnyChar | PatternNode::Wildcard(WildcardKind::Single) => true,
        PatternNode::Wildcard(WildcardKind::Globstar) => false,
        PatternNode::Group(alternatives) => {
            alternatives.iter().all(|alt| basename_only(alt))
        }
    })
}

/// Render `nodes` into `out`. `segment_start` says whether the first
/// node sits at the beginning of a path segment; group alternatives
/// inherit the group's position.
fn emit_sequence(
    out: &mut String,
    nodes: &[PatternNode],
    options: &CompileOptions,
    mut segment_start: bool,
) {
    for node in nodes {
        match node {
            PatternNode::Literal(text) => {
                emit_literal(out, text);
                segment_start = text.ends_with('/');
            }
            PatternNode::AnyChar => {
                guard(out, options, segment_start);
                out.push('.');
                segment_start = false;
            }
            PatternNode::Wildcard(WildcardKind::Single) => {
                guard(out, options, segment_start);
                out.push_str(SINGLE_STAR);
                segment_start = false;
            }
            PatternNode::Wildcard(WildcardKind::Globstar) => {
                guard(out, options, segment_start);
                out.push_str(GLOB_STAR);
                segment_start = false;
            }
            PatternNode::Group(alternatives) => {
                out.push('(');
                for (i, alternative) in alternatives.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    emit_sequence(out, alternative, options, segment_start);
                }
                out.push(')');
                segment_start = false;
            }
        }
    }
}

/// Inject the dot guard once per eligible position: segment-initial
/// wildcards only, and never when `dot` is set.
fn guard(out: &mut String, options: &CompileOptions, segment_start: bool) {
    if segment_start && !options.dot {
        out.push_str(DOT_GUARD);
    }
}

/// Escape regex metacharacters so literal text matches itself. `/` is
/// escaped as well, so rendered specs read `a\/b`; the engine treats
/// `\/` as a plain slash.
fn emit_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '\\' | '^' | '$' | '.' | '|' | '?' | '*' | '+' | '(' | ')' | '[' | ']' | '{'
            | '}' | '/' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
