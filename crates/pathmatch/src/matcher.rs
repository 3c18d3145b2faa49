// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and the reusable matcher artifact.
//!
//! [`compile`] runs the whole pipeline — scan, build, synthesize — and
//! wraps the result in a [`CompiledMatcher`]. A leading `!` negates the
//! whole pattern: the remainder compiles exactly as if unprefixed and
//! [`CompiledMatcher::test`] reports the complement, which works for
//! every pattern shape including bare literals.

use fancy_regex::{Regex, RegexBuilder};

use crate::error::CompileError;
use crate::scanner::scan;
use crate::translate::synthesize;
use crate::tree::build;

/// Compile-time policy. Consumed once by [`compile`]; unknown concerns
/// have no representation here by design.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Let wildcards match segments that start with a dot.
    pub dot: bool,
    /// Compare pattern and candidate case-insensitively.
    pub nocase: bool,
    /// Match a separator-free, globstar-free pattern against the
    /// candidate's final path segment instead of the whole string.
    pub match_base: bool,
}

/// A compiled glob pattern.
///
/// Immutable once built and internally stateless, so it can be shared
/// across threads and reused for any number of [`test`] calls. It keeps
/// no reference to the pattern text it was compiled from.
///
/// [`test`]: CompiledMatcher::test
#[derive(Debug, Clone)]
pub struct CompiledMatcher {
    spec: Regex,
    source: String,
    negated: bool,
}

impl CompiledMatcher {
    /// Test whether `candidate` matches.
    ///
    /// Never fails: any string is a valid candidate, and if the engine
    /// gives up (backtracking budget), the candidate counts as a
    /// non-match before negation applies.
    pub fn test(&self, candidate: &str) -> bool {
        let matched = self.spec.is_match(candidate).unwrap_or(false);
        matched != self.negated
    }

    /// Deterministic rendering of the compiled specification.
    ///
    /// Matchers compiled from the same `(pattern, options)` render
    /// identically, which makes this useful for equality assertions.
    /// Negation and case folding are not part of the rendering; see
    /// [`is_negated`](CompiledMatcher::is_negated).
    pub fn debug_spec(&self) -> &str {
        &self.source
    }

    /// Whether the pattern carried a leading `!`.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

/// Compile `pattern` into a reusable matcher.
///
/// # Errors
/// [`CompileError::UnterminatedBrace`] for an unclosed `{`,
/// [`CompileError::InvalidEscape`] for a dangling trailing `\`.
pub fn compile(pattern: &str, options: CompileOptions) -> Result<CompiledMatcher, CompileError> {
    let (negated, body) = match pattern.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };

    let tokens = scan(body)?;
    let nodes = build(body, &tokens)?;
    let source = synthesize(&nodes, &options);

    let spec = RegexBuilder::new(&source)
        .case_insensitive(options.nocase)
        .build()
        .map_err(|e| CompileError::Spec {
            pattern: pattern.to_string(),
            source: Box::new(e),
        })?;

    tracing::debug!(pattern, spec = %source, negated, "compiled glob pattern");

    Ok(CompiledMatcher {
        spec,
        source,
        negated,
    })
}

/// One-shot convenience: compile `pattern` and test a single candidate.
///
/// # Errors
/// Same as [`compile`].
pub fn is_match(
    candidate: &str,
    pattern: &str,
    options: CompileOptions,
) -> Result<bool, CompileError> {
    Ok(compile(pattern, options)?.test(candidate))
}

/// Compile `pattern` once and keep the candidates that match.
///
/// Input order is preserved and duplicates are kept; candidates are
/// tested independently.
///
/// # Errors
/// Same as [`compile`].
pub fn filter<'a, I>(
    candidates: I,
    pattern: &str,
    options: CompileOptions,
) -> Result<Vec<&'a str>, CompileError>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher = compile(pattern, options)?;
    let matched: Vec<&str> = candidates
        .into_iter()
        .filter(|candidate| matcher.test(candidate))
        .collect();

    tracing::trace!(pattern, matched = matched.len(), "filtered candidates");
    Ok(matched)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
