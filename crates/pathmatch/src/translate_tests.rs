// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for matcher synthesis.
//!
//! These pin the exact rendered source, which doubles as the public
//! `debug_spec` contract.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;
use crate::scanner::scan;
use crate::tree::build;

fn spec(pattern: &str, options: CompileOptions) -> String {
    let tokens = scan(pattern).unwrap();
    let nodes = build(pattern, &tokens).unwrap();
    synthesize(&nodes, &options)
}

#[parameterized(
    literal_path = { "a/b/c.md", r"^a\/b\/c\.md$" },
    star_with_extension = { "*.md", r"^(?!\.)[^\/]*?\.md$" },
    star_in_last_segment = { "a/b/c/*.md", r"^a\/b\/c\/(?!\.)[^\/]*?\.md$" },
    question_segment = { "a/?/c.md", r"^a\/(?!\.).\/c\.md$" },
    question_run = { "a/????/c.md", r"^a\/(?!\.)....\/c\.md$" },
    globstar_span = { "a/**/z/*.md", r"^a\/(?!\.)[\s\S]+\/z\/(?!\.)[^\/]*?\.md$" },
    brace_group = { "a/b/c{d,e}/*.md", r"^a\/b\/c(d|e)\/(?!\.)[^\/]*?\.md$" },
    nested_braces = { "a/b/c{d,e{f,g}}/*.md", r"^a\/b\/c(d|e(f|g))\/(?!\.)[^\/]*?\.md$" },
    adjacent_groups = { "c{d,e}{f,g}", r"^c(d|e)(f|g)$" },
    dotted_literal_segment = { ".gitignore", r"^\.gitignore$" },
    star_after_literal_dot = { ".*.md", r"^\.[^\/]*?\.md$" },
    escaped_star = { r"a\*b", r"^a\*b$" },
    empty_braces = { "{}", r"^()$" },
    empty_pattern = { "", r"^$" },
    group_alternative_gets_own_guard = { "{*,a}", r"^((?!\.)[^\/]*?|a)$" },
)]
fn renders_expected_source(pattern: &str, expected: &str) {
    assert_eq!(spec(pattern, CompileOptions::default()), expected);
}

#[test]
fn dot_option_drops_every_guard() {
    let options = CompileOptions {
        dot: true,
        ..CompileOptions::default()
    };
    assert_eq!(spec("*.md", options), r"^[^\/]*?\.md$");
    assert_eq!(spec("a/**/z/*.md", options), r"^a\/[\s\S]+\/z\/[^\/]*?\.md$");
}

#[test]
fn one_guard_per_eligible_position() {
    // Consecutive wildcards share a segment start; only the first is
    // guarded.
    assert_eq!(spec("??", CompileOptions::default()), r"^(?!\.)..$");
    assert_eq!(
        spec("a/??/c.md", CompileOptions::default()),
        r"^a\/(?!\.)..\/c\.md$"
    );
}

#[test]
fn match_base_prefixes_separator_free_patterns() {
    let options = CompileOptions {
        match_base: true,
        ..CompileOptions::default()
    };
    assert_eq!(
        spec("*.md", options),
        r"^(?:[\s\S]*\/)?(?!\.)[^\/]*?\.md$"
    );
}

#[test]
fn match_base_ignored_when_pattern_has_separator() {
    let options = CompileOptions {
        match_base: true,
        ..CompileOptions::default()
    };
    assert_eq!(spec("a/*.md", options), r"^a\/(?!\.)[^\/]*?\.md$");
}

#[test]
fn match_base_ignored_when_pattern_has_globstar() {
    let options = CompileOptions {
        match_base: true,
        ..CompileOptions::default()
    };
    assert_eq!(spec("**", options), r"^(?!\.)[\s\S]+$");
}

#[test]
fn match_base_ignored_when_group_hides_a_separator() {
    let options = CompileOptions {
        match_base: true,
        ..CompileOptions::default()
    };
    assert_eq!(spec("{a/b,c}", options), r"^(a\/b|c)$");
}

#[test]
fn literal_metacharacters_are_escaped() {
    assert_eq!(
        spec(r"a+b(c)[d]^e$f.g|h", CompileOptions::default()),
        r"^a\+b\(c\)\[d\]\^e\$f\.g\|h$"
    );
}
