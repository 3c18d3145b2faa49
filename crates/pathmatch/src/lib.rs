// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extended glob pattern compilation.
//!
//! `pathmatch` compiles shell-style glob patterns — literals, `?`, `*`,
//! `**`, nested `{a,b}` brace groups, and leading-`!` whole-pattern
//! negation — into reusable matchers for path-like strings.
//!
//! # Examples
//!
//! ```
//! use pathmatch::{CompileOptions, compile, filter};
//!
//! # fn main() -> Result<(), pathmatch::CompileError> {
//! let matcher = compile("a/b/c{d,e}/*.md", CompileOptions::default())?;
//! assert!(matcher.test("a/b/cd/iii.md"));
//! assert!(!matcher.test("a/b/c/iii.md"));
//!
//! let md = filter(["notes.md", "todo.txt", "readme.md"], "*.md", CompileOptions::default())?;
//! assert_eq!(md, ["notes.md", "readme.md"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Semantics
//!
//! - `*` matches within a single path segment and, by default, refuses a
//!   leading dot; `CompileOptions::dot` lifts that guard. A segment that
//!   spells the dot out (`.gitignore`) needs no option.
//! - `**` matches **one or more** characters across segments, so
//!   `a/**/z` does not match `a/z`.
//! - `CompileOptions::nocase` folds case; `CompileOptions::match_base`
//!   anchors separator-free patterns to the candidate's final segment.
//!
//! Compilation and matching perform no I/O; a [`CompiledMatcher`] is
//! immutable and safe to share across threads.

mod error;
mod matcher;
mod scanner;
mod translate;
mod tree;

pub use error::CompileError;
pub use matcher::{CompileOptions, CompiledMatcher, compile, filter, is_match};
