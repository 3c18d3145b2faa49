// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation errors.
//!
//! All errors are detected synchronously during [`compile`](crate::compile);
//! a failed compilation never yields a matcher, and the same pattern text
//! always produces the same error.

use thiserror::Error;

/// Errors produced while compiling a glob pattern.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A `{` was opened but never closed.
    #[error("unterminated brace group in pattern `{pattern}`")]
    UnterminatedBrace {
        /// The offending pattern text.
        pattern: String,
    },

    /// The pattern ends with a dangling escape character.
    #[error("dangling escape at end of pattern `{pattern}`")]
    InvalidEscape {
        /// The offending pattern text.
        pattern: String,
    },

    /// The synthesized specification was rejected by the regex engine.
    ///
    /// Not reachable from well-formed trees; kept so compilation reports
    /// an error instead of panicking if translation ever emits bad syntax.
    #[error("pattern `{pattern}` produced an invalid match specification")]
    Spec {
        /// The offending pattern text.
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },
}
