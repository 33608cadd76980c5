//! # Inline Parsing
//!
//! Turns one run of text into an ordered sequence of [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Tokenizing is a chain of pure passes. Each pass takes the span list built so
//! far and returns a new one, re-splitting only spans that are still plain:
//!
//! 1. `**` bold
//! 2. `_` italic
//! 3. `` ` `` code
//! 4. `![alt](url)` images
//! 5. `[text](url)` links
//!
//! Typed spans pass through later stages untouched, so there is no nested
//! styling: `**a _b_ c**` is a single bold span with the underscores kept.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and `SpanKind`
//! - **`kinds`**: syntax-owning types (`Delimiter`, `Image`, `Link`)
//! - **`parser`**: `tokenize()` and the individual passes

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{split_delimiter, split_images, split_links, tokenize};
pub use types::{SpanKind, TextSpan};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InlineError {
    #[error("Unmatched delimiter '{delimiter}' in text: {text}")]
    UnbalancedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}
