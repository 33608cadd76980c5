//! # Inline Kinds
//!
//! Inline-specific types that own their syntax.
//!
//! ## Types
//!
//! - **`Delimiter`**: paired delimiters `**`, `_` and `` ` ``, with their pass order
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)` not preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in parser code.
//! The parser calls these types; it never hardcodes `**` or `](`.

pub mod delimiter;
pub mod link;

pub use delimiter::Delimiter;
pub use link::{Image, Link, LinkMatch, extract_markdown_images, extract_markdown_links};
