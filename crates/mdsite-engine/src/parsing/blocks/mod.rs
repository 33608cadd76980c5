//! # Block Parsing
//!
//! Two-phase block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the document is cut on blank lines into trimmed,
//!    non-empty blocks
//!
//! 2. **Classification** (`classify`): each block is assigned exactly one
//!    `BlockType`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockType`, `BlockNode`)
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence,
//!   Heading, UnorderedList, OrderedList, Paragraph)
//! - **`split`**: `split_into_blocks`
//! - **`classify`**: `classify` for a single block
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no inline parsing inside
//! - Code and heading checks run before quote and list checks, which run before
//!   the paragraph fallback
//! - Ordered lists must count 1, 2, 3... with no gaps

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::classify;
pub use split::{BLOCK_SEPARATOR, split_into_blocks};
pub use types::{BlockNode, BlockType};
