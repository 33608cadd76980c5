/// Separator between blocks: one blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks, in document order.
pub fn split_into_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
