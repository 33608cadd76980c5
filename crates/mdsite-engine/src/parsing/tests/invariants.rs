use crate::parsing::blocks::{BLOCK_SEPARATOR, BlockNode, classify};

/// Validates parser output invariants.
///
/// Asserts that:
/// - No block is empty or whitespace-only
/// - Every block is trimmed
/// - Blocks appear in the document in order, and never span a blank line
/// - Only whitespace lies between, before and after blocks, so no text is lost
/// - Each block's kind is what `classify` says for its text
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(document: &str, blocks: &[BlockNode<'_>]) {
    let mut cursor = 0;
    for b in blocks {
        assert!(!b.text.trim().is_empty(), "empty block: {:?}", b.text);
        assert_eq!(b.text, b.text.trim(), "block not trimmed: {:?}", b.text);
        assert!(
            !b.text.contains(BLOCK_SEPARATOR),
            "block spans a blank line: {:?}",
            b.text
        );

        let at = document[cursor..]
            .find(b.text)
            .unwrap_or_else(|| panic!("block out of order or not in document: {:?}", b.text));
        let gap = &document[cursor..cursor + at];
        assert!(
            gap.trim().is_empty(),
            "text dropped before block {:?}: {gap:?}",
            b.text
        );
        cursor += at + b.text.len();

        assert_eq!(
            b.kind,
            classify(b.text),
            "kind disagrees with classify for {:?}",
            b.text
        );
    }

    let tail = &document[cursor..];
    assert!(tail.trim().is_empty(), "text dropped after last block: {tail:?}");
}
