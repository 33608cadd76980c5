/// The structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Fallback when no other type matches.
    Paragraph,
    /// `#` to `######` heading.
    Heading {
        /// Number of leading `#` (1-6).
        level: u8,
    },
    /// Fenced code block. Its content is never inline-parsed.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Line `i` starts with `i. `, from 1.
    OrderedList,
}

/// A classified block borrowing its trimmed text from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode<'a> {
    pub kind: BlockType,
    pub text: &'a str,
}
