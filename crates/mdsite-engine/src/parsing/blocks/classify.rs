use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockType,
};

/// Classifies a trimmed block.
///
/// Checks run in a fixed order and the first match wins: fenced code,
/// heading, quote, unordered list, ordered list, then paragraph.
pub fn classify(block: &str) -> BlockType {
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading { level };
    }
    if block.lines().all(BlockQuote::is_quote_line) {
        return BlockType::Quote;
    }
    if UnorderedList::matches(block.lines()) {
        return BlockType::UnorderedList;
    }
    if OrderedList::matches(block.lines()) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("```\ncode\n```", BlockType::Code)]
    #[case("```\n# not a heading\n```", BlockType::Code)]
    #[case("# Title", BlockType::Heading { level: 1 })]
    #[case("### header 3", BlockType::Heading { level: 3 })]
    #[case("# heading\n> with quote line", BlockType::Heading { level: 1 })]
    #[case("> this is a quote\n> still a quote\n> yep, quote", BlockType::Quote)]
    #[case(">no space", BlockType::Quote)]
    #[case("> quote\nnot quote", BlockType::Paragraph)]
    #[case("- Apple\n- Banana", BlockType::UnorderedList)]
    #[case("- Apple\nBanana", BlockType::Paragraph)]
    #[case("1. First\n2. Second\n3. Third", BlockType::OrderedList)]
    #[case("0. zero\n1. one", BlockType::Paragraph)]
    #[case("1. one\n3. three", BlockType::Paragraph)]
    #[case("1.missing space", BlockType::Paragraph)]
    #[case("####### seven hashes", BlockType::Paragraph)]
    #[case("just text", BlockType::Paragraph)]
    fn classify_block(#[case] block: &str, #[case] expected: BlockType) {
        assert_eq!(classify(block), expected);
    }

    #[test]
    fn single_line_blocks_match_line_patterns() {
        assert_eq!(classify("> one"), BlockType::Quote);
        assert_eq!(classify("- one"), BlockType::UnorderedList);
        assert_eq!(classify("1. one"), BlockType::OrderedList);
    }

    #[test]
    fn classification_is_deterministic() {
        let block = "- a\n- b";
        assert_eq!(classify(block), classify(block));
    }
}
