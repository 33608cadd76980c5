/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other block
/// type matches. Their lines are joined into one run of inline text.
pub struct Paragraph;

impl Paragraph {
    pub fn join_lines(block: &str) -> String {
        block.lines().collect::<Vec<_>>().join(" ")
    }
}
