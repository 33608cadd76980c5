/// Unordered list syntax: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches<'a>(mut lines: impl Iterator<Item = &'a str>) -> bool {
        lines.all(|line| line.starts_with(Self::MARKER))
    }

    pub fn strip_marker(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// Ordered list syntax: line `i` starts with `i. `, counting from 1.
///
/// Lists that start anywhere but 1 or skip a number do not match.
pub struct OrderedList;

impl OrderedList {
    pub fn marker(number: usize) -> String {
        format!("{number}. ")
    }

    pub fn matches<'a>(lines: impl Iterator<Item = &'a str>) -> bool {
        lines
            .enumerate()
            .all(|(index, line)| line.starts_with(&Self::marker(index + 1)))
    }

    /// Strips the marker for item `number` (1-based).
    pub fn strip_marker(line: &str, number: usize) -> &str {
        line.strip_prefix(Self::marker(number).as_str())
            .unwrap_or(line)
    }
}
