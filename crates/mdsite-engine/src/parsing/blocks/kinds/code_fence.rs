/// Fenced code block syntax.
///
/// A fenced block starts and ends with three backticks. Anything after the
/// opening fence on its first line (a language tag, say) is kept as code text.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether a whole block is fenced. The opening and closing fences must not overlap.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// Strips both fences and the first newline after the opening fence.
    ///
    /// Returns `None` if the block is not fenced.
    pub fn strip(block: &str) -> Option<&str> {
        if !Self::is_fenced(block) {
            return None;
        }
        let inner = &block[Self::BACKTICKS.len()..block.len() - Self::BACKTICKS.len()];
        Some(inner.strip_prefix('\n').unwrap_or(inner))
    }
}
