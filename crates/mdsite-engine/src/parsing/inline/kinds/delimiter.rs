use crate::parsing::inline::types::TextSpan;

/// Paired inline delimiters, in the order their split passes run.
///
/// Wider delimiters go first so `_` never fires inside an already recognized
/// `**` span. Text inside a delimited span is never re-scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Bold,
    Italic,
    Code,
}

impl Delimiter {
    pub const BOLD: &'static str = "**";
    pub const ITALIC: &'static str = "_";
    pub const CODE: &'static str = "`";

    /// Pass order used by the tokenizer.
    pub const ORDER: [Delimiter; 3] = [Delimiter::Bold, Delimiter::Italic, Delimiter::Code];

    pub fn marker(self) -> &'static str {
        match self {
            Delimiter::Bold => Self::BOLD,
            Delimiter::Italic => Self::ITALIC,
            Delimiter::Code => Self::CODE,
        }
    }

    /// Builds the typed span for text found between a pair of this delimiter.
    pub fn span(self, text: &str) -> TextSpan {
        match self {
            Delimiter::Bold => TextSpan::bold(text),
            Delimiter::Italic => TextSpan::italic(text),
            Delimiter::Code => TextSpan::code(text),
        }
    }
}
