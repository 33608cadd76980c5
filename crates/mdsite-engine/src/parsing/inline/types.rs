/// The kind of an inline span.
///
/// Links and images carry their target, so a target exists exactly when the
/// span is a link or an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { target: String },
    Image { target: String },
}

/// A unit of inline content produced by tokenizing one run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub kind: SpanKind,
    /// Display text. For images this is the alt text.
    pub text: String,
}

impl TextSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Bold, text)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Italic, text)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Code, text)
    }

    pub fn link(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            SpanKind::Link {
                target: target.into(),
            },
            text,
        )
    }

    pub fn image(alt: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            SpanKind::Image {
                target: target.into(),
            },
            alt,
        )
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// The URL of a link or image span.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { target } | SpanKind::Image { target } => Some(target),
            SpanKind::Plain | SpanKind::Bold | SpanKind::Italic | SpanKind::Code => None,
        }
    }
}
