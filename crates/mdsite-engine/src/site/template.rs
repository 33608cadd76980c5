use std::path::Path;

use crate::io::{self, IoError};

/// An HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    /// Root-relative attribute prefixes rewritten onto the base path.
    const ROOT_PREFIXES: [&'static str; 2] = ["href=\"/", "src=\"/"];

    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn load(path: &Path) -> Result<Self, IoError> {
        io::read_path(path).map(Self::new)
    }

    /// Substitutes both placeholders, then points every root-relative
    /// `href="/` and `src="/` at `base_path`.
    ///
    /// `base_path` is expected to start and end with `/`.
    pub fn fill(&self, title: &str, content: &str, base_path: &str) -> String {
        let mut page = self
            .text
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content);

        for prefix in Self::ROOT_PREFIXES {
            let attribute = &prefix[..prefix.len() - 1];
            page = page.replace(prefix, &format!("{attribute}{base_path}"));
        }
        page
    }
}
