use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::inline::types::TextSpan;

/// A match of link or image syntax inside a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    /// Byte range of the whole construct, brackets and parens included.
    pub range: Range<usize>,
    pub text: String,
    pub target: String,
}

impl LinkMatch {
    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        let full = caps.get(0)?;
        Some(Self {
            range: full.range(),
            text: caps.get(1)?.as_str().to_owned(),
            target: caps.get(2)?.as_str().to_owned(),
        })
    }
}

/// Image syntax `![alt](url)`.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';

    fn regex() -> &'static Regex {
        static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
        IMAGE_REGEX.get_or_init(|| {
            Regex::new(r"!\[([^\[\]]*)\]\(([^()]+)\)").expect("Invalid image regex")
        })
    }

    /// Finds the first image in `text`.
    pub fn find(text: &str) -> Option<LinkMatch> {
        Self::regex()
            .captures(text)
            .and_then(|caps| LinkMatch::from_captures(&caps))
    }

    pub fn span(m: LinkMatch) -> TextSpan {
        TextSpan::image(m.text, m.target)
    }
}

/// Link syntax `[text](url)`, excluding anything preceded by `!`.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]*)\]\(([^()]+)\)").expect("Invalid link regex")
        })
    }

    /// Finds the first link in `text` that is not image syntax.
    pub fn find(text: &str) -> Option<LinkMatch> {
        let bytes = text.as_bytes();
        Self::regex()
            .captures_iter(text)
            .filter_map(|caps| LinkMatch::from_captures(&caps))
            .find(|m| m.range.start == 0 || bytes[m.range.start - 1] != Image::BANG)
    }

    pub fn span(m: LinkMatch) -> TextSpan {
        TextSpan::link(m.text, m.target)
    }
}

/// All `(alt, url)` pairs of images in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    Image::regex()
        .captures_iter(text)
        .filter_map(|caps| LinkMatch::from_captures(&caps))
        .map(|m| (m.text, m.target))
        .collect()
}

/// All `(text, url)` pairs of links in `text`, images excluded.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    Link::regex()
        .captures_iter(text)
        .filter_map(|caps| LinkMatch::from_captures(&caps))
        .filter(|m| m.range.start == 0 || bytes[m.range.start - 1] != Image::BANG)
        .map(|m| (m.text, m.target))
        .collect()
}
