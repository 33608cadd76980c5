pub mod blocks;
pub mod inline;
pub mod render;

#[cfg(test)]
mod tests;

use blocks::{BlockNode, classify, split_into_blocks};

pub use render::{RenderError, markdown_to_html, render_document};

#[derive(Debug)]
pub struct ParsedDoc<'a> {
    pub blocks: Vec<BlockNode<'a>>,
}

/// Splits and classifies a document. Parsing never fails; only rendering can.
pub fn parse_document(markdown: &str) -> ParsedDoc<'_> {
    let blocks = split_into_blocks(markdown)
        .into_iter()
        .map(|text| {
            let kind = classify(text);
            log::debug!("classified block as {kind:?}: {:?}", preview(text, 40));
            BlockNode { kind, text }
        })
        .collect();

    ParsedDoc { blocks }
}

/// First `max` characters of `text`, for log lines.
fn preview(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
