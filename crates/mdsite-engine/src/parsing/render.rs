use thiserror::Error;

use crate::html::{HtmlError, HtmlNode, LeafNode, ParentNode, serialize};

use super::{
    blocks::{
        BlockNode, BlockType,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::{InlineError, SpanKind, TextSpan, tokenize},
    parse_document,
};

/// Tag of the element wrapping a whole document.
pub const DOCUMENT_TAG: &str = "div";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Html(#[from] HtmlError),
}

/// Renders a document into a node tree rooted at a `div`.
///
/// A document without blocks renders as an empty `div`. That root is a tagged
/// leaf with an empty value, since a parent without children cannot serialize.
pub fn render_document(markdown: &str) -> Result<HtmlNode, RenderError> {
    let doc = parse_document(markdown);
    if doc.blocks.is_empty() {
        return Ok(LeafNode::tagged(DOCUMENT_TAG, "").into());
    }

    let children = doc
        .blocks
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ParentNode::new(DOCUMENT_TAG, children).into())
}

/// Renders and serializes a document in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, RenderError> {
    Ok(serialize(&render_document(markdown)?)?)
}

/// Converts one classified block into its HTML node.
pub fn block_to_node(block: &BlockNode<'_>) -> Result<HtmlNode, RenderError> {
    let text = block.text;
    let node = match block.kind {
        BlockType::Code => {
            let code = CodeFence::strip(text).unwrap_or(text);
            ParentNode::new("pre", vec![LeafNode::tagged("code", code).into()])
        }
        BlockType::Heading { level } => ParentNode::new(
            &format!("h{level}"),
            text_to_children(Heading::content(text, level))?,
        ),
        BlockType::Quote => {
            let quoted = text
                .lines()
                .map(BlockQuote::strip_line)
                .collect::<Vec<_>>()
                .join("\n");
            ParentNode::new("blockquote", text_to_children(&quoted)?)
        }
        BlockType::UnorderedList => ParentNode::new(
            "ul",
            list_items(text.lines().map(UnorderedList::strip_marker))?,
        ),
        BlockType::OrderedList => ParentNode::new(
            "ol",
            list_items(
                text.lines()
                    .enumerate()
                    .map(|(index, line)| OrderedList::strip_marker(line, index + 1)),
            )?,
        ),
        BlockType::Paragraph => {
            ParentNode::new("p", text_to_children(&Paragraph::join_lines(text))?)
        }
    };
    Ok(node.into())
}

fn list_items<'a>(items: impl Iterator<Item = &'a str>) -> Result<Vec<HtmlNode>, RenderError> {
    items
        .map(|item| -> Result<HtmlNode, RenderError> {
            Ok(ParentNode::new("li", text_to_children(item)?).into())
        })
        .collect()
}

/// Tokenizes inline text and maps every span to a leaf.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    Ok(tokenize(text)?.into_iter().map(span_to_node).collect())
}

pub fn span_to_node(span: TextSpan) -> HtmlNode {
    let TextSpan { kind, text } = span;
    let leaf = match kind {
        SpanKind::Plain => LeafNode::text(&text),
        SpanKind::Bold => LeafNode::tagged("b", &text),
        SpanKind::Italic => LeafNode::tagged("i", &text),
        SpanKind::Code => LeafNode::tagged("code", &text),
        SpanKind::Link { target } => LeafNode::tagged("a", &text).with_attribute("href", &target),
        SpanKind::Image { target } => LeafNode::tagged("img", "")
            .with_attribute("src", &target)
            .with_attribute("alt", &text),
    };
    leaf.into()
}
