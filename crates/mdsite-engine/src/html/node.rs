use std::borrow::Cow;

use html_escape::encode_quoted_attribute;

use super::HtmlError;

/// Ordered attribute list. Insertion order is serialization order.
pub type Attributes = Vec<(String, String)>;

/// A terminal node: either tagged content or raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    /// Element name. `None` renders the value as raw text.
    pub tag: Option<String>,
    /// Escaped content. `None` is an error at serialization time; `Some("")` is valid.
    ///
    /// Only the constructors set this, so it is always escaped.
    pub(crate) value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    /// Creates a leaf, escaping `value` for HTML.
    pub fn new(tag: Option<&str>, value: &str) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: Some(escape(value).into_owned()),
            attributes: Vec::new(),
        }
    }

    /// Creates a tagless leaf that renders as plain (escaped) text.
    pub fn text(value: &str) -> Self {
        Self::new(None, value)
    }

    /// Creates a leaf wrapped in `tag`.
    pub fn tagged(tag: &str, value: &str) -> Self {
        Self::new(Some(tag), value)
    }

    /// A leaf with no value at all, which fails to serialize.
    #[cfg(test)]
    pub(crate) fn without_value(tag: Option<&str>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_owned(), value.to_owned()));
        self
    }

    /// The stored, already escaped value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        let value = self.value.as_deref().ok_or(HtmlError::MissingValue)?;
        match &self.tag {
            None => Ok(value.to_owned()),
            Some(tag) => Ok(format!(
                "<{tag}{}>{value}</{tag}>",
                attributes_to_html(&self.attributes)
            )),
        }
    }
}

/// A composite node that owns an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: String,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.to_owned(),
            children,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.attributes.push((key.to_owned(), value.to_owned()));
        self
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        if self.tag.is_empty() {
            return Err(HtmlError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(HtmlError::EmptyChildren {
                tag: self.tag.clone(),
            });
        }

        let mut out = format!("<{}{}>", self.tag, attributes_to_html(&self.attributes));
        for child in &self.children {
            out.push_str(&child.to_html()?);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
        Ok(out)
    }
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn to_html(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.to_html(),
            HtmlNode::Parent(parent) => parent.to_html(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => Some(&parent.tag),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'`.
fn escape(value: &str) -> Cow<'_, str> {
    encode_quoted_attribute(value)
}

/// Renders attributes as ` key="value"` pairs, each value escaped.
fn attributes_to_html(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape(value)))
        .collect()
}
