pub mod html;
pub mod io;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlError, HtmlNode, LeafNode, ParentNode, serialize};
pub use io::IoError;
pub use parsing::{RenderError, markdown_to_html, parse_document, render_document};
pub use site::{SiteError, Template, extract_title, generate_page, generate_pages_recursive};
