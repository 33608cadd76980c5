//! # Site Generation
//!
//! Turns a tree of markdown files into HTML pages using a single template.
//!
//! ## Modules
//!
//! - **`title`**: `extract_title` finds the page title in the first `# ` heading
//! - **`template`**: `Template` fills `{{ Title }}` / `{{ Content }}` and rewrites
//!   root-relative `href`/`src` attributes onto the site's base path
//! - **`generate`**: `generate_page` and `generate_pages_recursive`

pub mod generate;
pub mod template;
pub mod title;

pub use generate::{generate_page, generate_pages_recursive, render_page};
pub use template::Template;
pub use title::extract_title;

use std::path::PathBuf;

use thiserror::Error;

use crate::io::IoError;
use crate::parsing::RenderError;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Title is missing: no `# ` heading found")]
    MissingTitle,
    #[error("Failed to render markdown: {0}")]
    Render(#[from] RenderError),
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to generate page from {path}: {source}")]
    Page {
        path: PathBuf,
        #[source]
        source: Box<SiteError>,
    },
}

impl SiteError {
    /// Attaches the source file a page error came from.
    pub fn in_page(self, path: impl Into<PathBuf>) -> Self {
        SiteError::Page {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
