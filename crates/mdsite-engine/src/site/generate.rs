use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;

use super::{SiteError, Template, extract_title};
use crate::io::{self, IoError};
use crate::parsing::markdown_to_html;

/// Renders one markdown document into a complete page.
pub fn render_page(markdown: &str, template: &Template, base_path: &str) -> Result<String, SiteError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown)?;
    Ok(template.fill(&title, &content, base_path))
}

/// Generates a single page from `from_path` into `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = io::read_path(from_path)?;
    let template = Template::load(template_path)?;
    let page = render_page(&markdown, &template, base_path).map_err(|e| e.in_page(from_path))?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(dest_path, page).map_err(IoError::Io)?;
    Ok(())
}

/// Generates a page for every markdown file under `content_dir`.
///
/// `content/blog/post.md` becomes `dest/blog/post.html`. Files for which
/// `skip` returns true are left out. Returns the written pages in order.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
    skip: impl Fn(&RelativePath) -> bool,
) -> Result<Vec<PathBuf>, SiteError> {
    log::info!(
        "Generating pages from {} to {}",
        content_dir.display(),
        dest_dir.display()
    );

    fs::create_dir_all(dest_dir).map_err(IoError::Io)?;
    let template = Template::load(template_path)?;

    let mut written = Vec::new();
    for source in io::scan_markdown_files(content_dir)? {
        if skip(&source) {
            log::debug!("Skipping excluded {source}");
            continue;
        }

        let markdown = io::read_file(&source, content_dir)?;
        let page = render_page(&markdown, &template, base_path)
            .map_err(|e| e.in_page(source.to_path(content_dir)))?;

        let target = source.with_extension("html");
        io::write_file(&target, dest_dir, &page)?;
        log::info!("Wrote {target}");
        written.push(target.to_path(dest_dir));
    }

    Ok(written)
}
