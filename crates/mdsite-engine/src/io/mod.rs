use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(PathBuf),
    #[error("Output directory {dest} would replace {kept}")]
    Overlap { dest: PathBuf, kept: PathBuf },
}

/// Read a file relative to `root`
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Read a file by path, reporting a missing file as [`IoError::NotFound`]
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file relative to `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under `root`, returned relative to it in sorted order
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, RelativePath::new(""), &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    relative: &RelativePath,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    for (name, path) in sorted_entries(&relative.to_path(root))? {
        let Some(name) = name.to_str() else {
            log::warn!("Skipping non UTF-8 path {}", path.display());
            continue;
        };
        let child = relative.join(name);

        if path.is_dir() {
            scan_directory_recursive(root, &child, files)?;
        } else if child.extension() == Some("md") {
            files.push(child);
        }
    }

    Ok(())
}

/// Replace `dest` with a recursive copy of `src`. Returns the number of files copied.
pub fn mirror_dir(src: &Path, dest: &Path) -> Result<usize, IoError> {
    if !src.exists() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    validate_dir(src)?;
    ensure_disjoint(dest, src)?;

    if dest.exists() {
        log::info!("Removing existing {}", dest.display());
        fs::remove_dir_all(dest)?;
    }

    log::info!("Copying {} to {}", src.display(), dest.display());
    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, IoError> {
    fs::create_dir_all(dest)?;

    let mut copied = 0;
    for (name, path) in sorted_entries(src)? {
        let target = dest.join(&name);
        if path.is_dir() {
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            log::debug!("Copying {} -> {}", path.display(), target.display());
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Fails with [`IoError::Overlap`] if replacing `dest` would touch `kept`:
/// when they are the same path or either one contains the other.
///
/// Both paths are resolved first, so `.`, `..` and symlinks are compared by
/// where they point. `dest` need not exist yet.
pub fn ensure_disjoint(dest: &Path, kept: &Path) -> Result<(), IoError> {
    let dest_resolved = resolve(dest)?;
    let kept_resolved = resolve(kept)?;

    if kept_resolved.starts_with(&dest_resolved) || dest_resolved.starts_with(&kept_resolved) {
        return Err(IoError::Overlap {
            dest: dest.to_path_buf(),
            kept: kept.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonical form of `path`, resolving the nearest existing ancestor when
/// the path itself does not exist.
fn resolve(path: &Path) -> Result<PathBuf, IoError> {
    if path.exists() {
        return Ok(fs::canonicalize(path)?);
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) if !parent.as_os_str().is_empty() => {
            Ok(resolve(parent)?.join(name))
        }
        (_, Some(name)) => Ok(fs::canonicalize(".")?.join(name)),
        _ => Ok(std::path::absolute(path)?),
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<(std::ffi::OsString, PathBuf)>, IoError> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| (e.file_name(), e.path())))
        .collect::<Result<Vec<_>, _>>()?;
    entries.sort();
    Ok(entries)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidDir(path.to_path_buf()));
    }

    Ok(())
}
