use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Where a site's inputs live and where its pages are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub content_dir: PathBuf,
    pub static_dir: PathBuf,
    pub template_path: PathBuf,
    pub output_dir: PathBuf,
    pub base_path: String,
    /// Glob patterns, relative to `content_dir`, of markdown files to skip.
    pub exclude: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template_path: PathBuf::from("template.html"),
            output_dir: PathBuf::from("docs"),
            base_path: "/".to_owned(),
            exclude: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: SiteConfig =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every path field
        for path in [
            &mut config.content_dir,
            &mut config.static_dir,
            &mut config.template_path,
            &mut config.output_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
        config.base_path = normalize_base_path(&config.base_path);

        Ok(Some(config))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Sets the base path, making sure it starts and ends with `/`.
    pub fn set_base_path(&mut self, base_path: &str) {
        self.base_path = normalize_base_path(base_path);
    }

    /// Checks that every exclude pattern compiles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exclude_patterns().map(|_| ())
    }

    /// Compiles the exclude patterns.
    pub fn exclude_patterns(&self) -> Result<ExcludePatterns, ConfigError> {
        let patterns = self
            .exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExcludePatterns { patterns })
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Compiled exclude globs, matched against paths relative to `content_dir`.
///
/// `*` and `?` stop at `/`; use `**` to match across directories.
#[derive(Debug, Clone, Default)]
pub struct ExcludePatterns {
    patterns: Vec<glob::Pattern>,
}

impl ExcludePatterns {
    const OPTIONS: glob::MatchOptions = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    /// Whether a content file, given with `/` separators, is excluded.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(relative_path, Self::OPTIONS))
    }
}

/// `blog` becomes `/blog/`, an empty string becomes `/`.
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}
