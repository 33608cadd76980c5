use anyhow::{Context, Result};
use clap::Parser;
use mdsite_config::{DEFAULT_CONFIG_FILE, SiteConfig};
use mdsite_engine::{generate_pages_recursive, io};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdsite")]
#[command(about = "Build a static HTML site from a folder of Markdown files")]
struct Cli {
    /// URL prefix the site is served under, e.g. `/my-repo/`
    base_path: Option<String>,

    /// Config file; defaults are used if it does not exist
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Markdown content directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static assets copied verbatim into the output
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory; replaced on every build
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply_to(self, config: &mut SiteConfig) {
        if let Some(base_path) = self.base_path {
            config.set_base_path(&base_path);
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let mut config = match SiteConfig::load_from_path(&cli.config)? {
        Some(config) => {
            log::info!("Loaded config from {}", cli.config.display());
            config
        }
        None => {
            log::info!(
                "No config file at {}, using defaults",
                cli.config.display()
            );
            SiteConfig::default()
        }
    };
    cli.apply_to(&mut config);
    let excludes = config.exclude_patterns()?;

    // The output dir is wiped before the static copy
    io::ensure_disjoint(&config.output_dir, &config.content_dir)?;
    io::ensure_disjoint(&config.output_dir, &config.template_path)?;

    let copied = io::mirror_dir(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to copy static files from {}",
            config.static_dir.display()
        )
    })?;
    log::info!("Copied {copied} static files");

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
        |path| excludes.matches(path.as_str()),
    )
    .with_context(|| {
        format!(
            "Failed to generate pages from {}",
            config.content_dir.display()
        )
    })?;

    log::info!(
        "Generated {} pages into {} with base path {}",
        pages.len(),
        config.output_dir.display(),
        config.base_path
    );
    Ok(())
}
