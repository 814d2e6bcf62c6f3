//! mdcmp - Side-by-side review of translated markdown against its source

mod render;

use anyhow::{Context, Result};
use clap::Parser;
use mdcmp_core::compare::{compare, CompareOptions};
use mdcmp_core::{Config, EntrySlot, SplitMode, SplitStrategy};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::render::Layout;

/// Compare a localized markdown page with its source, block by block
#[derive(Parser, Debug)]
#[command(name = "mdcmp")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Localized markdown file (a missing file means "not localized yet")
    #[arg(value_name = "LOCALIZED")]
    localized: PathBuf,

    /// Source markdown file
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Locale shown in the header
    #[arg(short, long)]
    locale: Option<String>,

    /// Block boundaries: "double" (blank lines) or "single" (every line)
    #[arg(short, long, value_name = "STRATEGY")]
    split: Option<SplitStrategy>,

    /// Disable the markdown-aware refinement pass
    #[arg(long)]
    no_markdown: bool,

    /// Source path inside the content repository, used for "Link to File"
    #[arg(short, long)]
    path: Option<String>,

    /// Current commit of the source page
    #[arg(long)]
    source_commit: Option<String>,

    /// Total output width in columns
    #[arg(short, long)]
    width: Option<u16>,

    /// Compare the front matter too
    #[arg(long)]
    keep_front_matter: bool,

    /// Hide the metadata panels
    #[arg(long)]
    no_metadata: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Args {
    fn compare_options(&self, config: &Config) -> CompareOptions {
        let strategy = self.split.unwrap_or(config.compare.split);
        let markdown = config.compare.markdown && !self.no_markdown;

        CompareOptions {
            locale: self
                .locale
                .clone()
                .unwrap_or_else(|| config.compare.locale.clone()),
            mode: SplitMode::new(strategy, markdown),
            path: self.path.clone(),
            source_repo: config.source.clone(),
        }
    }

    fn layout(&self, config: &Config) -> Layout {
        Layout {
            width: usize::from(self.width.unwrap_or(config.display.width)),
            metadata: config.display.metadata && !self.no_metadata,
        }
    }

    fn skip_front_matter(&self, config: &Config) -> bool {
        config.compare.skip_front_matter && !self.keep_front_matter
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    let lines = run(&args, &config)?;

    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{}", line).context("Failed to write output")?;
    }

    Ok(())
}

/// Load both entries, compare them and render the result
fn run(args: &Args, config: &Config) -> Result<Vec<String>> {
    let skip = args.skip_front_matter(config);
    let localized = EntrySlot::load(&args.localized, EntrySlot::NotLocalized, skip)
        .with_context(|| {
            format!("Failed to load localized entry: {}", args.localized.display())
        })?;
    let mut source = EntrySlot::load(&args.source, EntrySlot::Unavailable, skip)
        .with_context(|| format!("Failed to load source entry: {}", args.source.display()))?;

    if let (Some(commit), EntrySlot::Present(entry)) = (&args.source_commit, &mut source) {
        entry.source_commit = Some(commit.clone());
    }

    let options = args.compare_options(config);
    log::debug!("comparing with {:?}", options.mode);

    let comparison = compare(&localized, &source, &options);
    Ok(render::render(&comparison, &args.layout(config)))
}
