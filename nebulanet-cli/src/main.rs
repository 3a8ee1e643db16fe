//! NebulaNet CLI — inspect the observation dataset and site content.
//!
//! Commands:
//! - `list` — one line per gallery item with its derived image path
//! - `show` — full metadata card for one observation
//! - `path` — derived (and resolved) image path for one observation
//! - `pages` — route table, or the text of one page
//! - `config` — effective configuration as TOML

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nebulanet_core::gallery::GalleryItem;
use nebulanet_core::paths;
use nebulanet_core::site::{self, Route, Section};
use nebulanet_core::{Dataset, Gallery, SiteConfig};

#[derive(Parser)]
#[command(
    name = "nebulanet",
    version,
    about = "NebulaNet CLI — JWST observation gallery"
)]
struct Cli {
    /// Path to a config TOML (defaults to the per-user config if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Observation dataset, overriding the config.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Directory that image paths resolve against, overriding the config.
    #[arg(long, global = true)]
    asset_root: Option<PathBuf>,

    /// Log at info level instead of warn.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List gallery items in display order.
    List,
    /// Show the full metadata of one observation.
    Show {
        /// Observation key (image file stem).
        key: String,
    },
    /// Print the derived image path of one observation.
    Path {
        /// Observation key (image file stem).
        key: String,
    },
    /// Print the route table, or one page's text.
    Pages {
        /// Route path or name, e.g. `/about` or `sources`.
        route: Option<String>,
    },
    /// Print the effective configuration.
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = SiteConfig::resolve(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }
    if let Some(root) = cli.asset_root {
        config.asset_root = Some(root);
    }

    match cli.command {
        Commands::List => run_list(&config),
        Commands::Show { key } => run_show(&config, &key),
        Commands::Path { key } => run_path(&config, &key),
        Commands::Pages { route } => run_pages(route.as_deref()),
        Commands::Config => run_config(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "nebulanet_core=info,nebulanet=info"
    } else {
        "nebulanet_core=warn,nebulanet=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_dataset(config: &SiteConfig) -> Result<Dataset> {
    let dataset = Dataset::load(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;
    tracing::info!(records = dataset.len(), path = %config.dataset.display(), "dataset loaded");
    Ok(dataset)
}

fn load_gallery(config: &SiteConfig) -> Result<Gallery> {
    let dataset = load_dataset(config)?;
    Ok(Gallery::from_dataset(&dataset, &config.images))
}

/// Gallery item for `key`. Gallery order is dataset order, so the dataset
/// position is the gallery index.
fn find<'a>(
    dataset: &Dataset,
    gallery: &'a Gallery,
    key: &str,
) -> Result<(usize, &'a GalleryItem)> {
    let Some(index) = dataset.position(key) else {
        bail!("no observation with key '{key}'");
    };
    match gallery.items().get(index) {
        Some(item) => Ok((index, item)),
        None => bail!("no observation with key '{key}'"),
    }
}

fn run_list(config: &SiteConfig) -> Result<()> {
    let gallery = load_gallery(config)?;
    if gallery.is_empty() {
        println!("Dataset is empty: {}", config.dataset.display());
        return Ok(());
    }

    println!(
        "{:>3}  {:<32} {:<14} {:<24} IMAGE",
        "#", "KEY", "TARGET", "CLASSIFICATION"
    );
    for (i, item) in gallery.items().iter().enumerate() {
        println!(
            "{:>3}  {:<32} {:<14} {:<24} {}",
            i + 1,
            truncate(&item.key, 32),
            truncate(&item.record.target_name, 14),
            truncate(&item.record.target_classification, 24),
            item.image_path
        );
    }
    println!("\n{} observations", gallery.len());
    Ok(())
}

fn run_show(config: &SiteConfig, key: &str) -> Result<()> {
    let dataset = load_dataset(config)?;
    let gallery = Gallery::from_dataset(&dataset, &config.images);
    let (index, item) = find(&dataset, &gallery, key)?;
    let r = &item.record;

    println!("=== {} ({}/{}) ===", item.alt_text(), index + 1, gallery.len());
    if !r.obs_title.is_empty() {
        println!("{}", r.obs_title);
    }
    println!();
    let rows = [
        ("Key", item.key.clone()),
        ("Classification", r.target_classification.clone()),
        ("Instrument", r.instrument_name.clone()),
        ("Filters", r.filter_list().join(", ")),
        ("Keywords", r.keyword_list().join(", ")),
        ("Start", r.start_time.clone()),
        ("End", r.end_time.clone()),
        ("Exposure", r.exposure_time.clone()),
        ("Parent obsid", r.parent_obsid.clone()),
        ("Calib level", r.calib_level.to_string()),
        ("File", r.file_name.clone()),
        ("Size", format!("{} ({} bytes)", r.size_display(), r.size)),
        ("FITS", r.fits_url.clone()),
        ("Image", item.image_path.clone()),
    ];
    for (label, value) in rows {
        println!("  {label:>14}: {value}");
    }
    if !r.description.is_empty() {
        println!("\n{}", r.description);
    }
    Ok(())
}

fn run_path(config: &SiteConfig, key: &str) -> Result<()> {
    let dataset = load_dataset(config)?;
    let gallery = Gallery::from_dataset(&dataset, &config.images);
    let (_, item) = find(&dataset, &gallery, key)?;
    println!("{}", item.image_path);

    if let Some(root) = &config.asset_root {
        let resolved = paths::resolve(root, &item.image_path);
        let state = if resolved.is_file() { "found" } else { "missing" };
        println!("{} ({state})", resolved.display());
    }
    Ok(())
}

fn run_pages(route: Option<&str>) -> Result<()> {
    let Some(name) = route else {
        for r in Route::ALL {
            println!("{:<10} {}", r.path(), r.label());
        }
        return Ok(());
    };

    let Some(route) = Route::from_path(name) else {
        bail!("unknown page '{name}' (try: /, /about, /sources, /telescope)");
    };

    match route {
        Route::Home => {
            println!("{}\n{}", site::LANDING_TITLE, site::LANDING_TAGLINE);
            println!("\nRun `nebulanet list` to see the gallery.");
        }
        Route::About => print_sections(site::ABOUT),
        Route::Sources => {
            for group in site::SOURCES {
                println!("{}", group.module);
                for topic in group.topics {
                    println!("  {}", topic.topic);
                    for link in topic.links {
                        println!("    {}: {}", link.label, link.url);
                    }
                }
                println!();
            }
        }
        Route::Telescope => {
            print_sections(site::TELESCOPE);
            println!("Model asset: {}", site::TELESCOPE_MODEL);
        }
    }
    println!();
    for credit in site::FOOTER_CREDITS {
        println!("{credit}");
    }
    println!("{}\n{}", site::FOOTER_MOTTO, site::FOOTER_RIGHTS);
    Ok(())
}

fn print_sections(sections: &[Section]) {
    for section in sections {
        println!("{}", section.heading);
        for paragraph in section.paragraphs {
            println!("{paragraph}\n");
        }
    }
}

fn run_config(config: &SiteConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
