//! # trigfind CLI
//!
//! Prints the URLs of archived event-trigger files for a channel, ETG,
//! and GPS interval, one per line.
//!
//! ```bash
//! trigfind L1:GDS-CALIB_STRAIN Omicron 1135641617 1135728017
//! ```
//!
//! Output can be reformatted as bare paths (`--names-only`) or LAL cache
//! records (`--lal-cache`), and `--gaps` reports the parts of the query
//! interval not covered by any found file, exiting non-zero when gaps
//! exist.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trigfind::config::{load_config, Config};
use trigfind::segments::{file_segment, Segment, SegmentList};
use trigfind::{find_trigger_files, Etg, FinderOptions};

/// Print gravitational-wave event trigger file paths.
#[derive(Parser)]
#[command(
    name = "trigfind",
    about = "Print GW event trigger file paths",
    version
)]
struct Cli {
    /// Name of the raw data channel.
    channel: String,

    /// Name of the trigger generator.
    etg: String,

    /// GPS start time of the search.
    gpsstart: u64,

    /// GPS end time of the search.
    gpsend: u64,

    /// Check for gaps in the recovered files; exit 0 when the interval is
    /// fully covered, 1 otherwise.
    #[arg(short, long)]
    gaps: bool,

    /// Type of files to find; only used by some ETGs.
    #[arg(short = 't', long = "file-type")]
    file_type: Option<String>,

    /// Format output as LAL cache records.
    #[arg(short, long, conflicts_with = "names_only")]
    lal_cache: bool,

    /// Print file paths rather than full URLs.
    #[arg(short, long)]
    names_only: bool,

    /// Name of the daily CBC run [default: bns_gds].
    #[arg(
        short,
        long,
        value_parser = ["bns", "bns_gds", "bbh", "bbh_gds", "lowmass"],
    )]
    run_type: Option<String>,

    /// File tag for daily CBC catalog files [default: 30MILLISEC_CLUSTERED].
    #[arg(short, long)]
    file_tag: Option<String>,

    /// Path to a TOML file overriding per-family base paths.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let options = build_options(&cli, &config);

    let cache = find_trigger_files(
        &cli.channel,
        &cli.etg,
        cli.gpsstart,
        cli.gpsend,
        Some(options),
    )
    .with_context(|| format!("finding {} files for {}", cli.etg, cli.channel))?;

    for url in &cache {
        println!("{}", format_entry(url, &cli)?);
    }

    if cli.gaps {
        let span = Segment::new(cli.gpsstart as f64, cli.gpsend as f64);
        let known: SegmentList = cache
            .iter()
            .map(|url| file_segment(std::path::Path::new(url_path(url))))
            .collect::<trigfind::Result<Vec<Segment>>>()?
            .into_iter()
            .collect();
        let missing = known.gaps_within(span);
        if !missing.is_empty() {
            eprintln!("Missing segments:");
            for seg in &missing {
                eprintln!("{:.6} {:.6}", seg.start, seg.end);
            }
            return Ok(ExitCode::from(1));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Finder options for the classified family, with CLI flags layered over
/// the config file.
fn build_options(cli: &Cli, config: &Config) -> FinderOptions {
    let mut options = config.options_for(&Etg::classify(&cli.etg));
    if let Some(ext) = &cli.file_type {
        match &mut options {
            FinderOptions::Detchar(o) => o.ext = ext.clone(),
            FinderOptions::KleineWelle(o) => o.ext = ext.clone(),
            FinderOptions::DmtOmega(o) => o.ext = ext.clone(),
            FinderOptions::OmegaOnline(o) => o.ext = ext.clone(),
            // Day-bucketed families have fixed extensions.
            FinderOptions::PycbcLive(_) | FinderOptions::DailyCbc(_) => {}
        }
    }
    if let FinderOptions::DailyCbc(o) = &mut options {
        if let Some(run) = &cli.run_type {
            o.run = run.clone();
        }
        if let Some(filetag) = &cli.file_tag {
            o.filetag = filetag.clone();
        }
    }
    options
}

/// The path component of a `file://` URL.
fn url_path(url: &str) -> &str {
    url.strip_prefix("file://").unwrap_or(url)
}

fn format_entry(url: &str, cli: &Cli) -> Result<String> {
    if cli.lal_cache {
        let path = url_path(url);
        let basename = path.rsplit('/').next().unwrap_or(path);
        let fields: Vec<&str> = basename.split('-').collect();
        let &[obs, tag, start, rest] = fields.as_slice() else {
            anyhow::bail!("cannot format {url} as a LAL cache record");
        };
        let duration = rest.split('.').next().unwrap_or(rest);
        Ok(format!("{obs} {tag} {start} {duration} {url}"))
    } else if cli.names_only {
        Ok(url_path(url).to_string())
    } else {
        Ok(url.to_string())
    }
}
