use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use qdlcli::{
    cli, config, error,
    format::{QualityTier, parse_quality_tier},
    qobuz::{SearchKind, parse_search_kind},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the releases of an artist or label, one per album
    Discography(DiscographyOptions),

    /// Show the folder and file names an album would be saved under
    Plan(PlanOptions),

    /// Download albums, tracks, playlists, artists or labels
    #[clap(visible_alias = "dl")]
    Download(DownloadOptions),

    /// Search the catalog
    Search(SearchOptions),

    /// Download the first results of a search
    Lucky(LuckyOptions),

    /// Show which item a Qobuz url points at
    Resolve(ResolveOptions),

    /// List the available quality tiers
    Qualities,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct DiscographyOptions {
    /// Artist or label url, or a bare id
    target: String,

    /// Treat a bare id as a label id
    #[clap(long)]
    label: bool,

    /// Prefer the lowest sampling rate among the best bit depth
    #[clap(long)]
    save_space: bool,

    /// Drop deluxe, live, collector, demo and anniversary editions
    #[clap(long)]
    skip_extras: bool,

    /// Keep every release (no smart filtering)
    #[clap(long)]
    all: bool,

    /// Read the raw listing from a JSON file instead of the API
    #[clap(long)]
    from_file: Option<PathBuf>,

    /// Ignore the cached listing
    #[clap(long)]
    refresh: bool,

    /// Print only the ids of the kept releases
    #[clap(long)]
    ids: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanOptions {
    /// Album url or id
    target: String,

    /// Quality tier: 5, 6, 7, 27 or mp3, lossless, hires, hires-max
    #[clap(long, short, value_parser = parse_quality_tier)]
    quality: Option<QualityTier>,

    /// Skip the album when the requested quality is not available
    #[clap(long)]
    no_fallback: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Qobuz urls, or bare album ids
    #[clap(required = true)]
    targets: Vec<String>,

    /// Quality tier: 5, 6, 7, 27 or mp3, lossless, hires, hires-max
    #[clap(long, short, value_parser = parse_quality_tier)]
    quality: Option<QualityTier>,

    /// Skip releases not available in the requested quality
    #[clap(long)]
    no_fallback: bool,

    /// Directory to download into
    #[clap(long, short)]
    directory: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    #[clap(required = true)]
    query: Vec<String>,

    /// What to search: album, artist, track or playlist
    #[clap(long = "type", short, default_value = "album", value_parser = parse_search_kind)]
    kind: SearchKind,

    /// Maximum number of results
    #[clap(long, short, default_value_t = 20)]
    limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct LuckyOptions {
    /// Search query
    #[clap(required = true)]
    query: Vec<String>,

    /// What to search: album, artist, track or playlist
    #[clap(long = "type", short, default_value = "album", value_parser = parse_search_kind)]
    kind: SearchKind,

    /// How many results to download
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    number: u32,

    /// Quality tier: 5, 6, 7, 27 or mp3, lossless, hires, hires-max
    #[clap(long, short, value_parser = parse_quality_tier)]
    quality: Option<QualityTier>,

    /// Skip releases not available in the requested quality
    #[clap(long)]
    no_fallback: bool,

    /// Directory to download into
    #[clap(long, short)]
    directory: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveOptions {
    /// One or more Qobuz urls
    #[clap(required = true)]
    urls: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("Invalid configuration. Err: {}", e),
    };

    let cli = Cli::parse();

    match cli.command {
        Command::Discography(opt) => {
            cli::discography(
                cli::DiscographyRequest {
                    target: opt.target,
                    label: opt.label,
                    save_space: opt.save_space,
                    skip_extras: opt.skip_extras,
                    all: opt.all,
                    from_file: opt.from_file,
                    refresh: opt.refresh,
                    ids: opt.ids,
                },
                &settings,
            )
            .await
        }
        Command::Plan(opt) => {
            cli::plan(
                cli::PlanRequest {
                    target: opt.target,
                    quality: opt.quality,
                    no_fallback: opt.no_fallback,
                },
                &settings,
            )
            .await
        }
        Command::Download(opt) => {
            cli::download(
                cli::DownloadRequest {
                    targets: opt.targets,
                    quality: opt.quality,
                    no_fallback: opt.no_fallback,
                    directory: opt.directory,
                },
                &settings,
            )
            .await
        }
        Command::Search(opt) => {
            cli::search(opt.query.join(" "), opt.kind, opt.limit, &settings).await
        }
        Command::Lucky(opt) => {
            cli::lucky(
                cli::LuckyRequest {
                    query: opt.query.join(" "),
                    kind: opt.kind,
                    number: opt.number,
                    quality: opt.quality,
                    no_fallback: opt.no_fallback,
                    directory: opt.directory,
                },
                &settings,
            )
            .await
        }
        Command::Resolve(opt) => cli::resolve(opt.urls),
        Command::Qualities => cli::qualities(&settings),
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
