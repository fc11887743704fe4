// SPDX-License-Identifier: MPL-2.0
use hotel_lens::app::{self, paths, Flags};
use hotel_lens::{config, listing};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
HotelLens - hotel listing detail page

USAGE:
  hotel_lens [OPTIONS]

OPTIONS:
  --lang <id>            Interface language (e.g. tr, en-US)
  --listing <file>       Listing TOML file to display
  --assets-dir <dir>     Directory holding the gallery images
  --config-dir <dir>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  HOTEL_LENS_CONFIG_DIR  Same as --config-dir
  RUST_LOG               Log filter (default: hotel_lens=info)
";

struct Args {
    lang: Option<String>,
    listing: Option<PathBuf>,
    assets_dir: Option<PathBuf>,
    config_dir: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        listing: args.opt_value_from_str("--listing")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(parsed))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hotel_lens=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(args.config_dir);

    let mut warnings = Vec::new();
    let (config, config_warning) = config::load();
    warnings.extend(config_warning);

    let listing_path = args.listing.or_else(|| config.listing.path.clone());
    let hotel = match listing::load_or_embedded(listing_path.as_deref()) {
        Ok((hotel, warning)) => {
            warnings.extend(warning.map(String::from));
            hotel
        }
        Err(err) => {
            tracing::error!(%err, "no listing available");
            return ExitCode::FAILURE;
        }
    };

    let assets_dir = paths::resolve_assets_dir(args.assets_dir, config.listing.assets_dir.as_deref());
    tracing::debug!(assets_dir = %assets_dir.display(), "resolved assets directory");

    let flags = Flags {
        lang: args.lang,
        config,
        hotel,
        assets_dir,
        warnings,
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
