//! main.rs - route-rewrite binary entry point
//!
//! Tightens the featured-items filter in a route definition file, in place.
//!
//! Usage:
//!   route-rewrite server/routes.js
//!   route-rewrite --dry-run server/routes.js
//!
//! Silent on success. Logging: pass `--verbose` or set `RUST_LOG=route_rewrite=debug`
//! to see per-rule match counts on stderr.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use route_rewrite::{DEFAULT_MAX_FILE_SIZE, RewriteConfig, RouteRewriter};

/// Strip widened, coerced, and fallback featured-item checks from a route file
#[derive(Parser, Debug)]
#[command(name = "route-rewrite")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route definition file to rewrite in place
    #[arg(value_name = "routes.js")]
    path: PathBuf,

    /// Print the diff instead of writing the file
    #[arg(long)]
    dry_run: bool,

    /// Refuse files larger than this many bytes (no limit by default)
    #[arg(long, value_name = "BYTES")]
    max_bytes: Option<u64>,

    /// Enable debug logging (per-rule match counts, write confirmation)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    // RUST_LOG overrides; --verbose => debug; else warn, so success is silent
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "route_rewrite=debug,route_io=debug"
        } else {
            "route_rewrite=warn,route_io=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = RewriteConfig {
        max_file_size: args.max_bytes.unwrap_or(DEFAULT_MAX_FILE_SIZE),
        dry_run: args.dry_run,
    };

    let result = RouteRewriter::rewrite_file(&args.path, &config)
        .with_context(|| format!("Failed to rewrite {}", args.path.display()))?;

    if args.dry_run {
        let display = args.path.to_string_lossy();
        print!("{}", RouteRewriter::format_result(&result, Some(&display)));
    }

    Ok(())
}
