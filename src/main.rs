use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workspace_edges::config::{EdgeConfig, DEFAULT_INSTALL_DIR};
use workspace_edges::export::{self, ExportFormat};
use workspace_edges::graph::EdgeExtractor;
use workspace_edges::workspace;

#[derive(Parser)]
#[command(name = "workspace-edges")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Dependency edges between workspace packages, including deduped installs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract dependency edges between the given package directories
    Edges {
        /// Package directories, each containing a package.json
        #[arg(required = true)]
        packages: Vec<PathBuf>,

        /// Output format (json, csv)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Name of the per-package install directory
        #[arg(long, default_value = DEFAULT_INSTALL_DIR)]
        install_dir: String,

        /// Skip deduped edges whose installed version equals the published one
        #[arg(long)]
        skip_matching_installs: bool,
    },
    /// Show version information
    Version,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Edges {
            packages,
            format,
            install_dir,
            skip_matching_installs,
        }) => {
            let descriptors =
                workspace::load_packages(&packages).context("failed to load workspace packages")?;
            tracing::info!(count = descriptors.len(), "loaded packages");

            let config = EdgeConfig::default()
                .with_install_dir(install_dir)
                .with_skip_matching_installs(skip_matching_installs);
            let edges = EdgeExtractor::with_config(config)
                .extract(&descriptors)
                .context("failed to extract dependency edges")?;
            tracing::info!(count = edges.len(), "extracted edges");

            let stdout = io::stdout();
            let mut out = stdout.lock();
            export::export(format, &edges, &mut out).context("failed to write edges")?;
            out.flush()?;
        }
        Some(Commands::Version) => {
            println!("workspace-edges v{}", env!("CARGO_PKG_VERSION"));
        }
        None => {
            println!("workspace-edges - dependency edges between workspace packages");
            println!("Run 'workspace-edges edges <DIR>...' to extract edges");
            println!("Run 'workspace-edges --help' for more information");
        }
    }

    Ok(())
}
