mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "portals",
    about = "Build and deploy dispatcher for the owner/tenant/admin portal variants",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from portals.yaml or .git/)
    #[arg(long, global = true, env = "PORTALS_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the variant inferred from the deployment environment
    Detect {
        /// Override the deployment URL signal
        #[arg(long)]
        url: Option<String>,

        /// Override the project identifier signal
        #[arg(long)]
        project: Option<String>,

        /// Override the branch signal
        #[arg(long)]
        branch: Option<String>,
    },

    /// Build one variant (detected from the environment unless --variant is given)
    Build {
        /// Variant to build: owner, tenant, or admin
        #[arg(long)]
        variant: Option<String>,
    },

    /// Build every variant and relocate each output to dist-<variant>
    BuildAll,

    /// Deploy all variants using their per-variant deploy configs
    Deploy,

    /// Inspect and validate the portals.yaml configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Detect {
            url,
            project,
            branch,
        } => cmd::detect::run(url, project, branch, cli.json),
        Commands::Build { variant } => cmd::build::run(&root, variant.as_deref()),
        Commands::BuildAll => cmd::build::run_all(&root),
        Commands::Deploy => cmd::deploy::run(&root, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
