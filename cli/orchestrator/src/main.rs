//! attrgen CLI orchestrator
//!
//! This binary provides the main entry point for attrgen, offering
//! subcommands to generate the attribute module, dump the scraped catalog and
//! write a default configuration file.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::error::Error as _;
use std::path::PathBuf;

use attrgen_cli::{generation_timestamp, init_config, Result, SOURCE_DATE_EPOCH};
use attrgen_config::{Config, SourceConfig};
use clap::{Args, Parser, Subcommand};

/// Command-line interface configuration for attrgen.
#[derive(Parser, Debug)]
#[command(
    name = "attrgen",
    about = "Generate a typed Rust attribute model from the Graphviz attribute table",
    version
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,
    /// Configuration file (defaults to the user config dir when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available attrgen commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the attribute table and write the generated module (default)
    Generate(GenerateArgs),
    /// Fetch the attribute table and write the parsed catalog as JSON
    DumpCatalog(DumpCatalogArgs),
    /// Write a configuration file with default values
    InitConfig {
        /// Destination (defaults to the user config dir)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Where to read the attribute page from.
#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// URL of the attribute reference page
    #[arg(long, conflicts_with = "input")]
    url: Option<String>,
    /// Local HTML file to read instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output file for the generated module
    #[arg(long)]
    output: Option<PathBuf>,
    /// Ordered-set type used by the generated collections
    #[arg(long)]
    set_type: Option<String>,
    /// Fail on suspicious `Used By` data instead of warning
    #[arg(long)]
    strict: bool,
    /// Run rustfmt over the written module
    #[arg(long)]
    rustfmt: bool,
}

#[derive(Args, Debug)]
struct DumpCatalogArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Output JSON file
    #[arg(long)]
    output: PathBuf,
    /// Fail on suspicious `Used By` data instead of warning
    #[arg(long)]
    strict: bool,
}

impl SourceArgs {
    fn apply(self, source: &mut SourceConfig) {
        if let Some(url) = self.url {
            source.url = url;
            source.input = None;
        }
        if let Some(input) = self.input {
            source.input = Some(input);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("attrgen failed: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

/// Load the configuration and install logging for a pipeline command.
fn load_config(path: Option<PathBuf>, log_level: Option<String>) -> Result<Config> {
    let mut config = Config::load_or_default(path.as_deref())?;
    if let Some(level) = log_level {
        config.logging.level = level;
    }
    logging::init(&config.logging.level);
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.cmd.unwrap_or_else(|| Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => {
            let mut config = load_config(cli.config, cli.log_level)?;
            let generated_at =
                generation_timestamp(std::env::var(SOURCE_DATE_EPOCH).ok().as_deref())?;

            args.source.apply(&mut config.source);
            if let Some(output) = args.output {
                config.codegen.output_path = output;
            }
            if let Some(set_type) = args.set_type {
                config.codegen.set_type = set_type;
            }
            config.codegen.strict |= args.strict;
            config.codegen.rustfmt |= args.rustfmt;

            let fetcher = pipeline::fetcher_for(&config.source);
            let written = pipeline::run(&config, fetcher.as_ref(), generated_at).await?;
            println!("{}", written.display());
        }
        Commands::DumpCatalog(args) => {
            let mut config = load_config(cli.config, cli.log_level)?;
            args.source.apply(&mut config.source);
            let strict = config.codegen.strict || args.strict;

            let fetcher = pipeline::fetcher_for(&config.source);
            let count = pipeline::dump_catalog(fetcher.as_ref(), strict, &args.output).await?;
            println!("{} attributes written to {}", count, args.output.display());
        }
        Commands::InitConfig { path, force } => {
            let path = match path.or(cli.config) {
                Some(path) => path,
                None => Config::default_path()?,
            };
            let written = init_config(&path, force)?;
            println!("{}", written.display());
        }
    }

    Ok(())
}
