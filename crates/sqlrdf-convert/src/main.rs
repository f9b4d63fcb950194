//! CLI entry point for the sqlite2rdf translator.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::Parser;

use sqlrdf_core::MappingConfig;
use sqlrdf_serialize::{GraphWriter, RdfFormat};
use sqlrdf_source::SqliteSource;

use sqlrdf_convert::logging::{self, LogOptions};
use sqlrdf_convert::{assemble, persist, NodeMinter};

#[derive(Parser, Debug)]
#[command(name = "sqlite2rdf")]
#[command(about = "Translate a SQLite database into RDF graphs")]
struct Cli {
    /// Serialization format of the output files.
    #[arg(
        short = 'f',
        long,
        default_value = "turtle",
        value_parser = PossibleValuesParser::new(RdfFormat::NAMES)
    )]
    serialization_format: String,

    /// SQLite database to translate.
    #[arg(short, long)]
    input: PathBuf,

    /// Directory the graph files are written to.
    #[arg(short, long, default_value = "./")]
    output_path: PathBuf,

    /// Also print log events to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Directory for the run's log file.
    #[arg(long, default_value = "./")]
    logdir: PathBuf,

    /// Base namespace for generated IRIs (overrides the mapping's namespace;
    /// default http://rdf.example.org/).
    #[arg(long)]
    namespace: Option<String>,

    /// Config file prefix holding the [mapping] section.
    #[arg(short, long, default_value = "sqlite2rdf")]
    config: String,

    /// Write the log file as JSON lines.
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    println!("SQLite to RDF translator\n");

    let log_path = logging::init(&LogOptions {
        logdir: cli.logdir.clone(),
        verbose: cli.verbose,
        json: cli.json_logs,
    })?;

    tracing::info!(log_file = %log_path.display(), "Logging started");
    tracing::info!("Arguments:");
    tracing::info!("  serialization_format = {}", cli.serialization_format);
    tracing::info!("  input = {}", cli.input.display());
    tracing::info!("  output_path = {}", cli.output_path.display());
    tracing::info!("  verbose = {}", cli.verbose);
    tracing::info!("  logdir = {}", cli.logdir.display());
    tracing::info!("  namespace = {}", cli.namespace.as_deref().unwrap_or("(from mapping)"));
    tracing::info!("  config = {}", cli.config);

    let format: RdfFormat = cli.serialization_format.parse()?;

    if !cli.input.is_file() {
        anyhow::bail!("Input database not found: {}", cli.input.display());
    }

    let mut mapping = MappingConfig::load(&cli.config)?;
    if let Some(namespace) = cli.namespace {
        mapping = mapping.with_namespace(namespace);
    }

    let source = SqliteSource::open(&cli.input)?;
    let mut minter = NodeMinter::default();
    let conversion = assemble(&source, &mapping, &mut minter)?;

    let writer = GraphWriter::new(format, &mapping.namespace);
    let written = persist::write_graphs(&writer, &cli.output_path, &conversion.graphs)?;

    tracing::info!(
        files = written.len(),
        output_path = %cli.output_path.display(),
        "Translation complete"
    );
    Ok(())
}
