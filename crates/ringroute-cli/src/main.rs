use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ringroute_cli::plan::{run_plan, OutputFormat, PlanOptions};
use ringroute_cli::sink::ResultSink;
use ringroute_lib::{load_graph, SearchConfig, DEFAULT_PLATFORM_COUNT};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Find the fastest route from each ring platform that visits every platform"
)]
struct Cli {
    /// Edge listing with one `<from> -> <to>: <time>` entry per line.
    #[arg(long, default_value = "times.txt")]
    input: PathBuf,

    /// Result file; truncated at start, then appended per platform.
    #[arg(long, default_value = "output.txt")]
    output: PathBuf,

    /// Output format for the results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the parsed platform graph before searching.
    #[arg(long)]
    show_graph: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut sink = ResultSink::create(&cli.output)
        .with_context(|| format!("failed to create result file {}", cli.output.display()))?;

    info!(path = %cli.input.display(), "parsing input file");
    let loaded = load_graph(&cli.input, DEFAULT_PLATFORM_COUNT)
        .with_context(|| format!("failed to load platform graph from {}", cli.input.display()))?;

    let options = PlanOptions {
        format: cli.format,
        show_graph: cli.show_graph,
        config: SearchConfig::default(),
    };
    run_plan(&loaded.graph, &options, &mut sink)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
