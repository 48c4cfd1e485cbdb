use anyhow::{Context, Result};
use clap::Parser;
use mnemo_tui::RestoreOptions;
use mnemo_types::FlowOutcome;
use mnemo_util::parse_word_counts;
use tracing::Level;

/// Terminal wizard for entering a wallet recovery phrase.
#[derive(Parser, Debug)]
#[command(name = "mnemo", version, about)]
struct Cli {
    /// Comma-separated phrase lengths offered on the selection screen
    #[arg(long, value_name = "COUNTS", default_value = "24,15,12")]
    word_counts: String,

    /// Print the outcome as JSON instead of the bare phrase
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let word_counts = parse_word_counts(&cli.word_counts).context("invalid --word-counts")?;

    let outcome = mnemo_tui::run(RestoreOptions { word_counts }).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        FlowOutcome::Confirmed { words } => println!("{}", words.join(" ")),
        FlowOutcome::Cancelled => {
            eprintln!("Cancelled");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .try_init();
}
