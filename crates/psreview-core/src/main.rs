//! psreview CLI
//!
//! Command-line interface for the problem-statement review dashboard.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use psreview::prelude::*;

/// psreview - review hackathon problem statements from the terminal
#[derive(Parser)]
#[command(name = "psreview")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PSREVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Dataset CSV path (overrides the configuration file)
    #[arg(long, global = true, env = "PSREVIEW_DATA")]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive review dashboard (the default)
    Review,

    /// Export shortlisted problem statements to CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print review progress counts
    Stats,

    /// Print one problem statement
    Show {
        /// PS number to display
        ps_number: String,

        /// Print the raw description instead of the formatted one
        #[arg(long)]
        raw: bool,
    },

    /// Print the brainstorm prompt for one problem statement
    Prompt {
        /// PS number to build the prompt for
        ps_number: String,

        /// Also copy the prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let data = cli.data.unwrap_or_else(|| config.dataset.path.clone());

    let result = match cli.command.unwrap_or(Commands::Review) {
        Commands::Review => run_review(config, data).await,
        Commands::Export { output } => run_export(&config, &data, output),
        Commands::Stats => run_stats(&data),
        Commands::Show { ps_number, raw } => run_show(&data, &ps_number, raw),
        Commands::Prompt { ps_number, copy } => run_prompt(&data, &ps_number, copy),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_review(config: Config, data: PathBuf) -> anyhow::Result<()> {
    info!(path = %data.display(), "starting review dashboard");
    let store = RecordStore::load(data)?;
    let mut app = psreview::tui::App::new(store, &config);
    app.run().await?;
    Ok(())
}

fn run_export(config: &Config, data: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let store = RecordStore::load(data)?;
    let output = output.unwrap_or_else(|| config.export.output.clone());

    match psreview::export::shortlisted_csv(store.records())? {
        ExportOutcome::Empty => {
            println!("No shortlisted ideas found. Nothing exported.");
        }
        ExportOutcome::Csv(bytes) => {
            let count = ProgressCounts::tally(store.records()).shortlisted;
            std::fs::write(&output, bytes)?;
            println!("Exported {count} shortlisted idea(s) to {}", output.display());
        }
    }
    Ok(())
}

fn run_stats(data: &Path) -> anyhow::Result<()> {
    let store = RecordStore::load(data)?;
    let counts = ProgressCounts::tally(store.records());

    println!("Review progress for {}", data.display());
    println!("  Reviewed:    {}/{}", counts.reviewed, counts.total);
    println!("  Shortlisted: {}", counts.shortlisted);
    println!("  Rejected:    {}", counts.rejected);
    println!("  See Later:   {}", counts.see_later);
    Ok(())
}

fn run_show(data: &Path, ps_number: &str, raw: bool) -> anyhow::Result<()> {
    let store = RecordStore::load(data)?;
    let record = store
        .get(ps_number)
        .ok_or_else(|| Error::not_found("Record", ps_number))?;

    println!("{}  {}", record.ps_number, record.title);
    println!("Organization: {}", record.organization);
    println!("Department:   {}", record.department);
    println!("Category:     {}", record.category);
    println!("Theme:        {}", record.theme);
    println!("Status:       {}", record.status);
    if !record.notes.is_empty() {
        println!("Notes:        {}", record.notes);
    }
    println!();
    if raw {
        println!("{}", record.description);
    } else {
        println!("{}", psreview::format::format_description(&record.description));
    }
    Ok(())
}

fn run_prompt(data: &Path, ps_number: &str, copy: bool) -> anyhow::Result<()> {
    let store = RecordStore::load(data)?;
    let record = store
        .get(ps_number)
        .ok_or_else(|| Error::not_found("Record", ps_number))?;

    let json = BrainstormPrompt::build(record).to_json()?;
    println!("{json}");

    if copy {
        // Clipboard failures are a warning, not an error: the prompt is
        // already on stdout.
        match psreview::clipboard::copy(&json) {
            Ok(()) => eprintln!("Prompt copied to clipboard."),
            Err(e) => eprintln!("Warning: {e}"),
        }
    }
    Ok(())
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "psreview", &mut io::stdout());
}
