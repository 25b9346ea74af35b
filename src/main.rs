//! Quizstore CLI - Serve and inspect a multiple-choice question store

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use quizstore::config::{self, QuizstoreConfig};
use quizstore::output::is_quiet;
use quizstore::storage::Database;
use quizstore::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "quizstore")]
#[command(version)]
#[command(about = "Minimal web API for persisting multiple-choice quiz questions")]
#[command(long_about = r#"
Quizstore stores quiz questions and their answer choices in SQLite and
exposes them over HTTP:
  POST /questions/        create a question with its choices
  GET  /questions/{id}    fetch a question and its choices
  GET  /stats             row counts

Example usage:
  quizstore init
  quizstore serve --port 8000
  quizstore show --id 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file and create the database
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Show row counts
    Stats {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Print one question and its choices
    Show {
        /// Question id
        #[arg(short, long)]
        id: i64,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let file_config = config::load_config(Some(&config_path))?.unwrap_or_default();

    match cli.command {
        Commands::Init { database, force } => run_init(&config_path, &file_config, database, force),
        Commands::Serve { host, port, database } => {
            let settings = file_config.resolve(database, host, port);
            let db = Database::open(&settings.database)?;
            if !is_quiet() {
                ui::header("Quizstore");
                ui::info("Database", &db.path().display().to_string());
            }
            quizstore::server::start_server(&settings.host, settings.port, db).await
        }
        Commands::Stats { database } => run_stats(&file_config.resolve_database(database)),
        Commands::Show { id, database } => run_show(&file_config.resolve_database(database), id),
    }
}

fn run_init(
    config_path: &Path,
    existing: &QuizstoreConfig,
    database: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    let database = existing.resolve_database(database);
    let new_config = QuizstoreConfig {
        database: Some(database.display().to_string()),
        ..existing.clone()
    };

    config::write_config(config_path, &new_config, force)?;
    Database::open(&database)?;

    let project_root = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    config::ensure_gitignore(project_root)?;

    tracing::info!("Initialized {} with database {}", config_path.display(), database.display());
    ui::success(&format!("Wrote {}", config_path.display()));
    ui::info("Database", &database.display().to_string());
    Ok(())
}

fn run_stats(database: &Path) -> anyhow::Result<()> {
    let db = Database::open_existing(database)?;
    let stats = db.session()?.stats()?;

    println!("{} Quizstore Statistics ({})", ui::Icons::STATS, db.path().display());
    let questions = stats.questions.to_string();
    let choices = stats.choices.to_string();
    println!(
        "{}",
        ui::stats_table(&[("Questions", questions.as_str()), ("Choices", choices.as_str())])
    );
    Ok(())
}

fn run_show(database: &Path, id: i64) -> anyhow::Result<()> {
    let db = Database::open_existing(database)?;
    let question = db.session()?.require_question(id)?;

    ui::section(&format!(" {} Question {} ", ui::Icons::QUESTION, question.question.id));
    println!("{}", question.question.question_text);
    if question.choices.is_empty() {
        println!("∅ No choices.");
    } else {
        println!("{}", ui::choices_table(&question.choices));
    }
    Ok(())
}
