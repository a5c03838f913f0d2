use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordbook::{
    load_records, load_words, render_wordbook, run_batch, save_records, save_words, sort_by_word,
    BatchConfig, OpenAI,
};

#[derive(Parser)]
#[command(name = "wordbook", about = "Vocabulary wordbook toolchain", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate study entries for all pending words
    Generate {
        /// Word list file, one word or phrase per line
        #[arg(long, default_value = "files/words.txt")]
        words: PathBuf,

        /// Record store JSON file
        #[arg(long, default_value = "files/sentences.json")]
        store: PathBuf,

        /// Pause between model calls, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Chat model to use
        #[arg(long, default_value = "gpt-4o-mini")]
        model: String,
    },

    /// Sort the record store by word, case-insensitively
    Sort {
        /// Record store JSON file
        #[arg(long, default_value = "files/sentences.json")]
        store: PathBuf,
    },

    /// Render the record store as a plain-text wordbook
    Render {
        /// Record store JSON file
        #[arg(long, default_value = "files/sentences.json")]
        store: PathBuf,

        /// Output file
        #[arg(long, default_value = "files/wordbook.txt")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            words,
            store,
            delay_ms,
            model,
        } => generate(&words, &store, delay_ms, model).await,
        Command::Sort { store } => sort(&store),
        Command::Render { store, out } => render(&store, &out),
    }
}

async fn generate(
    words_path: &PathBuf,
    store_path: &PathBuf,
    delay_ms: u64,
    model: String,
) -> Result<()> {
    let ai = OpenAI::from_env()
        .context("OpenAI credentials are required for generate")?
        .with_model(model);

    let mut queue = load_words(words_path)?;
    let mut records = load_records(store_path);
    let config = BatchConfig::new().with_delay(Duration::from_millis(delay_ms));

    let report = run_batch(&ai, &mut queue, &mut records, &config).await;
    println!(
        "{} accepted, {} rejected, {} words still pending",
        report.accepted,
        report.rejected,
        queue.len()
    );

    // A failed save is reported but never aborts: the other file may
    // still be writable.
    match save_records(store_path, &records) {
        Ok(()) => println!("saved {} records to {}", records.len(), store_path.display()),
        Err(e) => eprintln!("could not save record store {}: {}", store_path.display(), e),
    }
    match save_words(words_path, &queue) {
        Ok(()) => println!("updated word list {}", words_path.display()),
        Err(e) => eprintln!("could not update word list {}: {}", words_path.display(), e),
    }

    Ok(())
}

fn sort(store_path: &PathBuf) -> Result<()> {
    let mut records = load_records(store_path);
    sort_by_word(&mut records);
    save_records(store_path, &records)?;
    println!("sorted {} records in {}", records.len(), store_path.display());
    Ok(())
}

fn render(store_path: &PathBuf, out: &PathBuf) -> Result<()> {
    let records = load_records(store_path);
    std::fs::write(out, render_wordbook(&records))
        .with_context(|| format!("writing {}", out.display()))?;
    println!("wrote wordbook for {} records to {}", records.len(), out.display());
    Ok(())
}
