use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdf_reader_core::{DEFAULT_PROGRESS_FILE, ProgressStore, document_key};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfr", about = "Inspect and edit PDF reading progress", version)]
struct Cli {
    /// Progress record to operate on
    #[arg(long, default_value = DEFAULT_PROGRESS_FILE)]
    record: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List saved progress for every document
    List,

    /// Print the saved page index for a document (0 if none)
    Get {
        /// Document path
        document: PathBuf,
    },

    /// Save a page index for a document
    Set {
        /// Document path
        document: PathBuf,

        /// Zero-based page index
        page: usize,
    },

    /// Remove saved progress for a document
    Forget {
        /// Document path
        document: PathBuf,
    },

    /// Replace the record with an empty one, discarding all progress.
    /// Repairs a record the viewer can no longer read.
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = ProgressStore::new(&cli.record);

    for line in run(cli.command, &store)? {
        println!("{line}");
    }
    Ok(())
}

fn run(command: Commands, store: &ProgressStore) -> Result<Vec<String>> {
    let lines = match command {
        Commands::List => store
            .load_all()?
            .into_iter()
            .map(|(document, page)| format!("{page}\t{document}"))
            .collect(),
        Commands::Get { document } => vec![store.get(&document)?.to_string()],
        Commands::Set { document, page } => {
            let key = document_key(&document)?;
            store
                .save(&document, page)
                .with_context(|| format!("Failed to save progress for {}", key))?;
            vec![format!("Saved page {} for {}", page, key)]
        }
        Commands::Forget { document } => {
            let key = document_key(&document)?;
            if store.forget(&document)? {
                vec![format!("Forgot {}", key)]
            } else {
                vec![format!("No progress saved for {}", key)]
            }
        }
        Commands::Reset => {
            store.reset()?;
            vec![format!("Cleared {}", store.record_path().display())]
        }
    };
    Ok(lines)
}
