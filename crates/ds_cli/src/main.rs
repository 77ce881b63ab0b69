use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ds_core::{FeedSource, PinStore, Result};
use ds_feed::aggregate::{matches_query, rank};
use ds_inference::{create_model, Config};
use ds_storage::{JsonFileStore, MemoryStore, PinBoard};
use ds_web::AppState;
use tracing::Level;

const DEFAULT_PIN_FILE: &str = "devstream-pinned-articles.json";

#[derive(Parser)]
#[command(name = "devstream", about = "Two-source feed reader backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        /// Pin store file; pins stay in memory when omitted
        #[arg(long)]
        pins: Option<PathBuf>,
    },
    /// Fetch one source and print its normalized articles
    Fetch {
        /// Feed source (dev or hn)
        source: String,
        /// Only show articles matching this search query
        #[arg(long)]
        query: Option<String>,
    },
    /// Manage pinned articles
    Pins {
        /// Pin store file
        #[arg(long, default_value = DEFAULT_PIN_FILE)]
        store: PathBuf,
        #[command(subcommand)]
        command: PinCommands,
    },
}

#[derive(Subcommand)]
enum PinCommands {
    /// List pins, most recently pinned first
    List,
    /// Pin a link, or unpin it if already pinned
    Toggle { link: String, title: String },
    /// Remove all pins
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { addr, pins } => serve(addr, pins).await,
        Commands::Fetch { source, query } => fetch(&source, query.as_deref()).await,
        Commands::Pins { store, command } => {
            let board = PinBoard::new(Arc::new(JsonFileStore::new(store)));
            pins(board, command).await
        }
    }
}

async fn serve(addr: SocketAddr, pins: Option<PathBuf>) -> Result<()> {
    let summarizer = create_model(&Config::from_env());
    tracing::info!("summarizer: {}", summarizer.name());

    let store: Arc<dyn PinStore> = match pins {
        Some(path) => {
            tracing::info!("pin store: {}", path.display());
            Arc::new(JsonFileStore::new(path))
        }
        None => Arc::new(MemoryStore::new()),
    };

    ds_web::serve(addr, AppState::new(summarizer, PinBoard::new(store))).await
}

async fn fetch(source: &str, query: Option<&str>) -> Result<()> {
    let source: FeedSource = source.parse()?;
    let client = reqwest::Client::new();

    let mut articles = ds_web::fetch::fetch_articles(&client, source).await;
    rank(&mut articles, &[]);
    if let Some(query) = query {
        articles.retain(|article| matches_query(article, query));
    }

    println!("{} articles from {}", articles.len(), source.label());
    for article in articles {
        println!("- {} ({})", article.title, article.link);
        if !article.tags.is_empty() {
            println!("  tags: {}", article.tags.join(", "));
        }
    }
    Ok(())
}

async fn pins(board: PinBoard, command: PinCommands) -> Result<()> {
    match command {
        PinCommands::List => {
            let mut pins = board.pins().await?;
            pins.sort_by_key(|pin| std::cmp::Reverse(pin.pinned_at));
            for pin in pins {
                println!("{} ({})", pin.title, pin.link);
            }
        }
        PinCommands::Toggle { link, title } => {
            let pinned = board.toggle(&link, &title).await?;
            println!("{} {}", if pinned { "pinned" } else { "unpinned" }, link);
        }
        PinCommands::Clear => {
            board.clear().await?;
            println!("pins cleared");
        }
    }
    Ok(())
}
