//! Ads Editor entry point.
//!
//! `ads-editor` (or `ads-editor serve`) starts the web server:
//! 1. Load configuration from environment
//! 2. Prepare the data directory, seeding the document if needed
//! 3. Build the router
//! 4. Start Axum server
//!
//! `ads-editor export` converts the Ads Document into a Google Ads Editor sheet.

use ads_editor::{
    auth::{AppState, SessionStore, TokenCodec},
    config::{Config, MAX_BACKUPS, SESSION_MAX_AGE_SECS},
    export, routes,
    storage::document::DocumentStore,
};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "ads-editor", version, about = "Password-protected Google Ads campaign editor")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Export the Ads Document as a Google Ads Editor CSV
    Export {
        /// Ads Document to read
        #[arg(short, long, default_value = "ads_data.json")]
        input: PathBuf,
        /// UTF-16 output file; a `_utf8.csv` copy is written next to it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn run_export(input: PathBuf, output: Option<PathBuf>) {
    let output = output.unwrap_or_else(|| {
        PathBuf::from(export::default_output_name(
            chrono::Local::now().naive_local(),
        ))
    });

    match export::export_file(&input, &output) {
        Ok(summary) => {
            println!(
                "Exported {} rows to {}",
                summary.rows,
                summary.utf16_path.display()
            );
            println!("UTF-8 copy: {}", summary.utf8_path.display());
        }
        Err(e) => {
            eprintln!("Error exporting {}: {}", input.display(), e);
            std::process::exit(1);
        }
    }
}

async fn serve() {
    let config = Config::from_env().expect("Failed to load config");

    let codec = TokenCodec::new(config.secret.as_bytes(), SESSION_MAX_AGE_SECS);
    let sessions = SessionStore::new(config.password.clone(), codec);
    let documents = DocumentStore::new(&config.data_dir, &config.data_file, MAX_BACKUPS);

    let seed = (config.data_dir != config.static_dir)
        .then(|| config.static_dir.join(&config.data_file));
    documents
        .init(seed.as_deref())
        .await
        .expect("Failed to prepare data directory");

    if config.auth_enabled() {
        tracing::info!("Password protection enabled");
    } else {
        tracing::warn!("APP_PASSWORD is not set; password protection disabled");
    }
    tracing::info!(
        "Serving {} at http://localhost:{}{}",
        config.static_dir.display(),
        config.bind_addr.port(),
        config.editor_path()
    );
    tracing::info!(path = %documents.path().display(), "JSON file");
    tracing::info!(path = %config.data_dir.display(), "Data directory");

    let bind_addr = config.bind_addr;
    let state = AppState {
        config: Arc::new(config),
        sessions: Arc::new(sessions),
        documents: Arc::new(documents),
    };
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", bind_addr);

    // with_connect_info is required for the ConnectInfo<SocketAddr> extractor on login
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Some(Command::Export { input, output }) => run_export(input, output),
        Some(Command::Serve) | None => serve().await,
    }
}
