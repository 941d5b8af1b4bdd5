use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchpad::{api, Database};

const DEFAULT_PORT: u16 = 7700;

#[derive(Parser)]
#[command(name = "launchpad")]
#[command(about = "Merchant onboarding tracker with configurable checklists")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Launchpad server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Check server status
    Status {
        /// Port the server was started on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "launchpad=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { port }) => serve(port).await?,
        Some(Commands::Status { port }) => status(port).await,
        // Default: start server
        None => serve(DEFAULT_PORT).await?,
    }

    Ok(())
}

async fn serve(port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting Launchpad server on port {}", port);

    let db = Database::open_default()?;
    db.migrate()?;

    let app = api::create_router(db);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Launchpad server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn status(port: u16) {
    let url = format!("http://127.0.0.1:{port}/api/health");
    match reqwest::get(&url).await {
        Ok(resp) if resp.status().is_success() => {
            println!("Launchpad server is running on port {port}");
        }
        Ok(resp) => {
            println!(
                "Launchpad server responded with {} on port {port}",
                resp.status()
            );
        }
        Err(_) => {
            println!("Launchpad server is not running on port {port}");
        }
    }
}
