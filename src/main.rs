use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use trivia::{db::Db, models::Seed, router, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite database URL.
    #[arg(long, env, default_value = "sqlite:trivia.db")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// JSON file of categories and questions loaded into an empty database.
    #[arg(long, env)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,trivia=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(&args.database_url).await?;

    if let Some(path) = &args.seed {
        let raw = tokio::fs::read_to_string(path)
            .await
            .wrap_err_with(|| format!("could not read seed file {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&raw).wrap_err("could not decode seed file")?;
        db.load_seed(seed).await?;
    }

    let app = router(AppState { db });

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
