use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "popular-movies-server")]
#[command(about = "Popular movies API backed by TheMovieDB", long_about = None)]
struct Args {
    /// YAML config file; defaults and environment variables apply without one.
    #[arg(short, long)]
    config: Option<String>,
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "popular_movies=info,tower_http=info".into());
    let registry = tracing_subscriber::registry().with(filter);
    if args.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Err(e) = popular_movies::run(args.config.as_deref()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
