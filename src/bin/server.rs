use std::{net::SocketAddr, path::PathBuf, process::ExitCode};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sales_dashboard::{AppState, PaginationConfig, build_router, graceful_shutdown, load_transactions};

/// The REST API and dashboard server for sales_dashboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the JSON file containing the transactions.
    #[arg(long)]
    data_path: PathBuf,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 8082)]
    port: u16,

    /// The number of transactions to show per page on the dashboard.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..))]
    page_size: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let args = Args::parse();

    let transactions = match load_transactions(&args.data_path) {
        Ok(transactions) => transactions,
        Err(error) => {
            tracing::error!("Could not load transactions: {error}");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(
        transactions,
        PaginationConfig {
            page_size: usize::from(args.page_size),
        },
    );

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("HTTP server listening on {}", addr);

    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server error: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but the logging
        // middleware already logs every response.
        .on_failure(());

    router.layer(tracing_layer)
}
