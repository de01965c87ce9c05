use std::{sync::Arc, net::{SocketAddr, IpAddr, Ipv4Addr}, str::FromStr};
use clap::Parser;

use github_stats_viewer::{AppState, create_router, register_templates};
use github_stats_viewer::services::github_service::{GitHubService, DEFAULT_API_URL, DEFAULT_USER_AGENT};
use github_stats_viewer::services::stats_service::FetchStrategy;


// Command line interface
#[derive(Parser, Debug)]
#[clap(name="github-stats-viewer", about="GitHub profile statistics dashboard")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static_dir", default_value = "static")]
    static_dir: String,

    #[clap(long = "github_api_url", default_value = DEFAULT_API_URL)]
    github_api_url: String,

    #[clap(long = "user_agent", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    #[clap(long = "fetch", value_enum, default_value_t = FetchStrategy::Sequential)]
    fetch: FetchStrategy,
}

#[tokio::main]
async fn main() {
    // Fetch console arguments
    let opt = Opt::parse();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", format!("{},hyper=info,mio=info", opt.log_level));
    }
    // Enable console logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Register templates
    let handlebars = register_templates().unwrap_or_else(|err| {
        panic!("Failed to register templates!\n{:?}", err);
    });

    // Create reqwest client
    let client = GitHubService::build_client(&opt.user_agent).unwrap_or_else(|err| {
        panic!("Failed to create HTTP client!\n{:?}", err);
    });

    // Setup services and inject app state
    let github_service = GitHubService::new(client, opt.github_api_url.as_str());
    log::info!("Using GitHub API at {} with {:?} fetching", opt.github_api_url, opt.fetch);
    let app_state = Arc::new(AppState::new(handlebars, github_service, opt.fetch));
    let app = create_router(app_state, &opt.static_dir);

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)),
        opt.port
    ));
    log::info!("Now listening on http://{}", sock_addr);

    axum::Server::bind(&sock_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap_or_else(|err| {
            panic!("Server error!\n{:?}", err);
        });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}
