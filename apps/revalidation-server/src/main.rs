use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};
use std::path::PathBuf;

use clap::Parser;
use revalidation_core::config::core_config::AppConfig;
use revalidation_server::router::start_server;
use revalidation_server::{ServerConfig, build_info, metrics};
use sentry::integrations::tracing::EventFilter;
use tracing_subscriber::prelude::*;

const BASE_CONFIG_FILE: &str = "config/config.yml";
const DEFAULT_SERVER_PORT: u16 = 3000;

/// Cache revalidation gateway
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config files applied on top of `config/config.yml`, in order
    #[arg(short, long, value_name = "FILE")]
    config: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let config_files: Vec<PathBuf> = std::iter::once(BASE_CONFIG_FILE.into())
        .chain(cli.config)
        .collect();

    let app_config: AppConfig<ServerConfig> =
        AppConfig::from_files(&config_files).expect("Failed creating config");

    let _sentry_init_guard = initialize_sentry(&app_config.app);
    initialize_tracing(&app_config.app);
    metrics::setup();

    if app_config.core.revalidation.secret().is_none() {
        tracing::warn!("REVALIDATE_SECRET is not set, revalidation requests will be refused");
    }

    let addr = SocketAddr::new(
        app_config
            .app
            .server_ip
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
        app_config.app.server_port.unwrap_or(DEFAULT_SERVER_PORT),
    );
    let listener = TcpListener::bind(addr).expect("Failed to bind to address");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
        .block_on(start_server(listener, app_config, None))
}

fn initialize_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref().filter(|dsn| !dsn.is_empty())?;
    let environment = config.sentry_environment.to_owned()?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(environment.into()),
            ..Default::default()
        },
    ));

    // inherited by the per-request hubs
    sentry::configure_scope(|scope| {
        scope.set_tag("service", "revalidation-gateway");
        scope.set_tag("commit", build_info::COMMIT_HASH);
    });

    Some(guard)
}

fn initialize_tracing(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("debug"))
        })
        .expect("Failed to create env filter");

    // errors become sentry events, info and warn become breadcrumbs
    let sentry_layer =
        sentry::integrations::tracing::layer().event_filter(|metadata| match *metadata.level() {
            tracing::Level::ERROR => EventFilter::Event,
            tracing::Level::INFO | tracing::Level::WARN => EventFilter::Breadcrumb,
            _ => EventFilter::Ignore,
        });

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(sentry_layer);

    if config.trace_json.unwrap_or_default() {
        registry
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
