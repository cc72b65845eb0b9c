// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::indexing_slicing
    )
)]

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use linkstash::app::{report_server_error, Args, Command};
use linkstash::auth::credential_line;
use linkstash::config::load_config_file;
use linkstash::logging::{default_log_dir, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use linkstash::{serve, AppState, CredentialStore, SharedLinkStore, Settings, TemplateEngine};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Args::parse();

    if let Some(Command::HashPassword { username, password }) = &args.command {
        println!("{}", credential_line(username, password));
        return Ok(());
    }

    let log_dir = args
        .log_dir
        .as_ref()
        .map_or_else(default_log_dir, PathBuf::from);
    let log_file = log_dir.join(LOG_FILENAME);

    let log_config = LogConfig {
        log_dir,
        json_format: args.log_json,
        rotation: parse_rotation(&args.log_rotation),
        ..Default::default()
    };

    if let Err(e) = init_logging(log_config) {
        eprintln!();
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!();
        eprintln!("Logs: {}", log_file.display());
        eprintln!();
        return Err(e);
    }

    let file_config = load_config_file(args.config.as_deref())?;
    let settings = Settings::resolve(args.overrides(), file_config);

    let credentials = CredentialStore::load(&settings.users_file)
        .await
        .wrap_err("Cannot start without a credentials file")?;
    if credentials.is_empty() {
        warn!(
            "No users in {}; adding, editing and deleting links is impossible",
            settings.users_file.display()
        );
    } else {
        info!("Loaded {} user(s)", credentials.len());
    }

    let store = SharedLinkStore::open(&settings.links_file).await;
    info!(
        "Serving {} link(s) from {}",
        store.len().await,
        settings.links_file.display()
    );

    let templates = TemplateEngine::load(settings.templates_dir.as_deref()).await?;

    let addr: SocketAddr = settings
        .addr
        .parse()
        .wrap_err_with(|| format!("Invalid listen address: {}", settings.addr))?;
    let state = AppState::new(store, credentials, templates, &settings);

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            report_server_error(addr, &log_file, &e);
            return Err(e.into());
        }
    };

    info!("Starting linkstash on http://{addr}");

    if let Err(e) = serve(listener, state).await {
        report_server_error(addr, &log_file, &e);
        return Err(e.into());
    }

    info!("Linkstash stopped");
    Ok(())
}
