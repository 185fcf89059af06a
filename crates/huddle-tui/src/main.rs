// Huddle entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config and the remembered session, apply the command-line
//    league override
// 3. Build the HTTP client and data sources
// 4. Create mpsc channels and the application state
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::path::PathBuf;
use std::sync::Arc;

use huddle_core::config;
use huddle_core::http::build_client;
use huddle_core::live::EspnScoreboard;
use huddle_core::session::SavedSession;
use huddle_core::sleeper::SleeperClient;
use huddle_tui::app;
use huddle_tui::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("Huddle starting up");

    // 2. Load config; `huddle <league_id>` overrides the remembered league
    let config = config::load_config().context("failed to load configuration")?;
    let league_id = std::env::args()
        .nth(1)
        .filter(|arg| !arg.trim().is_empty())
        .or_else(|| config.session.league_id.clone());
    info!(
        "Config loaded: sleeper={}, poll every {}s, league={:?}",
        config.sleeper.base_url, config.scoreboard.poll_interval_secs, league_id
    );

    // 3. Build the HTTP client and data sources
    let http = build_client(config.http.user_agent.as_deref())
        .context("failed to build HTTP client")?;
    let sleeper = Arc::new(SleeperClient::new(http.clone(), &config.sleeper.base_url));
    let scoreboard = Arc::new(EspnScoreboard::new(http, &config.scoreboard.url));

    // 4. Create mpsc channels and the application state
    let (fetch_tx, fetch_rx) = mpsc::channel(64);
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let mut app_state = app::AppState::new(config, sleeper, scoreboard, league_id, fetch_tx);
    let session_path = data_dir()?.join("session.json");
    if let Some(username) = SavedSession::load(&session_path).username {
        info!("Remembered user: {username}");
        app_state.username = Some(username);
    }
    app_state.session_path = Some(session_path);

    // 5. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, fetch_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. Run the TUI event loop (blocking until user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 7. Cleanup: wait for app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Huddle shut down cleanly");
    Ok(())
}

/// Directory for the log and session files: the platform data dir, else the
/// working directory.
fn data_dir() -> anyhow::Result<PathBuf> {
    match directories::ProjectDirs::from("", "", "huddle") {
        Some(dirs) => Ok(dirs.data_local_dir().to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("huddle.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("huddle_core=info,huddle_tui=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
