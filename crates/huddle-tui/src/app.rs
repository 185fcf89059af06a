// Application state and orchestration logic.
//
// The central event loop coordinating user commands from the TUI, fetch
// completions from spawned loader tasks, and live-status updates from the
// scoreboard tracker. Holds the loaded league data and pushes display
// snapshots to the TUI render loop.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use huddle_core::config::Config;
use huddle_core::league::{PlayerTable, Week};
use huddle_core::live::{LiveStatusHandle, LiveTeams, ScoreboardSource};
use huddle_core::session::SavedSession;
use huddle_core::sleeper::SleeperSource;
use huddle_core::view::{load_players, LeagueView, UserLeagues, WeekView};

use crate::protocol::{TabId, UiUpdate, UserCommand};
use crate::snapshot::{league_choice, league_snapshot, live_summary, week_snapshot};

// ---------------------------------------------------------------------------
// Fetch events
// ---------------------------------------------------------------------------

/// Results sent back by spawned loader tasks.
///
/// League and week loads carry the generation they were started under; a
/// result whose generation is no longer current belongs to a league or week
/// the user has since navigated away from and is discarded.
#[derive(Debug)]
pub enum FetchEvent {
    League {
        generation: u64,
        view: Box<LeagueView>,
        /// Present only when the player table was fetched alongside.
        players: Option<PlayerTable>,
    },
    Week {
        generation: u64,
        view: Box<WeekView>,
    },
    UserLeagues(Box<UserLeagues>),
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub sleeper: Arc<dyn SleeperSource>,
    pub scoreboard: Arc<dyn ScoreboardSource>,
    pub league_id: Option<String>,
    /// The Sleeper user whose leagues the picker lists.
    pub username: Option<String>,
    /// Where an entered username is remembered; `None` keeps it in memory only.
    pub session_path: Option<PathBuf>,
    /// Last league list looked up, for returning to the picker.
    pub user_leagues: Option<UserLeagues>,
    pub league: Option<LeagueView>,
    /// Bulk player reference data; fetched once and shared with loader tasks.
    pub players: Arc<PlayerTable>,
    pub week: Option<Week>,
    pub week_view: Option<WeekView>,
    /// Last known live set. Survives tracker restarts.
    pub live: LiveTeams,
    /// Running only while the Matchups tab is active.
    pub tracker: Option<LiveStatusHandle>,
    pub live_rx: Option<watch::Receiver<LiveTeams>>,
    pub active_tab: TabId,
    pub league_generation: u64,
    pub week_generation: u64,
    pub fetch_tx: mpsc::Sender<FetchEvent>,
}

impl AppState {
    pub fn new(
        config: Config,
        sleeper: Arc<dyn SleeperSource>,
        scoreboard: Arc<dyn ScoreboardSource>,
        league_id: Option<String>,
        fetch_tx: mpsc::Sender<FetchEvent>,
    ) -> Self {
        let username = config.session.username.clone();
        AppState {
            config,
            sleeper,
            scoreboard,
            league_id,
            username,
            session_path: None,
            user_leagues: None,
            league: None,
            players: Arc::new(PlayerTable::default()),
            week: None,
            week_view: None,
            live: LiveTeams::default(),
            tracker: None,
            live_rx: None,
            active_tab: TabId::Standings,
            league_generation: 0,
            week_generation: 0,
            fetch_tx,
        }
    }

    /// Spawn a load of the current league (and the player table on first
    /// use). Returns `false` when no league is selected.
    pub fn start_league_load(&mut self) -> bool {
        let Some(league_id) = self.league_id.clone() else {
            return false;
        };

        self.league_generation += 1;
        // Any in-flight week load belongs to the previous league state.
        self.week_generation += 1;
        let generation = self.league_generation;
        let fetch_players = self.players.is_empty();
        let source = Arc::clone(&self.sleeper);
        let tx = self.fetch_tx.clone();

        info!("Loading league {league_id} (gen: {generation})");
        tokio::spawn(async move {
            let (view, players) = tokio::join!(LeagueView::load(source.as_ref(), &league_id), async {
                if fetch_players {
                    Some(load_players(source.as_ref()).await)
                } else {
                    None
                }
            });
            let _ = tx
                .send(FetchEvent::League {
                    generation,
                    view: Box::new(view),
                    players,
                })
                .await;
        });
        true
    }

    /// Spawn a load of one week's matchups for the loaded league.
    pub fn start_week_load(&mut self, week: Week) -> bool {
        let Some(league_view) = self.league.as_ref() else {
            return false;
        };

        self.week_generation += 1;
        let generation = self.week_generation;
        let league_id = league_view.league_id.clone();
        let league = league_view.league.clone();
        let players = Arc::clone(&self.players);
        let source = Arc::clone(&self.sleeper);
        let tx = self.fetch_tx.clone();

        debug!("Loading week {week} of league {league_id} (gen: {generation})");
        tokio::spawn(async move {
            let view = WeekView::load(source.as_ref(), &league_id, league.as_ref(), week, &players).await;
            let _ = tx
                .send(FetchEvent::Week {
                    generation,
                    view: Box::new(view),
                })
                .await;
        });
        true
    }

    /// Spawn a lookup of a user's leagues for the picker.
    pub fn start_user_lookup(&self, username: &str) {
        let username = username.to_string();
        let source = Arc::clone(&self.sleeper);
        let tx = self.fetch_tx.clone();

        info!("Looking up leagues for user {username}");
        tokio::spawn(async move {
            let found = UserLeagues::load(source.as_ref(), &username).await;
            let _ = tx.send(FetchEvent::UserLeagues(Box::new(found))).await;
        });
    }

    /// Make `username` the current user and write it to the session file.
    pub fn remember_user(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.user_leagues = None;
        if let Some(path) = &self.session_path {
            let session = SavedSession {
                username: self.username.clone(),
            };
            if let Err(e) = session.save(path) {
                warn!("Could not remember user {username}: {e}");
            }
        }
    }

    /// Switch tabs, starting or stopping live tracking to match.
    pub fn set_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
        match tab {
            TabId::Matchups if self.tracker.is_none() => {
                let handle = LiveStatusHandle::start(
                    Arc::clone(&self.scoreboard),
                    self.config.scoreboard.poll_interval(),
                    self.live.clone(),
                );
                self.live_rx = Some(handle.subscribe());
                self.tracker = Some(handle);
            }
            TabId::Standings => {
                if let Some(handle) = self.tracker.take() {
                    self.live = handle.stop();
                }
                self.live_rx = None;
            }
            TabId::Matchups => {}
        }
    }

    /// Move to the adjacent week, if there is one.
    fn step_week(&mut self, forward: bool) -> Option<Week> {
        let current = self.week?;
        let next = if forward { current.next() } else { current.prev() }?;
        self.week = Some(next);
        Some(next)
    }

    /// Push the current week, with live flags, to the TUI.
    async fn send_week(&self, ui_tx: &mpsc::Sender<UiUpdate>) {
        if let (Some(week), Some(league)) = (&self.week_view, &self.league) {
            let snapshot = week_snapshot(week, league, &self.players, &self.live);
            let _ = ui_tx.send(UiUpdate::WeekLoaded(Box::new(snapshot))).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the main application event loop.
///
/// Listens on three sources using `tokio::select!`:
/// 1. User commands from the TUI
/// 2. Fetch completions from loader tasks
/// 3. Live-status updates, while the tracker runs
///
/// Pushes UI updates through `ui_tx` for the TUI render loop.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut fetch_rx: mpsc::Receiver<FetchEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");
    start(&mut state, &ui_tx).await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd, &ui_tx).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            event = fetch_rx.recv() => {
                match event {
                    Some(event) => handle_fetch_event(&mut state, event, &ui_tx).await,
                    None => {
                        info!("Fetch channel closed, shutting down");
                        break;
                    }
                }
            }

            live = next_live(state.live_rx.as_mut()) => {
                match live {
                    Some(live) => handle_live_update(&mut state, live, &ui_tx).await,
                    None => {
                        // Tracker task ended; stop polling its channel.
                        state.live_rx = None;
                    }
                }
            }
        }
    }

    // Stops the tracker.
    state.tracker = None;
    Ok(())
}

/// Kick off the first load: the selected league, else the remembered
/// user's league list, else ask for a username.
async fn start(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    if state.start_league_load() {
        let _ = ui_tx.send(UiUpdate::Loading("Loading league...".into())).await;
        return;
    }
    lookup_or_prompt(state, ui_tx).await;
}

/// Look up the current user's leagues, or ask who the user is.
async fn lookup_or_prompt(state: &mut AppState, ui_tx: &mpsc::Sender<UiUpdate>) {
    match state.username.clone() {
        Some(username) => {
            state.start_user_lookup(&username);
            let _ = ui_tx
                .send(UiUpdate::Loading(format!("Looking up leagues for {username}...")))
                .await;
        }
        None => {
            let _ = ui_tx.send(UiUpdate::PromptUsername(None)).await;
        }
    }
}

/// Wait for the next live set, or forever when no tracker is running.
async fn next_live(rx: Option<&mut watch::Receiver<LiveTeams>>) -> Option<LiveTeams> {
    match rx {
        Some(rx) => match rx.changed().await {
            Ok(()) => Some(rx.borrow_and_update().clone()),
            Err(_) => None,
        },
        None => std::future::pending().await,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn handle_user_command(
    state: &mut AppState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match cmd {
        UserCommand::SwitchTab(tab) => {
            info!("Switched to tab: {:?}", tab);
            state.set_tab(tab);
        }
        UserCommand::NextWeek => change_week(state, true, ui_tx).await,
        UserCommand::PrevWeek => change_week(state, false, ui_tx).await,
        UserCommand::Reload => {
            if state.start_league_load() {
                let _ = ui_tx.send(UiUpdate::Loading("Reloading...".into())).await;
            }
        }
        UserCommand::OpenLeague(league_id) => {
            info!("Opening league {league_id}");
            state.league_id = Some(league_id);
            state.league = None;
            state.week = None;
            state.week_view = None;
            if state.start_league_load() {
                let _ = ui_tx.send(UiUpdate::Loading("Loading league...".into())).await;
            }
        }
        UserCommand::LookupUser(username) => {
            let username = username.trim();
            if username.is_empty() {
                return;
            }
            info!("User entered username {username}");
            state.remember_user(username);
            lookup_or_prompt(state, ui_tx).await;
        }
        UserCommand::ChangeUser => {
            let _ = ui_tx.send(UiUpdate::PromptUsername(state.username.clone())).await;
        }
        UserCommand::ShowLeagues => match &state.user_leagues {
            Some(found) => send_choices(found, ui_tx).await,
            None => lookup_or_prompt(state, ui_tx).await,
        },
        UserCommand::Quit => {
            // Handled in the main loop
        }
    }
}

/// Offer a user's leagues in the picker.
async fn send_choices(found: &UserLeagues, ui_tx: &mpsc::Sender<UiUpdate>) {
    if found.leagues.is_empty() {
        let _ = ui_tx
            .send(UiUpdate::Notice(format!("No leagues in the {} season", found.season)))
            .await;
        return;
    }
    let choices = found.leagues.iter().map(league_choice).collect();
    let _ = ui_tx.send(UiUpdate::LeagueChoices(choices)).await;
}

async fn change_week(state: &mut AppState, forward: bool, ui_tx: &mpsc::Sender<UiUpdate>) {
    if let Some(week) = state.step_week(forward) {
        if state.start_week_load(week) {
            let _ = ui_tx.send(UiUpdate::Loading(format!("Loading week {week}..."))).await;
        }
    }
}

async fn handle_fetch_event(
    state: &mut AppState,
    event: FetchEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    match event {
        FetchEvent::League {
            generation,
            view,
            players,
        } => {
            if generation != state.league_generation {
                debug!(
                    "Discarding stale league load (gen: {}, current gen: {})",
                    generation, state.league_generation
                );
                return;
            }
            if let Some(players) = players.filter(|p| !p.is_empty()) {
                state.players = Arc::new(players);
            }
            if view.league.is_none() && view.rosters.is_empty() {
                warn!("League {} returned no data", view.league_id);
                let _ = ui_tx
                    .send(UiUpdate::Notice(format!("League {} not found", view.league_id)))
                    .await;
            }

            let week = state.week.unwrap_or_else(|| view.default_week());
            let _ = ui_tx
                .send(UiUpdate::LeagueLoaded(Box::new(league_snapshot(&view))))
                .await;
            state.league = Some(*view);
            state.week = Some(week);
            state.start_week_load(week);
        }
        FetchEvent::Week { generation, view } => {
            if generation != state.week_generation {
                debug!(
                    "Discarding stale week load (gen: {}, current gen: {})",
                    generation, state.week_generation
                );
                return;
            }
            state.week_view = Some(*view);
            state.send_week(ui_tx).await;
        }
        FetchEvent::UserLeagues(found) => {
            if found.user.is_none() {
                let name = state.username.as_deref().unwrap_or_default();
                let _ = ui_tx
                    .send(UiUpdate::Notice(format!("Sleeper user {name:?} not found")))
                    .await;
                let _ = ui_tx.send(UiUpdate::PromptUsername(state.username.clone())).await;
                return;
            }
            let only = found.only_league().map(|l| l.league_id.clone());
            match only {
                // The first lookup of a single-league user opens it directly.
                Some(league_id) if state.league.is_none() => {
                    info!("User has a single league, opening {league_id}");
                    state.league_id = Some(league_id);
                    if state.start_league_load() {
                        let _ = ui_tx.send(UiUpdate::Loading("Loading league...".into())).await;
                    }
                }
                _ => send_choices(&found, ui_tx).await,
            }
            state.user_leagues = Some(*found);
        }
    }
}

async fn handle_live_update(state: &mut AppState, live: LiveTeams, ui_tx: &mpsc::Sender<UiUpdate>) {
    debug!("Live set updated: {} teams", live.len());
    state.live = live;
    let _ = ui_tx.send(UiUpdate::LiveStatus(live_summary(&state.live))).await;
    state.send_week(ui_tx).await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
