// TUI viewer: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the snapshots pushed by the app
// orchestrator. `UiUpdate` messages arrive over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{
    LeagueChoice, LeagueSnapshot, LiveSummary, MatchupCard, TabId, UiUpdate, UserCommand,
    WeekSnapshot,
};

use layout::build_layout;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the app orchestrator.
/// The `render_frame` function reads this struct to draw the screen.
#[derive(Debug, Default)]
pub struct ViewState {
    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    pub league: Option<LeagueSnapshot>,
    pub week: Option<WeekSnapshot>,
    /// Leagues offered by the picker until one is opened.
    pub choices: Vec<LeagueChoice>,
    /// Username being typed; `Some` while the entry prompt is open.
    pub username_input: Option<String>,
    pub live: LiveSummary,
    /// Highlighted row of whatever list is showing.
    pub selected: usize,
    /// Whether the matchup detail pane is open.
    pub detail_open: bool,
    /// Last one-line message from the app.
    pub notice: Option<String>,
    /// Set while a fetch is in flight.
    pub loading: Option<String>,
}

impl ViewState {
    /// Username entry replaces everything else while it is open.
    pub fn entry_active(&self) -> bool {
        self.username_input.is_some()
    }

    /// The league picker replaces the tabs until a league is opened.
    pub fn picker_active(&self) -> bool {
        !self.entry_active() && !self.choices.is_empty()
    }

    /// Leave the picker and go back to the loaded league, if there is one.
    pub fn close_picker(&mut self) {
        if self.league.is_some() {
            self.choices.clear();
            self.selected = 0;
            self.clamp_selection();
        }
    }

    /// Number of selectable rows in the list currently on screen.
    pub fn row_count(&self) -> usize {
        if self.picker_active() {
            return self.choices.len();
        }
        match self.active_tab {
            TabId::Standings => self.league.as_ref().map_or(0, |l| l.standings.len()),
            TabId::Matchups => self.week.as_ref().map_or(0, |w| w.cards.len()),
        }
    }

    /// The highlighted matchup card, if the Matchups tab has one.
    pub fn selected_card(&self) -> Option<&MatchupCard> {
        self.week.as_ref()?.cards.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the current list after new data lands.
    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
        if self.active_tab == TabId::Matchups && self.selected_card().is_none() {
            self.detail_open = false;
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Loading(message) => {
            state.loading = Some(message);
        }
        UiUpdate::LeagueLoaded(snapshot) => {
            let switched = state
                .league
                .as_ref()
                .map_or(true, |l| l.league_id != snapshot.league_id);
            if switched {
                state.week = None;
                state.selected = 0;
                state.detail_open = false;
            }
            state.league = Some(*snapshot);
            state.choices.clear();
            state.loading = None;
            state.clamp_selection();
        }
        UiUpdate::WeekLoaded(snapshot) => {
            state.week = Some(*snapshot);
            state.loading = None;
            state.clamp_selection();
        }
        UiUpdate::LeagueChoices(choices) => {
            state.choices = choices;
            state.username_input = None;
            state.selected = 0;
            state.detail_open = false;
            state.loading = None;
        }
        UiUpdate::PromptUsername(prefill) => {
            state.username_input = Some(prefill.unwrap_or_default());
            state.loading = None;
        }
        UiUpdate::LiveStatus(summary) => {
            state.live = summary;
        }
        UiUpdate::Notice(message) => {
            state.notice = Some(message);
            state.loading = None;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete screen.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let show_detail = state.active_tab == TabId::Matchups
        && state.detail_open
        && !state.picker_active()
        && !state.entry_active();
    let layout = build_layout(frame.area(), show_detail);

    widgets::status_bar::render(frame, layout.status_bar, state);

    if state.entry_active() {
        widgets::username_input::render(frame, layout.main_panel, state);
    } else if state.picker_active() {
        widgets::league_picker::render(frame, layout.main_panel, state);
    } else {
        match state.active_tab {
            TabId::Standings => widgets::standings::render(frame, layout.main_panel, state),
            TabId::Matchups => widgets::matchups::render(frame, layout.main_panel, state),
        }
    }

    if let Some(area) = layout.detail {
        widgets::matchup_detail::render(frame, area, state);
    }

    widgets::help_bar::render(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Set panic hook to restore terminal on crash.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. Create ViewState
    let mut view_state = ViewState::default();

    // 4. Create crossterm EventStream for async keyboard input
    let mut event_stream = EventStream::new();

    // 5. Create render interval (~30fps)
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 6. Main loop
    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: app is shutting down
                        break;
                    }
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events; the next tick redraws.
                    }
                    Some(Err(_)) | None => {
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    // 7. Restore terminal
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use huddle_core::league::Week;

    use super::*;
    use crate::protocol::{PlayerLine, StandingsLine, TeamScore};

    // -----------------------------------------------------------------------
    // Fixtures shared with the widget tests
    // -----------------------------------------------------------------------

    pub(crate) fn league_snapshot(league_id: &str) -> LeagueSnapshot {
        LeagueSnapshot {
            league_id: league_id.to_string(),
            name: "Sunday Scaries".to_string(),
            season: "2024".to_string(),
            best_ball: true,
            standings: vec![
                StandingsLine {
                    rank: 1,
                    team: "Gridiron Gang".to_string(),
                    owner: Some("Dana".to_string()),
                    record: "7-2".to_string(),
                    win_pct: 7.0 / 9.0,
                    points_for: 1120.45,
                    points_against: 980.1,
                },
                StandingsLine {
                    rank: 2,
                    team: "sam_k".to_string(),
                    owner: None,
                    record: "5-4".to_string(),
                    win_pct: 5.0 / 9.0,
                    points_for: 1010.0,
                    points_against: 1002.75,
                },
            ],
        }
    }

    pub(crate) fn player(name: &str, points: f64) -> PlayerLine {
        PlayerLine {
            name: Some(name.to_string()),
            position: "RB".to_string(),
            team: "SF".to_string(),
            injury: None,
            points,
            not_on_roster: false,
            on_bye: false,
            live: false,
        }
    }

    pub(crate) fn team(roster_id: u32, name: &str, points: f64) -> TeamScore {
        TeamScore {
            roster_id,
            team: name.to_string(),
            owner: None,
            points,
            starters: vec![player("Runner One", points)],
            bench: vec![player("Bench Guy", 1.5)],
        }
    }

    pub(crate) fn week_snapshot(number: u32) -> WeekSnapshot {
        WeekSnapshot {
            week: Week::clamped(number),
            cards: vec![
                MatchupCard {
                    matchup_id: Some(1),
                    leader: team(1, "Gridiron Gang", 120.5),
                    trailer: Some(team(2, "sam_k", 99.25)),
                    winner: Some(1),
                    tie: false,
                },
                MatchupCard {
                    matchup_id: None,
                    leader: team(3, "Lonely Team", 80.0),
                    trailer: None,
                    winner: None,
                    tie: false,
                },
            ],
        }
    }

    pub(crate) fn loaded_state() -> ViewState {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::LeagueLoaded(Box::new(league_snapshot("L1"))));
        apply_ui_update(&mut state, UiUpdate::WeekLoaded(Box::new(week_snapshot(5))));
        state
    }

    pub(crate) fn choice(league_id: &str, name: &str) -> LeagueChoice {
        LeagueChoice {
            league_id: league_id.to_string(),
            name: name.to_string(),
            season: "2024".to_string(),
            best_ball: false,
        }
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert_eq!(state.active_tab, TabId::Standings);
        assert!(state.league.is_none());
        assert!(!state.picker_active());
        assert_eq!(state.row_count(), 0);
        assert!(!state.detail_open);
    }

    #[test]
    fn loading_then_league_clears_loading() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Loading("Loading league...".into()));
        assert!(state.loading.is_some());
        apply_ui_update(&mut state, UiUpdate::LeagueLoaded(Box::new(league_snapshot("L1"))));
        assert!(state.loading.is_none());
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn switching_league_resets_week_and_selection() {
        let mut state = loaded_state();
        state.active_tab = TabId::Matchups;
        state.selected = 1;
        state.detail_open = true;

        apply_ui_update(&mut state, UiUpdate::LeagueLoaded(Box::new(league_snapshot("L2"))));
        assert!(state.week.is_none());
        assert_eq!(state.selected, 0);
        assert!(!state.detail_open);
    }

    #[test]
    fn reloading_same_league_keeps_week() {
        let mut state = loaded_state();
        apply_ui_update(&mut state, UiUpdate::LeagueLoaded(Box::new(league_snapshot("L1"))));
        assert!(state.week.is_some());
    }

    #[test]
    fn week_with_fewer_cards_clamps_selection() {
        let mut state = loaded_state();
        state.active_tab = TabId::Matchups;
        state.selected = 1;
        state.detail_open = true;

        let mut shorter = week_snapshot(6);
        shorter.cards.truncate(1);
        apply_ui_update(&mut state, UiUpdate::WeekLoaded(Box::new(shorter)));
        assert_eq!(state.selected, 0);
        assert!(state.detail_open);

        apply_ui_update(
            &mut state,
            UiUpdate::WeekLoaded(Box::new(WeekSnapshot {
                week: Week::clamped(7),
                cards: vec![],
            })),
        );
        assert!(!state.detail_open);
    }

    #[test]
    fn choices_activate_picker_until_league_loads() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::LeagueChoices(vec![choice("A", "Alpha"), choice("B", "Beta")]),
        );
        assert!(state.picker_active());
        assert_eq!(state.row_count(), 2);

        apply_ui_update(&mut state, UiUpdate::LeagueLoaded(Box::new(league_snapshot("A"))));
        assert!(!state.picker_active());
        assert!(state.choices.is_empty());
    }

    #[test]
    fn prompt_opens_entry_over_everything() {
        let mut state = loaded_state();
        state.choices = vec![choice("A", "Alpha")];
        apply_ui_update(&mut state, UiUpdate::PromptUsername(Some("dana99".into())));
        assert!(state.entry_active());
        assert_eq!(state.username_input.as_deref(), Some("dana99"));
        assert!(!state.picker_active());

        apply_ui_update(&mut state, UiUpdate::PromptUsername(None));
        assert_eq!(state.username_input.as_deref(), Some(""));
    }

    #[test]
    fn picker_shows_over_loaded_league_until_closed() {
        let mut state = loaded_state();
        state.selected = 1;
        state.username_input = Some("dana99".into());
        apply_ui_update(
            &mut state,
            UiUpdate::LeagueChoices(vec![choice("A", "Alpha"), choice("B", "Beta"), choice("C", "Gamma")]),
        );
        assert!(!state.entry_active());
        assert!(state.picker_active());
        assert_eq!(state.row_count(), 3);
        assert_eq!(state.selected, 0);

        state.close_picker();
        assert!(!state.picker_active());
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn closing_picker_without_league_keeps_it() {
        let mut state = ViewState::default();
        state.choices = vec![choice("A", "Alpha")];
        state.close_picker();
        assert!(state.picker_active());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = loaded_state();
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn notice_and_live_status_are_stored() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Notice("League 9 not found".into()));
        assert_eq!(state.notice.as_deref(), Some("League 9 not found"));

        apply_ui_update(
            &mut state,
            UiUpdate::LiveStatus(LiveSummary {
                teams_playing: 4,
                refreshed_at: None,
            }),
        );
        assert_eq!(state.live.teams_playing, 4);
    }

    #[test]
    fn render_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();

        let mut state = ViewState::default();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        state = loaded_state();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        state.active_tab = TabId::Matchups;
        state.detail_open = true;
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        let mut picker = ViewState::default();
        picker.choices = vec![choice("A", "Alpha")];
        terminal.draw(|frame| render_frame(frame, &picker)).unwrap();

        picker.username_input = Some("dana".into());
        terminal.draw(|frame| render_frame(frame, &picker)).unwrap();
    }
}
