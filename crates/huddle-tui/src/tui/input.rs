// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (selection, detail
// pane).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::{TabId, UserCommand};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator (e.g. week changes, Quit). Returns `None` when the key
/// press was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.entry_active() {
        return handle_username_entry(key_event, view_state);
    }

    if view_state.picker_active() {
        return handle_picker(key_event, view_state);
    }

    let on_matchups = view_state.active_tab == TabId::Matchups;

    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),

        // Tab switching
        KeyCode::Char('1') => switch_tab(view_state, TabId::Standings),
        KeyCode::Char('2') => switch_tab(view_state, TabId::Matchups),

        // Week navigation
        KeyCode::Left | KeyCode::Char('h') if on_matchups => Some(UserCommand::PrevWeek),
        KeyCode::Right | KeyCode::Char('l') if on_matchups => Some(UserCommand::NextWeek),

        // Selection
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.select_prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.select_next();
            None
        }

        // Detail pane
        KeyCode::Enter => {
            if on_matchups && view_state.selected_card().is_some() {
                view_state.detail_open = true;
            }
            None
        }
        KeyCode::Esc => {
            view_state.detail_open = false;
            None
        }

        KeyCode::Char('r') => Some(UserCommand::Reload),

        // Back to the league picker or username entry
        KeyCode::Char('p') => Some(UserCommand::ShowLeagues),
        KeyCode::Char('u') => Some(UserCommand::ChangeUser),

        _ => None,
    }
}

/// Keys while the username prompt is open. Every printable key is text.
fn handle_username_entry(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let input = view_state.username_input.as_mut()?;
    match key_event.code {
        KeyCode::Char(c) if !key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            input.push(c);
            None
        }
        KeyCode::Backspace => {
            input.pop();
            None
        }
        KeyCode::Enter => {
            let username = input.trim().to_string();
            if username.is_empty() {
                return None;
            }
            view_state.username_input = None;
            Some(UserCommand::LookupUser(username))
        }
        KeyCode::Esc => {
            view_state.username_input = None;
            None
        }
        _ => None,
    }
}

/// Keys while the league picker is showing.
fn handle_picker(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('q') => Some(UserCommand::Quit),
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.select_prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            view_state.select_next();
            None
        }
        KeyCode::Enter => view_state
            .choices
            .get(view_state.selected)
            .map(|choice| UserCommand::OpenLeague(choice.league_id.clone())),
        KeyCode::Esc => {
            view_state.close_picker();
            None
        }
        KeyCode::Char('u') => Some(UserCommand::ChangeUser),
        _ => None,
    }
}

/// Activate a tab locally and tell the app, unless it is already active.
fn switch_tab(view_state: &mut ViewState, tab: TabId) -> Option<UserCommand> {
    if view_state.active_tab == tab {
        return None;
    }
    view_state.active_tab = tab;
    view_state.selected = 0;
    view_state.detail_open = false;
    Some(UserCommand::SwitchTab(tab))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{choice, loaded_state};
    use crossterm::event::{KeyEventState, KeyModifiers};

    /// Helper to create a KeyEvent with no modifiers.
    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    /// Helper to create a KeyEvent with Ctrl modifier.
    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn matchups_state() -> ViewState {
        let mut state = loaded_state();
        state.active_tab = TabId::Matchups;
        state
    }

    // -- Quit --

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), Some(UserCommand::Quit));
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(event, &mut state), None);
    }

    // -- Tab switching --

    #[test]
    fn tab_2_switches_to_matchups_and_notifies_app() {
        let mut state = loaded_state();
        state.selected = 1;
        let result = handle_key(key(KeyCode::Char('2')), &mut state);
        assert_eq!(result, Some(UserCommand::SwitchTab(TabId::Matchups)));
        assert_eq!(state.active_tab, TabId::Matchups);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn pressing_active_tab_is_a_noop() {
        let mut state = loaded_state();
        assert_eq!(handle_key(key(KeyCode::Char('1')), &mut state), None);
    }

    #[test]
    fn leaving_matchups_closes_detail() {
        let mut state = matchups_state();
        state.detail_open = true;
        let result = handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(result, Some(UserCommand::SwitchTab(TabId::Standings)));
        assert!(!state.detail_open);
    }

    // -- Week navigation --

    #[test]
    fn arrows_change_week_on_matchups() {
        let mut state = matchups_state();
        assert_eq!(handle_key(key(KeyCode::Right), &mut state), Some(UserCommand::NextWeek));
        assert_eq!(handle_key(key(KeyCode::Left), &mut state), Some(UserCommand::PrevWeek));
    }

    #[test]
    fn arrows_do_nothing_on_standings() {
        let mut state = loaded_state();
        assert_eq!(handle_key(key(KeyCode::Right), &mut state), None);
        assert_eq!(handle_key(key(KeyCode::Left), &mut state), None);
    }

    // -- Selection and detail --

    #[test]
    fn down_and_up_move_selection() {
        let mut state = matchups_state();
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.selected, 1);
        handle_key(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn enter_opens_detail_and_esc_closes_it() {
        let mut state = matchups_state();
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
        assert!(state.detail_open);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.detail_open);
    }

    #[test]
    fn enter_on_standings_does_not_open_detail() {
        let mut state = loaded_state();
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(!state.detail_open);
    }

    #[test]
    fn r_requests_reload() {
        let mut state = loaded_state();
        assert_eq!(handle_key(key(KeyCode::Char('r')), &mut state), Some(UserCommand::Reload));
    }

    // -- League picker --

    #[test]
    fn picker_enter_opens_selected_league() {
        let mut state = ViewState::default();
        state.choices = vec![choice("A", "Alpha"), choice("B", "Beta")];

        handle_key(key(KeyCode::Down), &mut state);
        let result = handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(result, Some(UserCommand::OpenLeague("B".into())));
    }

    #[test]
    fn picker_esc_returns_to_loaded_league() {
        let mut state = loaded_state();
        state.choices = vec![choice("A", "Alpha")];
        assert_eq!(handle_key(key(KeyCode::Esc), &mut state), None);
        assert!(!state.picker_active());
        assert!(state.league.is_some());
    }

    #[test]
    fn picker_u_changes_user() {
        let mut state = ViewState::default();
        state.choices = vec![choice("A", "Alpha")];
        assert_eq!(handle_key(key(KeyCode::Char('u')), &mut state), Some(UserCommand::ChangeUser));
    }

    #[test]
    fn p_and_u_leave_the_league() {
        let mut state = loaded_state();
        assert_eq!(handle_key(key(KeyCode::Char('p')), &mut state), Some(UserCommand::ShowLeagues));
        assert_eq!(handle_key(key(KeyCode::Char('u')), &mut state), Some(UserCommand::ChangeUser));
    }

    // -- Username entry --

    fn entry_state(typed: &str) -> ViewState {
        let mut state = loaded_state();
        state.username_input = Some(typed.to_string());
        state
    }

    #[test]
    fn typing_edits_the_username() {
        let mut state = entry_state("");
        for c in "dana9".chars() {
            assert_eq!(handle_key(key(KeyCode::Char(c)), &mut state), None);
        }
        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.username_input.as_deref(), Some("dana"));
    }

    #[test]
    fn entry_swallows_command_keys() {
        let mut state = entry_state("");
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut state), None);
        assert_eq!(handle_key(key(KeyCode::Char('2')), &mut state), None);
        assert_eq!(state.username_input.as_deref(), Some("q2"));
        assert_eq!(state.active_tab, TabId::Standings);
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn enter_submits_trimmed_username() {
        let mut state = entry_state("  dana99 ");
        let result = handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(result, Some(UserCommand::LookupUser("dana99".into())));
        assert!(!state.entry_active());
    }

    #[test]
    fn enter_on_blank_username_stays_open() {
        let mut state = entry_state("   ");
        assert_eq!(handle_key(key(KeyCode::Enter), &mut state), None);
        assert!(state.entry_active());
    }

    #[test]
    fn esc_cancels_entry() {
        let mut state = entry_state("dan");
        assert_eq!(handle_key(key(KeyCode::Esc), &mut state), None);
        assert!(!state.entry_active());
    }

    #[test]
    fn picker_blocks_tab_keys() {
        let mut state = ViewState::default();
        state.choices = vec![choice("A", "Alpha")];
        assert_eq!(handle_key(key(KeyCode::Char('2')), &mut state), None);
        assert_eq!(state.active_tab, TabId::Standings);
    }
}
