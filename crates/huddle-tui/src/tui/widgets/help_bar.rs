// Help bar widget: key hints for the current screen.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hints(state),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Key hints valid in the current mode.
pub fn hints(state: &ViewState) -> &'static str {
    if state.entry_active() {
        return " Enter:Find leagues | Esc:Cancel | Ctrl+C:Quit";
    }
    if state.picker_active() {
        if state.league.is_some() {
            return " q:Quit | ↑/↓:Select | Enter:Open league | Esc:Back | u:User";
        }
        return " q:Quit | ↑/↓:Select | Enter:Open league | u:User";
    }
    match state.active_tab {
        TabId::Standings => " q:Quit | 1-2:Tabs | ↑/↓:Select | r:Reload | p:Leagues | u:User",
        TabId::Matchups if state.detail_open => {
            " q:Quit | 1-2:Tabs | ←/→:Week | ↑/↓:Matchup | Esc:Close | r:Reload"
        }
        TabId::Matchups => {
            " q:Quit | 1-2:Tabs | ←/→:Week | ↑/↓:Select | Enter:Detail | r:Reload | p:Leagues"
        }
    }
}
