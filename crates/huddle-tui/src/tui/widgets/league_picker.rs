// League picker widget: the configured user's leagues for the season.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::protocol::LeagueChoice;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = state
        .choices
        .iter()
        .map(|choice| ListItem::new(choice_line(choice)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Choose a league"),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White));
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

pub fn choice_line(choice: &LeagueChoice) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!(" {}", choice.name)),
        Span::styled(format!("  {}", choice.season), Style::default().fg(Color::Gray)),
    ];
    if choice.best_ball {
        spans.push(Span::styled("  best ball", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}
