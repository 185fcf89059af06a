// Matchups widget: one line per head-to-head pairing or bye for the week.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::protocol::{MatchupCard, TeamScore};
use crate::tui::ViewState;

/// Render the week's matchups into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let title = match &state.week {
        Some(week) => format!("Matchups: Week {}", week.week),
        None => "Matchups".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let Some(week) = state.week.as_ref().filter(|w| !w.cards.is_empty()) else {
        let paragraph = Paragraph::new("  No matchup data.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let items: Vec<ListItem> = week
        .cards
        .iter()
        .map(|card| ListItem::new(card_line(card)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    let mut list_state = ListState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// One matchup as a line: leader first, winner in bold.
pub fn card_line(card: &MatchupCard) -> Line<'static> {
    let mut spans = team_spans(&card.leader, card.winner == Some(card.leader.roster_id));

    match &card.trailer {
        Some(trailer) => {
            let sep = if card.tie { "  =  " } else { "  vs  " };
            spans.push(Span::styled(sep, Style::default().fg(Color::Gray)));
            spans.extend(team_spans(trailer, card.winner == Some(trailer.roster_id)));
        }
        None => {
            spans.push(Span::styled("  (bye)", Style::default().fg(Color::DarkGray)));
        }
    }

    Line::from(spans)
}

fn team_spans(team: &TeamScore, winning: bool) -> Vec<Span<'static>> {
    let mut style = Style::default().fg(Color::White);
    if winning {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::styled(format!(" {}", team.team), style),
        Span::styled(format!(" {:.2}", team.points), style.fg(Color::Yellow)),
    ];
    let live = team.live_starters();
    if live > 0 {
        spans.push(Span::styled(
            format!(" ●{live}"),
            Style::default().fg(Color::Green),
        ));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
