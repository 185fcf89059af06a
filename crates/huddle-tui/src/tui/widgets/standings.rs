// Standings widget: league table ordered by win percentage, then points.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::protocol::StandingsLine;
use crate::tui::ViewState;

/// Render the standings table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let block = Block::default().borders(Borders::ALL).title("Standings");

    let Some(league) = state.league.as_ref().filter(|l| !l.standings.is_empty()) else {
        let paragraph = Paragraph::new("  No standings data.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Team"),
        Cell::from("Record"),
        Cell::from("Pct"),
        Cell::from("PF"),
        Cell::from("PA"),
    ])
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = league
        .standings
        .iter()
        .map(|line| {
            Row::new(vec![
                Cell::from(line.rank.to_string()),
                Cell::from(team_cell(line)),
                Cell::from(line.record.clone()),
                Cell::from(format_pct(line.win_pct)),
                Cell::from(format!("{:.2}", line.points_for)),
                Cell::from(format!("{:.2}", line.points_against)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Min(20),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));
    // The table state scrolls the selected row into view on short terminals.
    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Team name, with the owner in parentheses when the team has its own name.
pub fn team_cell(line: &StandingsLine) -> String {
    match &line.owner {
        Some(owner) => format!("{} ({})", line.team, owner),
        None => line.team.clone(),
    }
}

/// Win percentage in the usual three-decimal form: ".778", "1.000".
pub fn format_pct(pct: f64) -> String {
    let text = format!("{pct:.3}");
    match text.strip_prefix('0') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
