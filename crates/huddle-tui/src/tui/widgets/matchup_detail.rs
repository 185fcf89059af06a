// Matchup detail widget: starters and bench for both sides of the selected
// matchup, with live, injury, bye and not-on-roster markers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::protocol::{PlayerLine, TeamScore};
use crate::tui::ViewState;

/// Render the detail pane for the selected matchup.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(card) = state.selected_card() else {
        let paragraph = Paragraph::new("  No matchup selected.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Matchup"));
        frame.render_widget(paragraph, area);
        return;
    };

    match &card.trailer {
        Some(trailer) => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            render_team(frame, halves[0], &card.leader);
            render_team(frame, halves[1], trailer);
        }
        None => render_team(frame, area, &card.leader),
    }
}

fn render_team(frame: &mut Frame, area: Rect, team: &TeamScore) {
    let title = match &team.owner {
        Some(owner) => format!("{} ({}) {:.2}", team.team, owner, team.points),
        None => format!("{} {:.2}", team.team, team.points),
    };
    let paragraph = Paragraph::new(team_lines(team))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// Starters, then bench, one line per player.
pub fn team_lines(team: &TeamScore) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("Starters", heading))];
    lines.extend(team.starters.iter().map(player_line));
    if !team.bench.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Bench", heading)));
        lines.extend(team.bench.iter().map(player_line));
    }
    lines
}

/// One player: position, name, team, points, then status markers.
pub fn player_line(player: &PlayerLine) -> Line<'static> {
    let Some(name) = &player.name else {
        return Line::from(Span::styled(
            "  --   (empty)",
            Style::default().fg(Color::DarkGray),
        ));
    };

    let name_style = if player.not_on_roster {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!("  {:<4}", player.position), Style::default().fg(Color::Cyan)),
        Span::styled(name.clone(), name_style),
        Span::styled(format!(" {}", player.team), Style::default().fg(Color::Gray)),
        Span::styled(format!(" {:.2}", player.points), Style::default().fg(Color::Yellow)),
    ];
    if player.live {
        spans.push(Span::styled(" ●", Style::default().fg(Color::Green)));
    }
    if let Some(injury) = &player.injury {
        spans.push(Span::styled(format!(" {injury}"), Style::default().fg(Color::Red)));
    }
    if player.on_bye {
        spans.push(Span::styled(" BYE", Style::default().fg(Color::Magenta)));
    }
    if player.not_on_roster {
        spans.push(Span::styled(" (dropped)", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::TabId;
    use crate::tui::tests::{loaded_state, player, team};
    use crate::tui::widgets::buffer_text;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn player_line_with_markers() {
        let mut p = player("Runner One", 14.3);
        p.live = true;
        p.injury = Some("Q".into());
        p.on_bye = true;
        p.not_on_roster = true;
        assert_eq!(
            line_text(&player_line(&p)),
            "  RB  Runner One SF 14.30 ● Q BYE (dropped)"
        );
        assert!(player_line(&p).spans[1]
            .style
            .add_modifier
            .contains(Modifier::ITALIC));
    }

    #[test]
    fn empty_slot_line() {
        let mut p = player("x", 0.0);
        p.name = None;
        assert_eq!(line_text(&player_line(&p)), "  --   (empty)");
    }

    #[test]
    fn team_lines_group_starters_and_bench() {
        let lines = team_lines(&team(1, "Gang", 20.0));
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts[0], "Starters");
        assert!(texts[1].contains("Runner One"));
        assert_eq!(texts[2], "");
        assert_eq!(texts[3], "Bench");
        assert!(texts[4].contains("Bench Guy"));
    }

    #[test]
    fn team_lines_omit_empty_bench() {
        let mut t = team(1, "Gang", 20.0);
        t.bench.clear();
        assert_eq!(team_lines(&t).len(), 2);
    }

    #[test]
    fn render_does_not_panic_without_selection() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_shows_both_sides() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        state.active_tab = TabId::Matchups;
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Gridiron Gang 120.50"));
        assert!(text.contains("sam_k 99.25"));
    }
}
