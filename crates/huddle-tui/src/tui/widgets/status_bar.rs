// Status bar widget: league, week, live status, tab indicator.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::{LiveSummary, TabId};
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [league] [week] [live indicator] | [tab bar] [loading/notice]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    let league = match &state.league {
        Some(league) if league.best_ball => format!(" {} {} (best ball)", league.name, league.season),
        Some(league) => format!(" {} {}", league.name, league.season),
        None => " Huddle".to_string(),
    };
    spans.push(Span::styled(
        league,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    if let Some(week) = &state.week {
        spans.push(Span::styled(
            format!(" | Week {}", week.week),
            Style::default().fg(Color::White),
        ));
    }

    if state.active_tab == TabId::Matchups {
        let (text, color) = live_indicator(&state.live);
        spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(text, Style::default().fg(color)));
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));

    if let Some(loading) = &state.loading {
        spans.push(Span::styled(loading.clone(), Style::default().fg(Color::Yellow)));
    } else if let Some(notice) = &state.notice {
        spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Live team count with the local time of the last refresh.
pub fn live_indicator(live: &LiveSummary) -> (String, Color) {
    let Some(refreshed) = live.refreshed_at else {
        return ("● live: --".to_string(), Color::DarkGray);
    };
    let at = refreshed.with_timezone(&Local).format("%H:%M");
    if live.teams_playing == 0 {
        (format!("● no games live ({at})"), Color::Gray)
    } else {
        (format!("● {} teams live ({at})", live.teams_playing), Color::Green)
    }
}

/// Build tab indicator spans with the active tab highlighted.
/// E.g. "[1:Standings] [2:Matchups]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [TabId::Standings, TabId::Matchups];

    let mut spans = Vec::new();
    for (i, tab_id) in tabs.into_iter().enumerate() {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, tab_id.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::tui::tests::loaded_state;
    use crate::tui::widgets::buffer_text;

    #[test]
    fn live_indicator_before_first_refresh() {
        let (text, color) = live_indicator(&LiveSummary::default());
        assert_eq!(text, "● live: --");
        assert_eq!(color, Color::DarkGray);
    }

    #[test]
    fn live_indicator_counts_teams() {
        let live = LiveSummary {
            teams_playing: 6,
            refreshed_at: Some(Utc::now()),
        };
        let (text, color) = live_indicator(&live);
        assert!(text.starts_with("● 6 teams live ("));
        assert_eq!(color, Color::Green);

        let quiet = LiveSummary {
            teams_playing: 0,
            ..live
        };
        assert!(live_indicator(&quiet).0.starts_with("● no games live"));
    }

    #[test]
    fn tab_spans_highlight_active() {
        let spans = tab_spans(TabId::Matchups);
        // 0=[1:Standings], 1=" ", 2=[2:Matchups]
        assert!(spans[2].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn tab_spans_contain_labels() {
        let spans = tab_spans(TabId::Standings);
        let labels: Vec<&str> = spans
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 2 == 0)
            .map(|(_, s)| s.content.as_ref())
            .collect();
        assert_eq!(labels, vec!["[1:Standings]", "[2:Matchups]"]);
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_shows_league_and_week() {
        let backend = ratatui::backend::TestBackend::new(120, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = loaded_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Sunday Scaries 2024 (best ball)"));
        assert!(text.contains("Week 5"));
    }
}
