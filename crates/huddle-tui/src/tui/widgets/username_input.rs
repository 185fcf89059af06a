// Username entry widget: asks for the Sleeper user whose leagues to list.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let typed = state.username_input.as_deref().unwrap_or_default();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Sleeper username: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{typed}_"),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Your leagues for the current season are listed next.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Find your leagues"),
    );
    frame.render_widget(paragraph, area);
}
