// TUI widget modules for each screen panel.

pub mod help_bar;
pub mod league_picker;
pub mod matchup_detail;
pub mod matchups;
pub mod standings;
pub mod status_bar;
pub mod username_input;

/// Render a whole buffer as one string, row after row. Test helper.
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}
