// huddle: terminal viewer for Sleeper fantasy football leagues.

pub mod app;
pub mod protocol;
pub mod snapshot;
pub mod tui;
