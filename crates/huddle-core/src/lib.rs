// huddle-core: Sleeper league data model, scoring and lineup resolution,
// live game tracking, and the read clients that feed them.

pub mod config;
pub mod error;
pub mod http;
pub mod league;
pub mod live;
pub mod scoring;
pub mod session;
pub mod sleeper;
pub mod view;
