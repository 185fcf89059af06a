// League members and their display labels.

use serde::{Deserialize, Serialize};

use super::first_present;

/// A platform user, either looked up by name or listed as a league member.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Per-league metadata; only present on league member listings.
    #[serde(default)]
    pub metadata: Option<UserMetadata>,
}

/// The known keys of the per-league metadata bag. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl User {
    fn team_name(&self) -> Option<&str> {
        first_present([self.metadata.as_ref().and_then(|m| m.team_name.as_deref())])
    }

    /// The user's own name: display name, then username.
    pub fn name(&self) -> Option<&str> {
        first_present([self.display_name.as_deref(), self.username.as_deref()])
    }

    /// Primary label for a team: team name, display name, username.
    pub fn team_label(&self) -> &str {
        first_present([self.team_name(), self.name()]).unwrap_or(UNKNOWN_TEAM)
    }

    /// Secondary label, shown under the team name only when the team has one.
    pub fn owner_label(&self) -> Option<&str> {
        self.team_name().and_then(|_| self.name())
    }
}

/// Label used when a roster has no known owner.
pub const UNKNOWN_TEAM: &str = "Unknown";

/// Primary team label for an optional owner.
pub fn team_label(user: Option<&User>) -> &str {
    user.map(User::team_label).unwrap_or(UNKNOWN_TEAM)
}
