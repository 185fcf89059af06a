// Position requirements derived from a league's lineup template.
//
// The template is an ordered list of slot tokens ("QB", "RB", "RB", "FLEX",
// ..., "BN"). Duplicates are meaningful: two "RB" tokens are two RB slots.
// Requirements keep the order in which each distinct token first appears.

use std::fmt;

use crate::league::Position;

/// What a lineup slot accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Exactly one scoring position.
    Position(Position),
    /// Any RB, WR or TE.
    Flex,
    /// A token no scoring position can fill (bench, IDP, super-flex, ...).
    Other(String),
}

impl SlotKind {
    /// Parse a template token.
    pub fn from_token(token: &str) -> Self {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("FLEX") {
            return SlotKind::Flex;
        }
        match Position::from_str_pos(trimmed) {
            Some(pos) => SlotKind::Position(pos),
            None => SlotKind::Other(trimmed.to_string()),
        }
    }

    /// Whether a player at `position` may fill this slot.
    pub fn accepts(&self, position: Position) -> bool {
        match self {
            SlotKind::Position(Position::Unknown) => false,
            SlotKind::Position(slot) => *slot == position,
            SlotKind::Flex => position.is_flex_eligible(),
            SlotKind::Other(_) => false,
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Position(pos) => write!(f, "{pos}"),
            SlotKind::Flex => write!(f, "FLEX"),
            SlotKind::Other(token) => write!(f, "{token}"),
        }
    }
}

/// The number of slots required for one kind of position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub slot: SlotKind,
    pub count: usize,
}

/// Slot counts per position, in first-seen template order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionRequirements {
    requirements: Vec<Requirement>,
}

impl PositionRequirements {
    /// Count the slots in a lineup template.
    pub fn from_template<S: AsRef<str>>(template: &[S]) -> Self {
        let mut requirements: Vec<Requirement> = Vec::new();

        for token in template {
            let slot = SlotKind::from_token(token.as_ref());
            match requirements.iter_mut().find(|r| r.slot == slot) {
                Some(existing) => existing.count += 1,
                None => requirements.push(Requirement { slot, count: 1 }),
            }
        }

        PositionRequirements { requirements }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    /// Slot count for a kind, zero when the template never mentions it.
    pub fn count(&self, slot: &SlotKind) -> usize {
        self.requirements
            .iter()
            .find(|r| &r.slot == slot)
            .map_or(0, |r| r.count)
    }

    /// Total slots across all requirements.
    pub fn total_slots(&self) -> usize {
        self.requirements.iter().map(|r| r.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}
