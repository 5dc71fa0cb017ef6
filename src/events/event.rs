//! Game event records.
//!
//! Each notable occurrence (session start, flip, naming, claim, turn change,
//! game over) becomes one immutable `GameEvent`. The kind carries the
//! payload that matters for that occurrence; `Display` renders the one-line
//! message shown in history views.

use serde::{Deserialize, Serialize};

use crate::cards::CharacterId;
use crate::core::{Player, PlayerId, Timestamp};

/// Player identity captured at the moment of the event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

impl From<&Player> for PlayerRef {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id(),
            name: player.name().to_string(),
        }
    }
}

/// What happened, with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    GameStarted {
        player_names: Vec<String>,
    },
    CardFlipped {
        character: CharacterId,
        /// Registered name at flip time; `None` marks a first sighting.
        character_name: Option<String>,
    },
    NameRegistered {
        /// Player whose turn it was, if any are seated.
        player: Option<PlayerRef>,
        character: CharacterId,
        character_name: String,
    },
    CardClaimed {
        player: PlayerRef,
        character: CharacterId,
        character_name: String,
        cards_won: usize,
    },
    TurnChanged {
        player: PlayerRef,
    },
    GameOver {
        winner: Option<PlayerRef>,
        final_score: usize,
    },
}

impl EventKind {
    /// Stable snake_case identifier, as used in the serialized `type` tag.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            EventKind::GameStarted { .. } => "game_started",
            EventKind::CardFlipped { .. } => "card_flipped",
            EventKind::NameRegistered { .. } => "name_registered",
            EventKind::CardClaimed { .. } => "card_claimed",
            EventKind::TurnChanged { .. } => "turn_changed",
            EventKind::GameOver { .. } => "game_over",
        }
    }

    /// Title-case label for history views.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::GameStarted { .. } => "Game Started",
            EventKind::CardFlipped { .. } => "Card Flipped",
            EventKind::NameRegistered { .. } => "Name Registered",
            EventKind::CardClaimed { .. } => "Card Claimed",
            EventKind::TurnChanged { .. } => "Turn Changed",
            EventKind::GameOver { .. } => "Game Over",
        }
    }

    /// The acting or affected player, when the kind has one.
    #[must_use]
    pub fn player(&self) -> Option<&PlayerRef> {
        match self {
            EventKind::NameRegistered { player, .. } => player.as_ref(),
            EventKind::CardClaimed { player, .. } | EventKind::TurnChanged { player } => Some(player),
            EventKind::GameOver { winner, .. } => winner.as_ref(),
            EventKind::GameStarted { .. } | EventKind::CardFlipped { .. } => None,
        }
    }

    /// The character involved, when the kind has one.
    #[must_use]
    pub fn character(&self) -> Option<CharacterId> {
        match self {
            EventKind::CardFlipped { character, .. }
            | EventKind::NameRegistered { character, .. }
            | EventKind::CardClaimed { character, .. } => Some(*character),
            _ => None,
        }
    }
}

/// An entry in the event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Strictly increasing within a log; first event is 1.
    pub id: u64,
    pub timestamp: Timestamp,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            EventKind::GameStarted { player_names } => {
                write!(f, "Game started with {} players", player_names.len())
            }
            EventKind::CardFlipped {
                character,
                character_name: Some(name),
            } => write!(f, "Character {} flipped (\"{}\")", character, name),
            EventKind::CardFlipped {
                character,
                character_name: None,
            } => write!(f, "Character {} flipped (new!)", character),
            EventKind::NameRegistered {
                player,
                character,
                character_name,
            } => {
                let who = player.as_ref().map_or("Someone", |p| p.name.as_str());
                write!(f, "{} named character {} as \"{}\"", who, character, character_name)
            }
            EventKind::CardClaimed {
                player,
                character_name,
                cards_won,
                ..
            } => write!(f, "{} claimed \"{}\" (+{} cards)", player.name, character_name, cards_won),
            EventKind::TurnChanged { player } => write!(f, "{}'s turn", player.name),
            EventKind::GameOver {
                winner: Some(winner),
                final_score,
            } => write!(f, "Game Over! Winner: {} ({} points)", winner.name, final_score),
            EventKind::GameOver { winner: None, .. } => write!(f, "Game Over! No winner"),
        }
    }
}
