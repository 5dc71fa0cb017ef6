//! Error types.
//!
//! `Rejection` explains why an engine command was a no-op. Commands report
//! it through their `try_` forms; the plain forms collapse it to a
//! `bool`/`Option` and log the reason.
//!
//! `SettingsError` covers loading and saving the persisted settings record.

use thiserror::Error;

use crate::cards::CharacterId;
use crate::core::PlayerId;

/// A command whose preconditions were not met. No state was changed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The command needs a face-up card and there is none.
    #[error("no card is face-up")]
    NoFaceUpCard,

    /// The face-up card's character has not been named yet.
    #[error("face-up card has no name yet")]
    UnnamedCard,

    /// The player id does not belong to this session.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// The character already has a name.
    #[error("character {0} is already named")]
    AlreadyNamed(CharacterId),

    /// The proposed name is empty after trimming.
    #[error("name is blank")]
    BlankName,

    /// A card is already face-up; resolve it before flipping another.
    #[error("a card is already face-up")]
    CardAlreadyFaceUp,

    /// The session is not in progress.
    #[error("game is not in progress")]
    NotInProgress,

    /// The session has no players.
    #[error("no players are seated")]
    NoPlayers,
}

/// Failure to load or persist settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    /// Stored record was written by an incompatible version.
    #[error("unsupported settings version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("no settings directory available on this platform")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let fox = CharacterId::new(4).unwrap();
        assert_eq!(Rejection::AlreadyNamed(fox).to_string(), "character #4 is already named");
        assert_eq!(
            Rejection::UnknownPlayer(PlayerId::new(9)).to_string(),
            "unknown player: player-9"
        );
    }

    #[test]
    fn test_settings_error_from_json() {
        let err: SettingsError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, SettingsError::Json(_)));
        assert!(err.to_string().starts_with("settings JSON is invalid"));
    }
}
