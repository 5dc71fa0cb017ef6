//! Player-name input handling for game setup.

pub use crate::core::MAX_PLAYERS;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// Split a comma-separated list of names, trimming and dropping blanks.
///
/// ```
/// use nanjamonja::game::parse_player_names;
///
/// assert_eq!(parse_player_names(" Alice, Bob ,, "), vec!["Alice", "Bob"]);
/// ```
#[must_use]
pub fn parse_player_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `names` can seat a game: between [`MIN_PLAYERS`] and
/// [`MAX_PLAYERS`] non-blank names.
#[must_use]
pub fn can_start<S: AsRef<str>>(names: &[S]) -> bool {
    let count = names.iter().filter(|n| !n.as_ref().trim().is_empty()).count();
    (MIN_PLAYERS..=MAX_PLAYERS).contains(&count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_player_names() {
        assert_eq!(parse_player_names("Player1,Player2"), vec!["Player1", "Player2"]);
        assert!(parse_player_names("").is_empty());
        assert!(parse_player_names(" , ,").is_empty());
    }

    #[test]
    fn test_can_start() {
        assert!(can_start(&["a", "b"]));
        assert!(!can_start(&["a"]));
        assert!(!can_start(&["a", "  "]));

        let full: Vec<String> = (0..MAX_PLAYERS).map(|i| format!("p{i}")).collect();
        assert!(can_start(&full));
        let crowded: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!("p{i}")).collect();
        assert!(!can_start(&crowded));
    }
}
