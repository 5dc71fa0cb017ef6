//! Fresh deck generation.

use super::card::{Card, CardId, CharacterId, COPIES_PER_CHARACTER};

/// Build the sixty-card deck, grouped by character, all unnamed.
///
/// Card ids run from 0 upwards in character order; the result is not
/// shuffled.
///
/// ```
/// use nanjamonja::cards::{generate_deck, DECK_SIZE};
///
/// let deck = generate_deck();
/// assert_eq!(deck.len(), DECK_SIZE);
/// assert_eq!(deck[0].character.raw(), 1);
/// assert_eq!(deck[59].character.raw(), 12);
/// ```
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    CharacterId::all()
        .flat_map(|character| std::iter::repeat(character).take(COPIES_PER_CHARACTER))
        .enumerate()
        .map(|(i, character)| Card::new(CardId::new(i as u32), character))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CHARACTER_COUNT, DECK_SIZE};
    use rustc_hash::{FxHashMap, FxHashSet};

    #[test]
    fn test_deck_size() {
        assert_eq!(generate_deck().len(), DECK_SIZE);
    }

    #[test]
    fn test_unique_ids() {
        let ids: FxHashSet<_> = generate_deck().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn test_five_of_each_character() {
        let mut counts: FxHashMap<CharacterId, usize> = FxHashMap::default();
        for card in generate_deck() {
            *counts.entry(card.character).or_default() += 1;
        }
        assert_eq!(counts.len(), CHARACTER_COUNT);
        assert!(counts.values().all(|&n| n == COPIES_PER_CHARACTER));
    }

    #[test]
    fn test_grouped_and_unnamed() {
        let deck = generate_deck();
        assert!(deck.iter().all(|c| c.name.is_none()));
        assert!(deck.windows(2).all(|w| w[0].character <= w[1].character));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_deck(), generate_deck());
    }
}
