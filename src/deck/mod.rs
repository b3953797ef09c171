use rand::Rng;

pub mod card;
pub mod parser;
pub mod shuffle;

pub use card::Card;
pub use parser::{Dialect, ParseError, Row};

/// Shuffled cards for one session. Never reordered once built.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Drops the header row, maps the rest onto cards and shuffles them.
    pub fn from_rows<R: Rng + ?Sized>(rows: Vec<Row>, rng: &mut R) -> Deck {
        let mut cards: Vec<Card> = rows.into_iter().skip(1).map(Card::from).collect();
        shuffle::shuffle(&mut cards, rng);
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    #[cfg(test)]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rows(count: usize, width: usize) -> Vec<Row> {
        (0..count)
            .map(|r| (0..width).map(|c| format!("r{}c{}", r, c)).collect())
            .collect()
    }

    #[test]
    fn header_row_is_dropped() {
        let mut rng = StdRng::seed_from_u64(4);
        for width in 1..6 {
            for data_rows in 0..8 {
                let deck = Deck::from_rows(rows(data_rows + 1, width), &mut rng);
                assert_eq!(deck.len(), data_rows);
                assert!(deck
                    .cards()
                    .iter()
                    .all(|card| card.key.as_deref() != Some("r0c0")));
            }
        }
    }

    #[test]
    fn no_rows_means_empty_deck() {
        let mut rng = StdRng::seed_from_u64(5);
        let deck = Deck::from_rows(vec![], &mut rng);
        assert!(deck.is_empty());
        assert!(deck.get(0).is_none());
    }

    #[test]
    fn keeps_every_data_row() {
        let mut rng = StdRng::seed_from_u64(6);
        let source = rows(11, 4);
        let deck = Deck::from_rows(source.clone(), &mut rng);

        let mut keys: Vec<&str> = deck
            .cards()
            .iter()
            .map(|c| c.key.as_deref().unwrap())
            .collect();
        keys.sort_unstable();
        let mut expected: Vec<&str> = source[1..].iter().map(|r| r[0].as_str()).collect();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }
}
