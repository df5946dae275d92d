use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank, Suit};

/// Колода карт: фиксированный массив + курсор "следующей неразданной карты".
///
/// Колода мешается один раз в начале раздачи, дальше карты только снимаются
/// по курсору (и для hole cards, и для борда), поэтому повторов быть не может.
/// Перемешивание делает engine (через RNG из infra), НЕ здесь.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
    next: usize,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards, next: 0 }
    }

    /// Сколько карт ещё не роздано.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Уже розданные карты (в порядке раздачи).
    pub fn dealt(&self) -> &[Card] {
        &self.cards[..self.next]
    }

    /// Взять одну карту по курсору.
    pub fn draw_one(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next).copied()?;
        self.next += 1;
        Some(card)
    }

    /// Взять n карт (или сколько осталось).
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.remaining());
        let taken = self.cards[self.next..self.next + take].to_vec();
        self.next += take;
        taken
    }
}
