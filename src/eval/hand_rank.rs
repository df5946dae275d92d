use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::hand::HandRank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
        };
        f.write_str(s)
    }
}

impl HandRank {
    /// Собрать HandRank из категории и до 5 значимых рангов (от старшего к младшему).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Незаполненные позиции = 0, поэтому сравниваются только значимые ранги.
    pub fn from_category_and_ranks(category: HandCategory, ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5);
        let mut value = (category as u32) << 20;
        for (i, r) in ranks.iter().take(5).enumerate() {
            value |= (*r as u32) << (16 - 4 * i as u32);
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        let id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Значимые ранги (кикеры и т.п.), от старшего к младшему.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..5)
            .filter_map(|i| Rank::from_value(((self.0 >> (16 - 4 * i)) & 0x0F) as u8))
            .collect()
    }
}

/// Человеческое описание руки: "Two pair (K, 7, A)".
pub fn describe_hand(rank: HandRank) -> String {
    let ranks = rank
        .ranks()
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} ({})", rank.category(), ranks)
}
