use crate::domain::card::{Card, Rank};
use crate::domain::hand::HandRank;

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Лучшая 5-карточная рука из hole + board.
///
/// Работает для любых 5–7 карт суммарно; на шоудауне это всегда 2 + 5.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&all_cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт, получено {}",
        all_cards.len()
    );

    best_of_all_5card_combinations(&all_cards)
}

/// Перебираем все C(n, 5) комбинаций (не больше 21) и берём максимум.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best = HandRank(0);

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        best = best.max(evaluate_5card_hand(&five));
                    }
                }
            }
        }
    }

    best
}

/// Оценка строго 5-карточной комбинации.
fn evaluate_5card_hand(cards: &[Card; 5]) -> HandRank {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // используем 2..=14
    let mut rank_mask: RankMask = 0;

    for card in cards {
        suit_counts[card.suit.index()] += 1;
        rank_counts[card.rank as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    let is_flush = suit_counts.contains(&5);
    let straight_high = detect_straight(rank_mask);

    // (count, rank), отсортировано по count desc, затем по rank desc.
    let mut groups: Vec<(u8, Rank)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[**r as usize] > 0)
        .map(|r| (rank_counts[*r as usize], *r))
        .collect();
    groups.sort_by(|a, b| b.cmp(a));

    let pattern: Vec<u8> = groups.iter().map(|(count, _)| *count).collect();
    let ordered: Vec<Rank> = groups.iter().map(|(_, rank)| *rank).collect();

    let category = match (is_flush, straight_high, pattern.as_slice()) {
        (true, Some(high), _) => {
            return HandRank::from_category_and_ranks(HandCategory::StraightFlush, &[high]);
        }
        (_, _, [4, 1]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (true, None, _) => HandCategory::Flush,
        (false, Some(high), _) => {
            return HandRank::from_category_and_ranks(HandCategory::Straight, &[high]);
        }
        (_, _, [3, 1, 1]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, 1]) => HandCategory::TwoPair,
        (_, _, [2, 1, 1, 1]) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::from_category_and_ranks(category, &ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse().expect("валидная карта"))
            .collect()
    }

    #[test]
    fn picks_best_five_of_seven() {
        let rank = evaluate_best_hand(&cards("Ah Kh"), &cards("Qh Jh Th 2c 2d"));
        assert_eq!(rank.category(), HandCategory::StraightFlush);
        assert_eq!(rank.ranks(), vec![Rank::Ace]);
    }

    #[test]
    fn wheel_loses_to_six_high_straight() {
        let wheel = evaluate_best_hand(&cards("Ac 2d"), &cards("3h 4s 5c Kd Qd"));
        let six_high = evaluate_best_hand(&cards("6c 2d"), &cards("3h 4s 5c Kd Qd"));
        assert_eq!(wheel.category(), HandCategory::Straight);
        assert!(six_high > wheel);
    }

    #[test]
    fn full_house_orders_trips_before_pair() {
        let rank = evaluate_best_hand(&cards("7c 7d"), &cards("Kh Ks 7h 2c 3d"));
        assert_eq!(rank.category(), HandCategory::FullHouse);
        assert_eq!(rank.ranks(), vec![Rank::Seven, Rank::King]);
    }
}
