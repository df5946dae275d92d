use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Street};
use crate::domain::{SeatIndex, Table, SEAT_COUNT};
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::from_left_of_button;
use crate::engine::pot::Pot;
use crate::eval::evaluate_best_hand;

/// Итог одного места в завершённой раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatResult {
    pub seat: SeatIndex,
    /// Ранг руки, если место дошло до шоудауна.
    pub rank: Option<HandRank>,
    /// Выигрыш (+) / проигрыш (−) относительно стека на старте раздачи.
    pub net: i64,
    pub is_winner: bool,
}

/// Итог завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandOutcome {
    pub street_reached: Street,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// Возврат неуравненной части ставки (seat, сумма).
    pub uncalled: Option<(SeatIndex, Chips)>,
    /// Кто сколько получил из банка.
    pub awards: Vec<(SeatIndex, Chips)>,
    /// Результаты по всем шести местам, по возрастанию seat.
    pub results: Vec<SeatResult>,
}

impl HandOutcome {
    pub fn winners(&self) -> Vec<SeatIndex> {
        self.awards.iter().map(|(seat, _)| *seat).collect()
    }

    pub fn net_for(&self, seat: SeatIndex) -> i64 {
        self.results
            .iter()
            .find(|r| r.seat == seat)
            .map(|r| r.net)
            .unwrap_or(0)
    }
}

/// Остался один игрок в раздаче – он забирает весь банк без вскрытия.
pub fn award_uncontested(table: &mut Table, pot: &Pot, history: &mut HandHistory) -> HandOutcome {
    let winner = table
        .seats
        .iter()
        .find(|s| s.in_hand)
        .map(|s| s.index)
        .unwrap_or(table.button);

    table.seat_mut(winner).stack += pot.total;
    history.push(HandEventKind::PotAwarded {
        seat: winner,
        amount: pot.total,
    });

    build_outcome(table, pot, None, vec![(winner, pot.total)], &[])
}

/// Шоудаун: возврат неуравненного, оценка рук, раздел одного общего банка.
///
/// Сайд-поты не считаются: при нескольких разных олл-инах короткий стек
/// может выиграть больше, чем уравнял.
pub fn settle_showdown(
    table: &mut Table,
    hole_cards: &[[Card; 2]; SEAT_COUNT],
    pot: &Pot,
    history: &mut HandHistory,
) -> HandOutcome {
    let uncalled = return_uncalled(table);
    if let Some((seat, amount)) = uncalled {
        table.seat_mut(seat).stack += amount;
        history.push(HandEventKind::UncalledReturned { seat, amount });
    }
    let distributable = pot.contested(uncalled.map(|(_, amount)| amount));

    let mut ranks: Vec<(SeatIndex, HandRank)> = Vec::new();
    for seat in from_left_of_button(table) {
        if !table.seat(seat).in_hand {
            continue;
        }
        let hole = hole_cards[seat as usize];
        let rank = evaluate_best_hand(&hole, &table.board);
        history.push(HandEventKind::ShowdownReveal {
            seat,
            hole_cards: hole,
            rank,
        });
        ranks.push((seat, rank));
    }

    let best = ranks.iter().map(|(_, r)| *r).max();
    // Уже в порядке "слева от кнопки" – так раздаются лишние фишки.
    let winners: Vec<SeatIndex> = ranks
        .iter()
        .filter(|(_, r)| Some(*r) == best)
        .map(|(seat, _)| *seat)
        .collect();

    let shares = Pot::split(distributable, winners.len());
    let mut awards = Vec::with_capacity(winners.len());
    for (&seat, prize) in winners.iter().zip(shares) {
        table.seat_mut(seat).stack += prize;
        history.push(HandEventKind::PotAwarded { seat, amount: prize });
        awards.push((seat, prize));
    }

    build_outcome(table, pot, uncalled, awards, &ranks)
}

/// Часть самого большого вклада, которую никто не уравнял.
fn return_uncalled(table: &Table) -> Option<(SeatIndex, Chips)> {
    let mut by_contribution: Vec<(Chips, SeatIndex)> = table
        .seats
        .iter()
        .map(|s| (s.contributed, s.index))
        .collect();
    by_contribution.sort_by(|a, b| b.cmp(a));

    let (top, seat) = by_contribution[0];
    let second = by_contribution[1].0;
    let excess = top - second;

    if excess.is_zero() || !table.seat(seat).in_hand {
        None
    } else {
        Some((seat, excess))
    }
}

fn build_outcome(
    table: &Table,
    pot: &Pot,
    uncalled: Option<(SeatIndex, Chips)>,
    awards: Vec<(SeatIndex, Chips)>,
    ranks: &[(SeatIndex, HandRank)],
) -> HandOutcome {
    let results = table
        .seats
        .iter()
        .map(|s| SeatResult {
            seat: s.index,
            rank: ranks.iter().find(|(seat, _)| *seat == s.index).map(|(_, r)| *r),
            net: s.stack.signed_diff(s.starting_stack),
            is_winner: awards.iter().any(|(seat, _)| *seat == s.index),
        })
        .collect();

    HandOutcome {
        street_reached: table.street,
        board: table.board.clone(),
        total_pot: pot.total,
        uncalled,
        awards,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Rank, Suit};
    use crate::domain::seat::{Role, Seat};

    fn table_with_contributions(contributed: [u64; SEAT_COUNT], in_hand: [bool; SEAT_COUNT]) -> Table {
        let seats: [Seat; SEAT_COUNT] = core::array::from_fn(|i| {
            let mut seat = Seat::new(i as SeatIndex, format!("P{i}"), Chips(1000), Role::CLOCKWISE[i]);
            seat.stack = Chips(1000 - contributed[i]);
            seat.contributed = Chips(contributed[i]);
            seat.in_hand = in_hand[i];
            seat
        });
        Table::new(seats, 0)
    }

    fn low_hole_cards() -> [[Card; 2]; SEAT_COUNT] {
        core::array::from_fn(|i| {
            [
                Card::new(Rank::ALL[i], Suit::Hearts),
                Card::new(Rank::ALL[i], Suit::Diamonds),
            ]
        })
    }

    #[test]
    fn odd_chip_goes_to_first_winner_left_of_button() {
        let mut table = table_with_contributions([0, 30, 30, 1, 0, 0], [false, true, true, false, false, false]);
        table.board = ["As", "Ks", "Qs", "Js", "Ts"]
            .iter()
            .map(|c| c.parse().expect("карта"))
            .collect();
        let mut pot = Pot::new();
        pot.add(Chips(61));
        let mut history = HandHistory::new();

        let outcome = settle_showdown(&mut table, &low_hole_cards(), &pot, &mut history);

        assert_eq!(outcome.uncalled, None);
        assert_eq!(outcome.awards, vec![(1, Chips(31)), (2, Chips(30))]);
        assert_eq!(outcome.net_for(1), 1);
        assert_eq!(outcome.net_for(2), 0);
        assert_eq!(outcome.net_for(3), -1);
        assert_eq!(outcome.results.iter().map(|r| r.net).sum::<i64>(), 0);
    }

    #[test]
    fn folded_top_contributor_gets_nothing_back() {
        let table = table_with_contributions([200, 40, 40, 0, 0, 0], [false, true, true, true, true, true]);
        assert_eq!(return_uncalled(&table), None);

        let table = table_with_contributions([200, 40, 40, 0, 0, 0], [true, true, true, true, true, true]);
        assert_eq!(return_uncalled(&table), Some((0, Chips(160))));
    }
}
