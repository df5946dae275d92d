use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::EngineConfig;
use crate::domain::deck::Deck;
use crate::domain::hand::Street;
use crate::domain::seat::{Role, Seat};
use crate::domain::table::Table;
use crate::domain::{SeatIndex, SEAT_COUNT};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::betting::BettingState;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{actors_after, clockwise_after, from_left_of_button};
use crate::engine::pot::Pot;
use crate::engine::showdown::{award_uncontested, settle_showdown, HandOutcome};
use crate::engine::RandomSource;

/// Всё состояние одной раздачи. Им владеет только `HandEngine`;
/// наружу уходят копии (`HandSnapshot`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandState {
    pub table: Table,
    pub deck: Deck,
    pub hole_cards: [[Card; 2]; SEAT_COUNT],
    pub betting: BettingState,
    pub pot: Pot,
    pub big_blind: Chips,
    /// Чей ход. None – раздача завершена.
    pub current_player: Option<SeatIndex>,
    /// Лог принятых действий (append-only).
    pub actions: Vec<Action>,
    pub history: HandHistory,
    pub is_complete: bool,
    pub outcome: Option<HandOutcome>,
}

impl HandState {
    /// Новая раздача: кнопка, роли, карманные карты, блайнды, первый ход.
    pub(crate) fn deal<R: RandomSource>(config: &EngineConfig, rng: &mut R) -> Self {
        // Кнопку выбирает перемешивание мест; роли дальше идут по часовой.
        let mut order: [SeatIndex; SEAT_COUNT] = core::array::from_fn(|i| i as SeatIndex);
        rng.shuffle(&mut order);
        let button = order[0];

        let seats: [Seat; SEAT_COUNT] = core::array::from_fn(|i| {
            let offset = (i + SEAT_COUNT - button as usize) % SEAT_COUNT;
            let setup = &config.seats[i];
            Seat::new(
                i as SeatIndex,
                setup.name.clone(),
                setup.stack,
                Role::CLOCKWISE[offset],
            )
        });

        let mut deck = Deck::standard_52();
        rng.shuffle(&mut deck.cards);

        let mut history = HandHistory::new();
        history.push(HandEventKind::HandStarted { button });

        // По две карты каждому, по кругу слева от кнопки: k-я позиция получает
        // k-ю и (k+6)-ю карту колоды.
        let dealt = deck.draw_n(2 * SEAT_COUNT);
        let hole_cards: [[Card; 2]; SEAT_COUNT] = core::array::from_fn(|seat| {
            let k = (seat + SEAT_COUNT - button as usize - 1) % SEAT_COUNT;
            [dealt[k], dealt[k + SEAT_COUNT]]
        });
        for seat in clockwise_after(button) {
            history.push(HandEventKind::HoleCardsDealt {
                seat,
                cards: hole_cards[seat as usize],
            });
        }

        let mut state = HandState {
            table: Table::new(seats, button),
            deck,
            hole_cards,
            betting: BettingState::default(),
            pot: Pot::new(),
            big_blind: config.big_blind,
            current_player: None,
            actions: Vec::new(),
            history,
            is_complete: false,
            outcome: None,
        };

        state.post_blinds(config.small_blind(), config.big_blind);

        debug!(
            "new hand: button=Seat{} pot={} first to act={:?}",
            button, state.pot.total, state.current_player
        );
        state
    }

    /// Блайнды, урезанные до стека. Уровень ставки = наибольший реально поставленный блайнд.
    fn post_blinds(&mut self, small_blind: Chips, big_blind: Chips) {
        let sb_seat = self.table.seat_with_role(Role::SmallBlind);
        let bb_seat = self.table.seat_with_role(Role::BigBlind);

        let sb_paid = self.table.seat_mut(sb_seat).commit(small_blind);
        self.pot.add(sb_paid);
        let bb_paid = self.table.seat_mut(bb_seat).commit(big_blind);
        self.pot.add(bb_paid);

        self.history.push(HandEventKind::BlindsPosted {
            small_blind: (sb_seat, sb_paid),
            big_blind: (bb_seat, bb_paid),
        });

        // Префлоп: первым ходит место после BB, BB – последним.
        let to_act: Vec<SeatIndex> = actors_after(&self.table, bb_seat)
            .into_iter()
            .chain(self.table.seat(bb_seat).can_act().then_some(bb_seat))
            .collect();
        // BB со стеком меньше SB: уровнем остаётся ставка SB, иначе SB не уравнен.
        self.betting = BettingState::new(sb_paid.max(bb_paid), to_act);
        self.current_player = self.betting.next_to_act();
    }

    /// Применить уже проверенное и нормализованное действие текущего игрока.
    pub(crate) fn apply(&mut self, seat: SeatIndex, kind: ActionKind, amount: Chips) {
        let street = self.table.street;
        let level_before = self.betting.last_raise_to;

        let player = self.table.seat_mut(seat);
        match kind {
            ActionKind::Fold => player.in_hand = false,
            _ => {
                let moved = player.commit(amount);
                debug_assert_eq!(moved, amount);
            }
        }
        let committed = player.committed;
        let new_stack = player.stack;
        self.pot.add(amount);

        // BET/RAISE всегда задают новый уровень; олл-ин – только если перекрыл текущий.
        let raises_level = match kind {
            ActionKind::Bet | ActionKind::Raise => true,
            ActionKind::AllIn => committed > level_before,
            _ => false,
        };
        if raises_level {
            let reopened = actors_after(&self.table, seat);
            self.betting.on_raise(committed, reopened);
        } else {
            self.betting.mark_acted(seat);
        }

        self.actions.push(Action {
            seat,
            street,
            kind,
            amount,
        });
        self.history.push(HandEventKind::PlayerActed {
            seat,
            action: kind,
            amount,
            new_stack,
            pot_after: self.pot.total,
        });
        trace!("Seat{seat} {kind} {amount} (pot {})", self.pot.total);

        self.progress();
    }

    /// Закрыта ли улица: все, кто мог, походили, и каждый в раздаче
    /// либо уравнял уровень, либо в олл-ине.
    pub fn street_closed(&self) -> bool {
        let level = self.betting.last_raise_to;
        self.betting.everyone_acted()
            && self
                .table
                .seats
                .iter()
                .filter(|s| s.in_hand)
                .all(|s| s.committed == level || s.stack.is_zero())
    }

    /// Передать ход / закрыть улицу / завершить раздачу.
    fn progress(&mut self) {
        if self.table.in_hand_count() <= 1 {
            let outcome = award_uncontested(&mut self.table, &self.pot, &mut self.history);
            self.finish(outcome);
            return;
        }

        if !self.street_closed() {
            self.current_player = self.betting.next_to_act();
            return;
        }

        // Улица закрыта. Если ставить больше некому (все, кроме максимум одного,
        // в олл-ине) – докладываем борд до ривера без торговли.
        loop {
            let Some(next) = self.table.street.next() else {
                let outcome =
                    settle_showdown(&mut self.table, &self.hole_cards, &self.pot, &mut self.history);
                self.finish(outcome);
                return;
            };

            self.open_street(next);
            if self.table.can_act_count() >= 2 {
                self.current_player = self.betting.next_to_act();
                return;
            }
        }
    }

    /// Открыть карты улицы и сбросить ставки.
    fn open_street(&mut self, street: Street) {
        let cards = self.deck.draw_n(street.cards_dealt());
        self.table.board.extend(cards);
        self.table.street = street;

        for seat in self.table.seats.iter_mut() {
            seat.committed = Chips::ZERO;
        }

        // Постфлоп первым ходит первый активный слева от кнопки.
        let to_act: Vec<SeatIndex> = from_left_of_button(&self.table)
            .filter(|&seat| self.table.seat(seat).can_act())
            .collect();
        self.betting = BettingState::new(Chips::ZERO, to_act);

        self.history.push(HandEventKind::StreetChanged {
            street,
            board: self.table.board.clone(),
        });
        debug!("street -> {street}, board {:?}", self.table.board);
    }

    fn finish(&mut self, outcome: HandOutcome) {
        self.history.push(HandEventKind::HandFinished {
            street_reached: self.table.street,
        });
        debug!(
            "hand finished on {}: pot={} winners={:?}",
            self.table.street,
            self.pot.total,
            outcome.winners()
        );
        self.current_player = None;
        self.is_complete = true;
        self.outcome = Some(outcome);
    }
}
