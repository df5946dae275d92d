use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::{HandRank, Street};
use crate::domain::SeatIndex;
use crate::engine::actions::ActionKind;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась, кнопка определена.
    HandStarted { button: SeatIndex },

    /// Блайнды (реально списанные суммы, могут быть меньше номинала).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: [Card; 2] },

    /// Действие игрока (уже нормализованное).
    PlayerActed {
        seat: SeatIndex,
        action: ActionKind,
        amount: Chips,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Переход на новую улицу; `board` – весь борд после открытия.
    StreetChanged { street: Street, board: Vec<Card> },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        hole_cards: [Card; 2],
        rank: HandRank,
    },

    /// Неуравненная часть ставки вернулась владельцу.
    UncalledReturned { seat: SeatIndex, amount: Chips },

    /// Выплата из банка.
    PotAwarded { seat: SeatIndex, amount: Chips },

    /// Раздача завершена.
    HandFinished { street_reached: Street },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Полная история раздачи (append-only).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(HandEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
