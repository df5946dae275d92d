use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Состояние раунда ставок на текущей улице.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Уровень ставки, до которого должен дотянуться каждый игрок в раздаче.
    pub last_raise_to: Chips,
    /// Очередь: кто ещё должен походить на этой улице, по кругу.
    pub to_act: Vec<SeatIndex>,
}

impl BettingState {
    pub fn new(last_raise_to: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            last_raise_to,
            to_act,
        }
    }

    /// Убрать seat из очереди.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Повышение уровня ставки: очередь пересобирается (её формирует engine).
    pub fn on_raise(&mut self, new_level: Chips, new_to_act: Vec<SeatIndex>) {
        self.last_raise_to = new_level;
        self.to_act = new_to_act;
    }

    pub fn next_to_act(&self) -> Option<SeatIndex> {
        self.to_act.first().copied()
    }

    pub fn everyone_acted(&self) -> bool {
        self.to_act.is_empty()
    }
}
