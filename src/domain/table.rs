use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::Street;
use crate::domain::seat::{Role, Seat};
use crate::domain::{SeatIndex, SEAT_COUNT};

/// Стол одной раздачи: шесть мест, кнопка, улица и борд.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Места: индекс массива = SeatIndex.
    pub seats: [Seat; SEAT_COUNT],
    /// Место дилерской кнопки.
    pub button: SeatIndex,
    /// Текущая улица.
    pub street: Street,
    /// Общие карты борда (0, 3, 4 или 5 карт).
    pub board: Vec<Card>,
}

impl Table {
    pub fn new(seats: [Seat; SEAT_COUNT], button: SeatIndex) -> Self {
        Self {
            seats,
            button,
            street: Street::Preflop,
            board: Vec::new(),
        }
    }

    pub fn seat(&self, index: SeatIndex) -> &Seat {
        &self.seats[index as usize]
    }

    pub fn seat_mut(&mut self, index: SeatIndex) -> &mut Seat {
        &mut self.seats[index as usize]
    }

    /// Место с заданной ролью (ровно одно на раздачу).
    pub fn seat_with_role(&self, role: Role) -> SeatIndex {
        self.seats
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.index)
            .unwrap_or(self.button)
    }

    pub fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.in_hand).count()
    }

    /// Сколько игроков в раздаче ещё с фишками (могут ходить).
    pub fn can_act_count(&self) -> usize {
        self.seats.iter().filter(|s| s.can_act()).count()
    }
}
