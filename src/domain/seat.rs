use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Позиция за шестимаксовым столом. Порядок – по часовой стрелке от кнопки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    #[serde(rename = "BTN")]
    Button,
    #[serde(rename = "SB")]
    SmallBlind,
    #[serde(rename = "BB")]
    BigBlind,
    #[serde(rename = "UTG")]
    UnderTheGun,
    #[serde(rename = "MP")]
    Middle,
    #[serde(rename = "CO")]
    Cutoff,
}

impl Role {
    /// Роли в порядке рассадки от кнопки.
    pub const CLOCKWISE: [Role; 6] = [
        Role::Button,
        Role::SmallBlind,
        Role::BigBlind,
        Role::UnderTheGun,
        Role::Middle,
        Role::Cutoff,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            Role::Button => "BTN",
            Role::SmallBlind => "SB",
            Role::BigBlind => "BB",
            Role::UnderTheGun => "UTG",
            Role::Middle => "MP",
            Role::Cutoff => "CO",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.short_name())
    }
}

/// Место за столом в контексте одной раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub index: SeatIndex,
    /// Отображаемое имя.
    pub name: String,
    /// Текущий стек.
    pub stack: Chips,
    /// Стек на момент старта раздачи (до блайндов).
    pub starting_stack: Chips,
    pub role: Role,
    /// true, пока игрок не сфолдил.
    pub in_hand: bool,
    /// Ставка на текущей улице (обнуляется на каждой новой улице).
    pub committed: Chips,
    /// Сколько всего внесено в банк за раздачу.
    pub contributed: Chips,
}

impl Seat {
    pub fn new(index: SeatIndex, name: String, stack: Chips, role: Role) -> Self {
        Self {
            index,
            name,
            stack,
            starting_stack: stack,
            role,
            in_hand: true,
            committed: Chips::ZERO,
            contributed: Chips::ZERO,
        }
    }

    /// Может ли игрок ещё что-то делать на улице (в раздаче и есть фишки).
    pub fn can_act(&self) -> bool {
        self.in_hand && !self.stack.is_zero()
    }

    /// Сколько нужно доплатить до `target`.
    pub fn to_call(&self, target: Chips) -> Chips {
        target.saturating_sub(self.committed)
    }

    /// Списать фишки со стека в ставку. Возвращает реально списанное (не больше стека).
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.committed += real;
        self.contributed += real;
        real
    }
}
