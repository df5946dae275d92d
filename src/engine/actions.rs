use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex, Street};

/// Тип действия игрока.
///
/// В JSON – короткие коды, которые исторически хранит история раздач.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ActionKind {
    #[serde(rename = "f")]
    Fold,
    #[serde(rename = "x")]
    Check,
    #[serde(rename = "c")]
    Call,
    /// Bet на улице, где ещё нет ставки.
    #[serde(rename = "b")]
    Bet,
    /// Raise существующей ставки.
    #[serde(rename = "r")]
    Raise,
    /// Поставить весь стек.
    #[serde(rename = "allin")]
    AllIn,
}

impl ActionKind {
    /// Глагол для short line (без суммы).
    pub fn verb(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "allin",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Принятое движком действие. `amount` – реально перемещённые фишки
/// (после нормализации), 0 для fold/check.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub seat: SeatIndex,
    pub street: Street,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub amount: Chips,
}
