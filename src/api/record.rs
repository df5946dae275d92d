use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::seat::Role;
use crate::domain::{HandId, SeatIndex, SEAT_COUNT};
use crate::engine::actions::Action;
use crate::engine::short_line::short_line;
use crate::engine::state::HandState;

/// Ошибки проверки записи раздачи (например, пришедшей из хранилища).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("В раздаче должно быть ровно 6 мест, а не {0}")]
    WrongSeatCount(usize),

    #[error("Роли мест должны быть ровно BTN, SB, BB, UTG, MP, CO")]
    InvalidRoles,

    #[error("Место {0} вне диапазона")]
    SeatOutOfRange(SeatIndex),

    #[error("Карта {0} встречается дважды")]
    DuplicateCard(Card),

    #[error("На борде не может быть {0} карт")]
    InvalidBoard(usize),

    #[error("Сумма результатов должна быть 0, а не {0}")]
    UnbalancedResult(i64),

    #[error("Битый JSON записи: {0}")]
    Json(String),
}

/// Место в записи раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatRecord {
    pub seat: SeatIndex,
    pub name: String,
    pub starting_stack: Chips,
    pub role: Role,
}

/// Завершённая раздача в том виде, в каком её хранит история.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub hand_id: HandId,
    pub big_blind: Chips,
    pub seats: Vec<SeatRecord>,
    pub hole_cards: BTreeMap<SeatIndex, [Card; 2]>,
    pub board: Vec<Card>,
    pub actions: Vec<Action>,
    pub short_line: String,
    pub pot: Chips,
    /// seat → чистый выигрыш/проигрыш за раздачу.
    pub result: BTreeMap<SeatIndex, i64>,
}

impl HandRecord {
    /// Собрать запись из завершённой раздачи (None, если итога ещё нет).
    pub fn from_state(hand_id: HandId, state: &HandState) -> Option<Self> {
        let outcome = state.outcome.as_ref()?;

        Some(Self {
            hand_id,
            big_blind: state.big_blind,
            seats: state
                .table
                .seats
                .iter()
                .map(|s| SeatRecord {
                    seat: s.index,
                    name: s.name.clone(),
                    starting_stack: s.starting_stack,
                    role: s.role,
                })
                .collect(),
            hole_cards: (0..SEAT_COUNT)
                .map(|i| (i as SeatIndex, state.hole_cards[i]))
                .collect(),
            board: state.table.board.clone(),
            actions: state.actions.clone(),
            short_line: short_line(&state.actions, &state.table.board),
            pot: outcome.total_pot,
            result: outcome.results.iter().map(|r| (r.seat, r.net)).collect(),
        })
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string(self).map_err(|e| RecordError::Json(e.to_string()))
    }

    /// Разобрать и сразу проверить запись.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: HandRecord =
            serde_json::from_str(json).map_err(|e| RecordError::Json(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }

    /// Структурная проверка: шесть мест, полный набор ролей, места в диапазоне,
    /// без повторов карт, борд 0/3/4/5, результаты в сумме дают ноль.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.seats.len() != SEAT_COUNT {
            return Err(RecordError::WrongSeatCount(self.seats.len()));
        }

        let mut roles: Vec<Role> = self.seats.iter().map(|s| s.role).collect();
        roles.sort();
        if roles != Role::CLOCKWISE {
            return Err(RecordError::InvalidRoles);
        }

        let seat_ids = self
            .seats
            .iter()
            .map(|s| s.seat)
            .chain(self.hole_cards.keys().copied())
            .chain(self.actions.iter().map(|a| a.seat))
            .chain(self.result.keys().copied());
        for seat in seat_ids {
            if seat as usize >= SEAT_COUNT {
                return Err(RecordError::SeatOutOfRange(seat));
            }
        }

        if !matches!(self.board.len(), 0 | 3 | 4 | 5) {
            return Err(RecordError::InvalidBoard(self.board.len()));
        }

        let mut seen = HashSet::new();
        let all_cards = self.hole_cards.values().flatten().chain(self.board.iter());
        for card in all_cards {
            if !seen.insert(*card) {
                return Err(RecordError::DuplicateCard(*card));
            }
        }

        let total: i64 = self.result.values().sum();
        if total != 0 {
            return Err(RecordError::UnbalancedResult(total));
        }

        Ok(())
    }
}
