use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::hand::Street;
use crate::domain::seat::{Role, Seat};
use crate::domain::{SeatIndex, SEAT_COUNT};
use crate::engine::actions::Action;
use crate::engine::short_line::short_line;
use crate::engine::showdown::HandOutcome;
use crate::engine::state::HandState;

/// Снимок раздачи для UI/внешнего кода.
///
/// Полностью владеет своими данными: правка снимка никак не влияет на движок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSnapshot {
    pub seats: [Seat; SEAT_COUNT],
    pub button: SeatIndex,
    pub street: Street,
    pub pot: Chips,
    pub last_raise_to: Chips,
    pub current_player: Option<SeatIndex>,
    pub board: Vec<Card>,
    pub hole_cards: [[Card; 2]; SEAT_COUNT],
    pub actions: Vec<Action>,
    pub short_line: String,
    pub is_complete: bool,
    pub outcome: Option<HandOutcome>,
}

impl HandSnapshot {
    pub fn from_state(state: &HandState) -> Self {
        Self {
            seats: state.table.seats.clone(),
            button: state.table.button,
            street: state.table.street,
            pot: state.pot.total,
            last_raise_to: state.betting.last_raise_to,
            current_player: state.current_player,
            board: state.table.board.clone(),
            hole_cards: state.hole_cards,
            actions: state.actions.clone(),
            short_line: short_line(&state.actions, &state.table.board),
            is_complete: state.is_complete,
            outcome: state.outcome.clone(),
        }
    }

    pub fn seat(&self, index: SeatIndex) -> &Seat {
        &self.seats[index as usize]
    }

    pub fn seat_with_role(&self, role: Role) -> &Seat {
        self.seats
            .iter()
            .find(|s| s.role == role)
            .unwrap_or(&self.seats[self.button as usize])
    }

    pub fn in_hand_count(&self) -> usize {
        self.seats.iter().filter(|s| s.in_hand).count()
    }
}
