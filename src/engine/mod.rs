//! Движок раздачи: очередь ходов, легальные действия, улицы, шоудаун.
//!
//! Высокоуровневый объект: `HandEngine`
//! Основные операции:
//!   - `reset_hand` – новая раздача (роли, блайнды, карты)
//!   - `legal_actions` – что может сделать место, чей ход
//!   - `apply_action` – применить действие; улицы переключаются автоматически

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod short_line;
pub mod showdown;
pub mod state;
pub mod validation;

pub use actions::{Action, ActionKind};
pub use errors::EngineError;
pub use game_loop::{HandEngine, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use showdown::{HandOutcome, SeatResult};
pub use state::HandState;

/// Источник случайности для движка. Передаётся в `HandEngine::new` явно,
/// реализации – в `infra::rng`.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
