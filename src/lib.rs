//! Движок одной раздачи Texas Hold'em за шестимаксовым столом.
//!
//! Роли и блайнды, раздача карт, легальные действия, переходы улиц,
//! шоудаун с разделом банка и компактная short line для истории.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

pub use api::{HandRecord, HandSnapshot};
pub use domain::{Card, Chips, EngineConfig, Role, SeatIndex, Street};
pub use engine::{ActionKind, EngineError, HandEngine, HandStatus, RandomSource};
