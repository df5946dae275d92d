//! Доменная модель: карты, фишки, колода, места, стол шестимакса и конфиг.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod hand;
pub mod seat;
pub mod table;

/// Индекс места за столом (0..SEAT_COUNT-1).
pub type SeatIndex = u8;

/// Стол всегда на шесть мест.
pub const SEAT_COUNT: usize = 6;

/// Ид раздачи (для истории).
pub type HandId = u64;

pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use hand::*;
pub use seat::*;
pub use table::*;
