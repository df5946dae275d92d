//! Внешний слой над движком: снимки состояния и записи для истории раздач.

pub mod dto;
pub mod record;

pub use dto::HandSnapshot;
pub use record::{HandRecord, RecordError, SeatRecord};
