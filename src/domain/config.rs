use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;
use crate::domain::{SeatIndex, SEAT_COUNT};

/// Ошибки загрузки/проверки конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг: {0}")]
    Io(#[from] std::io::Error),

    #[error("Битый JSON конфига: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Большой блайнд должен быть больше нуля")]
    ZeroBigBlind,

    #[error("Стек места {0} должен быть больше нуля")]
    ZeroStack(SeatIndex),

    #[error("Пустое имя у места {0}")]
    EmptyName(SeatIndex),
}

/// Настройка одного места до начала раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatSetup {
    pub name: String,
    pub stack: Chips,
}

/// Конфиг движка: большой блайнд и рассадка.
///
/// Между раздачами переживает только он; стеки каждой новой раздачи берутся отсюда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub big_blind: Chips,
    pub seats: [SeatSetup; SEAT_COUNT],
}

impl EngineConfig {
    pub const DEFAULT_BIG_BLIND: Chips = Chips(40);
    pub const DEFAULT_STACK: Chips = Chips(1000);

    /// Шесть мест `Player0..Player5` с одинаковым стеком.
    pub fn with_big_blind(big_blind: Chips) -> Self {
        Self {
            big_blind,
            seats: core::array::from_fn(|i| SeatSetup {
                name: format!("Player{i}"),
                stack: Self::DEFAULT_STACK,
            }),
        }
    }

    /// Малый блайнд = floor(BB / 2).
    pub fn small_blind(&self) -> Chips {
        Chips(self.big_blind.0 / 2)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        for (i, seat) in self.seats.iter().enumerate() {
            if seat.stack.is_zero() {
                return Err(ConfigError::ZeroStack(i as SeatIndex));
            }
            if seat.name.trim().is_empty() {
                return Err(ConfigError::EmptyName(i as SeatIndex));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_big_blind(Self::DEFAULT_BIG_BLIND)
    }
}
