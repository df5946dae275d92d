//! Инфраструктура вокруг движка:
//! - RNG-реализации (`RandomSource`);
//! - генерация id раздач;
//! - инициализация логирования для бинарей.

pub mod ids;
pub mod logging;
pub mod rng;

pub use ids::IdGenerator;
pub use rng::{DeterministicRng, LcgRng, SystemRng};
