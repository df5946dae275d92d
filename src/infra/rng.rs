use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Недетерминированный источник: `rand::thread_rng()` (энтропия ОС).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Одинаковый seed → одинаковые раздачи.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// Линейный конгруэнтный генератор `s = (s * 9301 + 49297) mod 233280`.
///
/// Им мешается раздача при `reset_hand(Some(seed))`: один seed – одна и та же
/// кнопка, те же карманные карты и тот же борд.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    const MUL: u64 = 9301;
    const INC: u64 = 49297;
    const MODULUS: u64 = 233_280;

    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % Self::MODULUS,
        }
    }

    /// Следующее значение в [0, 1).
    pub fn next_unit(&mut self) -> f64 {
        self.state = (self.state * Self::MUL + Self::INC) % Self::MODULUS;
        self.state as f64 / Self::MODULUS as f64
    }
}

impl RandomSource for LcgRng {
    /// Фишер–Йетс с конца массива: j = floor(u * (i + 1)).
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = (self.next_unit() * (i + 1) as f64) as usize;
            slice.swap(i, j.min(i));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_first_values_match_recurrence() {
        let mut rng = LcgRng::new(12345);
        let expected = ((12345u64 * 9301 + 49297) % 233_280) as f64 / 233_280.0;
        assert_eq!(rng.next_unit(), expected);
    }

    #[test]
    fn lcg_large_seed_is_reduced_without_overflow() {
        let mut a = LcgRng::new(u64::MAX);
        let mut b = LcgRng::new(u64::MAX % 233_280);
        assert_eq!(a.next_unit(), b.next_unit());
    }
}
