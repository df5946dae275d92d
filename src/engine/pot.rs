use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Единственный банк раздачи (сайд-потов нет). Пока раздача идёт, только растёт.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    /// Сколько делится между победителями после возврата неуравненной ставки.
    pub fn contested(&self, uncalled: Option<Chips>) -> Chips {
        self.total - uncalled.unwrap_or(Chips::ZERO)
    }

    /// Поровну на `winners` мест; остаток по фишке первым в списке.
    pub fn split(amount: Chips, winners: usize) -> Vec<Chips> {
        if winners == 0 {
            return Vec::new();
        }
        let share = amount.0 / winners as u64;
        let remainder = (amount.0 % winners as u64) as usize;
        (0..winners)
            .map(|i| Chips(share + u64::from(i < remainder)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_gives_odd_chips_to_first_winners() {
        assert_eq!(Pot::split(Chips(61), 2), vec![Chips(31), Chips(30)]);
        assert_eq!(Pot::split(Chips(100), 3), vec![Chips(34), Chips(33), Chips(33)]);
        assert!(Pot::split(Chips(10), 0).is_empty());
    }

    #[test]
    fn contested_excludes_uncalled() {
        let mut pot = Pot::new();
        pot.add(Chips(1120));
        assert_eq!(pot.contested(Some(Chips(900))), Chips(220));
        assert_eq!(pot.contested(None), Chips(1120));
    }
}
