use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска колеса A2345 (туз играет как единица).
const WHEEL: RankMask = mask_from_ranks(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);

/// Пять подряд идущих рангов, начиная с двойки.
const FIVE_RUN: RankMask = 0b1_1111;

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

pub const fn mask_from_ranks(ranks: &[Rank]) -> RankMask {
    let mut mask: RankMask = 0;
    let mut i = 0;
    while i < ranks.len() {
        mask |= 1 << (ranks[i] as u8 - 2);
        i += 1;
    }
    mask
}

/// Старшая карта стрита в маске, если он есть.
/// Колесо A2345 → Rank::Five.
pub fn detect_straight(rank_mask: RankMask) -> Option<Rank> {
    // Сдвигаем окно из пяти бит от бродвея (T..A) вниз до 2..6.
    for low in (0..=8u8).rev() {
        let window = FIVE_RUN << low;
        if rank_mask & window == window {
            return Rank::from_value(low + 6);
        }
    }
    if rank_mask & WHEEL == WHEEL {
        return Some(Rank::Five);
    }
    None
}
