use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::HandId;

/// Монотонный генератор id раздач для истории.
///
/// Хранилище истории (вне этого крейта) может выдавать свои id,
/// этот удобен для dev-CLI и тестов.
#[derive(Debug)]
pub struct IdGenerator {
    hand_counter: AtomicU64,
}

impl IdGenerator {
    /// Первый выданный id = 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: HandId) -> Self {
        Self {
            hand_counter: AtomicU64::new(first),
        }
    }

    #[inline]
    pub fn next_hand_id(&self) -> HandId {
        self.hand_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
