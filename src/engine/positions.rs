use crate::domain::{SeatIndex, Table, SEAT_COUNT};

/// Все места по кругу, начиная со следующего после `start` (сам `start` – последним).
pub fn clockwise_after(start: SeatIndex) -> impl Iterator<Item = SeatIndex> {
    (1..=SEAT_COUNT).map(move |offset| ((start as usize + offset) % SEAT_COUNT) as SeatIndex)
}

/// Места, которые могут ходить (в раздаче и со стеком), по кругу после `start`.
/// `start` в список не попадает.
pub fn actors_after(table: &Table, start: SeatIndex) -> Vec<SeatIndex> {
    clockwise_after(start)
        .filter(|&seat| seat != start && table.seat(seat).can_act())
        .collect()
}

/// Порядок раздачи карт и очередь постфлопа: слева от кнопки, кнопка последней.
pub fn from_left_of_button(table: &Table) -> impl Iterator<Item = SeatIndex> {
    clockwise_after(table.button)
}
