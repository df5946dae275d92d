use crate::domain::chips::Chips;
use crate::domain::seat::Seat;
use crate::engine::actions::ActionKind;

/// Легальные действия для места, которое сейчас ходит.
///
/// Очерёдность и "в раздаче ли игрок" проверяет engine; здесь только правила
/// по стеку и текущему уровню ставки. Порядок: check, call, bet, raise, fold, all-in.
pub fn legal_actions(seat: &Seat, last_raise_to: Chips) -> Vec<ActionKind> {
    let stack = seat.stack;
    let to_call = seat.to_call(last_raise_to);

    let mut actions = Vec::with_capacity(4);
    if to_call.is_zero() {
        actions.push(ActionKind::Check);
    }
    if !to_call.is_zero() && to_call <= stack {
        actions.push(ActionKind::Call);
    }
    if last_raise_to.is_zero() && !stack.is_zero() {
        actions.push(ActionKind::Bet);
    }
    if !to_call.is_zero() && stack > to_call {
        actions.push(ActionKind::Raise);
    }
    actions.push(ActionKind::Fold);
    if !stack.is_zero() {
        actions.push(ActionKind::AllIn);
    }
    actions
}

/// Привести запрошенную сумму к реально перемещаемым фишкам.
///
/// - fold/check → 0;
/// - call → min(to_call, stack);
/// - bet → не меньше BB, не больше стека;
/// - raise → не меньше last_raise_to + BB, не больше стека;
/// - all-in → весь стек.
///
/// Повторная нормализация результата даёт тот же результат.
pub fn normalize_amount(
    kind: ActionKind,
    requested: Chips,
    seat: &Seat,
    last_raise_to: Chips,
    big_blind: Chips,
) -> Chips {
    let stack = seat.stack;
    match kind {
        ActionKind::Fold | ActionKind::Check => Chips::ZERO,
        ActionKind::Call => seat.to_call(last_raise_to).min(stack),
        ActionKind::Bet => requested.max(big_blind).min(stack),
        ActionKind::Raise => requested.max(last_raise_to + big_blind).min(stack),
        ActionKind::AllIn => stack,
    }
}
