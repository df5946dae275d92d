use crate::domain::SeatIndex;
use crate::engine::actions::ActionKind;

use thiserror::Error;

/// Отказы движка. Любой `Err` означает, что состояние раздачи не изменилось.
///
/// Выход индекса места за пределы 0..6 сюда не входит: это ошибка вызывающего
/// кода, движок на ней паникует.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Раздача не начата")]
    NoActiveHand,

    #[error("Раздача уже завершена")]
    HandComplete,

    #[error("Раздача ещё идёт – настройка мест запрещена")]
    HandInProgress,

    #[error("Действие {kind} недопустимо для места {seat}")]
    IllegalAction { seat: SeatIndex, kind: ActionKind },

    #[error("Стек места {0} должен быть больше нуля")]
    ZeroStack(SeatIndex),
}
