use crate::domain::card::{format_cards, Card};
use crate::engine::actions::{Action, ActionKind};

/// Компактная строка раздачи:
/// `Seat3:call Seat4:raise120 Seat0:fold ... Flop:As Kd 7c Turn:2h River:Qs`.
///
/// Чистая функция от лога действий и борда.
pub fn short_line(actions: &[Action], board: &[Card]) -> String {
    let mut parts: Vec<String> = actions.iter().map(action_token).collect();

    if board.len() >= 3 {
        parts.push(format!("Flop:{}", format_cards(&board[..3])));
    }
    if let Some(turn) = board.get(3) {
        parts.push(format!("Turn:{turn}"));
    }
    if let Some(river) = board.get(4) {
        parts.push(format!("River:{river}"));
    }

    parts.join(" ")
}

fn action_token(action: &Action) -> String {
    match action.kind {
        ActionKind::Bet | ActionKind::Raise => {
            format!("Seat{}:{}{}", action.seat, action.kind.verb(), action.amount)
        }
        kind => format!("Seat{}:{}", action.seat, kind.verb()),
    }
}
