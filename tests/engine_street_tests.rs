//! Переходы улиц и завершение раздачи.

use std::collections::HashSet;

use sixmax_engine::domain::{Card, Chips, EngineConfig, Role, SeatIndex, Street, SEAT_COUNT};
use sixmax_engine::engine::{ActionKind, HandEngine, HandEventKind, HandStatus};
use sixmax_engine::infra::DeterministicRng;
use sixmax_engine::HandSnapshot;

fn seeded(seed: u64) -> HandEngine<DeterministicRng> {
    let mut engine = HandEngine::new(EngineConfig::default(), DeterministicRng::from_u64(11)).expect("валидный конфиг");
    engine.reset_hand(Some(seed));
    engine
}

fn snap(engine: &HandEngine<DeterministicRng>) -> HandSnapshot {
    engine.snapshot().expect("раздача начата")
}

fn role_seat(engine: &HandEngine<DeterministicRng>, role: Role) -> SeatIndex {
    snap(engine).seat_with_role(role).index
}

/// Пассивная линия: check, если можно, иначе call.
fn passive(engine: &HandEngine<DeterministicRng>, seat: SeatIndex) -> ActionKind {
    if engine.legal_actions(seat).contains(&ActionKind::Check) {
        ActionKind::Check
    } else {
        ActionKind::Call
    }
}

/// Доиграть текущую улицу чек/коллом. Возвращает статус последнего действия.
fn play_street_passively(engine: &mut HandEngine<DeterministicRng>) -> HandStatus {
    let street = snap(engine).street;
    let mut status = HandStatus::Ongoing;
    while let Some(seat) = engine.current_actor() {
        if snap(engine).street != street {
            break;
        }
        let kind = passive(engine, seat);
        status = engine.apply_action(kind, None).expect("пассивное действие легально");
    }
    status
}

#[test]
fn board_grows_three_four_five() {
    let mut engine = seeded(12345);

    play_street_passively(&mut engine);
    assert_eq!(snap(&engine).street, Street::Flop);
    assert_eq!(snap(&engine).board.len(), 3);

    play_street_passively(&mut engine);
    assert_eq!(snap(&engine).street, Street::Turn);
    assert_eq!(snap(&engine).board.len(), 4);

    play_street_passively(&mut engine);
    assert_eq!(snap(&engine).street, Street::River);
    assert_eq!(snap(&engine).board.len(), 5);

    let status = play_street_passively(&mut engine);
    assert!(matches!(status, HandStatus::Finished(_)));
    assert!(engine.is_complete());
}

#[test]
fn board_and_hole_cards_never_repeat() {
    for seed in [3u64, 17, 4242, 100_000] {
        let mut engine = seeded(seed);
        while engine.current_actor().is_some() {
            play_street_passively(&mut engine);
        }

        let s = snap(&engine);
        let mut seen: HashSet<Card> = HashSet::new();
        for card in s.hole_cards.iter().flatten().chain(s.board.iter()) {
            assert!(seen.insert(*card), "seed {seed}: карта {card} повторилась");
        }
        assert_eq!(seen.len(), 17);
    }
}

#[test]
fn new_street_resets_bets_and_starts_left_of_button() {
    let mut engine = seeded(12345);
    play_street_passively(&mut engine);

    let s = snap(&engine);
    assert_eq!(s.street, Street::Flop);
    assert_eq!(s.last_raise_to, Chips::ZERO);
    assert!(s.seats.iter().all(|seat| seat.committed == Chips::ZERO));
    assert_eq!(s.pot, Chips(240));
    assert_eq!(s.current_player, Some(role_seat(&engine, Role::SmallBlind)));
}

#[test]
fn postflop_skips_folded_small_blind() {
    let mut engine = seeded(12345);
    let sb = role_seat(&engine, Role::SmallBlind);
    let bb = role_seat(&engine, Role::BigBlind);

    // UTG, MP, CO, BTN коллируют, SB фолдит, BB чекает.
    for _ in 0..4 {
        engine.apply_action(ActionKind::Call, None).expect("call");
    }
    assert_eq!(engine.current_actor(), Some(sb));
    engine.apply_action(ActionKind::Fold, None).expect("SB fold");
    engine.apply_action(ActionKind::Check, None).expect("BB check");

    assert_eq!(snap(&engine).street, Street::Flop);
    assert_eq!(engine.current_actor(), Some(bb));
}

#[test]
fn five_folds_give_big_blind_the_pot() {
    let mut engine = seeded(12345);
    let sb = role_seat(&engine, Role::SmallBlind);
    let bb = role_seat(&engine, Role::BigBlind);

    let mut last = HandStatus::Ongoing;
    for _ in 0..5 {
        last = engine.apply_action(ActionKind::Fold, None).expect("fold");
    }

    let HandStatus::Finished(outcome) = last else {
        panic!("раздача должна завершиться после пяти фолдов");
    };
    assert_eq!(outcome.street_reached, Street::Preflop);
    assert!(outcome.board.is_empty());
    assert_eq!(outcome.winners(), vec![bb]);
    assert_eq!(outcome.net_for(bb), 20);
    assert_eq!(outcome.net_for(sb), -20);

    let s = snap(&engine);
    assert!(s.is_complete);
    assert_eq!(s.current_player, None);
    assert_eq!(s.seat(bb).stack, Chips(1020));
    assert!(s.board.is_empty(), "борд не открывается после фолдов");
}

#[test]
fn fold_on_flop_ends_hand_without_more_cards() {
    let mut engine = seeded(12345);
    play_street_passively(&mut engine);

    let sb = role_seat(&engine, Role::SmallBlind);
    engine
        .apply_action(ActionKind::Bet, Some(Chips(100)))
        .expect("SB bet");
    let mut last = HandStatus::Ongoing;
    for _ in 0..5 {
        last = engine.apply_action(ActionKind::Fold, None).expect("fold");
    }

    let HandStatus::Finished(outcome) = last else {
        panic!("все сфолдили на флопе");
    };
    assert_eq!(outcome.street_reached, Street::Flop);
    assert_eq!(outcome.board.len(), 3);
    assert_eq!(outcome.winners(), vec![sb]);
    // Выиграл лимпы пятерых соперников.
    assert_eq!(outcome.net_for(sb), 200);
}

#[test]
fn all_in_and_call_runs_out_the_board() {
    let mut engine = seeded(12345);
    let utg = role_seat(&engine, Role::UnderTheGun);
    let bb = role_seat(&engine, Role::BigBlind);

    engine.apply_action(ActionKind::AllIn, None).expect("UTG all-in");
    // MP, CO, BTN, SB фолдят.
    for _ in 0..4 {
        engine.apply_action(ActionKind::Fold, None).expect("fold");
    }
    assert_eq!(engine.current_actor(), Some(bb));
    let status = engine.apply_action(ActionKind::Call, None).expect("BB call");

    let HandStatus::Finished(outcome) = status else {
        panic!("после олл-ина и колла борд докладывается сразу");
    };
    assert_eq!(outcome.street_reached, Street::River);
    assert_eq!(outcome.board.len(), 5);
    assert_eq!(outcome.total_pot, Chips(2020));
    assert!(outcome.winners().iter().all(|w| *w == utg || *w == bb));

    let total: i64 = outcome.results.iter().map(|r| r.net).sum();
    assert_eq!(total, 0);
}

#[test]
fn short_line_records_actions_and_board() {
    let mut engine = seeded(12345);
    let utg = role_seat(&engine, Role::UnderTheGun);

    engine
        .apply_action(ActionKind::Raise, Some(Chips(120)))
        .expect("UTG raise");
    assert_eq!(engine.short_line(), format!("Seat{utg}:raise120"));

    while engine.current_actor().is_some() {
        play_street_passively(&mut engine);
    }

    let line = engine.short_line();
    assert!(line.starts_with(&format!("Seat{utg}:raise120 ")));
    assert!(line.contains(" Flop:"));
    assert!(line.contains(" Turn:"));
    assert!(line.contains(" River:"));
    assert_eq!(line, snap(&engine).short_line);

    // Та же раздача с тем же seed и теми же действиями даёт ту же строку.
    let mut replay = seeded(12345);
    replay
        .apply_action(ActionKind::Raise, Some(Chips(120)))
        .expect("UTG raise");
    while replay.current_actor().is_some() {
        play_street_passively(&mut replay);
    }
    assert_eq!(replay.short_line(), line);
}

#[test]
fn history_tracks_street_changes() {
    let mut engine = seeded(12345);
    while engine.current_actor().is_some() {
        play_street_passively(&mut engine);
    }

    let history = engine.history().expect("история есть");
    let streets = history
        .events
        .iter()
        .filter(|e| matches!(e.kind, HandEventKind::StreetChanged { .. }))
        .count();
    assert_eq!(streets, 3);
    assert!(history
        .events
        .windows(2)
        .all(|w| w[0].index + 1 == w[1].index));
}

/// Фишки не появляются и не исчезают: пока раздача идёт, каждый стек плюс
/// внесённое равно стартовому, а сумма стеков плюс банк – сумме стартовых.
fn assert_chips_conserved(engine: &HandEngine<DeterministicRng>, step: &str) {
    let s = snap(engine);
    let start: u64 = s.seats.iter().map(|seat| seat.starting_stack.0).sum();
    let stacks: u64 = s.seats.iter().map(|seat| seat.stack.0).sum();

    if s.is_complete {
        assert_eq!(stacks, start, "{step}: после расчёта всё в стеках");
        return;
    }
    for seat in &s.seats {
        assert_eq!(
            seat.stack + seat.contributed,
            seat.starting_stack,
            "{step}: seat {}",
            seat.index
        );
    }
    assert_eq!(stacks + s.pot.0, start, "{step}: стеки + банк");
}

/// Сыграть список действий, проверяя баланс фишек после каждого.
fn play_checked(
    engine: &mut HandEngine<DeterministicRng>,
    line: &[(ActionKind, Option<u64>)],
) -> HandStatus {
    let mut status = HandStatus::Ongoing;
    for (n, (kind, amount)) in line.iter().enumerate() {
        let seat = engine.current_actor().expect("кто-то на ходу");
        status = engine
            .apply_action(*kind, amount.map(Chips))
            .unwrap_or_else(|e| panic!("шаг {n}: seat {seat} {kind:?}: {e}"));
        assert_chips_conserved(engine, &format!("шаг {n} ({kind:?})"));
    }
    status
}

#[test]
fn mixed_action_hand_conserves_chips() {
    use ActionKind::*;

    let mut engine = seeded(12345);
    assert_chips_conserved(&engine, "блайнды");
    let utg = role_seat(&engine, Role::UnderTheGun);
    let btn = role_seat(&engine, Role::Button);

    // Префлоп: UTG рейз, MP фолд, CO и BTN колл, SB фолд, BB колл.
    play_checked(
        &mut engine,
        &[
            (Raise, Some(120)),
            (Fold, None),
            (Call, None),
            (Call, None),
            (Fold, None),
            (Call, None),
        ],
    );
    assert_eq!(snap(&engine).street, Street::Flop);
    assert_eq!(snap(&engine).pot, Chips(500));

    // Флоп: BB чек, UTG бет, CO колл, BTN рейз, BB фолд, UTG и CO колл.
    play_checked(
        &mut engine,
        &[
            (Check, None),
            (Bet, Some(200)),
            (Call, None),
            (Raise, Some(600)),
            (Fold, None),
            (Call, None),
            (Call, None),
        ],
    );
    assert_eq!(snap(&engine).street, Street::Turn);
    assert_eq!(snap(&engine).pot, Chips(2300));

    play_checked(&mut engine, &[(Check, None), (Check, None), (Check, None)]);
    assert_eq!(snap(&engine).street, Street::River);

    let status = play_checked(&mut engine, &[(AllIn, None), (Call, None), (Call, None)]);
    let HandStatus::Finished(outcome) = status else {
        panic!("на ривере все в олл-ине – шоудаун");
    };

    assert_eq!(outcome.total_pot, Chips(3140));
    assert_eq!(outcome.uncalled, None);
    assert_eq!(snap(&engine).seat(utg).contributed, Chips(1000));
    assert_eq!(snap(&engine).seat(btn).contributed, Chips(1000));
    let total: i64 = outcome.results.iter().map(|r| r.net).sum();
    assert_eq!(total, 0);
}

#[test]
fn short_big_blind_hand_conserves_chips() {
    use ActionKind::*;

    let bb = role_seat(&seeded(12345), Role::BigBlind);
    let mut engine =
        HandEngine::new(EngineConfig::default(), DeterministicRng::from_u64(11)).expect("валидный конфиг");
    engine
        .configure_seat(bb, "Crumbs", Chips(10))
        .expect("до раздачи настройка разрешена");
    engine.reset_hand(Some(12345));

    let s = snap(&engine);
    assert_eq!(s.seat(bb).committed, Chips(10), "BB урезан до стека");
    assert_eq!(s.last_raise_to, Chips(20));
    assert_chips_conserved(&engine, "блайнды");

    // UTG рейз до минимума, MP колл, CO и BTN фолд, SB доплачивает. BB уже в олл-ине.
    play_checked(
        &mut engine,
        &[
            (Raise, Some(60)),
            (Call, None),
            (Fold, None),
            (Fold, None),
            (Call, None),
        ],
    );
    assert_eq!(snap(&engine).street, Street::Flop);
    assert_eq!(snap(&engine).pot, Chips(190));

    // Флоп: SB чек, UTG бет, MP фолд, SB колл; дальше чек до шоудауна.
    play_checked(
        &mut engine,
        &[(Check, None), (Bet, Some(40)), (Fold, None), (Call, None)],
    );
    assert_eq!(snap(&engine).street, Street::Turn);
    let status = play_checked(
        &mut engine,
        &[(Check, None), (Check, None), (Check, None), (Check, None)],
    );

    let HandStatus::Finished(outcome) = status else {
        panic!("ривер прочекан – шоудаун");
    };
    assert_eq!(outcome.total_pot, Chips(270));
    let total: i64 = outcome.results.iter().map(|r| r.net).sum();
    assert_eq!(total, 0);

    let stacks: u64 = snap(&engine).seats.iter().map(|seat| seat.stack.0).sum();
    assert_eq!(stacks, 1000 * (SEAT_COUNT as u64 - 1) + 10);
}
