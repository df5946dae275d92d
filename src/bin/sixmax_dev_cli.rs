// src/bin/sixmax_dev_cli.rs

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sixmax_engine::domain::{Chips, EngineConfig};
use sixmax_engine::engine::{ActionKind, HandEngine, HandStatus};
use sixmax_engine::infra::{logging, IdGenerator, SystemRng};

/// Dev-CLI: прогоняет раздачи по скриптовому сценарию и печатает short line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-конфиг (big_blind + рассадка). Без него – BB=40, стеки по 1000.
    #[arg(long)]
    config: Option<String>,

    /// Переопределить большой блайнд.
    #[arg(long)]
    big_blind: Option<u64>,

    /// Seed первой раздачи; следующие берут seed+1, seed+2, ...
    #[arg(long)]
    seed: Option<u64>,

    /// Сколько раздач сыграть.
    #[arg(long, default_value_t = 1)]
    hands: u32,

    #[arg(long, value_enum, default_value_t = Scenario::CheckCall)]
    scenario: Scenario,

    /// Печатать события раздачи и debug-логи движка.
    #[arg(short, long)]
    verbose: bool,
}

/// Сценарий тестовой раздачи.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Scenario {
    /// Все коллируют/чекают до ривера.
    CheckCall,
    /// Открывающий рейзит, остальные фолдят.
    WithFolds,
    /// Каждый, кто может, рейзит минимально (до олл-инов).
    WithRaises,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logging::init(level) {
        eprintln!("[CLI] логгер не инициализирован: {e}");
    }

    let mut config = match args.config.as_deref() {
        Some(path) => match EngineConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[CLI] ОШИБКА конфига {path}: {e}");
                std::process::exit(2);
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(bb) = args.big_blind {
        config.big_blind = Chips(bb);
    }
    let mut engine = match HandEngine::new(config, SystemRng) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[CLI] ОШИБКА конфига: {e}");
            std::process::exit(2);
        }
    };
    let ids = IdGenerator::new();

    for n in 0..args.hands {
        let seed = args.seed.map(|s| s + n as u64);
        engine.reset_hand(seed);
        let hand_id = ids.next_hand_id();

        println!();
        println!("================ HAND {hand_id} ({:?}) =================", args.scenario);
        print_table(&engine);

        if let Err(e) = run_scenario(&mut engine, args.scenario) {
            println!("[CLI] ОШИБКА в сценарии: {e}");
        }

        println!("[CLI] short line: {}", engine.short_line());

        if args.verbose {
            if let Some(history) = engine.history() {
                for event in &history.events {
                    println!("  #{:<3} {:?}", event.index, event.kind);
                }
            }
        }

        match engine.hand_record(hand_id) {
            Some(record) => {
                for (seat, net) in &record.result {
                    println!("  Seat{seat}: {net:+}");
                }
                match record.to_json() {
                    Ok(json) if args.verbose => println!("[CLI] record: {json}"),
                    Ok(_) => {}
                    Err(e) => println!("[CLI] ОШИБКА сериализации: {e}"),
                }
            }
            None => println!("[CLI] раздача не завершилась"),
        }
    }
}

/// Играем за того, чей ход, пока раздача не закончится.
fn run_scenario(
    engine: &mut HandEngine<SystemRng>,
    scenario: Scenario,
) -> Result<(), sixmax_engine::EngineError> {
    // Страховка от бесконечного цикла: 6 мест * 4 улицы * много рейзов.
    for _ in 0..500 {
        let Some(seat) = engine.current_actor() else {
            return Ok(());
        };
        let legal = engine.legal_actions(seat);
        let opened = engine
            .snapshot()
            .map(|s| s.actions.iter().any(|a| matches!(a.kind, ActionKind::Raise | ActionKind::Bet)))
            .unwrap_or(false);

        let (kind, amount) = pick_action(scenario, &legal, opened, engine.big_blind());
        println!("[CLI] Seat{seat}: {kind} (легально: {legal:?})");

        if let HandStatus::Finished(outcome) = engine.apply_action(kind, amount)? {
            println!(
                "[CLI] раздача завершена на {}: банк {}, победители {:?}",
                outcome.street_reached,
                outcome.total_pot,
                outcome.winners()
            );
            return Ok(());
        }
    }
    Ok(())
}

fn pick_action(
    scenario: Scenario,
    legal: &[ActionKind],
    opened: bool,
    big_blind: Chips,
) -> (ActionKind, Option<Chips>) {
    let has = |k: ActionKind| legal.contains(&k);
    let passive = if has(ActionKind::Check) {
        ActionKind::Check
    } else if has(ActionKind::Call) {
        ActionKind::Call
    } else {
        ActionKind::AllIn
    };

    match scenario {
        Scenario::CheckCall => (passive, None),
        Scenario::WithFolds if !opened && has(ActionKind::Raise) => {
            (ActionKind::Raise, Some(Chips(big_blind.0 * 3)))
        }
        Scenario::WithFolds if opened => (ActionKind::Fold, None),
        Scenario::WithFolds => (passive, None),
        Scenario::WithRaises if has(ActionKind::Raise) => (ActionKind::Raise, None),
        Scenario::WithRaises if has(ActionKind::Bet) => (ActionKind::Bet, None),
        Scenario::WithRaises => (passive, None),
    }
}

fn print_table(engine: &HandEngine<SystemRng>) {
    let Some(snap) = engine.snapshot() else {
        return;
    };
    for seat in &snap.seats {
        let cards = snap.hole_cards[seat.index as usize];
        println!(
            "  Seat{} {:<4} {:<10} stack={:<6} committed={:<4} [{} {}]",
            seat.index, seat.role, seat.name, seat.stack.0, seat.committed.0, cards[0], cards[1]
        );
    }
    println!("  pot={} to call={} first={:?}", snap.pot, snap.last_raise_to, snap.current_player);
}
