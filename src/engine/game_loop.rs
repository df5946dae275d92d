use log::{info, warn};

use crate::api::dto::HandSnapshot;
use crate::api::record::HandRecord;
use crate::domain::chips::Chips;
use crate::domain::config::{ConfigError, EngineConfig, SeatSetup};
use crate::domain::{HandId, SeatIndex, SEAT_COUNT};
use crate::engine::actions::ActionKind;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandHistory;
use crate::engine::short_line::short_line;
use crate::engine::showdown::HandOutcome;
use crate::engine::state::HandState;
use crate::engine::validation::{legal_actions, normalize_amount};
use crate::engine::RandomSource;
use crate::infra::rng::LcgRng;

/// Статус раздачи после принятого действия.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandOutcome),
}

/// Движок одной раздачи за шестимаксовым столом.
///
/// Три мутирующие точки входа: `reset_hand`, `apply_action`, `configure_seat`.
/// Всё остальное – чтение (копии состояния, легальные действия, short line).
#[derive(Debug)]
pub struct HandEngine<R: RandomSource> {
    config: EngineConfig,
    rng: R,
    hand: Option<HandState>,
}

impl<R: RandomSource> HandEngine<R> {
    /// `rng` используется для раздач без явного seed.
    ///
    /// Конфиг проверяется сразу: нулевой BB или пустой стек сюда не пройдут.
    pub fn new(config: EngineConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rng,
            hand: None,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn big_blind(&self) -> Chips {
        self.config.big_blind
    }

    /// Начать новую раздачу, выбросив предыдущую.
    ///
    /// С `seed` раздача полностью воспроизводима (LCG), без него – берётся
    /// RNG движка.
    pub fn reset_hand(&mut self, seed: Option<u64>) {
        let state = match seed {
            Some(seed) => HandState::deal(&self.config, &mut LcgRng::new(seed)),
            None => HandState::deal(&self.config, &mut self.rng),
        };
        info!(
            "hand reset (seed={:?}): button=Seat{}, bb={}",
            seed, state.table.button, self.config.big_blind
        );
        self.hand = Some(state);
    }

    /// Изменить имя и стек места. Разрешено только между раздачами
    /// (до первой или после завершения текущей); действует со следующего `reset_hand`.
    pub fn configure_seat(
        &mut self,
        seat: SeatIndex,
        name: impl Into<String>,
        stack: Chips,
    ) -> Result<(), EngineError> {
        assert_seat_index(seat);
        if self.hand.as_ref().is_some_and(|h| !h.is_complete) {
            return Err(EngineError::HandInProgress);
        }
        if stack.is_zero() {
            return Err(EngineError::ZeroStack(seat));
        }
        self.config.seats[seat as usize] = SeatSetup {
            name: name.into(),
            stack,
        };
        Ok(())
    }

    /// Легальные действия места. Пусто, если сейчас не его ход,
    /// он сфолдил, или раздача не идёт.
    ///
    /// Паникует на seat вне 0..6.
    pub fn legal_actions(&self, seat: SeatIndex) -> Vec<ActionKind> {
        assert_seat_index(seat);
        let Some(hand) = self.hand.as_ref() else {
            return Vec::new();
        };
        if hand.is_complete || hand.current_player != Some(seat) {
            return Vec::new();
        }
        let player = hand.table.seat(seat);
        if !player.in_hand {
            return Vec::new();
        }
        legal_actions(player, hand.betting.last_raise_to)
    }

    /// Применить действие за того, чей сейчас ход.
    ///
    /// `amount` учитывается только для bet/raise и нормализуется
    /// (минимум, потолок = стек). Любой `Err` – состояние не изменилось.
    pub fn apply_action(
        &mut self,
        kind: ActionKind,
        amount: Option<Chips>,
    ) -> Result<HandStatus, EngineError> {
        let big_blind = self.config.big_blind;
        let hand = self.hand.as_mut().ok_or(EngineError::NoActiveHand)?;
        if hand.is_complete {
            return Err(EngineError::HandComplete);
        }
        let seat = hand.current_player.ok_or(EngineError::HandComplete)?;

        let player = hand.table.seat(seat);
        let last_raise_to = hand.betting.last_raise_to;
        if !player.in_hand || !legal_actions(player, last_raise_to).contains(&kind) {
            warn!("rejected {kind} from Seat{seat}");
            return Err(EngineError::IllegalAction { seat, kind });
        }

        let moved = normalize_amount(
            kind,
            amount.unwrap_or(Chips::ZERO),
            player,
            last_raise_to,
            big_blind,
        );
        hand.apply(seat, kind, moved);

        Ok(match &hand.outcome {
            Some(outcome) => HandStatus::Finished(outcome.clone()),
            None => HandStatus::Ongoing,
        })
    }

    /// Чей сейчас ход.
    pub fn current_actor(&self) -> Option<SeatIndex> {
        self.hand.as_ref().and_then(|h| h.current_player)
    }

    pub fn is_complete(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| h.is_complete)
    }

    /// Глубокая копия состояния раздачи (None до первого `reset_hand`).
    pub fn snapshot(&self) -> Option<HandSnapshot> {
        self.hand.as_ref().map(HandSnapshot::from_state)
    }

    /// Итог раздачи, если она завершена.
    pub fn outcome(&self) -> Option<&HandOutcome> {
        self.hand.as_ref().and_then(|h| h.outcome.as_ref())
    }

    pub fn history(&self) -> Option<&HandHistory> {
        self.hand.as_ref().map(|h| &h.history)
    }

    /// Компактная строка раздачи (пустая до первой раздачи).
    pub fn short_line(&self) -> String {
        match self.hand.as_ref() {
            Some(hand) => short_line(&hand.actions, &hand.table.board),
            None => String::new(),
        }
    }

    /// Запись для истории раздач; только для завершённой раздачи.
    pub fn hand_record(&self, hand_id: HandId) -> Option<HandRecord> {
        let hand = self.hand.as_ref().filter(|h| h.is_complete)?;
        HandRecord::from_state(hand_id, hand)
    }
}

fn assert_seat_index(seat: SeatIndex) {
    assert!(
        (seat as usize) < SEAT_COUNT,
        "seat index {seat} вне диапазона 0..{SEAT_COUNT}"
    );
}
