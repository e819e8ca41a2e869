//! The backgammon match: action dispatch over board, dice and escrow.

use tracing::{debug, info, warn};

use super::state::MatchState;
use crate::core::action::{Action, DiceRoll, MoveOutcome, Outcome};
use crate::core::address::Address;
use crate::core::config::MatchConfig;
use crate::core::error::{ConfigError, EngineError};
use crate::core::rng::DiceRng;
use crate::core::side::{Position, Side, CHECKERS_PER_SIDE};
use crate::board::Board;
use crate::dice::DiceSource;
use crate::escrow::Escrow;
use crate::rules::{MoveValidator, Resolution};

/// A single wagered match between two addresses.
///
/// Every write method is an atomic transition: it either returns an outcome
/// and commits, or returns the first violated rule and leaves the match
/// untouched.
#[derive(Clone, Debug)]
pub struct BackgammonMatch<D: DiceSource = DiceRng> {
    pub(crate) config: MatchConfig,
    pub(crate) state: MatchState,
    pub(crate) dice: D,
}

/// Builder for creating a `BackgammonMatch`.
///
/// ```
/// use bg_escrow::core::{Address, Side};
/// use bg_escrow::engine::MatchBuilder;
///
/// let game = MatchBuilder::new()
///     .stake(1_000)
///     .entropy_seed(42)
///     .build(Address::repeat_byte(1))
///     .unwrap();
///
/// assert_eq!(game.position_count(Side::White, 13), 5);
/// assert!(!game.game_started());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    stake: u128,
    entropy_seed: u64,
    layout: Option<Board>,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount each side escrows.
    pub fn stake(mut self, stake: u128) -> Self {
        self.stake = stake;
        self
    }

    /// Host entropy the dice are derived from.
    pub fn entropy_seed(mut self, seed: u64) -> Self {
        self.entropy_seed = seed;
        self
    }

    /// Start from a custom board instead of the standard opening.
    pub fn layout(mut self, board: Board) -> Self {
        self.layout = Some(board);
        self
    }

    /// The configuration this builder describes.
    pub fn config(&self) -> MatchConfig {
        MatchConfig {
            stake: self.stake,
            entropy_seed: self.entropy_seed,
            layout: self.layout,
        }
    }

    /// Build a match with seeded dice.
    pub fn build(self, creator: Address) -> Result<BackgammonMatch, ConfigError> {
        let dice = DiceRng::new(self.entropy_seed);
        self.build_with_dice(creator, dice)
    }

    /// Build a match with a custom dice source.
    pub fn build_with_dice<D: DiceSource>(
        self,
        creator: Address,
        dice: D,
    ) -> Result<BackgammonMatch<D>, ConfigError> {
        BackgammonMatch::with_dice(self.config(), creator, dice)
    }
}

impl<D: DiceSource> BackgammonMatch<D> {
    /// Create a match. The creator takes white and escrows the stake.
    pub fn with_dice(config: MatchConfig, creator: Address, dice: D) -> Result<Self, ConfigError> {
        config.validate()?;
        if creator.is_zero() {
            return Err(ConfigError::ZeroCreator);
        }

        let state = MatchState::new(config.starting_board(), Escrow::open(creator, config.stake));
        info!(white = %creator, stake = config.stake, "match created");

        Ok(Self { config, state, dice })
    }

    /// Configuration fixed at creation.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Full authoritative state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The dice source.
    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    // === Write surface ===

    /// Dispatch any action.
    pub fn apply(&mut self, caller: Address, action: Action) -> Result<Outcome, EngineError> {
        match action {
            Action::RollDice => self
                .roll_dice(caller)
                .map(|dice| Outcome::Rolled { side: self.state.turn.active(), dice }),
            Action::Move { from, to } => self.submit_move(caller, from, to).map(Outcome::Moved),
            Action::Pass => {
                let side = self.state.turn.active();
                self.pass_turn(caller)
                    .map(|forfeited| Outcome::Passed { side, forfeited })
            }
            Action::Deposit { amount } => self
                .deposit(caller, amount)
                .map(|black| Outcome::Joined { black }),
        }
    }

    /// Fund transfer into the escrow. The first matching deposit from a new
    /// account seats black and starts the match.
    pub fn deposit(&mut self, from: Address, amount: u128) -> Result<Address, EngineError> {
        self.commit(from, Action::Deposit { amount }, |state, _| {
            let black = state.escrow.deposit(from, amount)?;
            info!(
                white = %state.escrow.player(Side::White).unwrap_or(Address::ZERO),
                black = %black,
                escrow = state.escrow.balance(),
                "match started"
            );
            Ok((black, DiceRoll::new()))
        })
    }

    /// Roll for the caller's side.
    pub fn roll_dice(&mut self, caller: Address) -> Result<DiceRoll, EngineError> {
        self.commit(caller, Action::RollDice, |state, dice| {
            let side = seated_side(state, caller)?;
            let roll = state.turn.roll_dice(side, dice)?;
            debug!(
                %side,
                dice = ?roll.as_slice(),
                turn = state.turn.turn_number(),
                "dice rolled"
            );
            Ok((roll.clone(), roll))
        })
    }

    /// Move one of the caller's checkers.
    pub fn submit_move(
        &mut self,
        caller: Address,
        from: Position,
        to: Position,
    ) -> Result<MoveOutcome, EngineError> {
        self.commit(caller, Action::Move { from, to }, |state, _| {
            let side = seated_side(state, caller)?;
            let (board, resolution) = MoveValidator::new(&state.board, &state.turn)
                .validate_and_resolve(side, from, to)?;

            state.board = board;
            state.turn.consume_move(side, resolution.distance)?;
            let outcome = finish_move(state, resolution);

            debug!(
                %side,
                from,
                to,
                distance = resolution.distance,
                captured = resolution.captures,
                turn_ended = outcome.turn_ended,
                "checker moved"
            );
            Ok((outcome, DiceRoll::new()))
        })
    }

    /// Give up the remaining dice when none of them can be played.
    pub fn pass_turn(&mut self, caller: Address) -> Result<DiceRoll, EngineError> {
        self.commit(caller, Action::Pass, |state, _| {
            let side = seated_side(state, caller)?;
            state.turn.ensure_can_move(side)?;
            if MoveValidator::new(&state.board, &state.turn).has_legal_move(side) {
                return Err(EngineError::LegalMoveAvailable { side });
            }

            let forfeited = state.turn.forfeit_remaining(side);
            debug!(%side, forfeited = ?forfeited.as_slice(), "turn passed");
            Ok((forfeited, DiceRoll::new()))
        })
    }

    // === Rules queries ===

    /// Every move `side` could submit right now.
    #[must_use]
    pub fn legal_moves(&self, side: Side) -> Vec<Resolution> {
        if self.state.escrow.ensure_in_progress().is_err() {
            return Vec::new();
        }
        MoveValidator::new(&self.state.board, &self.state.turn).legal_moves(side)
    }

    /// Run `apply` against a copy of the state and keep the copy only if it
    /// succeeds. Accepted actions are recorded with the turn they were
    /// taken in.
    fn commit<T>(
        &mut self,
        caller: Address,
        action: Action,
        apply: impl FnOnce(&mut MatchState, &mut D) -> Result<(T, DiceRoll), EngineError>,
    ) -> Result<T, EngineError> {
        let turn = self.state.turn.turn_number();
        let mut next = self.state.clone();

        match apply(&mut next, &mut self.dice) {
            Ok((value, dice)) => {
                next.record(caller, action, turn, &dice);
                self.state = next;
                Ok(value)
            }
            Err(err) => {
                if matches!(action, Action::Deposit { .. }) {
                    warn!(%caller, ?action, kind = err.kind(), "deposit rejected");
                } else {
                    debug!(%caller, ?action, kind = err.kind(), "action rejected");
                }
                Err(err)
            }
        }
    }
}

/// Lifecycle gate: the match must be running and the caller seated.
fn seated_side(state: &MatchState, caller: Address) -> Result<Side, EngineError> {
    state.escrow.ensure_in_progress()?;
    state
        .escrow
        .side_of(caller)
        .ok_or(EngineError::NotAParticipant(caller))
}

/// Detect a win and settle, or hand the turn over if the dice are spent.
fn finish_move(state: &mut MatchState, resolution: Resolution) -> MoveOutcome {
    let side = resolution.side;
    let mut outcome = MoveOutcome {
        side,
        from: resolution.from,
        to: resolution.to,
        distance: resolution.distance,
        captured: resolution.captures,
        turn_ended: false,
        payout: None,
    };

    if state.board.borne_off(side) == CHECKERS_PER_SIDE {
        outcome.payout = state.escrow.settle(side);
        if let Some(payout) = &outcome.payout {
            info!(
                winner = %side,
                recipient = %payout.recipient,
                amount = payout.amount,
                "match finished, escrow released"
            );
        }
    } else {
        outcome.turn_ended = state.turn.end_turn_if_exhausted();
    }
    outcome
}
