//! Escrow lifecycle tests.
//!
//! Seating, stake matching, snapshots of a funded match, and the
//! configuration checks made at creation.

use bg_escrow::{
    Address, BackgammonMatch, Board, ConfigError, DiceRng, EngineError, MatchBuilder, MatchPhase,
    Side, Winner, MAX_STAKE,
};

const STAKE: u128 = 250;

fn creator() -> Address {
    Address::repeat_byte(0x01)
}

fn joiner() -> Address {
    Address::repeat_byte(0x02)
}

fn open_match() -> BackgammonMatch {
    MatchBuilder::new()
        .stake(STAKE)
        .entropy_seed(7)
        .build(creator())
        .unwrap()
}

/// Creation escrows the creator's stake and leaves black unseated.
#[test]
fn test_creation_holds_one_stake() {
    let game = open_match();

    assert_eq!(game.white_player(), creator());
    assert_eq!(game.black_player(), Address::ZERO);
    assert_eq!(game.stake_amount(), STAKE);
    assert_eq!(game.escrow_balance(), STAKE);
    assert_eq!(game.phase(), MatchPhase::AwaitingSecondPlayer);
    assert!(!game.game_started());
    assert_eq!(game.winner(), Winner::None);
}

/// The matching deposit seats black; later deposits are refused.
#[test]
fn test_deposit_seats_black_once() {
    let mut game = open_match();

    let black = game.deposit(joiner(), STAKE).unwrap();
    assert_eq!(black, joiner());
    assert_eq!(game.black_player(), joiner());
    assert_eq!(game.escrow_balance(), 2 * STAKE);
    assert!(game.game_started());
    assert_eq!(game.phase(), MatchPhase::InProgress);

    let third = Address::repeat_byte(0x03);
    assert_eq!(game.deposit(third, STAKE), Err(EngineError::SecondSlotAlreadyFilled));
    assert_eq!(game.deposit(joiner(), STAKE), Err(EngineError::SecondSlotAlreadyFilled));
    assert_eq!(game.black_player(), joiner());
    assert_eq!(game.escrow_balance(), 2 * STAKE);
}

/// A deposit of the wrong size leaves the match waiting.
#[test]
fn test_stake_mismatch() {
    let mut game = open_match();

    for amount in [0, STAKE - 1, STAKE + 1, 2 * STAKE] {
        assert_eq!(
            game.deposit(joiner(), amount),
            Err(EngineError::StakeMismatch { expected: STAKE, got: amount })
        );
    }
    assert!(!game.game_started());
    assert_eq!(game.escrow_balance(), STAKE);
    assert!(game.state().history.is_empty());

    game.deposit(joiner(), STAKE).unwrap();
    assert!(game.game_started());
}

/// The creator cannot fill the second seat.
#[test]
fn test_creator_cannot_join() {
    let mut game = open_match();
    assert_eq!(game.deposit(creator(), STAKE), Err(EngineError::CreatorCannotJoin));
    assert_eq!(game.black_player(), Address::ZERO);
}

/// The zero address is the unset-seat marker and can never be seated.
#[test]
fn test_zero_address_cannot_join() {
    let mut game = open_match();
    let before = game.view();

    assert_eq!(game.deposit(Address::ZERO, STAKE), Err(EngineError::ZeroDepositor));
    assert_eq!(game.view(), before);
    assert!(!game.game_started());
    assert_eq!(game.black_player(), Address::ZERO);
    assert!(game.state().history.is_empty());

    game.deposit(joiner(), STAKE).unwrap();
    assert_eq!(game.black_player(), joiner());
}

/// Stakes are capped so both deposits fit in the escrow balance.
#[test]
fn test_stake_ceiling() {
    assert_eq!(
        MatchBuilder::new().stake(MAX_STAKE + 1).build(creator()).err(),
        Some(ConfigError::StakeTooLarge {
            stake: MAX_STAKE + 1,
            max: MAX_STAKE,
        })
    );

    let mut game = MatchBuilder::new().stake(MAX_STAKE).build(creator()).unwrap();
    game.deposit(joiner(), MAX_STAKE).unwrap();
    assert_eq!(game.escrow_balance(), 2 * MAX_STAKE);
    assert!(game.game_started());
}

/// Nobody can play before black is seated.
#[test]
fn test_no_play_before_start() {
    let mut game = open_match();

    assert_eq!(game.roll_dice(creator()), Err(EngineError::GameNotStarted));
    assert_eq!(game.submit_move(creator(), 13, 10), Err(EngineError::GameNotStarted));
    assert_eq!(game.pass_turn(creator()), Err(EngineError::GameNotStarted));
    assert!(game.legal_moves(Side::White).is_empty());
}

/// Invalid configurations never produce a match.
#[test]
fn test_config_rejections() {
    assert_eq!(
        MatchBuilder::new().build(creator()).err(),
        Some(ConfigError::ZeroStake)
    );
    assert_eq!(
        MatchBuilder::new().stake(STAKE).build(Address::ZERO).err(),
        Some(ConfigError::ZeroCreator)
    );

    let mut short = Board::standard();
    short.set(Side::White, 6, 4);
    assert_eq!(
        MatchBuilder::new().stake(STAKE).layout(short).build(creator()).err(),
        Some(ConfigError::CheckerCount { side: Side::White, count: 14, expected: 15 })
    );
}

/// A restored snapshot carries on with the same dice and state.
#[test]
fn test_snapshot_resumes_funded_match() {
    let mut game = open_match();
    game.deposit(joiner(), STAKE).unwrap();
    game.roll_dice(creator()).unwrap();

    let bytes = game.snapshot().unwrap();
    let mut restored = BackgammonMatch::<DiceRng>::restore(&bytes).unwrap();

    assert_eq!(restored.view(), game.view());
    assert_eq!(restored.state(), game.state());
    assert_eq!(restored.config(), game.config());

    // Finish white's turn the same way on both copies, then compare black's roll
    while game.active_side() == Side::White {
        let next = game.legal_moves(Side::White);
        match next.first() {
            Some(resolution) => {
                game.submit_move(creator(), resolution.from, resolution.to).unwrap();
                restored
                    .submit_move(creator(), resolution.from, resolution.to)
                    .unwrap();
            }
            None => {
                game.pass_turn(creator()).unwrap();
                restored.pass_turn(creator()).unwrap();
            }
        }
    }
    assert_eq!(game.roll_dice(joiner()), restored.roll_dice(joiner()));
    assert_eq!(restored.view(), game.view());
}

/// Garbage bytes are reported, not panicked on.
#[test]
fn test_restore_rejects_garbage() {
    assert!(BackgammonMatch::<DiceRng>::restore(&[0xFF, 0x00, 0x13]).is_err());
}
