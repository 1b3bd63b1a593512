mod common;

use common::{FakeEnvironment, ram_with};
use quarter_core::core::{Game, MemoryAccessor, RamSnapshot};
use quarter_core::mode_switch::ModeError;
use quarter_games::{GameAdapter, Title};

const SCORE_HI: u16 = 0xE8;
const SCORE_LO: u16 = 0xE9;
const LIVES: u16 = 0xEA;
const GAME_NUMBER: u16 = 0x82;

#[test]
fn test_initial_state() {
    let game = GameAdapter::new(Title::Zaxxon);
    assert_eq!(game.lives(), 5);
    assert_eq!(game.score(), 0);
    assert_eq!(game.available_modes(), vec![0, 8, 16, 24]);
    assert!(game.starting_actions().is_empty());
}

#[test]
fn test_losing_ships_until_game_over() {
    let mut game = GameAdapter::new(Title::Zaxxon);
    let mut ram = RamSnapshot::new();
    // Upper bits of the life byte carry unrelated flags.
    let frames: [(u8, u8, u8); 4] = [
        (0x00, 0x03, 0xF3),
        (0x00, 0x15, 0x82),
        (0x01, 0x10, 0x41),
        (0x01, 0x10, 0x80),
    ];
    let mut previous = 0i32;

    for (i, &(hi, lo, lives_byte)) in frames.iter().enumerate() {
        ram.write(SCORE_HI, hi);
        ram.write(SCORE_LO, lo);
        ram.write(LIVES, lives_byte);
        game.step(&ram).unwrap();

        let decoded = (i32::from(hi >> 4) * 1000
            + i32::from(hi & 0xF) * 100
            + i32::from(lo >> 4) * 10
            + i32::from(lo & 0xF))
            * 100;
        assert_eq!(game.reward(), decoded - previous);
        assert_eq!(game.lives(), i32::from(lives_byte & 0x07));
        assert_eq!(game.is_terminal(), i == 3, "frame {i}");
        previous = decoded;
    }
    assert_eq!(game.score(), 11_000);
}

#[test]
fn test_pre_reset_ram_is_not_valid_input() {
    // The ship counter is 0 until the console reset is pushed. Stepping
    // such RAM yields a terminal frame, so drivers hard-reset first.
    let mut game = GameAdapter::new(Title::Zaxxon);
    game.step(&ram_with(&[])).unwrap();
    assert!(game.is_terminal());
}

#[test]
fn test_set_mode_holds_select_for_ten_frames() {
    let mut game = GameAdapter::new(Title::Zaxxon);
    let mut env = FakeEnvironment::with_counter(GAME_NUMBER, &[0, 8, 16, 24], 0);

    game.set_mode(16, &mut env).unwrap();

    assert_eq!(env.selects(), 2);
    assert!(
        env.events
            .iter()
            .all(|e| !matches!(e, common::Event::Select(n) if *n != 10))
    );
    assert_eq!(env.soft_resets(), 1);
    assert_eq!(env.read_byte(GAME_NUMBER), 16);
}

#[test]
fn test_set_mode_rejects_unknown_mode() {
    let mut game = GameAdapter::new(Title::Zaxxon);
    let mut env = FakeEnvironment::with_counter(GAME_NUMBER, &[0, 8, 16, 24], 0);
    assert!(matches!(
        game.set_mode(4, &mut env),
        Err(ModeError::Unsupported { mode: 4, .. })
    ));
    assert!(env.events.is_empty());
}
