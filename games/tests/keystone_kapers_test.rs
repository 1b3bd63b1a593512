mod common;

use common::{FakeEnvironment, ram_with};
use quarter_core::core::{Action, Game, Input};
use quarter_core::mode_switch::ModeError;
use quarter_games::{GameAdapter, Title};

const LIVES: u16 = 0x96;
const SEQUENCE: u16 = 0x88;

#[test]
fn test_starts_with_reset() {
    let game = GameAdapter::new(Title::KeystoneKapers);
    assert_eq!(game.starting_actions(), vec![Action::Reset]);
}

#[test]
fn test_no_diagonal_fire() {
    let game = GameAdapter::new(Title::KeystoneKapers);
    assert!(game.is_minimal(Action::a(Input::DownFire)));
    assert!(!game.is_minimal(Action::a(Input::UpRightFire)));
}

#[test]
fn test_terminal_needs_sequence_to_finish() {
    let mut game = GameAdapter::new(Title::KeystoneKapers);

    game.step(&ram_with(&[(0x9B, 0x01), (0x9C, 0x00), (LIVES, 0), (SEQUENCE, 0x04)]))
        .unwrap();
    assert_eq!(game.score(), 100);
    assert!(!game.is_terminal());

    game.step(&ram_with(&[(0x9B, 0x01), (0x9C, 0x00), (LIVES, 0), (SEQUENCE, 0x00)]))
        .unwrap();
    assert!(game.is_terminal());
    assert_eq!(game.reward(), 0);
}

#[test]
fn test_single_mode_title() {
    let mut game = GameAdapter::new(Title::KeystoneKapers);
    assert_eq!(game.available_modes(), vec![0]);

    let mut env = FakeEnvironment::new();
    assert_eq!(game.set_mode(0, &mut env), Ok(()));
    assert!(env.events.is_empty());
    assert_eq!(
        game.set_mode(1, &mut env),
        Err(ModeError::Unsupported {
            mode: 1,
            available: vec![0]
        })
    );
}
