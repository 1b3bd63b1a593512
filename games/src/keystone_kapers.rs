use quarter_core::core::{Action, Input};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, GameRules, LivesRule};

const SCORE_HI: u16 = 0x9B;
const SCORE_LO: u16 = 0x9C;
const LIVES: u16 = 0x96;
/// Zero while no death/transition sequence is playing.
const SEQUENCE: u16 = 0x88;

/// Keystone Kapers (Activision, 1983)
///
/// Lives hit zero before the final death sequence finishes, so game over
/// also waits for the sequence byte to clear. The cartridge sits in attract
/// mode until the reset switch is pressed.
pub static RULES: GameRules = GameRules {
    name: "keystone_kapers",
    rom: "keystone_kapers",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_LO], 1),
    lives: LivesRule::byte(LIVES),
    terminal: &[
        Condition::Lives(0),
        Condition::Byte {
            addr: SEQUENCE,
            value: 0x00,
        },
    ],
    minimal: &[
        Input::Noop,
        Input::Fire,
        Input::Up,
        Input::Right,
        Input::Left,
        Input::Down,
        Input::UpRight,
        Input::UpLeft,
        Input::DownRight,
        Input::DownLeft,
        Input::UpFire,
        Input::RightFire,
        Input::LeftFire,
        Input::DownFire,
    ],
    starting_actions: &[Action::Reset],
    initial_score: 0,
    initial_lives: 3,
    modes: None,
    default_mode: 0,
    difficulties: &[0],
};
