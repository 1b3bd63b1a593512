use quarter_core::core::Input;
use quarter_core::mode_switch::{ModeEncoding, ModeTable};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, GameRules, LivesRule};

const SCORE_HI: u16 = 0xD0;
const SCORE_MID: u16 = 0xCE;
const SCORE_LO: u16 = 0xCC;
const RESERVE_LIVES: u16 = 0x98;
const DEATH_ANIMATION: u16 = 0xE4;
/// Last frame of the death animation.
const DEATH_ANIMATION_DONE: u8 = 0x3F;
/// On the select screen the low score byte shows the game number + 1.
const GAME_NUMBER: u16 = SCORE_LO;
/// Zero for one player.
const PLAYER_COUNT: u16 = 0xE6;

/// Pac-Man (Atari, 1982)
///
/// Game over is the last life with the death animation finished; checking
/// lives alone would flag terminal while Pac-Man is still shrinking.
///
/// Eight speed variations, each offered for one and two players in the
/// same select cycle. Mode switching only stops on the one-player entry.
/// The left difficulty switch sets how long power pills last.
pub static RULES: GameRules = GameRules {
    name: "pacman",
    rom: "pacman",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_MID, SCORE_LO], 1),
    lives: LivesRule::Byte {
        addr: RESERVE_LIVES,
        mask: 0xFF,
        bias: 1,
    },
    terminal: &[
        Condition::Lives(1),
        Condition::Byte {
            addr: DEATH_ANIMATION,
            value: DEATH_ANIMATION_DONE,
        },
    ],
    minimal: &[
        Input::Noop,
        Input::Up,
        Input::Right,
        Input::Left,
        Input::Down,
    ],
    starting_actions: &[],
    initial_score: 0,
    initial_lives: 4,
    modes: Some(ModeTable {
        modes: &[0, 1, 2, 3, 4, 5, 6, 7],
        addr: GAME_NUMBER,
        encoding: ModeEncoding::Bias(1),
        guard: Some((PLAYER_COUNT, 0)),
        settle_frames: 0,
        select_frames: 2,
    }),
    default_mode: 0,
    difficulties: &[0, 1],
};
