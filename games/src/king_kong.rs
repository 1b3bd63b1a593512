use quarter_core::core::Input;
use quarter_core::mode_switch::{ModeEncoding, ModeTable};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, GameRules, LivesRule};

const SCORE_HI: u16 = 0x82;
const SCORE_LO: u16 = 0x83;
const LIVES: u16 = 0xEE;
const GAME_NUMBER: u16 = 0xEC;

/// King Kong (Tigervision, 1982)
///
/// The cartridge has eight game numbers; odd ones are the two-player
/// versions. Only the four single-player games are exposed, so public mode
/// `m` is raw game number `2 * m`. Modes change bomb speed and whether
/// magic bombs appear.
pub static RULES: GameRules = GameRules {
    name: "king_kong",
    rom: "king_kong",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_LO], 1),
    lives: LivesRule::byte(LIVES),
    terminal: &[Condition::Lives(0)],
    minimal: &[
        Input::Noop,
        Input::Fire,
        Input::Up,
        Input::Right,
        Input::Left,
        Input::Down,
    ],
    starting_actions: &[],
    initial_score: 0,
    initial_lives: 3,
    modes: Some(ModeTable {
        modes: &[0, 1, 2, 3],
        addr: GAME_NUMBER,
        encoding: ModeEncoding::Stride(2),
        guard: None,
        settle_frames: 0,
        select_frames: 2,
    }),
    default_mode: 0,
    difficulties: &[0],
};
