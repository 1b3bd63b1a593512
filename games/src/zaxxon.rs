use quarter_core::mode_switch::{ModeEncoding, ModeTable};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, FULL_JOYSTICK, GameRules, LivesRule};

const SCORE_HI: u16 = 0xE8;
const SCORE_LO: u16 = 0xE9;
/// The last two score digits are always zero and not stored.
const SCORE_SCALE: u32 = 100;
/// Low three bits: ships left. Upper bits are unrelated flags.
const LIVES: u16 = 0xEA;
const LIVES_MASK: u8 = 0x07;
const GAME_NUMBER: u16 = 0x82;

/// Zaxxon (Coleco, 1983)
///
/// The ship counter reads 0 until the console reset has been pushed. The
/// driver must push a hard reset before the first step; RAM from before
/// that reset is not valid input and reads as terminal.
pub static RULES: GameRules = GameRules {
    name: "zaxxon",
    rom: "zaxxon",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_LO], SCORE_SCALE),
    lives: LivesRule::Byte {
        addr: LIVES,
        mask: LIVES_MASK,
        bias: 0,
    },
    terminal: &[Condition::Lives(0)],
    minimal: FULL_JOYSTICK,
    starting_actions: &[],
    initial_score: 0,
    initial_lives: 5,
    modes: Some(ModeTable {
        modes: &[0, 8, 16, 24],
        addr: GAME_NUMBER,
        encoding: ModeEncoding::Raw,
        guard: None,
        settle_frames: 0,
        select_frames: 10,
    }),
    default_mode: 0,
    difficulties: &[0],
};
