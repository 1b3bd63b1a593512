use quarter_core::mode_switch::{ModeEncoding, ModeTable};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, FULL_JOYSTICK, GameRules, LivesRule};

// RAM map
const SCORE_HI: u16 = 0xDD;
const SCORE_MID: u16 = 0xDE;
const SCORE_LO: u16 = 0xDF;
const RESERVE_LIVES: u16 = 0xDA;
const GAME_NUMBER: u16 = 0x80;

/// Reserve-life byte value once the last life is gone (it wraps below 0).
const OUT_OF_LIVES: u8 = 0xFF;

/// Game numbers are shown in packed decimal: 1-9, then 10-12 as 0x10-0x12.
const MODES: &[u8] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 0x10, 0x11, 0x12];

/// Berzerk (Atari, 1982)
///
/// Six-digit score. The reserve counter starts at 2 and drops to 0xFF when
/// the final life is lost, so lives are reported as counter + 1 and the
/// wrap sentinel marks game over.
pub static RULES: GameRules = GameRules {
    name: "berzerk",
    rom: "berzerk",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_MID, SCORE_LO], 1),
    lives: LivesRule::Byte {
        addr: RESERVE_LIVES,
        mask: 0xFF,
        bias: 1,
    },
    terminal: &[Condition::Byte {
        addr: RESERVE_LIVES,
        value: OUT_OF_LIVES,
    }],
    minimal: FULL_JOYSTICK,
    starting_actions: &[],
    initial_score: 0,
    initial_lives: 3,
    modes: Some(ModeTable {
        modes: MODES,
        addr: GAME_NUMBER,
        encoding: ModeEncoding::Raw,
        guard: None,
        // The select switch is ignored for a while after power-on.
        settle_frames: 20,
        select_frames: 2,
    }),
    default_mode: 1,
    difficulties: &[0],
};
