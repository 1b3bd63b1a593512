use quarter_core::core::{Action, Input};
use quarter_core::score::ScoreLayout;

use crate::rules::{Condition, FULL_JOYSTICK, GameRules, LivesRule};

const SCORE_HI: u16 = 0xC7;
const SCORE_MID: u16 = 0xC8;
const SCORE_LO: u16 = 0xC9;

/// The game clamps the score here; it never wraps.
pub const MAX_SCORE: u32 = 199_000;

/// Pitfall II: Lost Caverns (Activision, 1984)
///
/// Harry cannot die: touching a hazard teleports him back to the last
/// checkpoint and costs points (never below zero). There is no life
/// counter and the score starts at 4000.
///
/// Completing the adventure is not detected from RAM. Reaching the clamped
/// maximum score is used as a stand-in for game over, which is an
/// approximation: a run can finish the caverns without maxing the score.
///
/// Pressing up leaves the title screen.
pub static RULES: GameRules = GameRules {
    name: "pitfall2",
    rom: "pitfall2",
    score: ScoreLayout::new(&[SCORE_HI, SCORE_MID, SCORE_LO], 1),
    lives: LivesRule::Fixed(1),
    terminal: &[Condition::Score(MAX_SCORE)],
    minimal: FULL_JOYSTICK,
    starting_actions: &[Action::a(Input::Up)],
    initial_score: 4000,
    initial_lives: 1,
    modes: None,
    default_mode: 0,
    difficulties: &[0],
};
