//! Declarative per-title rule records.
//!
//! Every title is described by one [`GameRules`] value: where its score
//! lives, how to read the life counter, which conditions end the game and
//! which inputs it responds to. [`GameAdapter`](crate::GameAdapter)
//! interprets these records; titles carry no code of their own.

use quarter_core::core::{Action, Difficulty, Input, MemoryAccessor, Mode, Player};
use quarter_core::mode_switch::ModeTable;
use quarter_core::score::ScoreLayout;

/// Every joystick direction with and without fire.
pub const FULL_JOYSTICK: &[Input] = &Input::ALL;

/// How the life counter is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LivesRule {
    /// `(ram[addr] & mask) + bias`. The mask strips bits the game uses for
    /// unrelated flags; the bias converts "reserve ships" into "lives".
    Byte { addr: u16, mask: u8, bias: i32 },
    /// The title has no life counter.
    Fixed(i32),
}

impl LivesRule {
    pub const fn byte(addr: u16) -> Self {
        LivesRule::Byte {
            addr,
            mask: 0xFF,
            bias: 0,
        }
    }

    pub fn read(&self, mem: &dyn MemoryAccessor) -> i32 {
        match *self {
            LivesRule::Byte { addr, mask, bias } => i32::from(mem.read_byte(addr) & mask) + bias,
            LivesRule::Fixed(lives) => lives,
        }
    }
}

/// One clause of a terminal predicate. A title is terminal when all of
/// its clauses hold on the same frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// Decoded lives equal the value.
    Lives(i32),
    /// Raw byte equals the value (sentinels, animation phases).
    Byte { addr: u16, value: u8 },
    /// Decoded score equals the value.
    Score(u32),
}

impl Condition {
    pub fn holds(&self, score: u32, lives: i32, mem: &dyn MemoryAccessor) -> bool {
        match *self {
            Condition::Lives(n) => lives == n,
            Condition::Byte { addr, value } => mem.read_byte(addr) == value,
            Condition::Score(n) => score == n,
        }
    }
}

/// Everything that distinguishes one title from another.
#[derive(Debug)]
pub struct GameRules {
    /// Lowercase identifier used on the command line.
    pub name: &'static str,
    /// Cartridge image file stem.
    pub rom: &'static str,
    pub score: ScoreLayout,
    pub lives: LivesRule,
    /// Conjunction; must not be empty.
    pub terminal: &'static [Condition],
    /// Player A inputs of the reduced control scheme.
    pub minimal: &'static [Input],
    pub starting_actions: &'static [Action],
    pub initial_score: u32,
    pub initial_lives: i32,
    /// `None` when the title offers only its default mode.
    pub modes: Option<ModeTable>,
    pub default_mode: Mode,
    pub difficulties: &'static [Difficulty],
}

impl GameRules {
    pub fn is_terminal(&self, score: u32, lives: i32, mem: &dyn MemoryAccessor) -> bool {
        !self.terminal.is_empty() && self.terminal.iter().all(|c| c.holds(score, lives, mem))
    }

    pub fn is_minimal(&self, action: Action) -> bool {
        match action {
            Action::Player(Player::A, input) => self.minimal.contains(&input),
            _ => false,
        }
    }

    pub fn modes(&self) -> Vec<Mode> {
        match &self.modes {
            Some(table) => table.modes.to_vec(),
            None => vec![self.default_mode],
        }
    }
}
