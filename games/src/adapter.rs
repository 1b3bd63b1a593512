//! The generic rule interpreter behind every title.

use quarter_core::core::{
    Action, Difficulty, Environment, Game, MemoryAccessor, Mode, StateError, StateReader,
    StateWriter,
};
use quarter_core::mode_switch::{DEFAULT_MAX_PRESSES, ModeError, ModeSwitch};
use quarter_core::score::DecodeError;
use tracing::trace;

use crate::rules::GameRules;
use crate::title::Title;

/// Derived per-session state. This is all an adapter saves and restores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub reward: i32,
    pub score: u32,
    pub terminal: bool,
    pub lives: i32,
}

/// Game adapter for one title: a rule record plus the derived state it
/// produces.
///
/// Cloning yields a detached copy; the rule record is shared immutable
/// data and nothing else is shared.
#[derive(Clone, Debug)]
pub struct GameAdapter {
    rules: &'static GameRules,
    state: Outcome,
    max_select_presses: u32,
}

impl GameAdapter {
    pub fn new(title: Title) -> Self {
        Self::from_rules(title.rules())
    }

    pub fn from_rules(rules: &'static GameRules) -> Self {
        Self {
            rules,
            state: initial_outcome(rules),
            max_select_presses: DEFAULT_MAX_PRESSES,
        }
    }

    /// Cap on select presses in [`Game::set_mode`] before it gives up.
    pub fn with_max_select_presses(mut self, presses: u32) -> Self {
        self.max_select_presses = presses;
        self
    }

    pub fn rules(&self) -> &'static GameRules {
        self.rules
    }

    pub fn outcome(&self) -> Outcome {
        self.state
    }
}

impl Game for GameAdapter {
    fn title_name(&self) -> &'static str {
        self.rules.name
    }

    fn rom_name(&self) -> &'static str {
        self.rules.rom
    }

    fn step(&mut self, mem: &dyn MemoryAccessor) -> Result<(), DecodeError> {
        let score = self.rules.score.read(mem)?;
        let lives = self.rules.lives.read(mem);
        let reward = i32::try_from(i64::from(score) - i64::from(self.state.score))
            .map_err(|_| DecodeError::Overflow)?;
        let terminal = self.rules.is_terminal(score, lives, mem);

        self.state = Outcome {
            reward,
            score,
            terminal,
            lives,
        };
        trace!(
            title = self.rules.name,
            score,
            reward,
            lives,
            terminal,
            "step"
        );
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.state.terminal
    }

    fn reward(&self) -> i32 {
        self.state.reward
    }

    fn score(&self) -> u32 {
        self.state.score
    }

    fn lives(&self) -> i32 {
        self.state.lives
    }

    fn is_minimal(&self, action: Action) -> bool {
        self.rules.is_minimal(action)
    }

    fn reset(&mut self) {
        self.state = initial_outcome(self.rules);
    }

    fn save_state(&self, ser: &mut dyn StateWriter) {
        ser.put_int(i64::from(self.state.reward));
        ser.put_int(i64::from(self.state.score));
        ser.put_bool(self.state.terminal);
        ser.put_int(i64::from(self.state.lives));
    }

    fn load_state(&mut self, de: &mut dyn StateReader) -> Result<(), StateError> {
        let reward = de.get_int()?;
        let score = de.get_int()?;
        let terminal = de.get_bool()?;
        let lives = de.get_int()?;

        self.state = Outcome {
            reward: narrow("reward", reward)?,
            score: narrow("score", score)?,
            terminal,
            lives: narrow("lives", lives)?,
        };
        Ok(())
    }

    fn available_modes(&self) -> Vec<Mode> {
        self.rules.modes()
    }

    fn available_difficulties(&self) -> Vec<Difficulty> {
        self.rules.difficulties.to_vec()
    }

    fn default_mode(&self) -> Mode {
        self.rules.default_mode
    }

    fn set_mode(&mut self, mode: Mode, env: &mut dyn Environment) -> Result<(), ModeError> {
        match &self.rules.modes {
            Some(table) => ModeSwitch::new(table)
                .with_max_presses(self.max_select_presses)
                .run(mode, env)
                .map(|_| ()),
            // Single-mode titles are always in their default mode.
            None if mode == self.rules.default_mode => Ok(()),
            None => Err(ModeError::Unsupported {
                mode,
                available: self.rules.modes(),
            }),
        }
    }

    fn starting_actions(&self) -> Vec<Action> {
        self.rules.starting_actions.to_vec()
    }

    fn clone_box(&self) -> Box<dyn Game + Send + Sync> {
        Box::new(self.clone())
    }
}

fn initial_outcome(rules: &GameRules) -> Outcome {
    Outcome {
        reward: 0,
        score: rules.initial_score,
        terminal: false,
        lives: rules.initial_lives,
    }
}

fn narrow<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T, StateError> {
    T::try_from(value).map_err(|_| StateError::OutOfRange { field, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarter_core::core::RamSnapshot;
    use quarter_core::score::ScoreLayout;

    use crate::rules::{Condition, LivesRule};

    #[test]
    fn decode_fault_keeps_previous_state() {
        let mut game = GameAdapter::new(Title::KingKong);
        let mut ram = RamSnapshot::new();
        ram.write(0x83, 0x50);
        ram.write(0xEE, 3);
        game.step(&ram).unwrap();
        let before = game.outcome();

        ram.write(0x82, 0x0F);
        assert_eq!(
            game.step(&ram),
            Err(DecodeError::InvalidDigit { index: 0, byte: 0x0F })
        );
        assert_eq!(game.outcome(), before);
    }

    static HUGE_SCALE: GameRules = GameRules {
        name: "huge",
        rom: "huge",
        score: ScoreLayout::new(&[0x80, 0x81, 0x82], 1_000),
        lives: LivesRule::Fixed(1),
        terminal: &[Condition::Lives(0)],
        minimal: &[],
        starting_actions: &[],
        initial_score: 0,
        initial_lives: 1,
        modes: None,
        default_mode: 0,
        difficulties: &[0],
    };

    #[test]
    fn reward_that_overflows_is_reported() {
        let mut game = GameAdapter::from_rules(&HUGE_SCALE);
        let mut ram = RamSnapshot::new();
        ram.write(0x80, 0x99);
        ram.write(0x81, 0x99);
        ram.write(0x82, 0x99);
        game.step(&ram).unwrap();
        assert_eq!(game.score(), 999_999_000);

        ram.write(0x80, 0x00);
        ram.write(0x81, 0x00);
        ram.write(0x82, 0x00);
        game.step(&ram).unwrap();
        assert_eq!(game.reward(), -999_999_000);

        let mut buf = quarter_core::core::StateBuffer::new();
        buf.put_int(0);
        buf.put_int(i64::from(u32::MAX));
        buf.put_bool(false);
        buf.put_int(1);
        let mut game = GameAdapter::from_rules(&HUGE_SCALE);
        game.load_state(&mut buf).unwrap();
        assert_eq!(game.step(&ram), Err(DecodeError::Overflow));
        assert_eq!(game.score(), u32::MAX);
    }

    #[test]
    fn load_state_rejects_negative_score() {
        let mut buf = quarter_core::core::StateBuffer::new();
        buf.put_int(0);
        buf.put_int(-5);
        buf.put_bool(false);
        buf.put_int(3);

        let mut game = GameAdapter::new(Title::Zaxxon);
        assert_eq!(
            game.load_state(&mut buf),
            Err(StateError::OutOfRange {
                field: "score",
                value: -5
            })
        );
        assert_eq!(game.lives(), 5);
    }
}
