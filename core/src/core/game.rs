use crate::core::action::Action;
use crate::core::control::Environment;
use crate::core::memory::MemoryAccessor;
use crate::core::state::{StateError, StateReader, StateWriter};
use crate::mode_switch::ModeError;
use crate::score::DecodeError;

/// Game variation identifier, as the game itself numbers it.
pub type Mode = u8;

/// Difficulty switch setting.
pub type Difficulty = u8;

/// Title-agnostic interface between a training driver and one game.
///
/// Each title turns its own RAM layout into the same outcome signal:
/// reward, terminal flag and lives, plus the static facts the driver needs
/// to set up a session (reduced action set, variations, starting inputs).
///
/// The adapter only derives state from memory. It never advances the
/// emulator except inside [`set_mode`](Game::set_mode).
pub trait Game {
    /// Short lowercase identifier (e.g., "zaxxon").
    fn title_name(&self) -> &'static str;

    /// File stem of the cartridge image this title expects.
    fn rom_name(&self) -> &'static str;

    /// Update derived state from the current frame's memory.
    ///
    /// Call at most once per emulated transition. On a decode fault the
    /// previous state is kept and the fault is returned.
    fn step(&mut self, mem: &dyn MemoryAccessor) -> Result<(), DecodeError>;

    fn is_terminal(&self) -> bool;

    /// Score change observed by the last `step`.
    fn reward(&self) -> i32;

    fn score(&self) -> u32;

    fn lives(&self) -> i32;

    /// Whether `action` belongs to this title's reduced control scheme.
    fn is_minimal(&self, action: Action) -> bool;

    /// Whether `action` is accepted at all (any player A joystick action).
    fn is_legal(&self, action: Action) -> bool {
        matches!(action, Action::Player(crate::core::Player::A, _))
    }

    /// Restore the title's initial derived state.
    fn reset(&mut self);

    /// Write reward, score, terminal and lives, in that order.
    fn save_state(&self, ser: &mut dyn StateWriter);

    /// Read back what [`save_state`](Game::save_state) wrote. On error the
    /// adapter is left unchanged.
    fn load_state(&mut self, de: &mut dyn StateReader) -> Result<(), StateError>;

    fn available_modes(&self) -> Vec<Mode>;

    fn available_difficulties(&self) -> Vec<Difficulty>;

    fn default_mode(&self) -> Mode;

    fn default_difficulty(&self) -> Difficulty {
        0
    }

    fn is_mode_supported(&self, mode: Mode) -> bool {
        self.available_modes().contains(&mode)
    }

    /// Drive the emulator into `mode` and soft-reset it.
    fn set_mode(&mut self, mode: Mode, env: &mut dyn Environment) -> Result<(), ModeError>;

    /// Inputs the driver must send after a hard reset before stepping.
    fn starting_actions(&self) -> Vec<Action>;

    /// Detached copy carrying the same derived state.
    fn clone_box(&self) -> Box<dyn Game + Send + Sync>;
}
