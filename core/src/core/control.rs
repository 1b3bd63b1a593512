use crate::core::action::Action;
use crate::core::memory::MemoryAccessor;

/// Synthetic input channel into the running emulator.
///
/// All calls are synchronous and advance the emulated machine; their only
/// observable result is the memory that can be re-read afterwards.
pub trait ControlPort {
    /// Run one frame with the given player A / player B actions.
    fn act(&mut self, primary: Action, secondary: Action);

    /// Hold the game-select switch for `frames` frames, then release it.
    fn press_select(&mut self, frames: u32);

    /// Restart the game logic without touching the selected game variation.
    fn soft_reset(&mut self);
}

/// An emulator handle that exposes both memory reads and input.
///
/// The mode-switch loop interleaves presses with reads of the same
/// machine, so both capabilities have to come from one borrow.
pub trait Environment: MemoryAccessor + ControlPort {}

impl<T: MemoryAccessor + ControlPort + ?Sized> Environment for T {}
