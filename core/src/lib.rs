pub mod core;
pub mod mode_switch;
pub mod score;

pub mod prelude {
    pub use crate::core::game::{Difficulty, Game, Mode};
    pub use crate::core::{
        Action, ControlPort, Environment, Input, MemoryAccessor, Player, RamSnapshot,
        StateReader, StateWriter,
    };
    pub use crate::mode_switch::ModeError;
    pub use crate::score::DecodeError;
}
