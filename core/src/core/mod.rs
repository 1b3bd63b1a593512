pub mod action;
pub mod control;
pub mod game;
pub mod memory;
pub mod state;

pub use action::{Action, Input, Player};
pub use control::{ControlPort, Environment};
pub use game::{Difficulty, Game, Mode};
pub use memory::{MemoryAccessor, RAM_SIZE, RamSnapshot};
pub use state::{StateBuffer, StateError, StateReader, StateWriter};
