pub mod adapter;
pub mod registry;
pub mod rules;
pub mod title;

pub mod berzerk;
pub mod keystone_kapers;
pub mod king_kong;
pub mod pacman;
pub mod pitfall2;
pub mod zaxxon;

pub use adapter::GameAdapter;
pub use rules::{Condition, GameRules, LivesRule};
pub use title::Title;
