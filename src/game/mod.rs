//! The game itself: dealing, the palace-exchange phase and `GameState`.

pub mod builder;
pub mod deal;
pub mod phase;
pub mod state;

pub use builder::PalaceBuilder;
pub use deal::deal;
pub use phase::PalacePhase;
pub use state::{GameState, Selection};
