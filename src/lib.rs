pub mod arena;
pub mod bot;
pub mod game;

pub use arena::*;
pub use bot::*;
pub use game::*;
