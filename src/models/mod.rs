pub mod game;

pub use game::{GameSnapshot, GameStatus, Position, Theme, Tile};
