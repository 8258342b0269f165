pub(crate) mod board;
pub mod geometry;
pub(crate) mod options;
pub(crate) mod player;

pub use board::{key, Board, BoardKey, GameState, History, RawState};
pub use geometry::{Column, ColumnMask, Mask};
pub use options::Options;
pub use player::Player;
