use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// The options a board is built with.
pub struct Options
{
    /// Whether `Board::play` and `Board::from_raw` validate their input.
    ///
    /// Off by default; callers that only play columns taken from `Board::valid_columns` never need it.
    pub strict: bool,

    /// The player who drops the first piece.
    pub first: Player,
}

impl Options
{
    /// Options with every precondition check enabled.
    pub fn strict() -> Self
    {
        Options {
            strict: true,
            first:  Player::First,
        }
    }

    /// Sets the player who moves first.
    pub fn starting(self, first: Player) -> Self
    {
        Options { first, ..self }
    }
}
