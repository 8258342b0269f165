use itertools::Itertools;

use crate::prelude::*;

impl Board
{
    /// Standard debug.
    pub(super) fn debug(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "Board {{ occupancy: {:#x}, player: {:#x}, to_move: {:?}, history: {:?}, options: {:?} }}",
            self.occupancy,
            self.player,
            self.to_move,
            self.history.as_slice(),
            self.options
        )
    }

    /// Pretty print.
    pub(super) fn pretty(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ to_move: {:?}, plies: {}, key: {:#x} }}\n{}", self.to_move, self.plies(), self.key(), self)
    }

    /// Gets the player whose piece sits on a cell, if any.
    fn owner(&self, column: Column, row: u32) -> Option<Player>
    {
        let bit = geometry::base(column) + row;
        if (self.occupancy >> bit) & 1 == 0
        {
            None
        }
        else if (self.player >> bit) & 1 != 0
        {
            Some(self.to_move)
        }
        else
        {
            Some(self.to_move.flip())
        }
    }
}

/// Draws the grid with the top row first and the column numbers underneath.
impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for row in (0..geometry::ROWS).rev()
        {
            let cells = (0..geometry::COLS)
                .map(|column| self.owner(column, row).map(|player| player.short()).unwrap_or("."))
                .join(" ");
            writeln!(f, "{}", cells)?;
        }
        write!(f, "{}", (0..geometry::COLS).join(" "))
    }
}
