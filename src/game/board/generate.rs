use crate::prelude::*;

impl Board
{
    /// Gets the set of columns that still have an open row.
    pub fn valid_columns(&self) -> ColumnMask
    {
        (0..geometry::COLS)
            .filter(|&column| self.is_valid(column))
            .fold(0, |mask, column| mask | 1 << column)
    }

    /// Gets the set of columns in which the side to move would complete a line of four.
    ///
    /// Each candidate is played and then taken back, so the board is only borrowed mutably for the duration.
    pub fn winning_columns(&mut self) -> ColumnMask
    {
        let mut mask: ColumnMask = 0;
        for column in geometry::columns(self.valid_columns())
        {
            self.play_unchecked(column);
            if self.last_player_won()
            {
                mask |= 1 << column;
            }
            self.take_back();
        }
        mask
    }
}
