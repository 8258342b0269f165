use crate::prelude::*;

impl Board
{
    #[inline]
    /// Ensures a column is on the board.
    pub(crate) fn ensure_in_range(column: Column) -> Result<()>
    {
        if column >= geometry::COLS
        {
            return Err(Error::invalid_column(column));
        }
        Ok(())
    }

    #[inline]
    /// Ensures a column has an open row.
    pub(crate) fn ensure_open(&self, column: Column) -> Result<()>
    {
        if !self.is_valid(column)
        {
            return Err(Error::column_full(column));
        }
        Ok(())
    }

    #[inline]
    /// Ensures there is room in the history for another ply.
    pub(super) fn ensure_history_room(&self) -> Result<()>
    {
        if self.history.is_full()
        {
            let err = Error::new(Kind::InvalidState, format!("All {} plies have already been played.", geometry::MAX_PLIES));
            return Err(err);
        }
        Ok(())
    }

    /// Ensures a raw state describes a position that can actually be reached.
    ///
    /// A raw state is consistent if:
    ///
    /// 1. no guard bit or bit past the last column is set;
    /// 2. every column is filled from the bottom without gaps;
    /// 3. the side to move owns only occupied cells;
    /// 4. its history has one entry per piece, and each column was played exactly as often as it is tall;
    /// 5. the side to move follows from the starting player and the number of plies; and
    /// 6. the pieces are split between the players the way alternating turns split them.
    pub(super) fn ensure_consistent(raw: &RawState, first: Player) -> Result<()>
    {
        let base = Error::new(Kind::InvalidState, "Raw state is not a reachable position.".into());
        (|| {
            if raw.occupancy & !geometry::FULL != 0
            {
                return Err(Error::new(Kind::InvalidState, "Occupancy has a guard bit or an off-board bit set.".into()));
            }

            if raw.player & !raw.occupancy != 0
            {
                return Err(Error::new(Kind::InvalidState, "The side to move owns an empty cell.".into()));
            }

            if raw.history.len() != raw.occupancy.count_ones() as usize
            {
                let err_msg = format!(
                    "History has {} plies, but there are {} pieces on the board.",
                    raw.history.len(),
                    raw.occupancy.count_ones()
                );
                return Err(Error::new(Kind::InvalidState, err_msg));
            }

            if let Some(&column) = raw.history.iter().find(|&&c| c >= geometry::COLS)
            {
                return Err(Error::invalid_column(column));
            }

            for column in 0..geometry::COLS
            {
                let lane = geometry::lane_of(raw.occupancy, column);
                if lane & lane.wrapping_add(1) != 0
                {
                    return Err(Error::new(Kind::InvalidState, format!("Column {} has a gap below its top piece.", column)));
                }

                let height = lane.count_ones() as usize;
                let played = raw.history.iter().filter(|&&c| c == column).count();
                if height != played
                {
                    let err_msg = format!("Column {} holds {} pieces, but was played {} times.", column, height, played);
                    return Err(Error::new(Kind::InvalidState, err_msg));
                }
            }

            let plies = raw.history.len();
            let expected = if plies % 2 == 0 { first } else { first.flip() };
            if raw.to_move != expected
            {
                let err_msg = format!("After {} plies starting with {}, {} should be to move.", plies, first, expected);
                return Err(Error::new(Kind::InvalidState, err_msg));
            }

            // The side to move has had exactly half of the plies, rounded down.
            let owned = raw.player.count_ones() as usize;
            if owned != plies / 2
            {
                let err_msg = format!("The side to move owns {} pieces after {} plies.", owned, plies);
                return Err(Error::new(Kind::InvalidState, err_msg));
            }

            Ok(())
        })()
        .map_err(|err: Error| err.chain(base))
    }
}
