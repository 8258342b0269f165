use crate::prelude::*;

/// Bit distances between neighbouring cells, one per direction a line can run in.
const DIRECTIONS: [u32; 4] = [
    geometry::LANE,     // horizontal
    geometry::LANE - 1, // diagonal, falling to the right
    geometry::LANE + 1, // diagonal, rising to the right
    1,                  // vertical
];

impl Board
{
    /// Determines whether the player who just moved has four pieces in a row.
    ///
    /// Pairs of neighbours along a direction are collapsed into one bit, then pairs of pairs: any bit left over
    /// marks the end of a line of four. The guard row keeps lines from wrapping between columns.
    pub fn last_player_won(&self) -> bool
    {
        let pieces = self.opponent_pieces();

        DIRECTIONS.iter().any(|&d| {
            let pairs = pieces & (pieces >> d);
            pairs & (pairs >> (2 * d)) != 0
        })
    }

    /// Determines whether every playable cell has been filled.
    ///
    /// This says nothing about wins; check [`Board::last_player_won`] first.
    pub fn is_full(&self) -> bool
    {
        self.occupancy == geometry::FULL
    }

    /// Gets the state of the game.
    pub fn state(&self) -> GameState
    {
        if self.plies() == 0
        {
            GameState::NotStarted
        }
        else if self.last_player_won()
        {
            match self.to_move.flip()
            {
                | Player::First => GameState::FirstWins,
                | Player::Second => GameState::SecondWins,
            }
        }
        else if self.is_full()
        {
            GameState::Draw
        }
        else
        {
            GameState::InProgress
        }
    }
}
