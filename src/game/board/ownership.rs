//! The ownership trick.
//!
//! The board never tags a cell with its owner. It keeps the occupancy and one more mask, `player`, holding the
//! pieces of the side to move. The last mover's pieces are then `occupancy ^ player`.
//!
//! Before a piece is dropped, the side to move hands the turn over, so its pieces become the opponent's and the
//! opponent's become the side to move's. XOR-ing `player` with the occupancy *before* the new piece lands does
//! exactly that swap: afterwards `player` holds the old opponent's pieces, and the new piece (absent from `player`)
//! is counted for the mover through `occupancy ^ player`. Undo runs the same swap *after* the piece is lifted.

use crate::prelude::*;

#[inline]
/// Hands the turn over: returns the new `player` mask for the given occupancy.
///
/// Must be given the occupancy without the piece being dropped, or without the piece just lifted.
pub fn reattribute(player: Mask, occupancy: Mask) -> Mask
{
    player ^ occupancy
}

#[inline]
/// The pieces of the player who moved last.
pub fn opponent(occupancy: Mask, player: Mask) -> Mask
{
    occupancy ^ player
}
