use crate::prelude::*;

/// A position key.
///
/// Bits:
///
/// 00 - 47: lanes of columns 0 to 5
///
/// 48 - 71: lanes of columns 6 to 8
///
/// Each lane holds `occupancy + 1 + player` for its column. The occupied cells of a lane are a run from the
/// bottom, so `occupancy + 1` collapses them into a single marker bit just above the top piece, and the side to
/// move's pieces are left as flags below the marker. A full column puts its marker on the guard bit, so a lane
/// never carries into its neighbour: two positions share a key if and only if they are the same position.
pub type BoardKey = u128;

#[inline]
/// Computes the key of a position from its occupancy and the side to move's pieces.
pub fn encode(occupancy: Mask, player: Mask) -> BoardKey
{
    geometry::BOTTOM + occupancy + player
}

/// Mirrors a key left to right, swapping column `c` with column `COLS - 1 - c`.
pub fn mirror(key: BoardKey) -> BoardKey
{
    (0..geometry::COLS).fold(0, |mirror, column| {
        mirror | geometry::with_lane(geometry::lane_of(key, column), geometry::mirrored(column))
    })
}

#[inline]
/// Picks the representative of a key and its mirror image, so that both fold onto one table entry.
pub fn canonical(key: BoardKey) -> BoardKey
{
    key.min(mirror(key))
}
