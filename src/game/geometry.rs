//! Lane layout of the bitboard.
//!
//! Every column owns a lane of [`LANE`] consecutive bits, starting at bit `column * LANE`. The low [`ROWS`] bits
//! of a lane are the playable cells (row 0 at the bottom), and the bit above them is a guard that stays clear.
//! The guard stops carries, shifts and diagonal scans from leaking from one column into the next.
//!
//! ```text
//!   guard   7  15  23  31  39  47  55  63  71
//!   row 6   6  14  22  30  38  46  54  62  70
//!   ...
//!   row 0   0   8  16  24  32  40  48  56  64
//! ```

/// A 128-bit mask over the lanes of the board.
pub type Mask = u128;

/// The index of a column, counted from the left.
pub type Column = u8;

/// A set of columns, with bit `c` standing for column `c`.
pub type ColumnMask = u16;

/// Playable rows per column.
pub const ROWS: u32 = 7;

/// Columns on the board.
pub const COLS: Column = 9;

/// Bits per column: the playable rows plus the guard.
pub const LANE: u32 = ROWS + 1;

/// The most plies a game can last.
pub const MAX_PLIES: usize = (ROWS * COLS as u32) as usize;

/// A whole lane, guard included.
pub const LANE_MASK: Mask = (1 << LANE) - 1;

/// The playable cells of a lane, guard excluded.
pub const PLAYABLE_LANE: Mask = (1 << ROWS) - 1;

/// One bit at the bottom row of every column.
pub const BOTTOM: Mask = repeat(1);

/// Every playable cell on the board.
pub const FULL: Mask = repeat(PLAYABLE_LANE);

/// Every column, as a column set.
pub const ALL_COLUMNS: ColumnMask = ((1u32 << COLS) - 1) as ColumnMask;

const _: () = assert!(COLS as u32 * LANE <= Mask::BITS);
const _: () = assert!(COLS as u32 <= ColumnMask::BITS);

/// Copies a lane pattern into every column.
const fn repeat(lane: Mask) -> Mask
{
    let mut mask = 0;
    let mut column = 0;
    while column < COLS
    {
        mask |= lane << base(column);
        column += 1;
    }
    mask
}

#[inline]
/// The bit of the bottom row of a column.
pub const fn base(column: Column) -> u32
{
    column as u32 * LANE
}

#[inline]
/// The bit of the topmost playable row of a column.
pub const fn top(column: Column) -> u32
{
    base(column) + ROWS - 1
}

#[inline]
/// The guard bit of a column.
pub const fn guard(column: Column) -> u32
{
    base(column) + ROWS
}

#[inline]
/// Reads the lane of a column out of a mask or key, guard included.
pub const fn lane_of(mask: Mask, column: Column) -> u8
{
    ((mask >> base(column)) & LANE_MASK) as u8
}

#[inline]
/// Places a lane at the given column of an otherwise empty mask.
pub const fn with_lane(lane: u8, column: Column) -> Mask
{
    (lane as Mask) << base(column)
}

#[inline]
/// The column the mirror image of a column lands on.
pub const fn mirrored(column: Column) -> Column
{
    COLS - 1 - column
}

/// Iterates over the columns of a column set, from left to right.
pub fn columns(set: ColumnMask) -> impl Iterator<Item = Column>
{
    (0..COLS).filter(move |&column| set >> column & 1 != 0)
}
