use crate::prelude::*;

mod checks;
mod ensures;
mod generate;
mod history;
pub mod key;
mod ownership;
mod printers;
mod state;

pub use history::History;
pub use key::BoardKey;
pub use state::GameState;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The loose parts of a board, for rebuilding a position without replaying it.
pub struct RawState
{
    pub occupancy: Mask,
    pub player:    Mask,
    pub to_move:   Player,
    pub history:   Vec<Column>,
}

impl From<&Board> for RawState
{
    fn from(value: &Board) -> Self
    {
        RawState {
            occupancy: value.occupancy,
            player:    value.player,
            to_move:   value.to_move,
            history:   value.history.as_slice().to_vec(),
        }
    }
}

#[derive(Clone)]
/// A bitboard for a 7-row, 9-column drop-four game.
///
/// The whole position lives in two masks laid out by [`geometry`]; see [`ownership`] for how the pieces are split
/// between the players without a per-cell tag.
pub struct Board
{
    /// Every occupied cell, whoever owns it.
    occupancy: Mask,

    /// The pieces of the side to move.
    player: Mask,

    /// The side to move.
    to_move: Player,

    /// The columns played so far, which doubles as the ply counter.
    history: History,

    /// The options this board was built with.
    options: Options,
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        self.occupancy == other.occupancy
            && self.player == other.player
            && self.to_move == other.to_move
            && self.history == other.history
    }
}

impl Eq for Board {}

impl Default for Board
{
    fn default() -> Self
    {
        let options = Options::default();
        Board::new(options)
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        if f.alternate()
        {
            self.pretty(f)
        }
        else
        {
            self.debug(f)
        }
    }
}

impl std::hash::Hash for Board
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.key().hash(state)
    }
}

impl Board
{
    /// Finds the canonical key among this position and its mirror image.
    pub fn canonical_key(&self) -> BoardKey
    {
        key::canonical(self.key())
    }

    /// Rebuilds a board from its raw parts. The number of plies is the length of the history.
    ///
    /// With strict options the parts are checked against each other first; otherwise they are trusted as given.
    pub fn from_raw(raw: RawState, options: Options) -> Result<Board>
    {
        if options.strict
        {
            Board::ensure_consistent(&raw, options.first)?;
        }

        let history = History::try_from(raw.history.as_slice())?;
        log::trace!("Rebuilt a board at ply {} with {} to move.", history.len(), raw.to_move);

        Ok(Board {
            occupancy: raw.occupancy,
            player: raw.player,
            to_move: raw.to_move,
            history,
            options,
        })
    }

    /// Gets the history of this game.
    pub fn history(&self) -> &History
    {
        &self.history
    }

    /// Determines whether the mirror image of this position is the position itself.
    pub fn is_symmetrical(&self) -> bool
    {
        self.key() == self.symmetric_key()
    }

    #[inline]
    /// Determines whether a piece can still be dropped into a column.
    ///
    /// Columns past the right edge of the board are never valid.
    pub fn is_valid(&self, column: Column) -> bool
    {
        column < geometry::COLS && (self.occupancy >> geometry::top(column)) & 1 == 0
    }

    /// Gets the key of this position, unique among all positions.
    pub fn key(&self) -> BoardKey
    {
        key::encode(self.occupancy, self.player)
    }

    /// Creates a new empty board with the given options.
    pub fn new(options: Options) -> Board
    {
        Board {
            occupancy: 0,
            player: 0,
            to_move: options.first,
            history: History::default(),
            options,
        }
    }

    /// Every occupied cell.
    pub fn occupancy(&self) -> Mask
    {
        self.occupancy
    }

    /// The pieces of the player who moved last.
    pub fn opponent_pieces(&self) -> Mask
    {
        ownership::opponent(self.occupancy, self.player)
    }

    /// Gets the options configured for this board.
    pub fn options(&self) -> Options
    {
        self.options
    }

    /// Drops a piece for the side to move into the given column.
    ///
    /// With strict options, the column must be on the board and open. Without them, the move is played as given
    /// and an invalid column leaves the board in an unspecified state.
    pub fn play(&mut self, column: Column) -> Result<()>
    {
        if self.options.strict
        {
            self.check(column)?;
        }
        self.play_unchecked(column);
        Ok(())
    }

    /// Drops a piece into the given column without any validation. Assumes [`Board::is_valid`].
    pub fn play_unchecked(&mut self, column: Column)
    {
        debug_assert!(self.is_valid(column), "Column {} is not open on this board.", column);

        self.player = ownership::reattribute(self.player, self.occupancy);

        // The carry runs up through the column's pieces and stops on its first empty cell.
        self.occupancy |= self.occupancy + (1 << geometry::base(column));

        self.to_move = self.to_move.flip();
        self.history.push(column);
    }

    /// The pieces of the side to move.
    pub fn player_pieces(&self) -> Mask
    {
        self.player
    }

    /// Gets the number of plies played, which is the number of pieces on the board.
    pub fn plies(&self) -> usize
    {
        self.history.len()
    }

    /// Gets the key of the mirror image of this position.
    pub fn symmetric_key(&self) -> BoardKey
    {
        key::mirror(self.key())
    }

    /// The player who drops the next piece.
    pub fn to_move(&self) -> Player
    {
        self.to_move
    }

    /// Takes back the last move, returning the column it was played in.
    pub fn undo(&mut self) -> Result<Column>
    {
        self.take_back()
            .ok_or_else(|| Error::new(Kind::NothingToUndo, "No move has been played on this board.".into()))
    }

    /// Takes back a number of moves, if that many have been played.
    pub fn undo_many(&mut self, n: usize) -> Result<()>
    {
        let l = self.plies();
        if n > l
        {
            let err_msg = format!(
                "Asked for {} undo{}, but only {} ply{} {} been played on this board.",
                n,
                if n == 1 { "" } else { "s" },
                l,
                if l == 1 { "" } else { "s" },
                if l == 1 { "has" } else { "have" }
            );
            return Err(Error::new(Kind::TooManyUndos, err_msg));
        }

        for _ in 0..n
        {
            self.undo()?;
        }
        Ok(())
    }
}

/// Private implementation for this board.
impl Board
{
    /// Ensures a column can be played on this board.
    fn check(&self, column: Column) -> Result<()>
    {
        Board::ensure_in_range(column)?;
        self.ensure_open(column)?;
        self.ensure_history_room()
    }

    /// Removes the top piece of a column and hands the turn back.
    fn lift(&mut self, column: Column)
    {
        let base = geometry::base(column);
        let Some(row) = (0..geometry::ROWS).rev().find(|row| (self.occupancy >> (base + row)) & 1 != 0)
        else
        {
            debug_assert!(false, "Column {} is empty, so it has no piece to lift.", column);
            return;
        };

        self.occupancy ^= 1 << (base + row);
        self.player = ownership::reattribute(self.player, self.occupancy);
        self.to_move = self.to_move.flip();
    }

    /// Takes back the last move, if there is one.
    fn take_back(&mut self) -> Option<Column>
    {
        let column = self.history.pop()?;
        self.lift(column);
        Some(column)
    }
}
