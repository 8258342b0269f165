use arrayvec::ArrayVec;

use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// The columns played so far, as a bounded stack.
///
/// A game can never outlast the board, so the stack lives inline and never allocates.
pub struct History
{
    past: ArrayVec<Column, { geometry::MAX_PLIES }>,
}

impl History
{
    /// Gets the column played at the given ply, if that many plies have been played.
    pub fn get(&self, ply: usize) -> Option<Column>
    {
        self.past.get(ply).copied()
    }

    /// Determines whether or not the history is empty.
    pub fn is_empty(&self) -> bool
    {
        self.past.is_empty()
    }

    /// Determines whether or not every cell of the board has been played.
    pub fn is_full(&self) -> bool
    {
        self.past.is_full()
    }

    /// A read-only iter over the played columns, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Column>
    {
        self.past.iter()
    }

    /// Gets the number of plies recorded, which is also the index of the next free slot.
    pub fn len(&self) -> usize
    {
        self.past.len()
    }

    /// Gets the last column played, if one exists.
    pub fn peek(&self) -> Option<Column>
    {
        self.past.last().copied()
    }

    /// Removes and returns the last column played.
    pub fn pop(&mut self) -> Option<Column>
    {
        self.past.pop()
    }

    /// Records a played column.
    ///
    /// Panics if the stack already holds a full game.
    pub fn push(&mut self, column: Column)
    {
        self.past.push(column);
    }

    /// The played columns, oldest first.
    pub fn as_slice(&self) -> &[Column]
    {
        self.past.as_slice()
    }
}

impl TryFrom<&[Column]> for History
{
    type Error = Error;

    fn try_from(value: &[Column]) -> std::result::Result<Self, Self::Error>
    {
        let past = ArrayVec::try_from(value).map_err(|_| {
            Error::new(
                Kind::InvalidState,
                format!("A history of {} plies does not fit on a board of {} cells.", value.len(), geometry::MAX_PLIES),
            )
        })?;
        Ok(History { past })
    }
}
