#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// One bucket of the table: a truncated key and the value stored under it.
pub struct TTEntry<V>
{
    pub key:   u64,
    pub value: V,
}

impl<V: TTValue> Default for TTEntry<V>
{
    fn default() -> Self
    {
        TTEntry {
            key:   0,
            value: V::EMPTY,
        }
    }
}

impl<V> TTEntry<V>
{
    /// The size in bytes of an entry.
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

/// A value that can be stored in a transposition table.
///
/// One value is reserved to mean "no entry"; storing it is allowed, but reads it back as a miss.
pub trait TTValue: Copy + Eq + std::fmt::Debug
{
    const EMPTY: Self;
}

impl TTValue for u8
{
    /// The low byte of `0xDEADC0DE`.
    const EMPTY: u8 = 0xDE;
}

impl TTValue for i8
{
    const EMPTY: i8 = i8::MIN;
}

impl TTValue for u16
{
    const EMPTY: u16 = u16::MAX;
}

impl TTValue for i16
{
    const EMPTY: i16 = i16::MIN;
}

impl TTValue for i32
{
    const EMPTY: i32 = i32::MIN;
}
