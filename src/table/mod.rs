use crate::prelude::*;

mod entry;

pub use entry::{TTEntry, TTValue};

#[derive(Clone)]
/// A fixed-size, direct-mapped, replace-always transposition table.
///
/// Each key owns exactly one bucket, `key % capacity`, and a write always evicts whatever was there. Only the low
/// `KEY_BITS` bits of a key are stored, so a read checks that the bucket still belongs to the key and reports a
/// miss otherwise.
///
/// This is a memoization cache, not a map: values silently disappear when another key lands on their bucket, and
/// two keys that agree on their low `KEY_BITS` bits and share a bucket read each other's values. Neither is
/// detected.
///
/// Cloning copies every bucket.
pub struct TranspositionTable<V: TTValue = u8, const KEY_BITS: u32 = 56>
{
    entries: Box<[TTEntry<V>]>,
    cap:     usize,
}

impl<V: TTValue, const KEY_BITS: u32> Default for TranspositionTable<V, KEY_BITS>
{
    fn default() -> Self
    {
        TranspositionTable::new(Self::DEFAULT_CAPACITY)
    }
}

impl<V: TTValue, const KEY_BITS: u32> std::fmt::Debug for TranspositionTable<V, KEY_BITS>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "TranspositionTable {{ cap: {}, key_bits: {}, entry_size: {} }}", self.cap, KEY_BITS, TTEntry::<V>::SIZE)
    }
}

impl<V: TTValue, const KEY_BITS: u32> TranspositionTable<V, KEY_BITS>
{
    /// 2^19 - 1, the seventh Mersenne prime.
    pub const DEFAULT_CAPACITY: usize = (1 << 19) - 1;

    /// The stored part of a key.
    const KEY_MASK: u128 = (1u128 << KEY_BITS) - 1;

    const _KEY_BITS_IN_RANGE: () = assert!(KEY_BITS >= 1 && KEY_BITS <= u64::BITS);

    /// Gets the number of buckets.
    pub fn capacity(&self) -> usize
    {
        self.cap
    }

    /// Empties every bucket.
    pub fn clear(&mut self)
    {
        self.entries.fill(TTEntry::default());
    }

    /// Gets the value stored under a key, or [`TTValue::EMPTY`] if the key's bucket holds another key.
    pub fn get(&self, key: BoardKey) -> V
    {
        let entry = &self.entries[self.capacity_hash(key)];
        if entry.key == Self::truncate(key)
        {
            entry.value
        }
        else
        {
            V::EMPTY
        }
    }

    /// Gets the value stored under a key, if there is one.
    pub fn load(&self, key: BoardKey) -> Option<V>
    {
        let value = self.get(key);
        (value != V::EMPTY).then_some(value)
    }

    /// Creates a new table with the given number of buckets. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self
    {
        #[allow(clippy::let_unit_value)]
        let () = Self::_KEY_BITS_IN_RANGE;

        let cap = if capacity == 0
        {
            log::warn!("A TranspositionTable needs at least one bucket; allocating 1 instead of 0.");
            1
        }
        else
        {
            capacity
        };

        log::trace!("Allocated a TranspositionTable with {} entries. ({} bytes)", cap, cap * TTEntry::<V>::SIZE);

        TranspositionTable {
            entries: vec![TTEntry::default(); cap].into_boxed_slice(),
            cap,
        }
    }

    /// Stores a value under a key, evicting whatever its bucket held.
    pub fn put(&mut self, key: BoardKey, value: V)
    {
        let index = self.capacity_hash(key);
        self.entries[index] = TTEntry {
            key: Self::truncate(key),
            value,
        };
    }

    /// Creates a new table with as many buckets as fit in the given memory budget.
    pub fn with_bytes(bytes: usize) -> Self
    {
        Self::new(bytes / TTEntry::<V>::SIZE)
    }
}

/// Private mapping implementation for the table.
impl<V: TTValue, const KEY_BITS: u32> TranspositionTable<V, KEY_BITS>
{
    /// Returns the key modulo the number of buckets.
    fn capacity_hash(&self, key: BoardKey) -> usize
    {
        (key % self.cap as u128) as usize
    }

    /// Keeps the low `KEY_BITS` bits of a key.
    fn truncate(key: BoardKey) -> u64
    {
        (key & Self::KEY_MASK) as u64
    }
}
