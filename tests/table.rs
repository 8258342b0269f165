mod common;
use common::*;

#[cfg(test)]
mod table
{
    use dropfour::prelude::*;

    use super::*;

    const CAP: usize = 1009;

    #[test]
    fn fresh_table_is_empty()
    {
        let _setup = setup::setup();
        let table: TranspositionTable = TranspositionTable::default();

        assert_eq!(table.capacity(), (1 << 19) - 1);
        for key in [0, 1, 2, 12345, geometry::BOTTOM]
        {
            assert_eq!(table.get(key), 222);
            assert_eq!(table.load(key), None);
        }
    }

    #[test]
    fn put_then_get()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::default();

        table.put(3, 5);
        assert_eq!(table.get(3), 5);
        assert_eq!(table.load(3), Some(5));
        assert_eq!(table.get((1 << 19) + 2), 222);
    }

    #[test]
    fn write_evicts_bucket()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);
        let key: BoardKey = 77;
        let other = key + CAP as BoardKey;

        table.put(key, 9);
        table.put(other, 10);

        assert_eq!(table.get(other), 10);
        assert_eq!(table.get(key), u8::EMPTY);
        assert_eq!(table.load(key), None);
    }

    #[test]
    fn rewrite_replaces_value()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);

        table.put(500, 1);
        table.put(500, 2);
        assert_eq!(table.get(500), 2);
    }

    #[test]
    fn neighbours_do_not_collide()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);

        for key in 0..CAP as BoardKey
        {
            table.put(key, (key % 200) as u8);
        }
        for key in 0..CAP as BoardKey
        {
            assert_eq!(table.get(key), (key % 200) as u8);
        }
    }

    #[test]
    fn truncated_keys_alias()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);
        let key: BoardKey = 42;
        let alias = key + (1u128 << 56) * CAP as BoardKey;

        table.put(key, 7);
        assert_eq!(table.get(alias), 7);

        // Same bucket, different low bits: a miss.
        assert_eq!(table.get(key + (1u128 << 55) * CAP as BoardKey), u8::EMPTY);
    }

    #[test]
    fn empty_value_reads_as_miss()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);

        table.put(8, u8::EMPTY);
        assert_eq!(table.load(8), None);
    }

    #[test]
    fn clone_is_deep()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);
        table.put(1, 11);

        let mut copy = table.clone();
        assert_eq!(copy.capacity(), table.capacity());
        assert_eq!(copy.get(1), 11);

        copy.put(1, 12);
        copy.put(2, 13);
        assert_eq!(table.get(1), 11);
        assert_eq!(table.get(2), u8::EMPTY);
        assert_eq!(copy.get(1), 12);
    }

    #[test]
    fn clear_empties_every_bucket()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);
        for key in 0..10
        {
            table.put(key, 1);
        }

        table.clear();
        for key in 0..10
        {
            assert_eq!(table.load(key), None);
        }
    }

    #[test]
    fn zero_capacity_is_raised()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(0);

        assert_eq!(table.capacity(), 1);
        table.put(5, 1);
        table.put(6, 2);
        assert_eq!(table.get(5), u8::EMPTY);
        assert_eq!(table.get(6), 2);
    }

    #[test]
    fn sized_by_bytes()
    {
        let _setup = setup::setup();
        assert_eq!(TTEntry::<u8>::SIZE, 16);

        let table: TranspositionTable = TranspositionTable::with_bytes(1 << 20);
        assert_eq!(table.capacity(), (1 << 20) / 16);
    }

    #[test]
    fn wider_values_and_shorter_keys()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable<i16, 32> = TranspositionTable::new(CAP);
        let key: BoardKey = 1234;

        assert_eq!(table.get(key), i16::MIN);
        table.put(key, -300);
        assert_eq!(table.get(key), -300);
        assert_eq!(table.get(key + (1u128 << 32) * CAP as BoardKey), -300);
    }

    #[test]
    fn memoizes_positions_by_canonical_key()
    {
        let _setup = setup::setup();
        let mut table: TranspositionTable = TranspositionTable::new(CAP);
        let board = templates::play_line(&[4, 4, 5, 3, 3, 5]);
        let mirror = templates::play_line(&[4, 4, 3, 5, 5, 3]);

        table.put(board.canonical_key(), 3);
        assert_eq!(table.load(mirror.canonical_key()), Some(3));
    }
}
