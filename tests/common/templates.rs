use dropfour::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Plays a line of columns on a fresh strict board, failing the test on the first rejected column.
pub fn play_line(columns: &[Column]) -> Board
{
    let mut board = Board::new(Options::strict());
    for (ply, &column) in columns.iter().enumerate()
    {
        let result = board.play(column);
        assert!(result.is_ok(), "ply {} (column {}) was rejected\n\tdue to {}", ply, column, result.unwrap_err());
    }
    board
}

/// Plays random open columns until the board is full or `plies` pieces have been dropped, calling `visit` after
/// every move. Wins do not stop the line.
pub fn random_line(seed: u64, plies: usize, mut visit: impl FnMut(&Board)) -> Board
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(Options::strict());

    while board.plies() < plies
    {
        let open: Vec<Column> = geometry::columns(board.valid_columns()).collect();
        let Some(&column) = open.choose(&mut rng)
        else
        {
            break;
        };

        board.play(column).unwrap();
        visit(&board);
    }
    board
}

/// Ensures the two players' pieces split the occupancy exactly.
pub fn assert_partition(board: &Board)
{
    let mine = board.player_pieces();
    let theirs = board.opponent_pieces();
    assert_eq!(mine & theirs, 0, "pieces are owned twice on {:#?}", board);
    assert_eq!(mine | theirs, board.occupancy(), "pieces are unowned on {:#?}", board);
}

/// Splits a column set into a list of columns.
pub fn columns_of(set: ColumnMask) -> Vec<Column>
{
    geometry::columns(set).collect()
}
