use clap::Parser;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct ServerOptions
{
    #[arg(long, default_value_t = 524287)]
    /// number of buckets in the transposition table
    pub table_capacity: usize,

    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, default_value_t = false)]
    /// whether to validate every played column
    pub strict: bool,

    #[arg(short, long, default_value = "first")]
    /// the player who moves first in a new game
    pub first: Player,

    #[arg(long)]
    /// seed for random playouts
    pub seed: Option<u64>,
}

impl Default for ServerOptions
{
    fn default() -> Self
    {
        ServerOptions {
            table_capacity: TranspositionTable::<u8>::DEFAULT_CAPACITY,
            log_level:      "info".into(),
            strict:         false,
            first:          Player::First,
            seed:           None,
        }
    }
}

/// A line-based text driver around a board and a table.
///
/// Every command answers with its output followed by `ok`; a failed command answers `err` and its error first.
pub struct Server
{
    options: ServerOptions,
    board:   Board,
    table:   TranspositionTable,
    rng:     StdRng,
    running: bool,
}

impl Server
{
    /// Creates a new server with the given capabilities.
    pub fn new(options: ServerOptions) -> Self
    {
        let rng = match options.seed
        {
            | Some(seed) => StdRng::seed_from_u64(seed),
            | None => StdRng::from_entropy(),
        };

        Server {
            board: Board::new(Self::board_options(&options, options.first)),
            table: TranspositionTable::new(options.table_capacity),
            rng,
            running: true,
            options,
        }
    }

    /// Gets the current board.
    pub fn board(&self) -> &Board
    {
        &self.board
    }

    /// Gets the table that `store` and `probe` use.
    pub fn table(&self) -> &TranspositionTable
    {
        &self.table
    }

    /// Matches the command to the server's functionality.
    pub fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        match cmd
        {
            | "" => Ok(()),
            | "board" => self.print_board(),
            | "canonical" => self.print_key(self.board.canonical_key()),
            | "info" => self.info(),
            | "key" => self.print_key(self.board.key()),
            | "newgame" => self.new_game(args),
            | "play" => self.play(args),
            | "playout" => self.playout(),
            | "probe" => self.probe(),
            | "quit" => self.quit(),
            | "state" => self.state(),
            | "store" => self.store(args),
            | "symmetric" => self.print_key(self.board.symmetric_key()),
            | "undo" => self.undo(args),
            | "validmoves" => self.print_columns(self.board.valid_columns()),
            | "winningmoves" =>
            {
                let winning = self.board.winning_columns();
                self.print_columns(winning)
            }
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        }
    }

    /// Executes one command line and reports its outcome on the stream.
    ///
    /// Returns an error only if the failure is fatal.
    pub fn execute(&mut self, line: &str) -> Result<()>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        let rest = args.get(1..).unwrap_or(&[]);

        match self.apply(cmd, rest)
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", rest.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    if let Err(report) = self.err(&err)
                    {
                        log::error!("could not report fatal error:\n{report}");
                    }
                    Err(err)
                }
                | false =>
                {
                    log::warn!("encountered recoverable error:\n{err}");
                    self.err(&err)
                }
            },
        }
    }

    /// Reads commands from stdin until `quit` or the end of the stream.
    pub fn run(&mut self) -> Result<()>
    {
        while self.running
        {
            let mut cmdstr: String = String::new();
            if std::io::stdin().read_line(&mut cmdstr)? == 0
            {
                break;
            }
            self.execute(&cmdstr)?;
        }
        Ok(())
    }
}

impl Server
{
    /// The board options for a new game.
    fn board_options(options: &ServerOptions, first: Player) -> Options
    {
        Options {
            strict: options.strict,
            first,
        }
    }

    /// Ensures the game has not been decided yet.
    fn ensure_in_progress(&self) -> Result<()>
    {
        let state = self.board.state();
        if state.is_terminal()
        {
            return Err(Error::new(Kind::InvalidState, format!("The game is over ({}).", state)));
        }
        Ok(())
    }

    /// Prints an error to the stream.
    fn err(&self, err: &Error) -> Result<()>
    {
        println!("err\n{}", err);
        self.ok()
    }

    /// Prints the server's ID.
    fn info(&self) -> Result<()>
    {
        println!("id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        println!("{:?}", self.table);
        Ok(())
    }

    /// Creates a new game, optionally naming the player who moves first.
    fn new_game(&mut self, args: &[&str]) -> Result<()>
    {
        let first = match args.first()
        {
            | Some(s) => s.parse::<Player>()?,
            | None => self.options.first,
        };

        self.board = Board::new(Self::board_options(&self.options, first));
        println!("{}", self.board);
        Ok(())
    }

    /// Prints the ok footer to the stream.
    fn ok(&self) -> Result<()>
    {
        println!("ok");
        Ok(())
    }

    /// Plays the given columns in order.
    fn play(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide at least one column.".into()));
        }

        for arg in args
        {
            let Ok(column) = arg.parse::<Column>()
            else
            {
                return Err(Error::for_parse::<Column>((*arg).into()));
            };

            // Typed columns are checked whether or not the board is strict.
            self.ensure_in_progress()?;
            Board::ensure_in_range(column)?;
            self.board.ensure_open(column)?;
            self.board.play(column)?;
        }

        println!("{}", self.board.state());
        Ok(())
    }

    /// Plays random open columns until the game is decided.
    fn playout(&mut self) -> Result<()>
    {
        let mut played = Vec::new();
        while !self.board.state().is_terminal()
        {
            let open = geometry::columns(self.board.valid_columns()).collect::<Vec<Column>>();
            let Some(&column) = open.choose(&mut self.rng)
            else
            {
                return Err(Error::new(Kind::InternalError, "An undecided game has no open column.".into()));
            };

            self.board.play_unchecked(column);
            played.push(column);
        }

        log::debug!("Playout of {} plies ended in {}.", played.len(), self.board.state());
        println!("{}", played.iter().join(","));
        println!("{}", self.board.state());
        Ok(())
    }

    /// Prints the current position.
    fn print_board(&self) -> Result<()>
    {
        println!("{}", self.board);
        Ok(())
    }

    /// Prints a set of columns, comma-separated.
    fn print_columns(&self, set: ColumnMask) -> Result<()>
    {
        println!("{}", geometry::columns(set).join(","));
        Ok(())
    }

    /// Prints a key in hex.
    fn print_key(&self, key: BoardKey) -> Result<()>
    {
        println!("{:#x}", key);
        Ok(())
    }

    /// Looks up the current position in the table.
    fn probe(&self) -> Result<()>
    {
        match self.table.load(self.board.canonical_key())
        {
            | Some(value) => println!("{}", value),
            | None => println!("none"),
        };
        Ok(())
    }

    /// Stops reading commands.
    fn quit(&mut self) -> Result<()>
    {
        self.running = false;
        Ok(())
    }

    /// Prints the state of the game.
    fn state(&self) -> Result<()>
    {
        println!("{}", self.board.state());
        Ok(())
    }

    /// Stores a value for the current position in the table.
    fn store(&mut self, args: &[&str]) -> Result<()>
    {
        let Some(arg) = args.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "You must provide a value to store.".into()));
        };

        let Ok(value) = arg.parse::<u8>()
        else
        {
            return Err(Error::for_parse::<u8>((*arg).into()));
        };

        if value == u8::EMPTY
        {
            log::warn!("Storing {} reads back as an empty bucket.", value);
        }

        self.table.put(self.board.canonical_key(), value);
        Ok(())
    }

    /// Undoes the given number of plies on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<()>
    {
        let mut n: usize = 1;
        match args.len()
        {
            | 0 =>
            {}
            | _ =>
            {
                let try_n = args[0].parse::<usize>();
                if let Ok(num) = try_n
                {
                    n = num;
                }
                else
                {
                    return Err(Error::for_parse::<usize>(args[0].into()));
                }
            }
        };

        self.board.undo_many(n)?;

        println!("{}", self.board);
        Ok(())
    }
}
