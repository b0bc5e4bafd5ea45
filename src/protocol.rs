use std::io::{BufRead, Write};

use clap::Parser;

use crate::prelude::*;

#[derive(Clone, Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Options
{
    #[arg(short, long, default_value = "info")]
    /// lowest log level to show
    pub log_level: String,

    #[arg(short, long, value_enum, default_value_t = StrategyKind::Alphabeta)]
    /// how the engine picks its moves
    pub strategy: StrategyKind,

    #[arg(short, long)]
    /// fixed search depth in plies (defaults to 3 on the square board, 2 on the cube)
    pub depth: Option<u8>,

    #[arg(long, default_value_t = false)]
    /// disable alpha-beta cutoffs and run plain minimax
    pub no_pruning: bool,

    #[arg(short, long, default_value = "1,10,100")]
    /// line weights for one, two and three marks
    pub weights: String,

    #[arg(long)]
    /// seed for the random strategy
    pub seed: Option<u64>,
}

impl Default for Options
{
    fn default() -> Self
    {
        Options::parse_from([env!("CARGO_PKG_NAME")])
    }
}

/// A line-oriented engine server.
///
/// Each command prints its output followed by `ok`; recoverable errors print `err` and the error first.
pub struct Server<W: Write>
{
    board:    Option<Board>,
    options:  Options,
    out:      W,
    strategy: Box<dyn Strategy>,
}

impl<W: Write> Server<W>
{
    /// Creates a new server writing its responses to `out`.
    pub fn new(options: Options, out: W) -> Result<Self>
    {
        let strategy = options.strategy.build(&options)?;
        log::debug!("using the {} strategy", strategy.name());

        Ok(Server {
            board: None,
            options,
            out,
            strategy,
        })
    }

    /// Gets the board of the current game, if one has been started.
    pub fn board(&self) -> Option<&Board>
    {
        self.board.as_ref()
    }

    /// Handles one command line. Only fatal errors are returned.
    pub fn execute(&mut self, line: &str) -> Result<()>
    {
        let args: Vec<&str> = line.split_whitespace().collect();
        let cmd = *args.first().unwrap_or(&"");
        self.apply(cmd, args.get(1 ..).unwrap_or(&[]))
    }

    /// Gets the output sink.
    pub fn output(&self) -> &W
    {
        &self.out
    }

    /// Runs the server until the input ends or `exit` is received.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()>
    {
        loop
        {
            let mut cmdstr = String::new();
            if input.read_line(&mut cmdstr)? == 0
            {
                return Ok(());
            }

            if matches!(cmdstr.trim(), "exit" | "quit")
            {
                return Ok(());
            }

            self.execute(&cmdstr)?;
        }
    }
}

impl<W: Write> Server<W>
{
    /// Matches the command to the server's functionality.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()>
    {
        let result = match cmd
        {
            | "" => Ok(()),
            | "bestmove" => self.best_move(args),
            | "board" => self.show_board(),
            | "evaluate" => self.evaluate(),
            | "info" => self.info(),
            | "newgame" => self.new_game(args),
            | "play" => self.play_move(args),
            | "undo" => self.undo(args),
            | "validmoves" => self.valid_moves(),
            | _ => Err(Error::new(Kind::UnrecognizedCommand, cmd.into())),
        };

        match result
        {
            | Ok(_) =>
            {
                log::debug!("Command completed successfully: {cmd} {}", args.join(" "));
                self.ok()
            }
            | Err(err) => match err.fatal()
            {
                | true =>
                {
                    let _ = self.err(&err);
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

    /// Prints the move the strategy picks in the current position.
    fn best_move(&mut self, args: &[&str]) -> Result<()>
    {
        let search_args = SearchArgs::parse(args)?;
        let board = self.ensure_started()?.clone();

        let mv = self.strategy.best_move(&board, search_args);
        writeln!(self.out, "{}", MoveString::on(board.variant(), mv))?;
        Ok(())
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started(&self) -> Result<&Board>
    {
        match self.board.as_ref()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Ensures there is a board loaded on this server.
    fn ensure_started_mut(&mut self) -> Result<&mut Board>
    {
        match self.board.as_mut()
        {
            | Some(b) => Ok(b),
            | None => Err(Error::empty(Kind::GameNotStarted)),
        }
    }

    /// Prints an error to the stream.
    fn err(&mut self, err: &Error) -> Result<()>
    {
        writeln!(self.out, "err\n{}", err)?;
        self.ok()
    }

    /// Prints the heuristic score of the position for the player to move.
    fn evaluate(&mut self) -> Result<()>
    {
        let board = self.ensure_started()?;
        let config = SearchConfig::try_from(&self.options)?;
        let heuristic = LineHeuristic::new(config.eval_config(board.variant())?);

        let score = heuristic.evaluate(board, board.to_move());
        writeln!(self.out, "{}", score)?;
        Ok(())
    }

    /// Prints the server's ID.
    fn info(&mut self) -> Result<()>
    {
        writeln!(self.out, "id {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))?;
        writeln!(self.out, "strategy {}", self.strategy.name())?;
        Ok(())
    }

    /// Creates a new game from a variant name or a full game string.
    fn new_game(&mut self, args: &[&str]) -> Result<()>
    {
        let board = match args
        {
            | [] => Board::default(),
            | [variant] if !variant.contains(';') => Board::new(variant.parse::<Variant>()?),
            | _ => Board::try_from(args.join(" ").parse::<GameString>()?)?,
        };

        writeln!(self.out, "{}", board)?;
        self.board = Some(board);
        Ok(())
    }

    /// Prints the ok footer to the stream.
    fn ok(&mut self) -> Result<()>
    {
        writeln!(self.out, "ok")?;
        Ok(())
    }

    /// Plays the given move on the current board, if one exists.
    fn play_move(&mut self, args: &[&str]) -> Result<()>
    {
        if args.is_empty()
        {
            return Err(Error::new(Kind::ParseError, "You must provide a MoveString.".into()));
        }

        let mv = Move::from(&args.join(" ").parse::<MoveString>()?);
        let board = self.ensure_started_mut()?;
        board.play(&mv)?;

        let gamestr = GameString::from(&*board);
        writeln!(self.out, "{}", gamestr)?;
        Ok(())
    }

    /// Pretty-prints the current board.
    fn show_board(&mut self) -> Result<()>
    {
        let board = self.ensure_started()?.clone();
        writeln!(self.out, "{:#}", board)?;
        Ok(())
    }

    /// Undoes the given number of moves on the current board.
    fn undo(&mut self, args: &[&str]) -> Result<()>
    {
        let n = match args.first()
        {
            | None => 1,
            | Some(arg) => arg.parse::<u8>().map_err(|_| Error::for_parse::<u8>((*arg).into()))?,
        };

        let board = self.ensure_started_mut()?;
        board.undo(n)?;

        let gamestr = GameString::from(&*board);
        writeln!(self.out, "{}", gamestr)?;
        Ok(())
    }

    /// Prints all of the valid moves in this position.
    fn valid_moves(&mut self) -> Result<()>
    {
        let board = self.ensure_started()?;
        let movelist = board
            .valid_moves()
            .iter()
            .map(|mv| MoveString::on(board.variant(), *mv).to_string())
            .collect::<Vec<_>>()
            .join(";");
        let movelist = if movelist.is_empty() { "null".into() } else { movelist };

        writeln!(self.out, "{}", movelist)?;
        Ok(())
    }
}
