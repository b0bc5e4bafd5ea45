pub type Result<T> = anyhow::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
/// An error raised outside of the search: bad input, illegal moves, or a broken output stream.
pub struct Error
{
    pub kind: Kind,
    pub msg:  String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind
{
    GameNotStarted,
    GameOver,
    InternalError,
    InvalidMove,
    InvalidOption,
    InvalidState,
    InvalidTime,
    IoError,
    LoggerError,
    OccupiedCell,
    OutOfBounds,
    ParseError,
    TooManyUndos,
    UnrecognizedCommand,
}

impl std::fmt::Display for Error
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", Error::join(&format!("{:?}", self.kind), ": ", &self.msg))
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error
{
    fn from(value: std::io::Error) -> Self
    {
        Error::new(Kind::IoError, value.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for Error
{
    fn from(value: flexi_logger::FlexiLoggerError) -> Self
    {
        Error::new(Kind::LoggerError, value.to_string())
    }
}

impl Error
{
    /// Wraps `base` around this error; the result has the kind of `base` and lists this error as its cause.
    pub fn chain(&self, base: Error) -> Error
    {
        let msg = Error::join(&base.msg, "\n\tdue to ", &self.to_string());
        Error::new(base.kind, msg)
    }

    /// Reports this error as the reason `s` failed to parse as a `T`.
    pub fn chain_parse<T>(&self, s: String) -> Error
    {
        self.chain(Error::for_parse::<T>(s))
    }

    pub fn empty(kind: Kind) -> Error
    {
        Error::new(kind, String::new())
    }

    /// Whether the server has to stop; every other error is reported and play continues.
    pub fn fatal(&self) -> bool
    {
        matches!(self.kind, Kind::InternalError | Kind::IoError)
    }

    /// The input `s` is not a valid `T`.
    pub fn for_parse<T>(s: String) -> Error
    {
        Error::new(Kind::ParseError, format!("'{}' is not a valid {}.", s, Error::short_name::<T>()))
    }

    /// A position disagrees with itself, such as a stated turn that the marks on the board rule out.
    pub fn mismatch<T: std::fmt::Display>(expected: T, actual: T) -> Error
    {
        let err_msg = format!("Expected {} {}, found {}.", Error::short_name::<T>(), expected, actual);
        Error::new(Kind::InvalidState, err_msg)
    }

    pub fn new(kind: Kind, msg: String) -> Error
    {
        Error { kind, msg }
    }

    /// Joins two parts with a separator, or gives the head alone when there is no tail.
    fn join(head: &str, separator: &str, tail: &str) -> String
    {
        match tail.is_empty()
        {
            | true => head.to_owned(),
            | false => format!("{head}{separator}{tail}"),
        }
    }

    /// The last path segment of a type's name, e.g. `GameState` for `tictacmind::game::board::GameState`.
    fn short_name<T>() -> &'static str
    {
        let name = std::any::type_name::<T>();
        name.rsplit("::").next().unwrap_or(name)
    }
}
