use std::time::Duration;

use regex::Regex;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Options with which the user can control a single search.
pub enum SearchArgs
{
    /// Use the configured depth and no deadline.
    #[default]
    Default,

    /// Keep the configured depth, but report when the search takes longer than this.
    Time(Duration),

    /// Search to exactly this depth.
    Depth(Depth),
}

impl SearchArgs
{
    /// The deadline implied by these args, starting now.
    pub fn deadline(&self) -> Deadline
    {
        match self
        {
            | Self::Time(duration) => Deadline::after(*duration),
            | _ => Deadline::none(),
        }
    }

    /// The depth override, if any.
    pub fn depth(&self) -> Option<Depth>
    {
        match self
        {
            | Self::Depth(d) => Some(*d),
            | _ => None,
        }
    }

    /// Tries to parse args into a set of search options.
    pub fn parse(args: &[&str]) -> Result<SearchArgs>
    {
        if args.is_empty()
        {
            return Ok(SearchArgs::Default);
        }

        let base = Error::for_parse::<Self>(args.join(" "));

        if args.len() != 2
        {
            let err = Error::new(
                Kind::ParseError,
                "Search options require a mode (time or depth) and a corresponding value.".into(),
            );
            return Err(err.chain(base));
        }

        match args[0]
        {
            | "time" =>
            {
                let re = Regex::new(r"^(?<h>[0-9]{2,3}):(?<m>[0-5][0-9]):(?<s>[0-5][0-9])$").unwrap();
                let Some(caps) = re.captures(args[1])
                else
                {
                    let err = Error::new(Kind::InvalidTime, "Expected duration in the form of hh:mm:ss".into());
                    return Err(err.chain(Error::for_parse::<Duration>(args[1].to_owned())).chain(base));
                };

                // The regex only lets digits through, so these parses cannot fail.
                let field = |name: &str| caps[name].parse::<u64>().unwrap_or(0);
                let seconds = field("s") + 60 * field("m") + 3600 * field("h");
                Ok(SearchArgs::Time(Duration::from_secs(seconds)))
            }
            | "depth" =>
            {
                let Ok(depth) = args[1].parse::<u8>().map(Depth::from)
                else
                {
                    let err = Error::for_parse::<Depth>(args[1].to_owned());
                    return Err(err.chain(base));
                };
                if depth == Depth::NIL
                {
                    return Err(base.chain(Error::new(Kind::InvalidOption, "Search depth must be at least 1.".into())));
                }
                Ok(SearchArgs::Depth(depth))
            }
            | _ => Err(base),
        }
    }
}
