use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// The players in a game, in the order they would move on a default board.
pub enum Player
{
    #[default]
    First = 0,
    Second = 1,
}

impl Player
{
    /// Gets the next player.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::First => Self::Second,
            | Self::Second => Self::First,
        }
    }

    /// Returns the short name for this player, used by the board printer.
    pub fn short(&self) -> &'static str
    {
        match self
        {
            | Self::First => "x",
            | Self::Second => "o",
        }
    }
}

/// `true` stands for the first player and `false` for the second.
impl From<bool> for Player
{
    fn from(value: bool) -> Self
    {
        if value
        {
            Self::First
        }
        else
        {
            Self::Second
        }
    }
}

impl From<Player> for bool
{
    fn from(value: Player) -> Self
    {
        value == Player::First
    }
}

impl std::fmt::Display for Player
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::First => "First",
            | Self::Second => "Second",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Player
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "First" | "first" | "x" => Ok(Self::First),
            | "Second" | "second" | "o" => Ok(Self::Second),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
