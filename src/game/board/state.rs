use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    NotStarted,
    InProgress,
    Draw,
    FirstWins,
    SecondWins,
}

impl GameState
{
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool
    {
        matches!(self, Self::Draw | Self::FirstWins | Self::SecondWins)
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::NotStarted => "NotStarted",
            | Self::InProgress => "InProgress",
            | Self::Draw => "Draw",
            | Self::FirstWins => "FirstWins",
            | Self::SecondWins => "SecondWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        match s
        {
            | "NotStarted" => Ok(Self::NotStarted),
            | "InProgress" => Ok(Self::InProgress),
            | "Draw" => Ok(Self::Draw),
            | "FirstWins" => Ok(Self::FirstWins),
            | "SecondWins" => Ok(Self::SecondWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
