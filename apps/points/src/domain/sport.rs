use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Sports the scoreboard knows how to score.
///
/// `Generic` has no menu entry; it is the plain tally fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Sport {
    Tennis,
    Padel,
    Badminton,
    Squash,
    PingPong,
    Football,
    Custom,
    Generic,
}

/// Default sport menu order.
pub const SPORT_CATALOGUE: [Sport; 7] = [
    Sport::Tennis,
    Sport::Badminton,
    Sport::PingPong,
    Sport::Squash,
    Sport::Padel,
    Sport::Football,
    Sport::Custom,
];

impl Sport {
    pub const fn name(self) -> &'static str {
        match self {
            Sport::Tennis => "Tennis",
            Sport::Padel => "Padel",
            Sport::Badminton => "Badminton",
            Sport::Squash => "Squash",
            Sport::PingPong => "Ping Pong",
            Sport::Football => "Football",
            Sport::Custom => "Custom",
            Sport::Generic => "Generic",
        }
    }

    /// Team sports pick one avatar per side and never play 2v2.
    pub const fn is_team_sport(self) -> bool {
        matches!(self, Sport::Football)
    }
}

impl Display for Sport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "tennis" => Ok(Sport::Tennis),
            "padel" => Ok(Sport::Padel),
            "badminton" => Ok(Sport::Badminton),
            "squash" => Ok(Sport::Squash),
            "pingpong" => Ok(Sport::PingPong),
            "football" => Ok(Sport::Football),
            "custom" => Ok(Sport::Custom),
            "generic" => Ok(Sport::Generic),
            _ => Err(DomainError::UnknownSport(s.to_string())),
        }
    }
}

impl TryFrom<String> for Sport {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        sport.name().to_string()
    }
}
