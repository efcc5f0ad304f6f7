use serde::{Deserialize, Serialize};

use crate::domain::score::Player;
use crate::domain::sport::Sport;
use crate::errors::domain::DomainError;

pub const DEFAULT_CUSTOM_TARGET: u32 = 10;
pub const MIN_CUSTOM_TARGET: u32 = 2;

/// Avatar identifiers offered during setup.
pub const DEFAULT_AVATARS: [&str; 8] = [
    "person.circle",
    "dog.circle",
    "cat.circle",
    "fish.circle",
    "bird.circle",
    "hare.circle",
    "tortoise.circle",
    "ladybug.circle",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    OneVsOne,
    TwoVsTwo,
}

impl MatchType {
    /// Number of avatars the setup must collect.
    pub const fn avatar_count(self) -> usize {
        match self {
            MatchType::OneVsOne => 2,
            MatchType::TwoVsTwo => 4,
        }
    }
}

/// Validated, immutable match setup.
///
/// Fields are private so a config can only exist once it passed
/// validation; `MatchState` never sees a malformed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchConfig {
    sport: Sport,
    match_type: MatchType,
    avatars: Vec<String>,
    uses_sets: bool,
    custom_target_points: u32,
}

impl MatchConfig {
    pub fn new(
        sport: Sport,
        match_type: MatchType,
        avatars: Vec<String>,
    ) -> Result<Self, DomainError> {
        Self::builder(sport)
            .match_type(match_type)
            .avatars(avatars)
            .build()
    }

    pub fn builder(sport: Sport) -> MatchConfigBuilder {
        MatchConfigBuilder::new(sport)
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn match_type(&self) -> MatchType {
        self.match_type
    }

    pub fn avatars(&self) -> &[String] {
        &self.avatars
    }

    /// Avatars on one side: one entry in 1v1, two in 2v2.
    pub fn side_avatars(&self, player: Player) -> &[String] {
        let half = self.avatars.len() / 2;
        match player {
            Player::One => &self.avatars[..half],
            Player::Two => &self.avatars[half..],
        }
    }

    pub fn uses_sets(&self) -> bool {
        self.uses_sets
    }

    pub fn custom_target_points(&self) -> u32 {
        self.custom_target_points
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfigBuilder {
    sport: Sport,
    match_type: MatchType,
    avatars: Vec<String>,
    uses_sets: bool,
    custom_target_points: u32,
}

impl MatchConfigBuilder {
    fn new(sport: Sport) -> Self {
        Self {
            sport,
            match_type: MatchType::OneVsOne,
            avatars: Vec::new(),
            uses_sets: true,
            custom_target_points: DEFAULT_CUSTOM_TARGET,
        }
    }

    pub fn match_type(mut self, match_type: MatchType) -> Self {
        self.match_type = match_type;
        self
    }

    pub fn avatars<I, S>(mut self, avatars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.avatars = avatars.into_iter().map(Into::into).collect();
        self
    }

    pub fn uses_sets(mut self, uses_sets: bool) -> Self {
        self.uses_sets = uses_sets;
        self
    }

    pub fn custom_target_points(mut self, target: u32) -> Self {
        self.custom_target_points = target;
        self
    }

    pub fn build(self) -> Result<MatchConfig, DomainError> {
        if self.sport.is_team_sport() && self.match_type != MatchType::OneVsOne {
            return Err(DomainError::invalid_config(format!(
                "{} is played team against team, 2v2 is not available",
                self.sport
            )));
        }

        let expected = self.match_type.avatar_count();
        if self.avatars.len() != expected {
            return Err(DomainError::invalid_config(format!(
                "{:?} needs {expected} avatars, got {}",
                self.match_type,
                self.avatars.len()
            )));
        }
        if self.avatars.iter().any(|a| a.trim().is_empty()) {
            return Err(DomainError::invalid_config("avatar identifiers must not be empty"));
        }
        for (i, avatar) in self.avatars.iter().enumerate() {
            if self.avatars[..i].contains(avatar) {
                return Err(DomainError::invalid_config(format!(
                    "avatar '{avatar}' picked twice"
                )));
            }
        }

        if self.sport == Sport::Custom
            && self.uses_sets
            && self.custom_target_points < MIN_CUSTOM_TARGET
        {
            return Err(DomainError::invalid_config(format!(
                "points per set must be at least {MIN_CUSTOM_TARGET}, got {}",
                self.custom_target_points
            )));
        }

        Ok(MatchConfig {
            sport: self.sport,
            match_type: self.match_type,
            avatars: self.avatars,
            uses_sets: self.uses_sets,
            custom_target_points: self.custom_target_points,
        })
    }
}
