use serde::{Deserialize, Serialize};

/// One side of the scoreboard. In a 2v2 match a side is a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 1-based side number, as shown on the scoreboard.
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// Live score of one match.
///
/// Points reset to zero whenever a game is won. Sets only go down through
/// undo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub points_p1: u32,
    pub points_p2: u32,
    pub sets_p1: u32,
    pub sets_p2: u32,
}

impl ScoreState {
    pub const fn new(points_p1: u32, points_p2: u32, sets_p1: u32, sets_p2: u32) -> Self {
        Self {
            points_p1,
            points_p2,
            sets_p1,
            sets_p2,
        }
    }

    pub const fn points(&self, player: Player) -> u32 {
        match player {
            Player::One => self.points_p1,
            Player::Two => self.points_p2,
        }
    }

    pub const fn sets(&self, player: Player) -> u32 {
        match player {
            Player::One => self.sets_p1,
            Player::Two => self.sets_p2,
        }
    }

    pub fn points_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.points_p1,
            Player::Two => &mut self.points_p2,
        }
    }

    pub fn sets_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::One => &mut self.sets_p1,
            Player::Two => &mut self.sets_p2,
        }
    }

    /// Award a game: winner's set counter +1, both point counters back to 0.
    pub fn award_game(&mut self, winner: Player) {
        *self.sets_mut(winner) += 1;
        self.points_p1 = 0;
        self.points_p2 = 0;
    }

    /// Side currently ahead on sets, if any.
    pub fn set_leader(&self) -> Option<Player> {
        match self.sets_p1.cmp(&self.sets_p2) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// What a single scoring action did to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    /// Point phase advanced without deciding a game.
    Point { scorer: Player },
    /// Scorer won the game; sets bumped, points reset.
    GameWon { winner: Player },
    /// Tally mode: the scorer's set counter was bumped directly.
    Tally { scorer: Player },
    /// Action arrived after the match finished.
    Ignored,
}
