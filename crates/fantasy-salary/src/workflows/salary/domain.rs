use serde::{Deserialize, Serialize};

/// A player the contest knows about, with the salary they start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPlayer {
    pub id: String,
    pub name: String,
    pub base_salary: f64,
}

impl RosterPlayer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, base_salary: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_salary,
        }
    }
}

/// Ordered, read-only list of roster players. Results follow this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<RosterPlayer>);

impl Roster {
    pub fn new(players: Vec<RosterPlayer>) -> Self {
        Self(players)
    }

    pub fn players(&self) -> &[RosterPlayer] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self(vec![
            RosterPlayer::new("player1", "Virat Kohli", 50_000.0),
            RosterPlayer::new("player2", "Rohit Sharma", 48_000.0),
            RosterPlayer::new("player3", "Jasprit Bumrah", 45_000.0),
            RosterPlayer::new("player4", "Pat Cummins", 46_000.0),
            RosterPlayer::new("player5", "Steve Smith", 42_000.0),
            RosterPlayer::new("player6", "Travis Head", 40_000.0),
        ])
    }
}

/// One batting row scraped from a scorecard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingPerformance {
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f64,
}

/// Salary outcome for a single roster player.
///
/// Serialized untagged so the success and failure shapes sit side by side in
/// one response array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlayerSalary {
    #[serde(rename_all = "camelCase")]
    Valued {
        player_id: String,
        player_name: String,
        base_salary: f64,
        performance: Option<BattingPerformance>,
        final_salary: f64,
    },
    #[serde(rename_all = "camelCase")]
    Failed {
        player_id: String,
        player_name: String,
        error: String,
    },
}

impl PlayerSalary {
    pub fn player_id(&self) -> &str {
        match self {
            PlayerSalary::Valued { player_id, .. } | PlayerSalary::Failed { player_id, .. } => {
                player_id
            }
        }
    }

    pub fn player_name(&self) -> &str {
        match self {
            PlayerSalary::Valued { player_name, .. }
            | PlayerSalary::Failed { player_name, .. } => player_name,
        }
    }

    pub fn final_salary(&self) -> Option<f64> {
        match self {
            PlayerSalary::Valued { final_salary, .. } => Some(*final_salary),
            PlayerSalary::Failed { .. } => None,
        }
    }

    pub fn performance(&self) -> Option<&BattingPerformance> {
        match self {
            PlayerSalary::Valued { performance, .. } => performance.as_ref(),
            PlayerSalary::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, PlayerSalary::Failed { .. })
    }
}
