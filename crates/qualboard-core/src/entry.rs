use serde::{Deserialize, Serialize};

use crate::qualification::Qualification;

/// One row of the public leaderboard. Entries are immutable snapshots from
/// the backend; the view engine only reorders and hides, never mutates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub number: String,
    pub status: Qualification,
    pub organization: String,
    pub country: String,
    pub region: String,
    pub world_rank: u32,
    pub score: f64,
    pub driver: f64,
    pub programming: f64,
}

/// Envelope the backend wraps leaderboard results in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub result: Vec<LeaderboardEntry>,
}

/// One row of the authenticated qualifications listing on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationRow {
    pub number: String,
    pub organization: String,
    pub status: Qualification,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_from_backend_shape() {
        let json = r#"{
            "number": "86868R",
            "status": 2,
            "organization": "Example Robotics",
            "country": "United States",
            "region": "Colorado",
            "world_rank": 12,
            "score": 301.5,
            "driver": 150.0,
            "programming": 151.5
        }"#;
        let entry: LeaderboardEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.number, "86868R");
        assert_eq!(entry.status, Qualification::Worlds);
        assert_eq!(entry.world_rank, 12);
    }

    #[test]
    fn envelope_tolerates_missing_result() {
        let resp: LeaderboardResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.result.is_empty());
    }
}
