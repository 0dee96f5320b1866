use serde::{Deserialize, Serialize};

use crate::entry::LeaderboardEntry;

/// The fixed column catalog, in render order. Hiding columns never reorders
/// the survivors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnKey {
    #[default]
    WorldRank,
    Number,
    Organization,
    Region,
    Country,
    Score,
    Driver,
    Programming,
    Status,
}

/// Value extracted from an entry for sorting. Numeric columns compare
/// numerically; everything else falls back to case-insensitive text.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl ColumnKey {
    pub fn all() -> &'static [ColumnKey] {
        &[
            ColumnKey::WorldRank,
            ColumnKey::Number,
            ColumnKey::Organization,
            ColumnKey::Region,
            ColumnKey::Country,
            ColumnKey::Score,
            ColumnKey::Driver,
            ColumnKey::Programming,
            ColumnKey::Status,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColumnKey::WorldRank => "Rank",
            ColumnKey::Number => "Team",
            ColumnKey::Organization => "Organization",
            ColumnKey::Region => "Region",
            ColumnKey::Country => "Country",
            ColumnKey::Score => "Score",
            ColumnKey::Driver => "Driver",
            ColumnKey::Programming => "Programming",
            ColumnKey::Status => "Qualification Status",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnKey::WorldRank
                | ColumnKey::Score
                | ColumnKey::Driver
                | ColumnKey::Programming
                | ColumnKey::Status
        )
    }

    pub fn sort_value(&self, entry: &LeaderboardEntry) -> SortValue {
        match self {
            ColumnKey::WorldRank => SortValue::Number(entry.world_rank as f64),
            ColumnKey::Number => SortValue::Text(entry.number.clone()),
            ColumnKey::Organization => SortValue::Text(entry.organization.clone()),
            ColumnKey::Region => SortValue::Text(entry.region.clone()),
            ColumnKey::Country => SortValue::Text(entry.country.clone()),
            ColumnKey::Score => SortValue::Number(entry.score),
            ColumnKey::Driver => SortValue::Number(entry.driver),
            ColumnKey::Programming => SortValue::Number(entry.programming),
            ColumnKey::Status => SortValue::Number(entry.status.ordinal() as f64),
        }
    }

    /// Cell text for rendering.
    pub fn display(&self, entry: &LeaderboardEntry) -> String {
        match self {
            ColumnKey::WorldRank => entry.world_rank.to_string(),
            ColumnKey::Number => entry.number.clone(),
            ColumnKey::Organization => entry.organization.clone(),
            ColumnKey::Region => entry.region.clone(),
            ColumnKey::Country => entry.country.clone(),
            ColumnKey::Score => entry.score.to_string(),
            ColumnKey::Driver => entry.driver.to_string(),
            ColumnKey::Programming => entry.programming.to_string(),
            ColumnKey::Status => entry.status.label().to_string(),
        }
    }
}

impl SortValue {
    /// Numeric when both sides are numeric, otherwise stringify both and
    /// compare case-insensitively. NaN sorts as equal rather than poisoning
    /// the ordering.
    pub fn compare(&self, other: &SortValue) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => {
                let a = self.to_text().to_lowercase();
                let b = other.to_text().to_lowercase();
                a.cmp(&b)
            }
        }
    }

    fn to_text(&self) -> String {
        match self {
            SortValue::Number(n) => n.to_string(),
            SortValue::Text(s) => s.clone(),
        }
    }
}
