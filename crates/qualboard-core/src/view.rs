use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::column::ColumnKey;
use crate::entry::LeaderboardEntry;
use crate::qualification::Qualification;

/// Competition division filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[default]
    HighSchool,
    MiddleSchool,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Grade::HighSchool => "High School",
            Grade::MiddleSchool => "Middle School",
        }
    }

    pub fn from_label(s: &str) -> Self {
        match s {
            "Middle School" => Grade::MiddleSchool,
            _ => Grade::HighSchool,
        }
    }

    pub fn all() -> &'static [Grade] {
        &[Grade::HighSchool, Grade::MiddleSchool]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
    Unsorted,
}

/// Fixed page size sent with every leaderboard request.
pub const PAGE_LIMIT: u32 = 100;

/// Parameters for one leaderboard fetch, derived from [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardQuery {
    pub grade: String,
    pub region: Option<String>,
    pub exclude_statuses: Vec<u8>,
    pub limit: u32,
}

impl LeaderboardQuery {
    /// Query-string encoding; `exclude_statuses` is repeated per value.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("grade={}", urlencoding::encode(&self.grade))];
        if let Some(region) = &self.region {
            parts.push(format!("region={}", urlencoding::encode(region)));
        }
        for status in &self.exclude_statuses {
            parts.push(format!("exclude_statuses={}", status));
        }
        parts.push(format!("limit={}", self.limit));
        parts.join("&")
    }
}

/// User interactions the leaderboard view understands. State transitions are
/// pure; the fetch side effect is triggered by the caller when
/// [`ViewAction::triggers_fetch`] says so.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SetGrade(Grade),
    SetRegion(String),
    ToggleExcluded(Qualification),
    ToggleColumn(ColumnKey),
    SortBy(ColumnKey),
}

impl ViewAction {
    /// True for the filter-relevant subset: those invalidate the fetched
    /// rows, sort and column visibility are presentation-only.
    pub fn triggers_fetch(&self) -> bool {
        matches!(
            self,
            ViewAction::SetGrade(_) | ViewAction::SetRegion(_) | ViewAction::ToggleExcluded(_)
        )
    }
}

/// All transient UI state owned by the leaderboard view. Created with
/// defaults on mount, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub grade: Grade,
    pub region: String,
    pub excluded: BTreeSet<Qualification>,
    pub hidden: BTreeSet<ColumnKey>,
    pub sort_key: ColumnKey,
    pub sort_direction: SortDirection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            grade: Grade::HighSchool,
            region: String::new(),
            excluded: BTreeSet::from([Qualification::Worlds]),
            hidden: BTreeSet::from([ColumnKey::Country, ColumnKey::Status]),
            sort_key: ColumnKey::WorldRank,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl ViewState {
    /// Pure transition function; the previous state is left untouched.
    pub fn apply(&self, action: &ViewAction) -> ViewState {
        let mut next = self.clone();
        match action {
            ViewAction::SetGrade(grade) => next.grade = *grade,
            ViewAction::SetRegion(region) => next.region = region.clone(),
            ViewAction::ToggleExcluded(status) => {
                if !next.excluded.remove(status) {
                    next.excluded.insert(*status);
                }
            }
            ViewAction::ToggleColumn(key) => {
                if !next.hidden.remove(key) {
                    next.hidden.insert(*key);
                }
            }
            ViewAction::SortBy(key) => next.cycle_sort(*key),
        }
        next
    }

    // Tri-state cycle: asc -> desc -> unsorted, where leaving the cycle also
    // resets the key to the default column. There is exactly one global
    // (sort_key, sort_direction) pair; clicking another column restarts at
    // ascending and discards the old direction.
    fn cycle_sort(&mut self, key: ColumnKey) {
        if self.sort_key != key || self.sort_direction == SortDirection::Unsorted {
            self.sort_key = key;
            self.sort_direction = SortDirection::Ascending;
        } else if self.sort_direction == SortDirection::Ascending {
            self.sort_direction = SortDirection::Descending;
        } else {
            self.sort_key = ColumnKey::WorldRank;
            self.sort_direction = SortDirection::Unsorted;
        }
    }

    /// Catalog order minus the hidden set, independent of toggle order.
    pub fn visible_columns(&self) -> Vec<ColumnKey> {
        ColumnKey::all()
            .iter()
            .copied()
            .filter(|key| !self.hidden.contains(key))
            .collect()
    }

    /// Fetch parameters for the current filters. Empty region and empty
    /// exclusion set are omitted rather than sent as empty values.
    pub fn query(&self) -> LeaderboardQuery {
        LeaderboardQuery {
            grade: self.grade.label().to_string(),
            region: if self.region.is_empty() {
                None
            } else {
                Some(self.region.clone())
            },
            exclude_statuses: self.excluded.iter().map(Qualification::ordinal).collect(),
            limit: PAGE_LIMIT,
        }
    }

    /// Ordering of the fetched rows under the current sort. Unsorted returns
    /// fetch order. The sort is stable, so equal keys keep their fetched
    /// relative order. Status filtering is the server's contract; rows are
    /// never re-filtered here.
    pub fn project(&self, rows: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
        let mut out = rows.to_vec();
        if self.sort_direction == SortDirection::Unsorted {
            return out;
        }
        let key = self.sort_key;
        out.sort_by(|a, b| {
            let ord = key.sort_value(a).compare(&key.sort_value(b));
            if self.sort_direction == SortDirection::Descending {
                ord.reverse()
            } else {
                ord
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(number: &str, rank: u32, score: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            number: number.to_string(),
            status: Qualification::None,
            organization: format!("{} org", number),
            country: "United States".to_string(),
            region: "Colorado".to_string(),
            world_rank: rank,
            score,
            driver: score / 2.0,
            programming: score / 2.0,
        }
    }

    #[test]
    fn defaults_match_latest_variant() {
        let state = ViewState::default();
        assert_eq!(state.grade, Grade::HighSchool);
        assert!(state.region.is_empty());
        assert_eq!(state.excluded, BTreeSet::from([Qualification::Worlds]));
        assert_eq!(
            state.hidden,
            BTreeSet::from([ColumnKey::Country, ColumnKey::Status])
        );
        assert_eq!(state.sort_key, ColumnKey::WorldRank);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn sort_cycle_runs_asc_desc_unsorted_then_restarts() {
        let s0 = ViewState::default();
        let s1 = s0.apply(&ViewAction::SortBy(ColumnKey::Score));
        assert_eq!((s1.sort_key, s1.sort_direction), (ColumnKey::Score, SortDirection::Ascending));

        let s2 = s1.apply(&ViewAction::SortBy(ColumnKey::Score));
        assert_eq!((s2.sort_key, s2.sort_direction), (ColumnKey::Score, SortDirection::Descending));

        let s3 = s2.apply(&ViewAction::SortBy(ColumnKey::Score));
        assert_eq!(
            (s3.sort_key, s3.sort_direction),
            (ColumnKey::WorldRank, SortDirection::Unsorted)
        );

        let s4 = s3.apply(&ViewAction::SortBy(ColumnKey::Score));
        assert_eq!((s4.sort_key, s4.sort_direction), (ColumnKey::Score, SortDirection::Ascending));
    }

    #[test]
    fn switching_columns_discards_previous_direction() {
        let state = ViewState::default()
            .apply(&ViewAction::SortBy(ColumnKey::Score))
            .apply(&ViewAction::SortBy(ColumnKey::Score))
            .apply(&ViewAction::SortBy(ColumnKey::Driver));
        assert_eq!(state.sort_key, ColumnKey::Driver);
        assert_eq!(state.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn unsorted_cycle_restarts_even_on_default_key() {
        // Reach unsorted via the default column, then click it again.
        let state = ViewState::default()
            .apply(&ViewAction::SortBy(ColumnKey::WorldRank))
            .apply(&ViewAction::SortBy(ColumnKey::WorldRank))
            .apply(&ViewAction::SortBy(ColumnKey::WorldRank));
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert_eq!(state.sort_key, ColumnKey::WorldRank);
    }

    #[test]
    fn column_toggle_is_an_involution() {
        let state = ViewState::default();
        let hidden = state.apply(&ViewAction::ToggleColumn(ColumnKey::Score));
        assert!(hidden.hidden.contains(&ColumnKey::Score));
        let shown = hidden.apply(&ViewAction::ToggleColumn(ColumnKey::Score));
        assert_eq!(shown.hidden, state.hidden);
    }

    #[test]
    fn visible_columns_are_catalog_order_regardless_of_toggle_order() {
        let a = ViewState::default()
            .apply(&ViewAction::ToggleColumn(ColumnKey::Driver))
            .apply(&ViewAction::ToggleColumn(ColumnKey::Number));
        let b = ViewState::default()
            .apply(&ViewAction::ToggleColumn(ColumnKey::Number))
            .apply(&ViewAction::ToggleColumn(ColumnKey::Driver));
        assert_eq!(a.visible_columns(), b.visible_columns());

        let expected: Vec<ColumnKey> = ColumnKey::all()
            .iter()
            .copied()
            .filter(|k| !a.hidden.contains(k))
            .collect();
        assert_eq!(a.visible_columns(), expected);
    }

    #[test]
    fn only_filter_actions_trigger_fetch() {
        assert!(ViewAction::SetGrade(Grade::MiddleSchool).triggers_fetch());
        assert!(ViewAction::SetRegion("Texas".into()).triggers_fetch());
        assert!(ViewAction::ToggleExcluded(Qualification::None).triggers_fetch());
        assert!(!ViewAction::ToggleColumn(ColumnKey::Score).triggers_fetch());
        assert!(!ViewAction::SortBy(ColumnKey::Score).triggers_fetch());
    }

    #[test]
    fn default_query_excludes_worlds_with_limit_100() {
        let q = ViewState::default().query();
        assert_eq!(q.grade, "High School");
        assert_eq!(q.region, None);
        assert_eq!(q.exclude_statuses, vec![2]);
        assert_eq!(q.limit, 100);
        assert_eq!(
            q.to_query_string(),
            "grade=High%20School&exclude_statuses=2&limit=100"
        );
    }

    #[test]
    fn query_carries_region_and_repeated_exclusions() {
        let state = ViewState::default()
            .apply(&ViewAction::SetRegion("New Mexico".into()))
            .apply(&ViewAction::ToggleExcluded(Qualification::None));
        let q = state.query();
        assert_eq!(q.region.as_deref(), Some("New Mexico"));
        assert_eq!(q.exclude_statuses, vec![0, 2]);
        assert_eq!(
            q.to_query_string(),
            "grade=High%20School&region=New%20Mexico&exclude_statuses=0&exclude_statuses=2&limit=100"
        );
    }

    #[test]
    fn region_with_reserved_characters_is_encoded() {
        let state = ViewState::default().apply(&ViewAction::SetRegion("A&B #4".into()));
        assert_eq!(
            state.query().to_query_string(),
            "grade=High%20School&region=A%26B%20%234&exclude_statuses=2&limit=100"
        );
    }

    #[test]
    fn clearing_exclusions_omits_the_parameter() {
        let state = ViewState::default().apply(&ViewAction::ToggleExcluded(Qualification::Worlds));
        let q = state.query();
        assert!(q.exclude_statuses.is_empty());
        assert_eq!(q.to_query_string(), "grade=High%20School&limit=100");
    }

    #[test]
    fn rank_sort_scenario() {
        let rows = vec![entry("A", 2, 10.0), entry("B", 1, 20.0)];
        let s0 = ViewState::default();

        // Default: ascending by world rank.
        let ordered: Vec<_> = s0.project(&rows).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["B", "A"]);

        // One click on Rank: descending.
        let s1 = s0.apply(&ViewAction::SortBy(ColumnKey::WorldRank));
        let ordered: Vec<_> = s1.project(&rows).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["A", "B"]);

        // Second click: unsorted, fetch order comes back.
        let s2 = s1.apply(&ViewAction::SortBy(ColumnKey::WorldRank));
        assert_eq!(s2.sort_direction, SortDirection::Unsorted);
        let ordered: Vec<_> = s2.project(&rows).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["A", "B"]);
    }

    #[test]
    fn default_state_clicks_rank_then_descends() {
        // From the default (WorldRank, asc) the first Rank click moves
        // straight to descending, not back to ascending.
        let rows = vec![entry("A", 2, 10.0), entry("B", 1, 20.0)];
        let s1 = ViewState::default().apply(&ViewAction::SortBy(ColumnKey::WorldRank));
        assert_eq!(s1.sort_direction, SortDirection::Descending);
        let ordered: Vec<_> = s1.project(&rows).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["A", "B"]);
    }

    #[test]
    fn projection_is_stable_for_equal_keys() {
        let rows = vec![
            entry("C", 5, 10.0),
            entry("A", 1, 10.0),
            entry("B", 3, 10.0),
        ];
        let mut state = ViewState::default();
        state.sort_key = ColumnKey::Score;
        state.sort_direction = SortDirection::Ascending;
        let ordered: Vec<_> = state.project(&rows).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["C", "A", "B"]);
    }

    #[test]
    fn text_sort_is_case_insensitive() {
        let mut a = entry("x1", 1, 0.0);
        a.organization = "zeta".to_string();
        let mut b = entry("x2", 2, 0.0);
        b.organization = "Alpha".to_string();
        let mut state = ViewState::default();
        state.sort_key = ColumnKey::Organization;
        let ordered: Vec<_> = state.project(&[a, b]).iter().map(|e| e.number.clone()).collect();
        assert_eq!(ordered, ["x2", "x1"]);
    }

    #[test]
    fn excluded_statuses_are_not_refiltered_client_side() {
        // A non-compliant server returning a Worlds row still gets rendered.
        let mut row = entry("W", 1, 1.0);
        row.status = Qualification::Worlds;
        let state = ViewState::default();
        assert!(state.excluded.contains(&Qualification::Worlds));
        assert_eq!(state.project(&[row.clone()]), vec![row]);
    }

    #[test]
    fn projection_does_not_mutate_input() {
        let rows = vec![entry("A", 2, 10.0), entry("B", 1, 20.0)];
        let before = rows.clone();
        let _ = ViewState::default().project(&rows);
        assert_eq!(rows, before);
    }
}
