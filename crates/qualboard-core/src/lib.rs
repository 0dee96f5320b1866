// Domain modules
pub mod column;
pub mod entry;
pub mod error;
pub mod fetch_guard;
pub mod qualification;
pub mod view;

pub use column::{ColumnKey, SortValue};
pub use entry::{LeaderboardEntry, LeaderboardResponse, QualificationRow};
pub use error::{QualboardError, Result};
pub use fetch_guard::{FetchGuard, FetchTicket};
pub use qualification::Qualification;
pub use view::{Grade, LeaderboardQuery, SortDirection, ViewAction, ViewState, PAGE_LIMIT};
