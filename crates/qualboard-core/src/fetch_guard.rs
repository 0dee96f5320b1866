/// Stale-response guard for the leaderboard fetch loop.
///
/// Filters can change faster than network latency, so every fetch is tagged
/// with a monotonically increasing sequence number and a response is applied
/// only if no newer fetch has been issued since. Superseded responses are
/// simply discarded on arrival; there is no cancellation.
#[derive(Debug, Default)]
pub struct FetchGuard {
    issued: u64,
}

/// Tag for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding all earlier ones.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// True only for the most recently issued ticket.
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }
}
