// ============================================================================
// Per-Stage Job Queue
// ============================================================================

use std::collections::HashSet;
use std::time::Duration;

/// Index of a ticker in its stage's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickerId(pub(crate) usize);

impl TickerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Job types for frame work
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JobType {
    /// Ticker is counting and needs to be stepped on the next frame
    Step,
}

/// One-shot continuation for a ticker
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Job {
    pub ticker: TickerId,
    pub job_type: JobType,
}

/// A start that becomes a step job once `due` has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deferred {
    pub ticker: TickerId,
    pub due: Duration,
}

/// Pending work for one stage. Each stage owns its own queue; nothing here is
/// global.
#[derive(Debug, Default)]
pub struct JobQueue {
    /// Deduplicated: each (ticker, job_type) pair is queued at most once.
    pending: HashSet<Job>,
    deferred: Vec<Deferred>,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a job for the next frame. Duplicates are ignored.
    pub fn push(&mut self, ticker: TickerId, job_type: JobType) {
        self.pending.insert(Job { ticker, job_type });
    }

    /// Schedule a start at `due`, replacing any earlier schedule for the
    /// same ticker.
    pub fn defer(&mut self, ticker: TickerId, due: Duration) {
        self.deferred.retain(|d| d.ticker != ticker);
        self.deferred.push(Deferred { ticker, due });
    }

    /// Take the deferred starts that are due at `now`, in due order.
    pub fn take_due(&mut self, now: Duration) -> Vec<Deferred> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.deferred.drain(..).partition(|d| d.due <= now);
        self.deferred = waiting;
        due.sort_by_key(|d| (d.due, d.ticker));
        due
    }

    /// Drain all pending jobs, ordered by ticker so frames are reproducible.
    pub fn drain(&mut self) -> Vec<Job> {
        let mut jobs: Vec<Job> = std::mem::take(&mut self.pending).into_iter().collect();
        jobs.sort();
        jobs
    }

    /// Drop every job and deferred start belonging to `ticker`.
    pub fn cancel(&mut self, ticker: TickerId) -> usize {
        let before = self.pending.len() + self.deferred.len();
        self.pending.retain(|job| job.ticker != ticker);
        self.deferred.retain(|d| d.ticker != ticker);
        before - self.pending.len() - self.deferred.len()
    }

    /// Check if there are pending jobs or deferred starts
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty() || !self.deferred.is_empty()
    }

    /// Earliest deferred start, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.deferred.iter().map(|d| d.due).min()
    }
}
