//! The shared spring-loaded folder timer.
//!
//! One slot, owned by the view that holds every column, so a hover in any
//! column replaces whatever another column armed. Time is passed in rather
//! than read, which keeps expiry deterministic for the caller's event loop.

use std::time::{Duration, Instant};

/// Identifies one arming of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Ask the owning view to open `path` as if its item in the column at
/// `depth` had been clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOpenRequest {
    pub path: String,
    pub depth: usize,
}

#[derive(Debug, Clone)]
struct Pending {
    id: TimerId,
    element: String,
    request: FolderOpenRequest,
    deadline: Instant,
}

/// At most one pending folder-open action.
#[derive(Debug, Default)]
pub struct HoverTimer {
    next_id: u64,
    pending: Option<Pending>,
}

impl HoverTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `request` to fire `delay` after `now`, on behalf of the item
    /// `element`. Any earlier pending action is canceled first.
    pub fn arm(
        &mut self,
        element: &str,
        request: FolderOpenRequest,
        delay: Duration,
        now: Instant,
    ) -> TimerId {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(element = %previous.element, "Hover timer re-armed");
        }

        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending = Some(Pending {
            id,
            element: element.to_string(),
            request,
            deadline: now + delay,
        });
        id
    }

    /// Cancel the pending action, if any.
    pub fn clear(&mut self) -> Option<TimerId> {
        self.pending.take().map(|p| p.id)
    }

    /// Cancel the pending action only if it was armed for `element`.
    pub fn clear_for(&mut self, element: &str) -> bool {
        if self.armed_for() == Some(element) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn armed_for(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.element.as_str())
    }

    pub fn pending_id(&self) -> Option<TimerId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// When the pending action fires; useful as an event-loop poll deadline.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending request if its deadline has been reached. A request
    /// is handed out at most once.
    pub fn take_due(&mut self, now: Instant) -> Option<FolderOpenRequest> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.request),
            _ => None,
        }
    }
}
