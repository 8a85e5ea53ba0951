//! Cancelable ticket for deferred re-measurement.
//!
//! After a panel mounts, layout may still be settling, so the host measures
//! again two animation frames later. The owner keeps a [`RemeasureSlot`] and
//! checks [`RemeasureSlot::fire`] inside the frame callback; tearing the
//! owner down calls [`RemeasureSlot::cancel`] so a late callback never writes
//! a position into a detached element.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Identifies one scheduled re-measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Owner-held slot that allows at most one live deferred callback.
#[derive(Debug, Default)]
pub struct RemeasureSlot {
    generation: u64,
    pending: Option<u64>,
}

impl RemeasureSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a new re-measure, superseding any earlier ticket.
    pub fn schedule(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        Ticket(self.generation)
    }

    /// Invalidate any pending ticket.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Consume `ticket`. True only for the current, uncancelled ticket, and
    /// only the first time.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending == Some(ticket.0) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
