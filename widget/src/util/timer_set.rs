//! Bookkeeping for live timer handles.

#[cfg(test)]
#[path = "timer_set_test.rs"]
mod timer_set_test;

/// Timer handles keyed by id. A handle leaves the set when its timer fires
/// ([`TimerSet::finish`]) or when everything is cancelled ([`TimerSet::clear`]).
#[derive(Debug)]
pub struct TimerSet<T> {
    next_id: u64,
    live: Vec<(u64, T)>,
}

impl<T> Default for TimerSet<T> {
    fn default() -> Self {
        Self { next_id: 0, live: Vec::new() }
    }
}

impl<T> TimerSet<T> {
    /// Store the handle built by `make`, which receives the id the handle
    /// will later be finished with.
    pub fn insert_with(&mut self, make: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push((id, make(id)));
        id
    }

    pub fn finish(&mut self, id: u64) -> Option<T> {
        let index = self.live.iter().position(|(live_id, _)| *live_id == id)?;
        Some(self.live.swap_remove(index).1)
    }

    pub fn clear(&mut self) -> Vec<T> {
        self.live.drain(..).map(|(_, handle)| handle).collect()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
