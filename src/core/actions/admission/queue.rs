use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use crate::core::actions::errors::GeneratorError;

#[derive(Debug, Default)]
struct LineState {
    next_ticket: u64,
    now_serving: u64,
    waiting: usize,
    occupied: bool,
}

/// A bounded waiting line in front of a single execution slot.
///
/// Callers take numbered tickets and are let in strictly in ticket order,
/// one at a time. Once `capacity` callers are waiting, further callers are
/// turned away instead of being made to wait.
#[derive(Debug)]
pub struct AdmissionQueue {
    capacity: usize,
    state: Mutex<LineState>,
    turn: Condvar,
}

impl AdmissionQueue {
    pub fn new(capacity: usize) -> Result<Self, GeneratorError> {
        if capacity < 1 {
            return Err(GeneratorError::InvalidConfiguration(
                "admission queue capacity cannot be less than 1".to_string(),
            ));
        }

        Ok(Self {
            capacity,
            state: Mutex::new(LineState::default()),
            turn: Condvar::new(),
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Callers currently queued behind the slot, not counting the holder.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.lock().waiting
    }

    /// Joins the line and blocks until the slot is free and it is this
    /// caller's turn. Fails straight away with [`GeneratorError::QueueFull`]
    /// when the line is at capacity; a rejected caller holds nothing and
    /// must not release anything.
    pub fn begin(&self) -> Result<AdmissionPermit<'_>, GeneratorError> {
        let mut state = self.lock();

        if state.waiting >= self.capacity {
            debug!("admission rejected, {} callers already waiting", state.waiting);
            return Err(GeneratorError::QueueFull);
        }

        let ticket = state.next_ticket;
        state.next_ticket += 1;
        state.waiting += 1;
        trace!("ticket {} joined the line behind {} others", ticket, state.waiting - 1);

        while state.occupied || state.now_serving != ticket {
            state = self
                .turn
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        state.occupied = true;
        state.now_serving += 1;
        state.waiting -= 1;
        trace!("ticket {} admitted", ticket);

        Ok(AdmissionPermit {
            queue: self,
            ticket,
        })
    }

    fn end(&self, ticket: u64) {
        let mut state = self.lock();
        state.occupied = false;
        drop(state);

        trace!("ticket {} released the slot", ticket);
        self.turn.notify_all();
    }

    // The state is plain counters that are never left half-updated, so a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, LineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Proof of holding the execution slot. The slot is handed back when the
/// permit is dropped, on every exit path including unwinding.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct AdmissionPermit<'a> {
    queue: &'a AdmissionQueue,
    ticket: u64,
}

impl AdmissionPermit<'_> {
    #[must_use]
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// Releases the slot now rather than at the end of the scope.
    pub fn end(self) {}
}

impl Drop for AdmissionPermit<'_> {
    fn drop(&mut self) {
        self.queue.end(self.ticket);
    }
}
