//! Generation counter that lets only the latest request write its result.
//!
//! Each fetch takes a [`RequestTicket`] before awaiting; when the response
//! arrives the ticket is checked and superseded responses are dropped.
//! Single-threaded: pages keep it in `StoredValue::new_local`.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    generation: Rc<Cell<u64>>,
}

#[derive(Clone, Debug)]
pub struct RequestTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.bump();
        RequestTicket {
            generation,
            current: Rc::clone(&self.generation),
        }
    }

    /// Invalidates outstanding tickets without starting a request.
    pub fn cancel(&self) {
        self.bump();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.current.get() == self.generation
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_wins() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn clones_share_the_counter() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.clone().begin();
        assert!(!ticket.is_current());
    }

    #[test]
    fn cancel_drops_outstanding() {
        let guard = RequestGuard::new();
        let ticket = guard.begin();
        guard.cancel();
        assert!(!ticket.is_current());
        assert!(guard.begin().is_current());
    }
}
