//! Submission bookkeeping shared by the screen controllers.

use std::cell::Cell;
use std::rc::Rc;

/// Actions of one screen that are waiting on the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight<A> {
    pending: Vec<A>,
}

impl<A: Copy + Eq> InFlight<A> {
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Move `action` to submitting. Returns `false` if it already was.
    pub fn begin(&mut self, action: A) -> bool {
        if self.pending.contains(&action) {
            return false;
        }
        self.pending.push(action);
        true
    }

    pub fn finish(&mut self, action: A) {
        self.pending.retain(|a| *a != action);
    }

    pub fn is_submitting(&self, action: A) -> bool {
        self.pending.contains(&action)
    }
}

impl<A: Copy + Eq> Default for InFlight<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tells a controller that its view has been torn down.
///
/// Clones share state: the view keeps one clone and cancels it when it is
/// dropped, the controller checks its clone after every await.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_rejected_until_finished() {
        let mut in_flight = InFlight::new();
        assert!(in_flight.begin("delete"));
        assert!(!in_flight.begin("delete"));
        assert!(in_flight.begin("edit"));

        in_flight.finish("delete");
        assert!(!in_flight.is_submitting("delete"));
        assert!(in_flight.is_submitting("edit"));
        assert!(in_flight.begin("delete"));
    }

    #[test]
    fn cancel_is_seen_by_clones() {
        let token = CancellationToken::new();
        let view_side = token.clone();
        assert!(!token.is_cancelled());
        view_side.cancel();
        assert!(token.is_cancelled());
    }
}
