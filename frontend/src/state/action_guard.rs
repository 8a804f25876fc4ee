//! Single-flight guard shared by every mutating action on a page.
//!
//! The page runs on one cooperative thread, so the in-flight flag is a plain
//! `Cell` behind an `Rc`: clones observe and contend for the same flag. A
//! trigger that arrives while another action is pending is dropped without
//! being queued or reported.
//!
//! There is no timeout. A request that never settles keeps the guard busy for
//! the rest of the page session.

use std::{cell::Cell, future::Future, rc::Rc};

#[derive(Clone, Default)]
pub struct ActionGuard {
    in_flight: Rc<Cell<bool>>,
}

/// Proof that the caller owns the guard. Dropping it releases the guard,
/// whichever way the owning scope exits.
#[must_use = "the guard is released as soon as the lease is dropped"]
pub struct InFlight {
    flag: Rc<Cell<bool>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl ActionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Claims the guard synchronously, or returns `None` when it is taken.
    pub fn try_acquire(&self) -> Option<InFlight> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlight {
            flag: Rc::clone(&self.in_flight),
        })
    }

    /// Runs `action` if no other action is in flight.
    ///
    /// The guard is claimed before `action` is invoked and released once its
    /// future settles, panics or is dropped. Returns `None` without invoking
    /// `action` when the guard is busy.
    pub async fn attempt<F, Fut>(&self, action: F) -> Option<Fut::Output>
    where
        F: FnOnce() -> Fut,
        Fut: Future,
    {
        let _lease = self.try_acquire()?;
        Some(action().await)
    }
}
