//! Notifications published by a game session
//!
//! Front ends subscribe a callback and receive one [`GuessEvent`] per
//! accepted guess. Rejected guesses publish nothing and events are never
//! replayed to listeners that subscribe later.

use crate::core::{Equation, GuessResult};
use std::fmt;

/// An accepted guess and its scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvent {
    /// 1-based index of the guess in the session history
    pub attempt: usize,
    pub guess: Equation,
    pub result: GuessResult,
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GuessEvent)>;

/// Registry of subscribed callbacks, in subscription order
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: impl FnMut(&GuessEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn publish(&mut self, event: &GuessEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
