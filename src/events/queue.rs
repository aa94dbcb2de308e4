//! FIFO event queue.

use std::collections::VecDeque;

/// First-in first-out queue of events of one type.
///
/// Producers `push`; the owner drains the queue once per frame with
/// `process_events`, which hands out events in the order they were pushed
/// and leaves the queue empty.
///
/// ```
/// use horror_deck::events::EventQueue;
///
/// let mut queue = EventQueue::new();
/// queue.push("door");
/// queue.push("key");
///
/// let mut seen = Vec::new();
/// queue.process_events(|e| seen.push(*e));
/// assert_eq!(seen, ["door", "key"]);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct EventQueue<T> {
    events: VecDeque<T>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }
}

impl<T> EventQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: T) {
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Pending events, oldest first, without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Hand every pending event to `handler`, oldest first, then clear.
    ///
    /// Events pushed by the handler itself are not possible (the queue is
    /// mutably borrowed), so one call always terminates.
    pub fn process_events<F>(&mut self, mut handler: F)
    where
        F: FnMut(&T),
    {
        while let Some(event) = self.events.pop_front() {
            handler(&event);
        }
    }

    /// Remove and return all pending events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }
}

impl<T> Extend<T> for EventQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}
