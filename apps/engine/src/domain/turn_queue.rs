use std::collections::VecDeque;

use crate::errors::domain::DomainError;

/// FIFO rotation of seats.
///
/// Only the game loop's controlling task touches the live queue; bidders
/// iterate over a [`snapshot`](TurnQueue::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnQueue<T> {
    order: VecDeque<T>,
}

impl<T: Clone> TurnQueue<T> {
    pub fn new(order: impl IntoIterator<Item = T>) -> Self {
        Self {
            order: order.into_iter().collect(),
        }
    }

    /// Remove and return the front entry.
    pub fn pop(&mut self) -> Result<T, DomainError> {
        self.order.pop_front().ok_or(DomainError::EmptyTurnQueue)
    }

    pub fn push(&mut self, entry: T) {
        self.order.push_back(entry);
    }

    /// Independent ordered copy of the queue.
    pub fn snapshot(&self) -> Vec<T> {
        self.order.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
