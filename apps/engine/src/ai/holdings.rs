//! Private mirror of a participant's hand and balance.

use crate::domain::{Item, Money};

/// What a strategy believes it holds, kept in sync through the
/// `receive_items` / `adjust_money` notifications.
#[derive(Debug, Clone, Default)]
pub(crate) struct Holdings {
    pub hand: Vec<Item>,
    pub money: Money,
}

impl Holdings {
    pub fn receive(&mut self, items: &[Item]) {
        self.hand.extend_from_slice(items);
    }

    pub fn adjust(&mut self, delta: i64) {
        let balance = (i64::from(self.money) + delta).clamp(0, i64::from(Money::MAX));
        self.money = Money::try_from(balance).unwrap_or(Money::MAX);
    }

    /// Remove and return the item at `index`, if any.
    pub fn take(&mut self, index: usize) -> Option<Item> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }
}
