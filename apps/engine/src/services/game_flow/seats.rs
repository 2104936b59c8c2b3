use std::sync::Arc;

use crate::ai::Participant;
use crate::domain::{Item, Money};
use crate::errors::DomainError;

/// Engine-held state of one participant.
pub struct Seat {
    participant: Arc<dyn Participant>,
    name: String,
    hand: Vec<Item>,
    money: Money,
    /// Items won this phase; emptied at every payout.
    collection: Vec<Item>,
}

impl Seat {
    pub(super) fn new(participant: Arc<dyn Participant>, money: Money) -> Self {
        Self {
            name: participant.name().to_string(),
            participant,
            hand: Vec::new(),
            money,
            collection: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Item] {
        &self.hand
    }

    pub fn money(&self) -> Money {
        self.money
    }

    pub fn collection(&self) -> &[Item] {
        &self.collection
    }

    pub(super) fn participant(&self) -> &Arc<dyn Participant> {
        &self.participant
    }

    pub(super) fn receive(&mut self, items: Vec<Item>) {
        self.participant.receive_items(&items);
        self.hand.extend(items);
    }

    pub(super) fn remove_from_hand(&mut self, item: &Item) -> Result<(), DomainError> {
        let index = self
            .hand
            .iter()
            .position(|held| held == item)
            .ok_or_else(|| DomainError::ItemNotFound {
                participant: self.name.clone(),
                item: item.name.clone(),
            })?;
        self.hand.remove(index);
        Ok(())
    }

    pub(super) fn debit(&mut self, amount: Money) -> Option<()> {
        self.money = self.money.checked_sub(amount)?;
        self.participant.adjust_money(-i64::from(amount));
        Some(())
    }

    pub(super) fn credit(&mut self, amount: Money) {
        self.money = self.money.saturating_add(amount);
        self.participant.adjust_money(i64::from(amount));
    }

    pub(super) fn collect(&mut self, item: Item) {
        self.collection.push(item);
    }

    pub(super) fn take_collection(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.collection)
    }
}
