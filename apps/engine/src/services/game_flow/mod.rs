//! Game loop: dealing, turn rotation, auctions, settlement and payouts.
//!
//! The engine owns every hand, balance and collection. Participants are told
//! about changes through their capability methods but are never trusted as
//! the source of truth.

mod seats;
mod settlement;

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

pub use seats::Seat;

use crate::ai::{Participant, ParticipantError};
use crate::config::GameConfig;
use crate::domain::rules::{player_range, PHASES};
use crate::domain::{items_per_phase, Auction, Deck, Item, Money, Phase, TurnQueue};
use crate::errors::{DomainError, GameError};
use crate::services::auction_engine::{AuctionEngine, Bidder};

/// Ending money per participant name.
pub type Scores = BTreeMap<String, Money>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    Continue,
    GameOver(Scores),
}

pub struct Game {
    seats: Vec<Seat>,
    queue: TurnQueue<usize>,
    deck: Deck,
    /// 1-based; past [`PHASES`] once the game is over.
    phase_no: u8,
    past_phases: Vec<Phase>,
    engine: AuctionEngine,
}

impl Game {
    /// Seat `participants` in the given turn order with the starting stake.
    pub fn new(
        participants: Vec<Arc<dyn Participant>>,
        deck: Deck,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if !player_range().contains(&participants.len()) {
            return Err(DomainError::UnsupportedPlayerCount(participants.len()).into());
        }
        let mut names = HashSet::new();
        for participant in &participants {
            if !names.insert(participant.name()) {
                let name = participant.name().to_string();
                return Err(DomainError::DuplicateParticipant(name).into());
            }
        }

        let seats: Vec<Seat> = participants
            .into_iter()
            .map(|participant| {
                participant.adjust_money(i64::from(config.starting_money));
                Seat::new(participant, config.starting_money)
            })
            .collect();

        info!(
            players = seats.len(),
            starting_money = config.starting_money,
            deck = deck.remaining(),
            "game created"
        );

        Ok(Self {
            queue: TurnQueue::new(0..seats.len()),
            seats,
            deck,
            phase_no: 1,
            past_phases: Vec::with_capacity(usize::from(PHASES)),
            engine: AuctionEngine::new(config.channels),
        })
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn past_phases(&self) -> &[Phase] {
        &self.past_phases
    }

    /// The phase being (or about to be) played, 1-based.
    pub fn phase_number(&self) -> u8 {
        self.phase_no
    }

    pub fn is_over(&self) -> bool {
        self.phase_no > PHASES
    }

    pub fn scores(&self) -> Scores {
        self.seats
            .iter()
            .map(|seat| (seat.name().to_string(), seat.money()))
            .collect()
    }

    /// Play every remaining phase and return the final scores.
    pub async fn play(&mut self) -> Result<Scores, GameError> {
        loop {
            if let PhaseOutcome::GameOver(scores) = self.play_phase().await? {
                return Ok(scores);
            }
        }
    }

    /// Deal, auction until a category reaches the threshold, then pay out.
    pub async fn play_phase(&mut self) -> Result<PhaseOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let phase_no = self.phase_no;
        self.deal(phase_no)?;
        info!(phase = phase_no, "phase started");

        let mut phase = Phase::new();
        while !phase.is_over() {
            self.play_turn(&mut phase).await?;
        }

        self.past_phases.push(phase);
        self.pay_out(phase_no);
        self.phase_no += 1;

        if self.is_over() {
            let scores = self.scores();
            info!(?scores, "game over");
            Ok(PhaseOutcome::GameOver(scores))
        } else {
            Ok(PhaseOutcome::Continue)
        }
    }

    fn deal(&mut self, phase_no: u8) -> Result<(), GameError> {
        let count = items_per_phase(self.seats.len(), phase_no)
            .ok_or(DomainError::UnsupportedPlayerCount(self.seats.len()))?;
        if count == 0 {
            return Ok(());
        }
        for seat_id in self.queue.snapshot() {
            let items = self.deck.deal(count)?;
            self.seats[seat_id].receive(items);
        }
        Ok(())
    }

    async fn play_turn(&mut self, phase: &mut Phase) -> Result<(), GameError> {
        let seat_id = self.queue.pop()?;
        let item = self.take_auction_item(seat_id)?;
        let mut auction = Auction::new(self.seats[seat_id].name(), item);
        // Back of the queue, so the auctioneer bids last on its own item.
        self.queue.push(seat_id);

        if phase.closes_with(auction.item.category) {
            auction.winning_bid = None;
            info!(
                auctioneer = %auction.auctioneer,
                item = %auction.item.name,
                category = %auction.item.category,
                "item closes the phase unsold"
            );
            self.notify_settled(&auction);
            phase.record(auction);
            return Ok(());
        }

        let bidders = self.bidders();
        let winning = self.engine.run(&mut auction, &bidders).await?;
        self.notify_settled(&auction);
        self.settle(seat_id, &auction.item, &winning)?;
        phase.record(auction);
        Ok(())
    }

    fn take_auction_item(&mut self, seat_id: usize) -> Result<Item, GameError> {
        let seat = &mut self.seats[seat_id];
        let item = seat
            .participant()
            .choose_auction_item()
            .map_err(|source| match source {
                ParticipantError::NoItem => GameError::NoAuctionableItem {
                    participant: seat.name().to_string(),
                },
                source => GameError::Participant {
                    participant: seat.name().to_string(),
                    source,
                },
            })?;
        seat.remove_from_hand(&item)?;
        Ok(item)
    }

    /// Current queue order as bidders; the auctioneer was just pushed last.
    fn bidders(&self) -> Vec<Bidder> {
        self.queue
            .snapshot()
            .into_iter()
            .map(|seat_id| {
                let seat = &self.seats[seat_id];
                Bidder::new(seat.participant().clone(), seat.money())
            })
            .collect()
    }

    fn notify_settled(&self, auction: &Auction) {
        for seat in &self.seats {
            seat.participant().auction_settled(auction);
        }
    }
}
