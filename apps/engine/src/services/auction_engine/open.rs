//! Open (concurrent, multi-round) auction.
//!
//! Every bidder runs `open_bid` on its own task with a private channel pair.
//! One listener task per bidder forwards that bidder's bids into a single
//! merged stream and reports `Done` when the bidder's outbound stream closes.
//! The coordinator (the caller's task) is the only writer of the auction: it
//! applies bids in dequeue order and publishes every improved winner to each
//! bidder's latest-winner slot. It stops after counting one `Done` per bidder.
//!
//! The coordinator never waits on a bidder. A forwarder task per bidder moves
//! the slot into the bounded inbound stream with a blocking send, so a slow
//! reader skips intermediate winners but always receives the latest one. An
//! inbound stream closes once the auction is over and its final winner has
//! been delivered.
//!
//! Equal bids arriving from different bidders at the same time resolve to
//! whichever the coordinator dequeues first.

use futures::future::join_all;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::Bidder;
use crate::ai::ParticipantError;
use crate::config::ChannelConfig;
use crate::domain::{Auction, Bid};
use crate::errors::AuctionError;

/// Message from a listener task to the coordinator.
enum Envelope {
    Bid { seat: usize, bid: Bid },
    Done { seat: usize },
}

struct Running {
    /// Latest winner per bidder; `None` until the first improvement.
    winners: Vec<watch::Sender<Option<Bid>>>,
    bidders: Vec<JoinHandle<Result<(), ParticipantError>>>,
    listeners: Vec<JoinHandle<()>>,
    forwarders: Vec<JoinHandle<()>>,
}

impl Running {
    fn abort(&self) {
        for handle in &self.bidders {
            handle.abort();
        }
        for handle in self.listeners.iter().chain(&self.forwarders) {
            handle.abort();
        }
    }
}

pub(super) async fn run(
    auction: &mut Auction,
    bidders: &[Bidder],
    channels: &ChannelConfig,
) -> Result<(), AuctionError> {
    let (merged_tx, mut merged_rx) = mpsc::channel(channels.merged);
    let running = spawn_bidders(auction, bidders, channels, &merged_tx);
    // Listeners hold the only remaining senders.
    drop(merged_tx);

    let outcome = coordinate(auction, bidders, &mut merged_rx, &running.winners).await;
    if let Err(err) = outcome {
        running.abort();
        return Err(err);
    }

    let Running {
        winners,
        bidders: bidder_tasks,
        listeners,
        forwarders,
    } = running;
    // Forwarders deliver the final winner, then close their inbound stream.
    drop(winners);
    join_all(listeners).await;
    join_all(forwarders).await;

    for (bidder, joined) in bidders.iter().zip(join_all(bidder_tasks).await) {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(source)) => {
                return Err(AuctionError::Participant {
                    bidder: bidder.name.clone(),
                    source,
                })
            }
            Err(join_err) => {
                return Err(AuctionError::BidderTask {
                    bidder: bidder.name.clone(),
                    detail: join_err.to_string(),
                })
            }
        }
    }
    Ok(())
}

fn spawn_bidders(
    auction: &Auction,
    bidders: &[Bidder],
    channels: &ChannelConfig,
    merged: &mpsc::Sender<Envelope>,
) -> Running {
    let mut running = Running {
        winners: Vec::with_capacity(bidders.len()),
        bidders: Vec::with_capacity(bidders.len()),
        listeners: Vec::with_capacity(bidders.len()),
        forwarders: Vec::with_capacity(bidders.len()),
    };

    for (seat, bidder) in bidders.iter().enumerate() {
        let (inbound_tx, inbound_rx) = mpsc::channel(channels.bidder_inbound);
        let (outbound_tx, mut outbound_rx) = mpsc::channel(channels.bidder_outbound);
        let (winner_tx, winner_rx) = watch::channel(None);
        running.winners.push(winner_tx);

        let participant = bidder.participant.clone();
        let view = auction.clone();
        running.bidders.push(tokio::spawn(async move {
            participant.open_bid(view, inbound_rx, outbound_tx).await
        }));

        let merged = merged.clone();
        running.listeners.push(tokio::spawn(async move {
            while let Some(bid) = outbound_rx.recv().await {
                if merged.send(Envelope::Bid { seat, bid }).await.is_err() {
                    // Coordinator gave up on the auction.
                    return;
                }
            }
            let _ = merged.send(Envelope::Done { seat }).await;
        }));

        running
            .forwarders
            .push(tokio::spawn(forward_winners(winner_rx, inbound_tx)));
    }
    running
}

/// Feed the latest winner into one bidder's inbound stream until the slot
/// closes. Returns early if the bidder dropped its receiver.
async fn forward_winners(mut winner: watch::Receiver<Option<Bid>>, inbound: mpsc::Sender<Bid>) {
    // A pending value is still reported after the sender is dropped.
    while winner.changed().await.is_ok() {
        let latest = winner.borrow_and_update().clone();
        if let Some(bid) = latest {
            if inbound.send(bid).await.is_err() {
                return;
            }
        }
    }
}

async fn coordinate(
    auction: &mut Auction,
    bidders: &[Bidder],
    merged: &mut mpsc::Receiver<Envelope>,
    winners: &[watch::Sender<Option<Bid>>],
) -> Result<(), AuctionError> {
    let mut remaining = bidders.len();
    while remaining > 0 {
        let Some(envelope) = merged.recv().await else {
            // Every listener is gone; a bidder task failed before completing.
            warn!(remaining, "open auction listeners ended early");
            break;
        };
        match envelope {
            Envelope::Done { seat } => {
                remaining -= 1;
                trace!(bidder = %bidders[seat].name, remaining, "bidder withdrew");
            }
            Envelope::Bid { seat, bid } => {
                bidders[seat].validate(&bid)?;
                if auction.handle_bid(bid.clone()) {
                    trace!(bidder = %bid.bidder, value = bid.value, "open bid took the lead");
                    publish(winners, &bid);
                }
            }
        }
    }
    debug!(
        item = %auction.item.name,
        value = auction.winning_value(),
        "open auction closed"
    );
    Ok(())
}

/// Replace every bidder's latest winner with `bid`, without blocking.
fn publish(winners: &[watch::Sender<Option<Bid>>], bid: &Bid) {
    for slot in winners {
        slot.send_replace(Some(bid.clone()));
    }
}
