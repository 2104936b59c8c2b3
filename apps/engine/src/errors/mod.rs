//! Error types for the engine.
//!
//! `DomainError` covers pure-domain consistency failures, `AuctionError` aborts
//! a single auction and `GameError` is what the game loop surfaces.

pub mod auction;
pub mod config;
pub mod domain;
pub mod game;

pub use auction::AuctionError;
pub use config::ConfigError;
pub use domain::DomainError;
pub use game::GameError;
