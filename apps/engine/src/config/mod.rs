//! Engine configuration.

pub mod game;

pub use game::{ChannelConfig, GameConfig};
