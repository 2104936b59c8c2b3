pub mod auction_engine;
pub mod game_flow;
