//! Board and resource-economy core for a hex-grid settlement game.
//!
//! This crate covers the parts of the game that need geometry and graph
//! reasoning: the board topology, placement legality for settlements,
//! cities and roads, the thief, and the dice-driven resource payout.
//! Everything around it - input collection, turn advancement, trading,
//! scoring display - is an external collaborator that calls in through
//! the [`Players`] registry and the build/distribution entry points.
//!
//! # Modules
//!
//! - [`grid`]: the shared integer coordinate space for fields, corners and
//!   edges, with pure adjacency queries
//! - [`board`]: the board aggregate with the canonical layout, occupancy
//!   bookkeeping and the thief
//! - [`player`]: the player collaborator contract and id registry
//! - [`build`]: placement legality and atomic build commits
//! - [`thief`]: the blocker and the steal-target lookup
//! - [`distribution`]: the per-roll payout engine
//!
//! All state lives in plain values; running several sessions side by side
//! is a matter of holding several [`Board`]/[`Players`] pairs.

pub mod board;
pub mod build;
pub mod distribution;
pub mod grid;
pub mod player;
pub mod thief;

// Re-export commonly used types
pub use board::{
    Board, BoardView, CornerBuilding, EdgeBuilding, Land, PlayerId, Resource,
    INITIAL_THIEF_POSITION,
};
pub use build::{
    build_city, build_initial_road, build_initial_settlement, build_road, build_settlement,
    BuildError,
};
pub use distribution::{distribute, payout_for_roll};
pub use grid::{Coordinate, EdgeCoord};
pub use player::{Player, Players, ResourceStock, Structure};
pub use thief::{has_neighbor_with_resources, steal_target, Thief};
