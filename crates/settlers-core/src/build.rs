//! Infrastructure placement: legality rules and build-time side effects.
//!
//! Every operation validates all of its preconditions before it mutates
//! anything, so a rejected build leaves board and player exactly as they
//! were. A corner only ever moves forward: empty, then settlement, then
//! city; nothing is ever torn down.

use crate::board::{Board, CornerBuilding};
use crate::grid::{Coordinate, EdgeCoord};
use crate::player::{Player, Structure};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a build request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum BuildError {
    #[error("coordinate is not a corner of the board")]
    NoSuchCorner,

    #[error("edge is not part of the board")]
    NoSuchEdge,

    #[error("corner is already occupied")]
    CornerOccupied,

    #[error("edge already carries a road")]
    EdgeOccupied,

    #[error("a neighboring corner is already settled")]
    NeighborOccupied,

    #[error("corner touches nothing but water")]
    SurroundedByWater,

    #[error("corner is not connected to one of the player's roads")]
    NoAdjacentOwnRoad,

    #[error("edge does not connect to the player's network")]
    NotConnected,

    #[error("not enough resources")]
    InsufficientResources,

    #[error("no pieces of that structure left")]
    OutOfPieces,

    #[error("no own settlement at this corner to upgrade")]
    NothingToUpgrade,
}

/// Place a settlement during the founding phase: free of charge and exempt
/// from the road-connection requirement, but the distance rule and the
/// water rule hold from the very first placement.
pub fn build_initial_settlement(
    board: &mut Board,
    player: &mut Player,
    corner: Coordinate,
) -> Result<(), BuildError> {
    let legal = settlement_site(board, corner).and_then(|()| piece_available(player, Structure::Settlement));
    match legal {
        Ok(()) => {
            commit_settlement(board, player, corner);
            Ok(())
        }
        Err(reason) => rejected("initial settlement", corner, reason),
    }
}

/// Place a settlement in regular play: the corner must additionally touch
/// one of the player's roads, and the player pays the settlement cost.
pub fn build_settlement(
    board: &mut Board,
    player: &mut Player,
    corner: Coordinate,
) -> Result<(), BuildError> {
    let legal = settlement_site(board, corner)
        .and_then(|()| {
            if board.is_adjacent_to_own_road(corner, player.id()) {
                Ok(())
            } else {
                Err(BuildError::NoAdjacentOwnRoad)
            }
        })
        .and_then(|()| liquidity(player, Structure::Settlement))
        .and_then(|()| piece_available(player, Structure::Settlement));
    match legal {
        Ok(()) => {
            player.pay(Structure::Settlement);
            commit_settlement(board, player, corner);
            Ok(())
        }
        Err(reason) => rejected("settlement", corner, reason),
    }
}

/// Upgrade one of the player's settlements to a city. The city costs its
/// fixed price, frees the settlement piece, and adds one further winning
/// point on top of the settlement's.
pub fn build_city(
    board: &mut Board,
    player: &mut Player,
    corner: Coordinate,
) -> Result<(), BuildError> {
    let legal = if board.corner(corner) != CornerBuilding::Settlement(player.id()) {
        Err(BuildError::NothingToUpgrade)
    } else {
        liquidity(player, Structure::City).and_then(|()| piece_available(player, Structure::City))
    };
    match legal {
        Ok(()) => {
            player.pay(Structure::City);
            board.place_city(corner, player.id());
            player.decrement_stock(Structure::City);
            player.restore_stock(Structure::Settlement);
            player.increment_winning_points();
            debug!("player {} upgrades {:?} to a city", player.id(), corner);
            Ok(())
        }
        Err(reason) => rejected("city", corner, reason),
    }
}

/// Place a road during the founding phase: free of charge, but it must
/// start at one of the player's own buildings.
pub fn build_initial_road(
    board: &mut Board,
    player: &mut Player,
    edge: EdgeCoord,
) -> Result<(), BuildError> {
    let legal = road_site(board, edge)
        .and_then(|()| {
            let touches_own_building = edge
                .endpoints()
                .iter()
                .any(|corner| board.corner(*corner).owner() == Some(player.id()));
            if touches_own_building {
                Ok(())
            } else {
                Err(BuildError::NotConnected)
            }
        })
        .and_then(|()| piece_available(player, Structure::Road));
    match legal {
        Ok(()) => {
            commit_road(board, player, edge);
            Ok(())
        }
        Err(reason) => rejected_edge("initial road", edge, reason),
    }
}

/// Place a road in regular play: it must extend the player's network (an
/// own building or road at an endpoint), and the player pays the road cost.
pub fn build_road(
    board: &mut Board,
    player: &mut Player,
    edge: EdgeCoord,
) -> Result<(), BuildError> {
    let legal = road_site(board, edge)
        .and_then(|()| {
            if connects_to_network(board, edge, player) {
                Ok(())
            } else {
                Err(BuildError::NotConnected)
            }
        })
        .and_then(|()| liquidity(player, Structure::Road))
        .and_then(|()| piece_available(player, Structure::Road));
    match legal {
        Ok(()) => {
            player.pay(Structure::Road);
            commit_road(board, player, edge);
            Ok(())
        }
        Err(reason) => rejected_edge("road", edge, reason),
    }
}

// ==================== Shared Checks ====================

fn settlement_site(board: &Board, corner: Coordinate) -> Result<(), BuildError> {
    if !board.has_corner(corner) {
        return Err(BuildError::NoSuchCorner);
    }
    if !board.corner(corner).is_empty() {
        return Err(BuildError::CornerOccupied);
    }
    if board.has_occupied_neighbor(corner) {
        return Err(BuildError::NeighborOccupied);
    }
    if board.is_surrounded_only_by_water(corner) {
        return Err(BuildError::SurroundedByWater);
    }
    Ok(())
}

fn road_site(board: &Board, edge: EdgeCoord) -> Result<(), BuildError> {
    if !board.has_edge(edge) {
        return Err(BuildError::NoSuchEdge);
    }
    if !board.edge(edge).is_empty() {
        return Err(BuildError::EdgeOccupied);
    }
    Ok(())
}

fn connects_to_network(board: &Board, edge: EdgeCoord, player: &Player) -> bool {
    edge.endpoints().iter().any(|corner| {
        board.corner(*corner).owner() == Some(player.id())
            || corner.corner_edges().iter().any(|other| {
                *other != edge && board.edge(*other).owner() == Some(player.id())
            })
    })
}

fn liquidity(player: &Player, structure: Structure) -> Result<(), BuildError> {
    if player.has_liquidity_for(structure) {
        Ok(())
    } else {
        Err(BuildError::InsufficientResources)
    }
}

fn piece_available(player: &Player, structure: Structure) -> Result<(), BuildError> {
    if player.remaining_stock(structure) > 0 {
        Ok(())
    } else {
        Err(BuildError::OutOfPieces)
    }
}

// ==================== Commit Steps ====================

fn commit_settlement(board: &mut Board, player: &mut Player, corner: Coordinate) {
    board.place_settlement(corner, player.id());
    player.decrement_stock(Structure::Settlement);
    player.increment_winning_points();
    debug!("player {} builds a settlement at {:?}", player.id(), corner);
}

fn commit_road(board: &mut Board, player: &mut Player, edge: EdgeCoord) {
    board.place_road(edge, player.id());
    player.decrement_stock(Structure::Road);
    debug!("player {} builds a road at {:?}", player.id(), edge);
}

fn rejected(what: &str, corner: Coordinate, reason: BuildError) -> Result<(), BuildError> {
    debug!("{what} at {corner:?} rejected: {reason}");
    Err(reason)
}

fn rejected_edge(what: &str, edge: EdgeCoord, reason: BuildError) -> Result<(), BuildError> {
    debug!("{what} at {edge:?} rejected: {reason}");
    Err(reason)
}
