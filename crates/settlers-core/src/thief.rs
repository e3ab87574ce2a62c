//! The thief: one blocking position per board, plus the steal-target
//! lookup the game-flow trigger uses after relocating it.

use crate::board::{Board, PlayerId};
use crate::grid::Coordinate;
use crate::player::Players;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The single board-wide blocker. A field holding the thief never pays out,
/// whatever its dice number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thief {
    position: Coordinate,
}

impl Thief {
    /// A thief standing on the given field.
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }

    /// The field the thief currently occupies.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Relocate the thief. No precondition beyond being a field coordinate;
    /// the external trigger layer owns any further policy.
    pub fn set_position(&mut self, field: Coordinate) {
        self.position = field;
    }

    /// Whether this thief suspends payout for the given field.
    pub fn blocks(&self, field: Coordinate) -> bool {
        self.position == field
    }
}

/// Owners other than `current` with a building on the field and at least one
/// resource card, deduplicated and ordered by id.
fn steal_candidates(
    board: &Board,
    players: &Players,
    field: Coordinate,
    current: PlayerId,
) -> Vec<PlayerId> {
    let mut candidates: Vec<PlayerId> = board
        .occupied_corners_of_field(field)
        .into_iter()
        .filter_map(|corner| board.corner(corner).owner())
        .filter(|&owner| owner != current)
        .filter(|&owner| {
            players
                .get(owner)
                .is_some_and(|player| player.stock().total() > 0)
        })
        .collect();
    candidates.sort_unstable();
    candidates.dedup();
    candidates
}

/// Whether anyone at this field could be stolen from.
pub fn has_neighbor_with_resources(
    board: &Board,
    players: &Players,
    field: Coordinate,
    current: PlayerId,
) -> bool {
    !steal_candidates(board, players, field, current).is_empty()
}

/// Pick the player to steal from at the thief's field.
///
/// Returns `None` when nobody qualifies. With several candidates the
/// injected generator breaks the tie, so a seeded rng makes the pick
/// reproducible.
pub fn steal_target<R: Rng>(
    board: &Board,
    players: &Players,
    field: Coordinate,
    current: PlayerId,
    rng: &mut R,
) -> Option<PlayerId> {
    let candidates = steal_candidates(board, players, field, current);
    let target = candidates.choose(rng).copied();
    debug!("steal target at {field:?}: {target:?} (of {})", candidates.len());
    target
}
