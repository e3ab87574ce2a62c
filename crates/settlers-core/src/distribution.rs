//! Dice-driven resource payout.
//!
//! A roll selects the fields carrying that number; every building on their
//! corners earns its tier in the field's resource, unless the thief stands
//! on the field. The computation is split the usual way: a pure payout map
//! first, application to the player registry second, so the final stock
//! deltas are deterministic for a fixed board, thief and roll.

use crate::board::{Board, PlayerId, Resource};
use crate::player::Players;
use log::debug;
use std::collections::HashMap;

/// Per-player, per-resource credits for one roll.
///
/// Empty for 7 (reserved for the thief trigger) and for anything outside
/// 2..=12. A field the thief occupies is skipped entirely; fields without a
/// resource (which the standard numbering never produces) credit nothing.
/// Several corners of the same player around one field all count, so their
/// shares sum.
pub fn payout_for_roll(
    board: &Board,
    rolled_value: u8,
) -> HashMap<PlayerId, HashMap<Resource, u32>> {
    let mut payout: HashMap<PlayerId, HashMap<Resource, u32>> = HashMap::new();
    if rolled_value == 7 || !(2..=12).contains(&rolled_value) {
        return payout;
    }

    for field in board.fields_for_dice_value(rolled_value) {
        if board.thief().blocks(field) {
            debug!("field {field:?} is blocked by the thief, no payout");
            continue;
        }
        let resource = match board.resource_of(field) {
            Some(resource) => resource,
            None => continue,
        };
        for corner in board.occupied_corners_of_field(field) {
            let building = board.corner(corner);
            if let Some(owner) = building.owner() {
                *payout
                    .entry(owner)
                    .or_default()
                    .entry(resource)
                    .or_insert(0) += building.tier();
            }
        }
    }

    payout
}

/// Credit the payout of a roll to the registry.
///
/// Returns the applied deltas. Credits are final; there is no undo for a
/// roll.
pub fn distribute(
    board: &Board,
    players: &mut Players,
    rolled_value: u8,
) -> Vec<(PlayerId, Resource, u32)> {
    let mut credited = Vec::new();
    for (id, resources) in payout_for_roll(board, rolled_value) {
        for (resource, amount) in resources {
            if let Some(player) = players.get_mut(id) {
                player.credit_resource(resource, amount);
                credited.push((id, resource, amount));
            }
        }
    }
    debug!(
        "roll {rolled_value}: {} credit(s) applied",
        credited.len()
    );
    credited
}
