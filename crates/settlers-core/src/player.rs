//! The player collaborator contract: resource stock, piece stock and
//! winning points.
//!
//! The core never owns player lifecycle; it consumes this surface through
//! the [`Players`] registry, which resolves the ids stored on buildings.

use crate::board::{PlayerId, Resource};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A countable pile of resource cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStock {
    pub lumber: u32,
    pub wool: u32,
    pub grain: u32,
    pub ore: u32,
    pub brick: u32,
}

impl ResourceStock {
    /// An empty stock.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stock with the given amounts.
    pub fn with_amounts(lumber: u32, wool: u32, grain: u32, ore: u32, brick: u32) -> Self {
        Self {
            lumber,
            wool,
            grain,
            ore,
            brick,
        }
    }

    /// Total number of cards.
    pub fn total(&self) -> u32 {
        self.lumber + self.wool + self.grain + self.ore + self.brick
    }

    /// Whether the stock holds no cards.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Count of one resource.
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Lumber => self.lumber,
            Resource::Wool => self.wool,
            Resource::Grain => self.grain,
            Resource::Ore => self.ore,
            Resource::Brick => self.brick,
        }
    }

    /// Add cards of one resource.
    pub fn add(&mut self, resource: Resource, amount: u32) {
        match resource {
            Resource::Lumber => self.lumber += amount,
            Resource::Wool => self.wool += amount,
            Resource::Grain => self.grain += amount,
            Resource::Ore => self.ore += amount,
            Resource::Brick => self.brick += amount,
        }
    }

    /// Whether this stock covers a cost.
    pub fn can_afford(&self, cost: &ResourceStock) -> bool {
        self.lumber >= cost.lumber
            && self.wool >= cost.wool
            && self.grain >= cost.grain
            && self.ore >= cost.ore
            && self.brick >= cost.brick
    }

    /// Subtract a cost. Callers check `can_afford` first.
    pub fn subtract(&mut self, cost: &ResourceStock) {
        assert!(self.can_afford(cost), "cost exceeds stock");
        self.lumber -= cost.lumber;
        self.wool -= cost.wool;
        self.grain -= cost.grain;
        self.ore -= cost.ore;
        self.brick -= cost.brick;
    }

    /// Remove one uniformly random card, for the thief's steal.
    pub fn take_random<R: Rng>(&mut self, rng: &mut R) -> Option<Resource> {
        let mut cards: Vec<Resource> = Vec::with_capacity(self.total() as usize);
        for resource in Resource::ALL {
            cards.extend(std::iter::repeat(resource).take(self.get(resource) as usize));
        }
        let taken = *cards.choose(rng)?;
        let mut cost = ResourceStock::new();
        cost.add(taken, 1);
        self.subtract(&cost);
        Some(taken)
    }
}

/// Buildable structure kinds, with the fixed cost table and piece limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Structure {
    Road,
    Settlement,
    City,
}

impl Structure {
    /// All structure kinds.
    pub const ALL: [Structure; 3] = [Structure::Road, Structure::Settlement, Structure::City];

    /// The fixed build cost of this structure.
    pub fn cost(&self) -> ResourceStock {
        match self {
            Structure::Road => ResourceStock::with_amounts(1, 0, 0, 0, 1),
            Structure::Settlement => ResourceStock::with_amounts(1, 1, 1, 0, 1),
            Structure::City => ResourceStock::with_amounts(0, 0, 2, 3, 0),
        }
    }

    /// How many pieces of this kind a player starts with.
    pub const fn initial_stock(&self) -> u32 {
        match self {
            Structure::Road => 15,
            Structure::Settlement => 5,
            Structure::City => 4,
        }
    }
}

/// One player's state, as far as the core is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    stock: ResourceStock,
    winning_points: u32,
    roads_remaining: u32,
    settlements_remaining: u32,
    cities_remaining: u32,
}

impl Player {
    /// A fresh player with full piece stock and no cards.
    pub fn new(id: PlayerId, name: String) -> Self {
        Self {
            id,
            name,
            stock: ResourceStock::new(),
            winning_points: 0,
            roads_remaining: Structure::Road.initial_stock(),
            settlements_remaining: Structure::Settlement.initial_stock(),
            cities_remaining: Structure::City.initial_stock(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's resource cards.
    pub fn stock(&self) -> &ResourceStock {
        &self.stock
    }

    /// The player's winning points.
    pub fn winning_points(&self) -> u32 {
        self.winning_points
    }

    /// Whether the player can pay for a structure of this kind.
    pub fn has_liquidity_for(&self, structure: Structure) -> bool {
        self.stock.can_afford(&structure.cost())
    }

    /// Deduct the fixed cost of a structure. Callers check liquidity first.
    pub fn pay(&mut self, structure: Structure) {
        self.stock.subtract(&structure.cost());
    }

    /// Unbuilt pieces of a structure kind.
    pub fn remaining_stock(&self, structure: Structure) -> u32 {
        match structure {
            Structure::Road => self.roads_remaining,
            Structure::Settlement => self.settlements_remaining,
            Structure::City => self.cities_remaining,
        }
    }

    /// Take one piece out of the stock. Callers check `remaining_stock` first.
    pub fn decrement_stock(&mut self, structure: Structure) {
        match structure {
            Structure::Road => self.roads_remaining -= 1,
            Structure::Settlement => self.settlements_remaining -= 1,
            Structure::City => self.cities_remaining -= 1,
        }
    }

    /// Put a piece back (a city upgrade frees its settlement piece).
    pub fn restore_stock(&mut self, structure: Structure) {
        match structure {
            Structure::Road => self.roads_remaining += 1,
            Structure::Settlement => self.settlements_remaining += 1,
            Structure::City => self.cities_remaining += 1,
        }
    }

    /// Add one winning point.
    pub fn increment_winning_points(&mut self) {
        self.winning_points += 1;
    }

    /// Credit resource cards from a payout.
    pub fn credit_resource(&mut self, resource: Resource, amount: u32) {
        self.stock.add(resource, amount);
    }

    /// Lose one uniformly random card to the thief.
    pub fn take_random_resource<R: Rng>(&mut self, rng: &mut R) -> Option<Resource> {
        self.stock.take_random(rng)
    }
}

/// Registry resolving player ids. Ids are dense indices into the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    /// A registry with one fresh player per name, ids in order.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            players: names
                .into_iter()
                .enumerate()
                .map(|(id, name)| Player::new(id as PlayerId, name))
                .collect(),
        }
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
