//! The game board: land catalog, dice numbers, occupancy and the thief.
//!
//! The board is a plain aggregate of maps keyed by [`Coordinate`] and
//! [`EdgeCoord`]. It answers queries and records placements; it never
//! judges whether a placement is legal. Legality lives in [`crate::build`],
//! which keeps a single source of truth for "is this corner or edge taken".

use crate::grid::{Coordinate, EdgeCoord};
use crate::thief::Thief;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Player identifier. Infrastructure stores this key instead of a reference
/// to the player; the [`Players`](crate::player::Players) registry resolves it.
pub type PlayerId = u8;

/// A fungible, countable good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Lumber,
    Wool,
    Grain,
    Ore,
    Brick,
}

impl Resource {
    /// All resource kinds.
    pub const ALL: [Resource; 5] = [
        Resource::Lumber,
        Resource::Wool,
        Resource::Grain,
        Resource::Ore,
        Resource::Brick,
    ];
}

/// The kinds of terrain a field can carry.
///
/// The `resource` catalog is an exhaustive match, so adding a land variant
/// forces a decision about what it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Land {
    Forest,
    Pasture,
    Fields,
    Mountain,
    Hills,
    Water,
    Desert,
}

impl Land {
    /// The resource this land yields, if any.
    pub const fn resource(&self) -> Option<Resource> {
        match self {
            Land::Forest => Some(Resource::Lumber),
            Land::Pasture => Some(Resource::Wool),
            Land::Fields => Some(Resource::Grain),
            Land::Mountain => Some(Resource::Ore),
            Land::Hills => Some(Resource::Brick),
            Land::Water | Land::Desert => None,
        }
    }

    /// Whether this is open water.
    pub const fn is_water(&self) -> bool {
        matches!(self, Land::Water)
    }
}

/// What stands on a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CornerBuilding {
    /// Nothing built.
    #[default]
    Empty,
    /// A settlement: one resource share per adjacent payout.
    Settlement(PlayerId),
    /// A city: two resource shares per adjacent payout.
    City(PlayerId),
}

impl CornerBuilding {
    /// The owner of this building, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            CornerBuilding::Empty => None,
            CornerBuilding::Settlement(p) | CornerBuilding::City(p) => Some(*p),
        }
    }

    /// Resource shares credited per qualifying payout.
    pub fn tier(&self) -> u32 {
        match self {
            CornerBuilding::Empty => 0,
            CornerBuilding::Settlement(_) => 1,
            CornerBuilding::City(_) => 2,
        }
    }

    /// Whether the corner is free.
    pub fn is_empty(&self) -> bool {
        matches!(self, CornerBuilding::Empty)
    }
}

/// What lies on an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EdgeBuilding {
    /// Nothing built.
    #[default]
    Empty,
    /// A road.
    Road(PlayerId),
}

impl EdgeBuilding {
    /// The owner of this road, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            EdgeBuilding::Empty => None,
            EdgeBuilding::Road(p) => Some(*p),
        }
    }

    /// Whether the edge is free.
    pub fn is_empty(&self) -> bool {
        matches!(self, EdgeBuilding::Empty)
    }
}

/// Where the thief starts: the desert field.
pub const INITIAL_THIEF_POSITION: Coordinate = Coordinate::new(7, 11);

/// The eighteen water fields ringing the island.
const WATER_FIELDS: [Coordinate; 18] = [
    Coordinate::new(4, 2),
    Coordinate::new(6, 2),
    Coordinate::new(8, 2),
    Coordinate::new(10, 2),
    Coordinate::new(3, 5),
    Coordinate::new(11, 5),
    Coordinate::new(2, 8),
    Coordinate::new(12, 8),
    Coordinate::new(1, 11),
    Coordinate::new(13, 11),
    Coordinate::new(2, 14),
    Coordinate::new(12, 14),
    Coordinate::new(3, 17),
    Coordinate::new(11, 17),
    Coordinate::new(4, 20),
    Coordinate::new(6, 20),
    Coordinate::new(8, 20),
    Coordinate::new(10, 20),
];

/// The nineteen land fields of the canonical arrangement.
const LAND_FIELDS: [(Coordinate, Land); 19] = [
    (Coordinate::new(5, 5), Land::Forest),
    (Coordinate::new(7, 5), Land::Pasture),
    (Coordinate::new(9, 5), Land::Pasture),
    (Coordinate::new(4, 8), Land::Fields),
    (Coordinate::new(6, 8), Land::Mountain),
    (Coordinate::new(8, 8), Land::Fields),
    (Coordinate::new(10, 8), Land::Forest),
    (Coordinate::new(3, 11), Land::Forest),
    (Coordinate::new(5, 11), Land::Hills),
    (Coordinate::new(7, 11), Land::Desert),
    (Coordinate::new(9, 11), Land::Mountain),
    (Coordinate::new(11, 11), Land::Fields),
    (Coordinate::new(4, 14), Land::Fields),
    (Coordinate::new(6, 14), Land::Mountain),
    (Coordinate::new(8, 14), Land::Forest),
    (Coordinate::new(10, 14), Land::Pasture),
    (Coordinate::new(5, 17), Land::Pasture),
    (Coordinate::new(7, 17), Land::Hills),
    (Coordinate::new(9, 17), Land::Hills),
];

/// Dice numbers for the eighteen producing fields. 7 is never assigned; the
/// desert has no number.
const DICE_NUMBERS: [(Coordinate, u8); 18] = [
    (Coordinate::new(4, 8), 2),
    (Coordinate::new(7, 5), 3),
    (Coordinate::new(8, 14), 3),
    (Coordinate::new(6, 8), 4),
    (Coordinate::new(7, 17), 4),
    (Coordinate::new(3, 11), 5),
    (Coordinate::new(8, 8), 5),
    (Coordinate::new(5, 5), 6),
    (Coordinate::new(9, 11), 6),
    (Coordinate::new(9, 5), 8),
    (Coordinate::new(5, 17), 8),
    (Coordinate::new(5, 11), 9),
    (Coordinate::new(11, 11), 9),
    (Coordinate::new(4, 14), 10),
    (Coordinate::new(10, 8), 10),
    (Coordinate::new(6, 14), 11),
    (Coordinate::new(9, 17), 11),
    (Coordinate::new(10, 14), 12),
];

/// The complete game board for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Land per field, fixed at construction.
    lands: HashMap<Coordinate, Land>,
    /// Dice number per producing field, fixed at construction.
    dice_numbers: HashMap<Coordinate, u8>,
    /// Buildings on corners.
    corners: HashMap<Coordinate, CornerBuilding>,
    /// Roads on edges.
    edges: HashMap<EdgeCoord, EdgeBuilding>,
    /// The blocker.
    thief: Thief,
}

impl Board {
    /// The canonical board: 19 land fields inside an 18-field water ring,
    /// the standard number placement, the thief on the desert.
    pub fn standard() -> Self {
        let mut lands: HashMap<Coordinate, Land> = LAND_FIELDS.into_iter().collect();
        lands.extend(WATER_FIELDS.into_iter().map(|field| (field, Land::Water)));
        Self {
            lands,
            dice_numbers: DICE_NUMBERS.into_iter().collect(),
            corners: HashMap::new(),
            edges: HashMap::new(),
            thief: Thief::new(INITIAL_THIEF_POSITION),
        }
    }

    // ==================== Field Queries ====================

    /// The land on a field, or `None` off the board.
    pub fn land(&self, field: Coordinate) -> Option<Land> {
        self.lands.get(&field).copied()
    }

    /// The dice number assigned to a field, if it has one.
    pub fn dice_number(&self, field: Coordinate) -> Option<u8> {
        self.dice_numbers.get(&field).copied()
    }

    /// The resource a field yields, via the land catalog. `None` for water,
    /// the desert, and coordinates off the board.
    pub fn resource_of(&self, field: Coordinate) -> Option<Resource> {
        self.land(field).and_then(|land| land.resource())
    }

    /// All fields whose assigned number equals `value`, in coordinate order.
    /// Empty for 7 (never assigned) and for values outside 2..=12.
    pub fn fields_for_dice_value(&self, value: u8) -> Vec<Coordinate> {
        let mut fields: Vec<Coordinate> = self
            .dice_numbers
            .iter()
            .filter(|(_, &number)| number == value)
            .map(|(&field, _)| field)
            .collect();
        fields.sort_unstable();
        fields
    }

    /// Whether the coordinate is a field of this board.
    pub fn has_field(&self, field: Coordinate) -> bool {
        self.lands.contains_key(&field)
    }

    /// All fields of the board with their land, in coordinate order.
    pub fn fields(&self) -> Vec<(Coordinate, Land)> {
        let mut fields: Vec<(Coordinate, Land)> =
            self.lands.iter().map(|(&c, &l)| (c, l)).collect();
        fields.sort_unstable_by_key(|(c, _)| *c);
        fields
    }

    // ==================== Corner & Edge Queries ====================

    /// Whether the coordinate is a corner of this board, i.e. touches at
    /// least one field (the water ring contributes corners too).
    pub fn has_corner(&self, corner: Coordinate) -> bool {
        corner.is_corner()
            && corner
                .corner_fields()
                .iter()
                .any(|field| self.has_field(*field))
    }

    /// Whether the edge joins two neighboring corners of this board.
    pub fn has_edge(&self, edge: EdgeCoord) -> bool {
        edge.connects_neighbors() && edge.endpoints().iter().all(|c| self.has_corner(*c))
    }

    /// The building on a corner. Off-board corners read as empty.
    pub fn corner(&self, corner: Coordinate) -> CornerBuilding {
        self.corners.get(&corner).copied().unwrap_or_default()
    }

    /// The road on an edge. Off-board edges read as empty.
    pub fn edge(&self, edge: EdgeCoord) -> EdgeBuilding {
        self.edges.get(&edge).copied().unwrap_or_default()
    }

    /// The fields of this board touching a corner.
    pub fn fields_touching_corner(&self, corner: Coordinate) -> Vec<Coordinate> {
        corner
            .corner_fields()
            .into_iter()
            .filter(|field| self.has_field(*field))
            .collect()
    }

    /// The lands touching a corner. Empty off the board.
    pub fn lands_touching_corner(&self, corner: Coordinate) -> Vec<Land> {
        self.fields_touching_corner(corner)
            .into_iter()
            .filter_map(|field| self.land(field))
            .collect()
    }

    /// Whether every field of this board touching the corner is water.
    /// Vacuously true for corners that touch no field at all.
    pub fn is_surrounded_only_by_water(&self, corner: Coordinate) -> bool {
        self.lands_touching_corner(corner)
            .iter()
            .all(|land| land.is_water())
    }

    /// Whether any corner one edge away is built on.
    pub fn has_occupied_neighbor(&self, corner: Coordinate) -> bool {
        corner
            .corner_neighbors()
            .iter()
            .any(|neighbor| self.corner(*neighbor).owner().is_some())
    }

    /// Whether any edge touching the corner carries a road of `player`.
    pub fn is_adjacent_to_own_road(&self, corner: Coordinate, player: PlayerId) -> bool {
        corner
            .corner_edges()
            .iter()
            .any(|edge| self.edge(*edge).owner() == Some(player))
    }

    /// The occupied corners around a field, in perimeter order.
    pub fn occupied_corners_of_field(&self, field: Coordinate) -> Vec<Coordinate> {
        field
            .field_corners()
            .into_iter()
            .filter(|corner| self.corner(*corner).owner().is_some())
            .collect()
    }

    // ==================== Occupancy Bookkeeping ====================
    //
    // The mutators below record placements without any legality check;
    // callers validate first (see `crate::build`).

    /// Record a settlement on a corner.
    pub fn place_settlement(&mut self, corner: Coordinate, player: PlayerId) {
        self.corners
            .insert(corner, CornerBuilding::Settlement(player));
    }

    /// Record the upgrade of a corner to a city.
    pub fn place_city(&mut self, corner: Coordinate, player: PlayerId) {
        self.corners.insert(corner, CornerBuilding::City(player));
    }

    /// Record a road on an edge.
    pub fn place_road(&mut self, edge: EdgeCoord, player: PlayerId) {
        self.edges.insert(edge, EdgeBuilding::Road(player));
    }

    // ==================== Thief ====================

    /// The thief on this board.
    pub fn thief(&self) -> &Thief {
        &self.thief
    }

    /// Relocate the thief. Unconditional; any game-flow policy (such as
    /// "must move to a different field") is the trigger layer's business.
    pub fn move_thief(&mut self, field: Coordinate) {
        debug!(
            "thief moves from {:?} to {:?}",
            self.thief.position(),
            field
        );
        self.thief.set_position(field);
    }

    // ==================== View ====================

    /// A flattened, array-based projection for display collaborators.
    pub fn view(&self) -> BoardView {
        let mut corners: Vec<CornerView> = self
            .corners
            .iter()
            .filter(|(_, building)| !building.is_empty())
            .map(|(coordinate, building)| CornerView {
                x: coordinate.x,
                y: coordinate.y,
                building: *building,
            })
            .collect();
        corners.sort_unstable_by_key(|c| (c.x, c.y));

        let mut roads: Vec<RoadView> = self
            .edges
            .iter()
            .filter_map(|(edge, building)| {
                building.owner().map(|owner| {
                    let [a, b] = edge.endpoints();
                    RoadView {
                        ax: a.x,
                        ay: a.y,
                        bx: b.x,
                        by: b.y,
                        owner,
                    }
                })
            })
            .collect();
        roads.sort_unstable_by_key(|r| (r.ax, r.ay, r.bx, r.by));

        BoardView {
            fields: self
                .fields()
                .into_iter()
                .map(|(coordinate, land)| FieldView {
                    x: coordinate.x,
                    y: coordinate.y,
                    land,
                    dice_number: self.dice_number(coordinate),
                })
                .collect(),
            corners,
            roads,
            thief_x: self.thief.position().x,
            thief_y: self.thief.position().y,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// JSON-friendly board projection: flat arrays, occupied sites only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardView {
    pub fields: Vec<FieldView>,
    pub corners: Vec<CornerView>,
    pub roads: Vec<RoadView>,
    pub thief_x: i32,
    pub thief_y: i32,
}

impl BoardView {
    /// Serialize the view for a display collaborator.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldView {
    pub x: i32,
    pub y: i32,
    pub land: Land,
    pub dice_number: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerView {
    pub x: i32,
    pub y: i32,
    pub building: CornerBuilding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadView {
    pub ax: i32,
    pub ay: i32,
    pub bx: i32,
    pub by: i32,
    pub owner: PlayerId,
}
