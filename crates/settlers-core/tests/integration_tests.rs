//! Scenario tests for the settlers core.
//!
//! These drive the engine through the documented three-player founding
//! setup and check the exact payout totals, plus the atomicity and
//! blocking guarantees a game-flow layer relies on.

use pretty_assertions::assert_eq;
use settlers_core::*;

/// The documented three-player founding setup: two settlements and two
/// roads per player, placed for free during the founding phase.
fn three_player_founding() -> (Board, Players) {
    let mut board = Board::standard();
    let mut players = Players::new(["Anna", "Ben", "Cleo"].map(String::from));

    let placements: [(PlayerId, Coordinate, Coordinate); 6] = [
        (0, Coordinate::new(5, 7), Coordinate::new(6, 6)),
        (0, Coordinate::new(10, 16), Coordinate::new(9, 15)),
        (1, Coordinate::new(11, 13), Coordinate::new(12, 12)),
        (1, Coordinate::new(8, 4), Coordinate::new(8, 6)),
        (2, Coordinate::new(2, 12), Coordinate::new(2, 10)),
        (2, Coordinate::new(7, 19), Coordinate::new(8, 18)),
    ];

    for (id, corner, road_end) in placements {
        let player = players.get_mut(id).unwrap();
        build_initial_settlement(&mut board, player, corner).unwrap();
        build_initial_road(&mut board, player, EdgeCoord::between(corner, road_end)).unwrap();
    }

    (board, players)
}

#[test]
fn test_founding_setup_places_two_settlements_and_two_roads_each() {
    let (_, players) = three_player_founding();
    for player in players.iter() {
        assert_eq!(player.remaining_stock(Structure::Settlement), 3);
        assert_eq!(player.remaining_stock(Structure::Road), 13);
        assert_eq!(player.winning_points(), 2);
        assert!(player.stock().is_empty());
    }
}

#[test]
fn test_one_round_of_rolls_pays_the_documented_totals() {
    let (board, mut players) = three_player_founding();

    for roll in [2, 3, 4, 5, 6, 8, 9, 10, 11, 12] {
        distribute(&board, &mut players, roll);
    }

    assert_eq!(
        players.get(0).unwrap().stock(),
        &ResourceStock::with_amounts(1, 1, 1, 1, 1)
    );
    assert_eq!(
        players.get(1).unwrap().stock(),
        &ResourceStock::with_amounts(0, 3, 1, 0, 0)
    );
    assert_eq!(
        players.get(2).unwrap().stock(),
        &ResourceStock::with_amounts(1, 0, 0, 0, 1)
    );
}

#[test]
fn test_second_settlement_on_the_same_field_doubles_the_payout() {
    let (mut board, mut players) = three_player_founding();

    // (7, 7) touches the mountain (6, 8) at 4, as does Anna's settlement
    // at (5, 7).
    build_initial_settlement(&mut board, players.get_mut(0).unwrap(), Coordinate::new(7, 7))
        .unwrap();

    for _ in 0..3 {
        distribute(&board, &mut players, 4);
    }

    assert_eq!(players.get(0).unwrap().stock().ore, 6);
    assert_eq!(players.get(2).unwrap().stock().brick, 3);
    assert_eq!(players.get(1).unwrap().stock().total(), 0);
}

#[test]
fn test_city_earns_double_where_the_settlement_earned_single() {
    let (mut board, mut players) = three_player_founding();

    let anna = players.get_mut(0).unwrap();
    anna.credit_resource(Resource::Ore, 3);
    anna.credit_resource(Resource::Grain, 2);
    build_city(&mut board, anna, Coordinate::new(5, 7)).unwrap();
    assert!(anna.stock().is_empty());
    assert_eq!(anna.winning_points(), 3);

    // The grain field (4, 8) pays on a 2: two shares for the city.
    distribute(&board, &mut players, 2);
    assert_eq!(players.get(0).unwrap().stock().grain, 2);
}

#[test]
fn test_thief_on_a_field_suspends_its_payout() {
    let (mut board, mut players) = three_player_founding();

    // Park the thief on the mountain (6, 8); the other field numbered 4
    // still pays Cleo.
    board.move_thief(Coordinate::new(6, 8));
    distribute(&board, &mut players, 4);

    assert_eq!(players.get(0).unwrap().stock().total(), 0);
    assert_eq!(players.get(2).unwrap().stock().brick, 1);

    // Back on the desert, the mountain pays again.
    board.move_thief(INITIAL_THIEF_POSITION);
    distribute(&board, &mut players, 4);
    assert_eq!(players.get(0).unwrap().stock().ore, 1);
}

#[test]
fn test_a_seven_never_changes_any_stock() {
    let (board, mut players) = three_player_founding();
    let before: Vec<ResourceStock> = players.iter().map(|p| p.stock().clone()).collect();

    assert!(distribute(&board, &mut players, 7).is_empty());

    let after: Vec<ResourceStock> = players.iter().map(|p| p.stock().clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_building_next_to_any_settlement_fails_without_side_effects() {
    let (mut board, mut players) = three_player_founding();
    let board_before = board.clone();

    // (6, 6) neighbors Anna's settlement at (5, 7); even Anna herself may
    // not build there, founding phase or not.
    let anna = players.get_mut(0).unwrap();
    let anna_before = anna.clone();
    assert_eq!(
        build_initial_settlement(&mut board, anna, Coordinate::new(6, 6)),
        Err(BuildError::NeighborOccupied)
    );
    assert_eq!(*anna, anna_before);

    let ben = players.get_mut(1).unwrap();
    let ben_before = ben.clone();
    assert_eq!(
        build_initial_settlement(&mut board, ben, Coordinate::new(4, 6)),
        Err(BuildError::NeighborOccupied)
    );
    assert_eq!(*ben, ben_before);

    assert_eq!(board, board_before);
}

#[test]
fn test_building_in_open_water_fails_without_side_effects() {
    let (mut board, mut players) = three_player_founding();
    let board_before = board.clone();

    let anna = players.get_mut(0).unwrap();
    let anna_before = anna.clone();
    assert_eq!(
        build_initial_settlement(&mut board, anna, Coordinate::new(5, 1)),
        Err(BuildError::SurroundedByWater)
    );

    assert_eq!(*anna, anna_before);
    assert_eq!(board, board_before);
}

#[test]
fn test_failed_standard_build_is_atomic_end_to_end() {
    let (mut board, mut players) = three_player_founding();

    // Give Anna just enough for a road, then spend it: the follow-up
    // settlement attempt fails on liquidity and must change nothing.
    let anna = players.get_mut(0).unwrap();
    anna.credit_resource(Resource::Lumber, 1);
    anna.credit_resource(Resource::Brick, 1);
    build_road(
        &mut board,
        anna,
        EdgeCoord::between(Coordinate::new(6, 6), Coordinate::new(6, 4)),
    )
    .unwrap();

    let board_before = board.clone();
    let anna_before = anna.clone();
    assert_eq!(
        build_settlement(&mut board, anna, Coordinate::new(6, 4)),
        Err(BuildError::InsufficientResources)
    );
    assert_eq!(board, board_before);
    assert_eq!(*anna, anna_before);
}

#[test]
fn test_no_settlement_ever_succeeds_next_to_an_existing_one() {
    let (mut board, mut players) = three_player_founding();

    // Every neighbor of every occupied corner stays unbuildable for
    // everyone, founding rules or standard rules alike.
    let occupied: Vec<Coordinate> = [
        Coordinate::new(5, 7),
        Coordinate::new(10, 16),
        Coordinate::new(11, 13),
        Coordinate::new(8, 4),
        Coordinate::new(2, 12),
        Coordinate::new(7, 19),
    ]
    .into_iter()
    .collect();

    for corner in occupied {
        for neighbor in corner.corner_neighbors() {
            if !board.has_corner(neighbor) {
                continue;
            }
            let result =
                build_initial_settlement(&mut board, players.get_mut(1).unwrap(), neighbor);
            assert!(
                matches!(
                    result,
                    Err(BuildError::NeighborOccupied) | Err(BuildError::CornerOccupied)
                ),
                "{neighbor:?} should be rejected, got {result:?}"
            );
        }
    }
}

#[test]
fn test_steal_target_lookup_respects_stocks_and_seeds() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let (board, mut players) = three_player_founding();
    let mountain = Coordinate::new(6, 8);
    let mut rng = StdRng::seed_from_u64(99);

    // Nobody has cards yet.
    assert!(!has_neighbor_with_resources(&board, &players, mountain, 1));
    assert_eq!(steal_target(&board, &players, mountain, 1, &mut rng), None);

    // Once Anna holds a card, her settlement at (5, 7) qualifies.
    players
        .get_mut(0)
        .unwrap()
        .credit_resource(Resource::Ore, 1);
    assert!(has_neighbor_with_resources(&board, &players, mountain, 1));
    assert_eq!(
        steal_target(&board, &players, mountain, 1, &mut rng),
        Some(0)
    );

    // The stolen card comes out of the victim's stock.
    let stolen = players
        .get_mut(0)
        .unwrap()
        .take_random_resource(&mut rng);
    assert_eq!(stolen, Some(Resource::Ore));
    assert!(players.get(0).unwrap().stock().is_empty());
}
