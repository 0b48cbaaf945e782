//! Grid construction, registration and collision detection

use auto_driving_sim::simulation::{
    draw_map, Command, Direction, Position, RandomScenario, Session, SimError, SimGrid, VehicleId,
    VehicleStatus,
};

#[test]
fn test_contains_matches_bounds() {
    for width in 1..=4 {
        for height in 1..=4 {
            let grid = SimGrid::new(width, height).unwrap();
            for x in -1..=5 {
                for y in -1..=5 {
                    let expected = 0 <= x && x < width && 0 <= y && y < height;
                    assert_eq!(grid.contains(Position::new(x, y)), expected, "({x},{y}) in {width}x{height}");
                }
            }
        }
    }
}

#[test]
fn test_non_positive_dimensions_rejected() {
    assert_eq!(
        SimGrid::new(0, 5).unwrap_err(),
        SimError::InvalidDimensions { width: 0, height: 5 }
    );
    assert!(matches!(
        SimGrid::new(3, -1),
        Err(SimError::InvalidDimensions { .. })
    ));
    // The core has no upper bound
    assert!(SimGrid::new(1000, 1).is_ok());
}

#[test]
fn test_register_appends_active_car() {
    let mut grid = SimGrid::new(10, 10).unwrap();
    let car = grid
        .register(
            "A",
            Position::new(1, 2),
            Direction::North,
            vec![Command::Forward, Command::TurnLeft],
        )
        .unwrap();

    assert_eq!(car.id, VehicleId(0));
    assert_eq!(car.status, VehicleStatus::Active);
    assert_eq!(car.start_position, Position::new(1, 2));
    assert_eq!(car.pending_command_string(), "FL");

    grid.register_str("B", 0, 0, "W", "").unwrap();
    let names: Vec<&str> = grid.vehicles().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut grid = SimGrid::new(10, 10).unwrap();
    grid.register_str("A", 1, 1, "N", "F").unwrap();

    let err = grid.register_str("A", 5, 5, "S", "LR").unwrap_err();
    assert_eq!(err, SimError::DuplicateName("A".to_string()));
    assert_eq!(grid.vehicles().len(), 1);
}

#[test]
fn test_out_of_bounds_start_rejected() {
    let mut grid = SimGrid::new(10, 10).unwrap();

    assert!(matches!(
        grid.register_str("A", 10, 0, "N", "F"),
        Err(SimError::OutOfBounds { x: 10, y: 0, .. })
    ));
    assert!(matches!(
        grid.register_str("A", 0, -1, "N", "F"),
        Err(SimError::OutOfBounds { .. })
    ));
    assert!(grid.is_empty());
}

#[test]
fn test_malformed_input_rejected() {
    let mut grid = SimGrid::new(10, 10).unwrap();

    assert_eq!(
        grid.register_str("A", 0, 0, "X", "F").unwrap_err(),
        SimError::InvalidDirection("X".to_string())
    );
    assert_eq!(
        grid.register_str("A", 0, 0, "N", "FXF").unwrap_err(),
        SimError::InvalidCommand('X')
    );
    assert_eq!(
        grid.register_str("A", 0, 0, "N", "f").unwrap_err(),
        SimError::InvalidCommand('f')
    );
    assert_eq!(
        grid.register_str("  ", 0, 0, "N", "F").unwrap_err(),
        SimError::InvalidName
    );
    assert!(grid.is_empty());
}

#[test]
fn test_detect_collisions_groups_active_cars() {
    let mut grid = SimGrid::new(5, 5).unwrap();
    grid.register_str("A", 2, 2, "N", "").unwrap();
    grid.register_str("B", 1, 1, "N", "").unwrap();
    grid.register_str("C", 2, 2, "E", "").unwrap();

    let collisions = grid.detect_collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(
        collisions.get(&Position::new(2, 2)),
        Some(&vec![VehicleId(0), VehicleId(2)])
    );
}

#[test]
fn test_detect_collisions_ignores_terminal_cars() {
    let mut grid = SimGrid::new(5, 5).unwrap();
    grid.register_str("A", 0, 0, "E", "F").unwrap();
    grid.register_str("B", 1, 0, "N", "").unwrap();
    grid.run().unwrap();

    assert!(grid
        .vehicles()
        .iter()
        .all(|v| matches!(v.status, VehicleStatus::Collided { .. })));
    assert!(grid.detect_collisions().is_empty());
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(100);
    assert!(matches!(
        session.add_vehicle("A", Position::new(0, 0), Direction::North, vec![]),
        Err(SimError::InvalidInput(_))
    ));
    assert!(matches!(
        session.create_grid(101, 10),
        Err(SimError::InvalidInput(_))
    ));
    assert!(matches!(
        session.create_grid(0, 10),
        Err(SimError::InvalidDimensions { .. })
    ));

    session.create_grid(10, 10).unwrap();
    assert_eq!(session.run().unwrap_err(), SimError::EmptyGrid);

    session
        .add_vehicle("A", Position::new(1, 2), Direction::North, Command::parse_sequence("FFRFFFFRRL").unwrap())
        .unwrap();
    let report = session.run().unwrap();
    assert_eq!(report.outcomes[0].position, Position::new(5, 4));
    assert_eq!(session.runs_completed(), 1);

    session.start_over();
    assert!(session.grid().is_none());
    session.create_grid(3, 3).unwrap();
    assert!(session.grid().unwrap().is_empty());
}

#[test]
fn test_seeded_random_scenario_is_reproducible() {
    let scenario = RandomScenario {
        width: 8,
        height: 6,
        cars: 5,
        max_commands: 12,
        seed: Some(42),
    };
    let mut first = scenario.build().unwrap();
    let mut second = scenario.build().unwrap();

    assert_eq!(first.vehicles().len(), 5);
    for (a, b) in first.vehicles().iter().zip(second.vehicles()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.position, b.position);
        assert_eq!(a.commands(), b.commands());
        assert!(first.contains(a.position));
        assert!(!a.commands().is_empty() && a.commands().len() <= 12);
    }
    assert_eq!(first.vehicles()[0].name, "CAR1");

    assert_eq!(first.run().unwrap(), second.run().unwrap());
}

#[test]
fn test_draw_map_places_cars_north_up() {
    let mut grid = SimGrid::new(3, 3).unwrap();
    grid.register_str("A", 0, 2, "N", "").unwrap();
    grid.register_str("B", 2, 0, "N", "").unwrap();

    let map = draw_map(&grid);
    let rows: Vec<&str> = map.lines().skip(2).collect();
    assert_eq!(rows, ["A..", "...", "..B"]);
}

#[test]
fn test_draw_map_marks_wrecks() {
    let mut grid = SimGrid::new(3, 1).unwrap();
    grid.register_str("A", 0, 0, "E", "F").unwrap();
    grid.register_str("B", 1, 0, "W", "").unwrap();
    grid.run().unwrap();

    let map = draw_map(&grid);
    assert_eq!(map.lines().last(), Some(".X."));
}
