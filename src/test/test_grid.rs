mod test {
    use crate::core::*;

    fn empty_room(width: i32, height: i32) -> Grid {
        Grid::from_fn(width, height, |pos| {
            if pos.x == 0 || pos.y == 0 || pos.x == width - 1 || pos.y == height - 1 {
                Occupant::Obstacle
            } else {
                Occupant::Floor
            }
        })
    }

    #[test]
    fn occupant_at_rejects_coordinates_outside_grid() {
        let grid = empty_room(4, 3);

        let err = grid
            .occupant_at(&Vec2 { x: 4, y: 0 })
            .expect_err("x == width is outside the grid");
        assert_eq!(
            err,
            OutOfBounds {
                pos: Vec2 { x: 4, y: 0 },
                width: 4,
                height: 3,
            }
        );

        assert!(grid.occupant_at(&Vec2 { x: -1, y: 1 }).is_err());
        assert!(grid.occupant_at(&Vec2 { x: 0, y: 3 }).is_err());
        assert!(grid.occupant_at(&Vec2 { x: 1, y: -1 }).is_err());
    }

    #[test]
    fn set_occupant_rejects_coordinates_outside_grid() {
        let mut grid = empty_room(4, 3);

        let result = grid.set_occupant(&Vec2 { x: 0, y: 5 }, Occupant::Movable);
        assert!(result.is_err());

        grid.set_occupant(&Vec2 { x: 1, y: 1 }, Occupant::Movable)
            .expect("in-bounds write");
        assert_eq!(grid.occupant_at(&Vec2 { x: 1, y: 1 }), Ok(Occupant::Movable));
        assert_eq!(grid.movable_count(), 1);
    }

    #[test]
    fn from_fn_lays_out_what_the_closure_says() {
        let grid = empty_room(5, 4);

        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.occupant_at(&Vec2 { x: 0, y: 0 }), Ok(Occupant::Obstacle));
        assert_eq!(grid.occupant_at(&Vec2 { x: 2, y: 1 }), Ok(Occupant::Floor));
        assert_eq!(grid.occupant_at(&Vec2 { x: 4, y: 3 }), Ok(Occupant::Obstacle));
        assert_eq!(grid.movable_count(), 0);
    }

    #[test]
    fn push_relocates_movable_and_lays_floor_behind() {
        let mut grid = empty_room(10, 10);
        grid.set_occupant(&Vec2 { x: 6, y: 5 }, Occupant::Movable)
            .unwrap();
        let state = GameState::new(grid, Vec2 { x: 5, y: 5 }, Vec2 { x: 1, y: 1 });

        let update = resolve_tick(
            &state,
            TickCommands {
                a: Direction::Right,
                b: Direction::Stay,
            },
        );
        let TickUpdate::NextState(next, change) = update else {
            panic!("expected NextState, got {:?}", update);
        };

        assert_eq!(change.a, MoveOutcome::MovedAndPushed);
        assert_eq!(next.agent_pos(AgentId::A), Vec2 { x: 6, y: 5 });
        assert_eq!(next.grid.occupant_at(&Vec2 { x: 6, y: 5 }), Ok(Occupant::Floor));
        assert_eq!(
            next.grid.occupant_at(&Vec2 { x: 7, y: 5 }),
            Ok(Occupant::Movable)
        );
        assert_eq!(next.grid.movable_count(), 1);
    }

    #[test]
    fn overlapping_agents_are_rejected_at_tick_entry() {
        let state = GameState::new(empty_room(6, 6), Vec2 { x: 2, y: 2 }, Vec2 { x: 2, y: 2 });

        let update = resolve_tick(&state, TickCommands::idle());
        let TickUpdate::Error(err) = update else {
            panic!("expected Error, got {:?}", update);
        };
        assert_eq!(
            err,
            InvalidState::AgentsOverlap {
                pos: Vec2 { x: 2, y: 2 }
            }
        );
    }

    #[test]
    fn agent_on_blocking_cell_is_rejected_at_tick_entry() {
        let state = GameState::new(empty_room(6, 6), Vec2 { x: 0, y: 0 }, Vec2 { x: 3, y: 3 });

        let update = resolve_tick(&state, TickCommands::idle());
        let TickUpdate::Error(err) = update else {
            panic!("expected Error, got {:?}", update);
        };
        assert_eq!(
            err,
            InvalidState::AgentOnBlockingCell {
                id: AgentId::A,
                pos: Vec2 { x: 0, y: 0 },
            }
        );
    }

    #[test]
    fn agent_outside_grid_is_rejected_at_tick_entry() {
        let state = GameState::new(empty_room(6, 6), Vec2 { x: 2, y: 2 }, Vec2 { x: 9, y: 2 });

        let update = resolve_tick(&state, TickCommands::idle());
        let TickUpdate::Error(err) = update else {
            panic!("expected Error, got {:?}", update);
        };
        assert_eq!(
            err,
            InvalidState::AgentOutOfBounds {
                id: AgentId::B,
                pos: Vec2 { x: 9, y: 2 },
            }
        );
    }

    #[test]
    fn displacements_map_to_directions_or_get_rejected() {
        assert_eq!(Direction::from_displacement(0, 0), Ok(Direction::Stay));
        assert_eq!(Direction::from_displacement(0, -1), Ok(Direction::Up));
        assert_eq!(Direction::from_displacement(0, 1), Ok(Direction::Down));
        assert_eq!(Direction::from_displacement(-1, 0), Ok(Direction::Left));
        assert_eq!(Direction::from_displacement(1, 0), Ok(Direction::Right));

        assert_eq!(
            Direction::from_displacement(1, 1),
            Err(InvalidState::IllegalDisplacement(1, 1))
        );
        assert_eq!(
            Direction::from_displacement(-2, 0),
            Err(InvalidState::IllegalDisplacement(-2, 0))
        );
    }
}
