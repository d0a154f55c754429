use serde::{Deserialize, Serialize};

use crate::core::grid::Grid;

/// What a single cell holds. Exactly one occupant per cell, always.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    Floor,
    Obstacle,
    Movable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Stay,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    A,
    B,
}

/// Position is the only field the resolver ever mutates; the requested
/// direction for a tick travels separately as [`TickCommands`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentState {
    pub id: AgentId,
    pub pos: Vec2,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub agents: [AgentState; 2],
}

/// The pair of already-sampled directions for one tick, one per agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickCommands {
    pub a: Direction,
    pub b: Direction,
}

/// How a single agent's request resolved within a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    Idle,
    Moved,
    MovedAndPushed,
    Blocked,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickChange {
    pub a: MoveOutcome,
    pub b: MoveOutcome,
}

#[derive(Debug, Clone)]
pub enum TickUpdate {
    NextState(GameState, TickChange),
    Error(InvalidState),
}

/// A grid accessor was handed coordinates outside `[0,W)x[0,H)`. Movement
/// targets never produce this; the resolver bounds-checks them first and
/// treats an out-of-range target as an ordinary blocked move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("position ({}, {}) outside {width}x{height} grid", .pos.x, .pos.y)]
pub struct OutOfBounds {
    pub pos: Vec2,
    pub width: i32,
    pub height: i32,
}

/// Precondition violation at tick entry. Fatal to the tick, never a
/// gameplay outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidState {
    #[error("displacement ({0}, {1}) is not a legal agent move")]
    IllegalDisplacement(i32, i32),
    #[error("agent {id:?} entered the tick out of bounds at ({}, {})", .pos.x, .pos.y)]
    AgentOutOfBounds { id: AgentId, pos: Vec2 },
    #[error("agent {id:?} entered the tick standing on a blocking cell at ({}, {})", .pos.x, .pos.y)]
    AgentOnBlockingCell { id: AgentId, pos: Vec2 },
    #[error("both agents entered the tick on the same cell ({}, {})", .pos.x, .pos.y)]
    AgentsOverlap { pos: Vec2 },
}
