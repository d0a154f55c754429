mod bounds;
mod grid;
mod model_helpers;
mod models;
mod update;

pub use bounds::GridBounds;
pub use grid::Grid;
pub use models::{
    AgentId, AgentState, Direction, GameState, InvalidState, MoveOutcome, Occupant, OutOfBounds,
    TickChange, TickCommands, TickUpdate, Vec2,
};
pub use update::resolve_tick;
