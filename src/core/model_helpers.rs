use crate::core::models::{
    AgentId, AgentState, Direction, GameState, InvalidState, TickCommands, Vec2,
};
use crate::core::{Grid, Occupant};

impl Occupant {
    pub fn is_blocking(&self) -> bool {
        match self {
            Occupant::Floor => false,
            Occupant::Obstacle | Occupant::Movable => true,
        }
    }

    pub fn is_pushable(&self) -> bool {
        *self == Occupant::Movable
    }
}

impl Vec2 {
    pub fn step(&self, dir: Direction) -> Vec2 {
        *self + dir.offset()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Direction {
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
            Direction::Stay => Vec2 { x: 0, y: 0 },
        }
    }

    /// Boundary for raw `(dx, dy)` input. Anything outside the
    /// four-directional-or-idle set is a caller bug, not a gameplay outcome.
    pub fn from_displacement(dx: i32, dy: i32) -> Result<Direction, InvalidState> {
        match (dx, dy) {
            (0, 0) => Ok(Direction::Stay),
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            _ => Err(InvalidState::IllegalDisplacement(dx, dy)),
        }
    }

    pub fn all_moves() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

impl AgentId {
    pub fn other(&self) -> AgentId {
        match self {
            AgentId::A => AgentId::B,
            AgentId::B => AgentId::A,
        }
    }
}

impl GameState {
    pub fn new(grid: Grid, pos_a: Vec2, pos_b: Vec2) -> GameState {
        GameState {
            grid,
            agents: [
                AgentState {
                    id: AgentId::A,
                    pos: pos_a,
                },
                AgentState {
                    id: AgentId::B,
                    pos: pos_b,
                },
            ],
        }
    }

    pub fn agent(&self, id: AgentId) -> &AgentState {
        match id {
            AgentId::A => &self.agents[0],
            AgentId::B => &self.agents[1],
        }
    }

    pub fn agent_pos(&self, id: AgentId) -> Vec2 {
        self.agent(id).pos
    }

    pub fn set_agent_pos(&mut self, id: AgentId, pos: Vec2) {
        match id {
            AgentId::A => self.agents[0].pos = pos,
            AgentId::B => self.agents[1].pos = pos,
        }
    }

    /// Tick-entry preconditions: both agents in bounds, on walkable cells,
    /// and on distinct cells.
    pub fn validate(&self) -> Result<(), InvalidState> {
        for agent in &self.agents {
            if !self.grid.contains(&agent.pos) {
                return Err(InvalidState::AgentOutOfBounds {
                    id: agent.id,
                    pos: agent.pos,
                });
            }
            if self.grid[&agent.pos].is_blocking() {
                return Err(InvalidState::AgentOnBlockingCell {
                    id: agent.id,
                    pos: agent.pos,
                });
            }
        }
        if self.agents[0].pos == self.agents[1].pos {
            return Err(InvalidState::AgentsOverlap {
                pos: self.agents[0].pos,
            });
        }
        Ok(())
    }
}

impl TickCommands {
    pub fn idle() -> TickCommands {
        TickCommands {
            a: Direction::Stay,
            b: Direction::Stay,
        }
    }

    pub fn get(&self, id: AgentId) -> Direction {
        match id {
            AgentId::A => self.a,
            AgentId::B => self.b,
        }
    }

    pub fn set(&mut self, id: AgentId, dir: Direction) {
        match id {
            AgentId::A => self.a = dir,
            AgentId::B => self.b = dir,
        }
    }
}
