use log::{debug, warn};

use crate::core::models::{
    AgentId, Direction, GameState, MoveOutcome, Occupant, TickChange, TickCommands, TickUpdate,
    Vec2,
};

/// One tick of simultaneous movement for both agents. Pure transition: the
/// input state is untouched, the returned state is the next tick's input.
///
/// Conflicts are arbitrated before any mutation; after that, agent A always
/// resolves strictly before agent B, and B sees A's updated position. The
/// ordering is part of the observable contract, it decides who wins
/// contested pushes.
pub fn resolve_tick(state: &GameState, commands: TickCommands) -> TickUpdate {
    if let Err(err) = state.validate() {
        warn!("tick rejected: {err}");
        return TickUpdate::Error(err);
    }

    let pos_a = state.agent_pos(AgentId::A);
    let pos_b = state.agent_pos(AgentId::B);

    if let Some(change) = cancelled_by_conflict(pos_a, commands.a, pos_b, commands.b) {
        return TickUpdate::NextState(state.clone(), change);
    }

    let mut next = state.clone();
    let a = resolve_agent(&mut next, AgentId::A, commands.a);
    let b = resolve_agent(&mut next, AgentId::B, commands.b);

    TickUpdate::NextState(next, TickChange { a, b })
}

/// Global pre-check on pre-tick positions. Either conflict cancels both
/// moves outright, taking precedence over every per-agent rule.
fn cancelled_by_conflict(
    pos_a: Vec2,
    dir_a: Direction,
    pos_b: Vec2,
    dir_b: Direction,
) -> Option<TickChange> {
    if dir_a == Direction::Stay || dir_b == Direction::Stay {
        return None;
    }

    let target_a = pos_a.step(dir_a);
    let target_b = pos_b.step(dir_b);

    if target_a == target_b {
        debug!(
            "both agents contest ({}, {}), tick cancelled",
            target_a.x, target_a.y
        );
        return Some(TickChange {
            a: MoveOutcome::Cancelled,
            b: MoveOutcome::Cancelled,
        });
    }

    if target_a == pos_b && target_b == pos_a {
        debug!("agents would swap cells, tick cancelled");
        return Some(TickChange {
            a: MoveOutcome::Cancelled,
            b: MoveOutcome::Cancelled,
        });
    }

    None
}

/// Resolve one agent's request against the current state, which for agent B
/// already includes whatever agent A did this tick. Blocked moves and failed
/// pushes leave everything as-is; they are outcomes, not errors.
fn resolve_agent(state: &mut GameState, id: AgentId, dir: Direction) -> MoveOutcome {
    if dir == Direction::Stay {
        return MoveOutcome::Idle;
    }

    let pos = state.agent_pos(id);
    let other = state.agent_pos(id.other());
    let target = pos.step(dir);

    if !state.grid.contains(&target) {
        return MoveOutcome::Blocked;
    }
    if target == other {
        return MoveOutcome::Blocked;
    }

    match state.grid[&target] {
        Occupant::Floor => {
            state.set_agent_pos(id, target);
            MoveOutcome::Moved
        }
        Occupant::Obstacle => MoveOutcome::Blocked,
        Occupant::Movable => {
            let box_target = target.step(dir);
            if !state.grid.contains(&box_target) {
                return MoveOutcome::Blocked;
            }
            if box_target == pos || box_target == other {
                return MoveOutcome::Blocked;
            }
            if state.grid[&box_target].is_blocking() {
                // No chain-pushing: one box per agent per tick.
                return MoveOutcome::Blocked;
            }

            // Relocate the box, lay floor where it stood, step in.
            state.grid[&box_target] = Occupant::Movable;
            state.grid[&target] = Occupant::Floor;
            state.set_agent_pos(id, target);
            MoveOutcome::MovedAndPushed
        }
    }
}
