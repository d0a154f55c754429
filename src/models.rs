use crate::core::{GameState, TickChange};

pub struct GameRenderState {
    pub game: GameState,
    pub error: Option<String>,
    pub last_change: Option<TickChange>,
}
