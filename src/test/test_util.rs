pub use dissimilar::diff as __diff;

use crate::console_interface::{parse_level, render_game_to_string};
use crate::core::{Direction, GameState, TickChange, TickCommands, TickUpdate, resolve_tick};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub game: GameState,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        Self {
            game: parse_level(level),
        }
    }

    pub fn game_to_string(&self) -> String {
        render_game_to_string(&self.game).trim_matches('\n').into()
    }

    /// Apply one tick, panicking if the resolver rejects the state.
    pub fn assert_tick(&mut self, a: Direction, b: Direction) -> TickChange {
        let update = resolve_tick(&self.game, TickCommands { a, b });
        let TickUpdate::NextState(new_state, change) = &update else {
            panic!(
                "Expected NextState update, got {:?}, in map {}",
                update,
                self.game_to_string()
            );
        };

        self.game = new_state.clone();
        *change
    }

    pub fn assert_ticks(&mut self, commands: &[(Direction, Direction)]) {
        for &(a, b) in commands {
            self.assert_tick(a, b);
        }
    }

    pub fn try_tick(&mut self, a: Direction, b: Direction) -> TickUpdate {
        let update = resolve_tick(&self.game, TickCommands { a, b });
        if let TickUpdate::NextState(new_state, _change) = &update {
            self.game = new_state.clone();
        };

        update
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
