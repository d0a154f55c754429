use crate::core::models::Vec2;

/// Grid extent rooted at (0,0), assumed positive in both axes. Immutable
/// after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub fn new(width: i32, height: i32) -> GridBounds {
        GridBounds { width, height }
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}
