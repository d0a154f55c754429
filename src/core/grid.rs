use crate::core::bounds::GridBounds;
use crate::core::models::{Occupant, OutOfBounds, Vec2};

/// Flat fixed-size occupant store, addressed `y * width + x`. Pushes mutate
/// cells in place; nothing is allocated per move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    bounds: GridBounds,
    cells: Vec<Occupant>,
}

impl Grid {
    pub fn new(width: i32, height: i32, fill: Occupant) -> Grid {
        Grid::from_fn(width, height, |_| fill)
    }

    /// The initial layout comes from the caller; the grid has no opinion on
    /// what a level looks like.
    pub fn from_fn<F>(width: i32, height: i32, mut layout: F) -> Grid
    where
        F: FnMut(Vec2) -> Occupant,
    {
        let bounds = GridBounds::new(width, height);
        let mut cells = Vec::with_capacity(bounds.area() as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(layout(Vec2 { x, y }));
            }
        }
        Grid { bounds, cells }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn occupant_at(&self, pos: &Vec2) -> Result<Occupant, OutOfBounds> {
        if !self.bounds.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        Ok(self[pos])
    }

    pub fn set_occupant(&mut self, pos: &Vec2, occupant: Occupant) -> Result<(), OutOfBounds> {
        if !self.bounds.contains(pos) {
            return Err(self.out_of_bounds(pos));
        }
        self[pos] = occupant;
        Ok(())
    }

    pub fn movable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_pushable()).count()
    }

    fn out_of_bounds(&self, pos: &Vec2) -> OutOfBounds {
        OutOfBounds {
            pos: *pos,
            width: self.bounds.width,
            height: self.bounds.height,
        }
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Occupant;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.y * self.bounds.width + index.x) as usize]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.y * self.bounds.width + index.x) as usize]
    }
}
