/// Square board coordinate helper: `count` cells per side, 0-indexed.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    count: i32,
}

impl Grid {
    pub fn new(count: i32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn cell_count(&self) -> usize {
        (self.count * self.count) as usize
    }

    pub fn center(&self) -> (i32, i32) {
        (self.count / 2, self.count / 2)
    }

    pub fn in_bounds(&self, cell: (i32, i32)) -> bool {
        cell.0 >= 0 && cell.0 < self.count && cell.1 >= 0 && cell.1 < self.count
    }

    pub fn from_index(&self, idx: usize) -> (i32, i32) {
        let w = self.count as usize;
        ((idx % w) as i32, (idx / w) as i32)
    }
}
