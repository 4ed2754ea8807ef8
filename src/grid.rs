use crate::Cell;

/// One of the four sentinels of a bordered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Sentinel cells standing in for everything outside a bordered grid.
#[derive(Debug, Default)]
pub struct Border {
    pub top: Option<Cell>,
    pub right: Option<Cell>,
    pub bottom: Option<Cell>,
    pub left: Option<Cell>,
}

impl Border {
    pub fn get(&self, side: Side) -> Option<&Cell> {
        match side {
            Side::Top => self.top.as_ref(),
            Side::Right => self.right.as_ref(),
            Side::Bottom => self.bottom.as_ref(),
            Side::Left => self.left.as_ref(),
        }
    }

    pub fn set(&mut self, side: Side, cell: Option<Cell>) {
        let slot = match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        };
        *slot = cell;
    }
}

/// How coordinates outside the grid are resolved.
#[derive(Debug)]
pub enum EdgePolicy {
    /// Opposite edges are stitched together.
    Wrap,
    /// Anything outside resolves to a sentinel.
    Border(Border),
}

impl EdgePolicy {
    pub fn is_wrap(&self) -> bool {
        matches!(self, Self::Wrap)
    }
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self::Border(Border::default())
    }
}

/// Where a coordinate lands under the edge policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Row-major index into the grid.
    Inside(usize),
    Edge(Side),
    /// Wrapped grid without any positions.
    Nowhere,
}

/// Fixed-size `width x height` arena of optional cells.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Cell>>,
    edge: EdgePolicy,
}

impl Grid {
    pub fn blank(width: usize, height: usize, edge: EdgePolicy) -> Self {
        Self {
            width,
            height,
            cells: (0..width * height).map(|_| None).collect(),
            edge,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn edge_policy(&self) -> &EdgePolicy {
        &self.edge
    }

    pub fn edge_policy_mut(&mut self) -> &mut EdgePolicy {
        &mut self.edge
    }

    /// Coordinates of a row-major index.
    pub fn coords(&self, idx: usize) -> (i64, i64) {
        ((idx % self.width) as i64, (idx / self.width) as i64)
    }

    pub fn locate(&self, x: i64, y: i64) -> Location {
        let (w, h) = (self.width as i64, self.height as i64);
        match &self.edge {
            EdgePolicy::Wrap => {
                if w == 0 || h == 0 {
                    return Location::Nowhere;
                }
                let (x, y) = (x.rem_euclid(w), y.rem_euclid(h));
                Location::Inside((x + y * w) as usize)
            }
            EdgePolicy::Border(_) => {
                if x < 0 {
                    Location::Edge(Side::Left)
                } else if x >= w {
                    Location::Edge(Side::Right)
                } else if y < 0 {
                    Location::Edge(Side::Bottom)
                } else if y >= h {
                    Location::Edge(Side::Top)
                } else {
                    Location::Inside((x + y * w) as usize)
                }
            }
        }
    }

    pub fn resolve(&self, x: i64, y: i64) -> Option<&Cell> {
        match self.locate(x, y) {
            Location::Inside(idx) => self.cells[idx].as_ref(),
            Location::Edge(side) => match &self.edge {
                EdgePolicy::Border(border) => border.get(side),
                EdgePolicy::Wrap => None,
            },
            Location::Nowhere => None,
        }
    }

    /// Mutable access to grid positions only; sentinels resolve to `None`.
    pub fn resolve_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        match self.locate(x, y) {
            Location::Inside(idx) => self.cells[idx].as_mut(),
            _ => None,
        }
    }

    pub fn get(&self, idx: usize) -> Option<&Cell> {
        self.cells.get(idx).and_then(Option::as_ref)
    }

    pub(crate) fn take(&mut self, idx: usize) -> Option<Cell> {
        self.cells[idx].take()
    }

    pub(crate) fn put(&mut self, idx: usize, cell: Option<Cell>) {
        self.cells[idx] = cell;
    }

    pub(crate) fn replace_all(&mut self, cells: Vec<Option<Cell>>) {
        debug_assert_eq!(cells.len(), self.cells.len());
        self.cells = cells;
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Populated cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellBehavior, InitContext};

    #[derive(Clone)]
    struct Marker(u32);

    impl CellBehavior for Marker {
        fn initialize(&mut self, _ctx: &mut InitContext<'_>) {}
    }

    fn marked(w: usize, h: usize, edge: EdgePolicy) -> Grid {
        let mut grid = Grid::blank(w, h, edge);
        for i in 0..w * h {
            grid.put(i, Some(Cell::new("marker", Marker(i as u32))));
        }
        grid
    }

    fn mark(cell: Option<&Cell>) -> Option<u32> {
        cell.and_then(|c| c.downcast_ref::<Marker>()).map(|m| m.0)
    }

    #[test]
    fn test_wrap_is_periodic() {
        let grid = marked(5, 3, EdgePolicy::Wrap);
        for y in -4..8 {
            for x in -7..7 {
                for k in [-3, -1, 1, 2] {
                    assert_eq!(
                        mark(grid.resolve(x, y)),
                        mark(grid.resolve(x + k * 5, y + k * 3))
                    );
                }
            }
        }
        assert_eq!(mark(grid.resolve(-1, 0)), Some(4));
        assert_eq!(mark(grid.resolve(0, -1)), Some(10));
    }

    #[test]
    fn test_border_sentinels() {
        let border = Border {
            top: Some(Cell::new("marker", Marker(100))),
            right: Some(Cell::new("marker", Marker(101))),
            bottom: Some(Cell::new("marker", Marker(102))),
            left: None,
        };
        let grid = marked(4, 4, EdgePolicy::Border(border));
        assert_eq!(mark(grid.resolve(-1, 0)), None);
        assert_eq!(grid.locate(-1, 0), grid.locate(-100, 0));
        assert_eq!(mark(grid.resolve(4, 2)), Some(101));
        assert_eq!(mark(grid.resolve(400, 2)), Some(101));
        assert_eq!(mark(grid.resolve(2, -1)), Some(102));
        assert_eq!(mark(grid.resolve(2, 9)), Some(100));
        assert_eq!(mark(grid.resolve(3, 3)), Some(15));
    }

    #[test]
    fn test_horizontal_sentinel_wins_on_corners() {
        let grid = Grid::blank(2, 2, EdgePolicy::default());
        assert_eq!(grid.locate(-1, -1), Location::Edge(Side::Left));
        assert_eq!(grid.locate(2, 5), Location::Edge(Side::Right));
    }

    #[test]
    fn test_degenerate_grid() {
        let wrapped = Grid::blank(0, 3, EdgePolicy::Wrap);
        assert!(wrapped.is_empty());
        assert_eq!(wrapped.locate(0, 0), Location::Nowhere);
        assert!(wrapped.resolve(-5, 2).is_none());

        let bordered = Grid::blank(0, 0, EdgePolicy::default());
        assert_eq!(bordered.locate(0, 0), Location::Edge(Side::Right));
        assert!(bordered.resolve(0, 0).is_none());
    }

    #[test]
    fn test_mutable_resolution_skips_sentinels() {
        let border = Border {
            left: Some(Cell::new("marker", Marker(7))),
            ..Border::default()
        };
        let mut grid = marked(2, 2, EdgePolicy::Border(border));
        assert!(grid.resolve_mut(-1, 0).is_none());
        if let Some(m) = grid.resolve_mut(1, 1).and_then(|c| c.downcast_mut::<Marker>()) {
            m.0 = 42;
        }
        assert_eq!(mark(grid.resolve(1, 1)), Some(42));
    }
}
