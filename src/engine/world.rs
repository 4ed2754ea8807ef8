use crate::{Attribute, Cell, Grid, Location, Neighborhood};

/// Read-only view of an automaton: addressing and neighbor queries.
///
/// Every query resolves the neighborhood offsets around `(x, y)` through the
/// grid's edge policy. Aggregates only look at present neighbors.
#[derive(Clone, Copy)]
pub struct World<'a> {
    grid: &'a Grid,
    neighborhood: &'a Neighborhood,
    /// Stands in for the grid slot of the cell whose callback is running.
    centre: Option<(usize, &'a Cell)>,
}

impl<'a> World<'a> {
    pub(crate) fn new(grid: &'a Grid, neighborhood: &'a Neighborhood) -> Self {
        Self {
            grid,
            neighborhood,
            centre: None,
        }
    }

    pub(crate) fn with_centre(mut self, idx: usize, cell: &'a Cell) -> Self {
        self.centre = Some((idx, cell));
        self
    }

    fn resolve(&self, x: i64, y: i64) -> Option<&'a Cell> {
        match self.centre {
            Some((idx, cell)) if self.grid.locate(x, y) == Location::Inside(idx) => Some(cell),
            _ => self.grid.resolve(x, y),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.size().0
    }

    pub fn height(&self) -> usize {
        self.grid.size().1
    }

    pub fn neighborhood(&self) -> &'a Neighborhood {
        self.neighborhood
    }

    pub fn cell_at(&self, x: i64, y: i64) -> Option<&'a Cell> {
        self.resolve(x, y)
    }

    fn present(&self, x: i64, y: i64) -> impl Iterator<Item = &'a Cell> + 'a {
        let (world, neighborhood) = (*self, self.neighborhood);
        neighborhood
            .iter()
            .filter_map(move |o| world.resolve(x + o.dx, y + o.dy))
    }

    /// One entry per offset, in neighborhood order, `None` for empty positions.
    pub fn neighbors(&self, x: i64, y: i64) -> Vec<Option<&'a Cell>> {
        self.neighborhood
            .iter()
            .map(|o| self.resolve(x + o.dx, y + o.dy))
            .collect()
    }

    /// Present neighbors whose attribute `name` equals `value`, in neighborhood order.
    pub fn neighbors_matching(
        &self,
        x: i64,
        y: i64,
        name: &str,
        value: impl Into<Attribute>,
    ) -> Vec<&'a Cell> {
        let value = Some(value.into());
        self.present(x, y)
            .filter(|c| c.attribute(name) == value)
            .collect()
    }

    pub fn count_matching(&self, x: i64, y: i64, name: &str, value: impl Into<Attribute>) -> usize {
        let value = Some(value.into());
        self.present(x, y)
            .filter(|c| c.attribute(name) == value)
            .count()
    }

    /// Absent attributes contribute 0.
    pub fn sum_attribute(&self, x: i64, y: i64, name: &str) -> f64 {
        self.present(x, y)
            .filter_map(|c| c.attribute(name))
            .map(Attribute::as_f64)
            .sum()
    }

    /// Sum divided by the neighborhood size, not by the number of present
    /// neighbors; 0 for an empty neighborhood.
    pub fn average_attribute(&self, x: i64, y: i64, name: &str) -> f64 {
        let count = self.neighborhood.len();
        if count == 0 {
            return 0.;
        }
        self.sum_attribute(x, y, name) / count as f64
    }
}
