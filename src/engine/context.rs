use super::World;
use crate::{Cell, CellBehavior, Grid, Neighborhood, RandomSource};

/// Deferred modification of another cell, queued during `process`.
pub(crate) struct Edit {
    x: i64,
    y: i64,
    apply: Box<dyn FnOnce(&mut Cell)>,
}

impl Edit {
    pub(crate) fn apply(self, grid: &mut Grid) {
        if let Some(cell) = grid.resolve_mut(self.x, self.y) {
            (self.apply)(cell);
        }
    }
}

/// Passed to [`CellBehavior::initialize`].
pub struct InitContext<'a> {
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) world: World<'a>,
    pub(crate) random: &'a mut dyn RandomSource,
}

impl<'a> InitContext<'a> {
    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn world(&self) -> World<'a> {
        self.world
    }

    pub fn random(&mut self) -> &mut dyn RandomSource {
        self.random
    }

    pub fn random01(&mut self) -> f64 {
        self.random.random01()
    }
}

/// Passed to [`CellBehavior::process`].
///
/// Queries that land on the processed cell's own position see its state as
/// it was when the call started.
pub struct ProcessContext<'a> {
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) world: World<'a>,
    pub(crate) random: &'a mut dyn RandomSource,
    pub(crate) edits: &'a mut Vec<Edit>,
}

impl<'a> ProcessContext<'a> {
    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    pub fn world(&self) -> World<'a> {
        self.world
    }

    pub fn neighborhood(&self) -> &'a Neighborhood {
        self.world.neighborhood()
    }

    /// Neighbors of the processed cell, aligned with [`Self::neighborhood`].
    pub fn neighbors(&self) -> Vec<Option<&'a Cell>> {
        self.world.neighbors(self.x, self.y)
    }

    pub fn random(&mut self) -> &mut dyn RandomSource {
        self.random
    }

    pub fn random01(&mut self) -> f64 {
        self.random.random01()
    }

    /// Queues `f` to run on the cell at `(x, y)` once the current `process`
    /// call returns, before the next cell is processed.
    ///
    /// Dropped if the target is empty, a sentinel, or not a `T`.
    pub fn modify<T, F>(&mut self, x: i64, y: i64, f: F)
    where
        T: CellBehavior,
        F: FnOnce(&mut T) + 'static,
    {
        self.edits.push(Edit {
            x,
            y,
            apply: Box::new(move |cell: &mut Cell| {
                if let Some(target) = cell.downcast_mut::<T>() {
                    f(target);
                }
            }),
        });
    }
}
