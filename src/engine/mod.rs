mod context;
mod population;
mod world;

pub use context::{InitContext, ProcessContext};
pub use population::{ExportMapping, ValueMapping};
pub use world::World;

use crate::{
    Attribute, Cell, CellBehavior, CellTypeRegistry, EdgePolicy, Error, Grid, Neighborhood,
    RandomSource, Result, Side,
};
use tracing::{debug, trace, warn};

/// Grid of cells stepped forward in synchronized generations.
pub struct Automaton {
    grid: Grid,
    neighborhood: Neighborhood,
    registry: CellTypeRegistry,
    random: Box<dyn RandomSource>,
    generation: u64,
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("grid", &self.grid)
            .field("neighborhood", &self.neighborhood)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Automaton {
    /// Creates an empty automaton; negative dimensions and areas that do not
    /// fit in memory addressing are rejected, zero is allowed.
    pub fn new(
        width: i64,
        height: i64,
        edge: EdgePolicy,
        neighborhood: Neighborhood,
        random: Box<dyn RandomSource>,
    ) -> Result<Self> {
        if width < 0 || height < 0 || width.checked_mul(height).is_none() {
            return Err(Error::InvalidDimension { width, height });
        }
        debug!(
            width,
            height,
            wrap = edge.is_wrap(),
            neighbors = neighborhood.len(),
            "creating automaton"
        );
        Ok(Self {
            grid: Grid::blank(width as usize, height as usize, edge),
            neighborhood,
            registry: CellTypeRegistry::new(),
            random,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.size().0
    }

    pub fn height(&self) -> usize {
        self.grid.size().1
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    pub fn edge_policy(&self) -> &EdgePolicy {
        self.grid.edge_policy()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn registry(&self) -> &CellTypeRegistry {
        &self.registry
    }

    /// Replaces one border sentinel; ignored on a wrapped grid.
    pub fn set_border(&mut self, side: Side, cell: Option<Cell>) {
        match self.grid.edge_policy_mut() {
            EdgePolicy::Border(border) => border.set(side, cell),
            EdgePolicy::Wrap => warn!(?side, "wrapped grid has no border sentinels"),
        }
    }

    pub fn register_cell_type<B, F>(&mut self, name: impl Into<String>, factory: F)
    where
        B: CellBehavior,
        F: Fn() -> B + 'static,
    {
        self.registry.register(name, factory);
    }

    pub fn deregister_cell_type(&mut self, name: &str) {
        if !self.registry.deregister(name) {
            warn!(cell_type = name, "deregistering unknown cell type");
        }
    }

    /// Name of the cell's type if it is still registered.
    pub fn classify<'a>(&self, cell: &'a Cell) -> Option<&'a str> {
        self.registry.classify(cell)
    }

    pub fn world(&self) -> World<'_> {
        World::new(&self.grid, &self.neighborhood)
    }

    pub fn cell_at(&self, x: i64, y: i64) -> Option<&Cell> {
        self.grid.resolve(x, y)
    }

    pub fn cell_at_mut(&mut self, x: i64, y: i64) -> Option<&mut Cell> {
        self.grid.resolve_mut(x, y)
    }

    pub fn neighbors(&self, x: i64, y: i64) -> Vec<Option<&Cell>> {
        self.world().neighbors(x, y)
    }

    pub fn neighbors_matching(
        &self,
        x: i64,
        y: i64,
        name: &str,
        value: impl Into<Attribute>,
    ) -> Vec<&Cell> {
        self.world().neighbors_matching(x, y, name, value)
    }

    pub fn count_matching(&self, x: i64, y: i64, name: &str, value: impl Into<Attribute>) -> usize {
        self.world().count_matching(x, y, name, value)
    }

    pub fn sum_attribute(&self, x: i64, y: i64, name: &str) -> f64 {
        self.world().sum_attribute(x, y, name)
    }

    pub fn average_attribute(&self, x: i64, y: i64, name: &str) -> f64 {
        self.world().average_attribute(x, y, name)
    }

    pub fn random01(&mut self) -> f64 {
        self.random.random01()
    }

    pub fn random_range(&mut self, min: f64, max: f64) -> f64 {
        self.random.random_range(min, max)
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Runs `initialize` on every populated cell in row-major order and
    /// resets the clock.
    pub fn initialize(&mut self) {
        self.generation = 0;
        for idx in 0..self.grid.len() {
            let Some(mut cell) = self.grid.take(idx) else {
                continue;
            };
            let (x, y) = self.grid.coords(idx);
            let snapshot = cell.clone();
            let mut ctx = InitContext {
                x,
                y,
                world: World::new(&self.grid, &self.neighborhood)
                    .with_centre(idx, &snapshot),
                random: self.random.as_mut(),
            };
            cell.behavior_mut().initialize(&mut ctx);
            self.grid.put(idx, Some(cell));
        }
    }

    /// Empties every position, forgets all cell types and resets the clock.
    pub fn clear(&mut self) {
        debug!("clearing automaton");
        self.grid.clear();
        self.registry.clear();
        self.generation = 0;
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.steps(1);
    }

    /// Advances `n` generations: every populated cell is pre-processed, then
    /// every populated cell is processed, both in row-major order.
    pub fn steps(&mut self, n: u64) {
        let mut edits = Vec::new();
        for _ in 0..n {
            for cell in self.grid.cells_mut() {
                cell.behavior_mut().pre_process();
            }

            for idx in 0..self.grid.len() {
                let Some(mut cell) = self.grid.take(idx) else {
                    continue;
                };
                let (x, y) = self.grid.coords(idx);
                let snapshot = cell.clone();
                let mut ctx = ProcessContext {
                    x,
                    y,
                    world: World::new(&self.grid, &self.neighborhood)
                        .with_centre(idx, &snapshot),
                    random: self.random.as_mut(),
                    edits: &mut edits,
                };
                cell.behavior_mut().process(&mut ctx);
                self.grid.put(idx, Some(cell));
                for edit in edits.drain(..) {
                    edit.apply(&mut self.grid);
                }
            }

            self.generation += 1;
            trace!(generation = self.generation, "generation completed");
        }
    }
}
