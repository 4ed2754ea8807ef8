use crate::{
    Attribute, Automaton, AutomatonConfig, CellBehavior, InitContext, ProcessContext,
    RandomSource, Result, SeededRandom,
};

/// Conway's Game of Life cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct LifeCell {
    pub alive: bool,
    pub was_alive: bool,
}

impl CellBehavior for LifeCell {
    fn initialize(&mut self, _ctx: &mut InitContext<'_>) {
        self.alive = false;
        self.was_alive = false;
    }

    fn pre_process(&mut self) {
        self.was_alive = self.alive;
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) {
        let neibs = ctx
            .world()
            .count_matching(ctx.x(), ctx.y(), "was_alive", true);
        self.alive = self.alive && neibs == 2 || neibs == 3;
    }

    fn attribute(&self, name: &str) -> Option<Attribute> {
        match name {
            "alive" => Some(self.alive.into()),
            "was_alive" => Some(self.was_alive.into()),
            _ => None,
        }
    }
}

/// Game of Life on a Moore neighborhood.
pub struct Conway {
    automaton: Automaton,
}

impl Conway {
    pub const CELL_TYPE: &'static str = "cell";

    /// Dead field; `seed` feeds the random source used by [`Self::randomize`].
    pub fn new(width: i64, height: i64, wrap: bool, seed: Option<u64>) -> Result<Self> {
        Self::with_random(width, height, wrap, Box::new(SeededRandom::new(seed)))
    }

    pub fn with_random(
        width: i64,
        height: i64,
        wrap: bool,
        random: Box<dyn RandomSource>,
    ) -> Result<Self> {
        let mut automaton = AutomatonConfig::new(width, height)
            .wrap(wrap)
            .build_with(random)?;
        automaton.register_cell_type(Self::CELL_TYPE, LifeCell::default);
        automaton.populate_by_distribution(&[(Self::CELL_TYPE, 1.)])?;
        Ok(Self { automaton })
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn automaton_mut(&mut self) -> &mut Automaton {
        &mut self.automaton
    }

    pub fn width(&self) -> usize {
        self.automaton.width()
    }

    pub fn height(&self) -> usize {
        self.automaton.height()
    }

    pub fn generation(&self) -> u64 {
        self.automaton.current_generation()
    }

    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.automaton
            .cell_at(x, y)
            .and_then(|c| c.downcast_ref::<LifeCell>())
            .is_some_and(|c| c.alive)
    }

    pub fn set_alive(&mut self, x: i64, y: i64, alive: bool) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.alive = alive;
        }
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        if let Some(cell) = self.cell_mut(x, y) {
            cell.alive = !cell.alive;
        }
    }

    /// Kills everything and resets the clock, then revives each cell with
    /// probability `threshold`.
    pub fn randomize(&mut self, threshold: f64) {
        self.automaton.initialize();
        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                let alive = self.automaton.random01() < threshold;
                self.set_alive(x, y, alive);
            }
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.automaton
            .grid()
            .cells()
            .filter_map(|c| c.downcast_ref::<LifeCell>())
            .filter(|c| c.alive)
            .count()
    }

    pub fn step(&mut self) {
        self.automaton.step();
    }

    fn cell_mut(&mut self, x: i64, y: i64) -> Option<&mut LifeCell> {
        self.automaton
            .cell_at_mut(x, y)
            .and_then(|c| c.downcast_mut::<LifeCell>())
    }
}
