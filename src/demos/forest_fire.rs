use crate::{
    Attribute, Automaton, AutomatonConfig, CellBehavior, InitContext, Offset, ProcessContext,
    RandomSource, Result, SeededRandom,
};

/// Forest patch that grows, seeds its neighbors and occasionally burns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tree {
    pub growth: u32,
    pub fire: u32,
    pub prev_growth: u32,
    pub prev_fire: u32,
}

impl Tree {
    /// Age from which a tree may seed its neighbors; growth keeps counting past it.
    pub const MAX_GROWTH: u32 = 10;
    pub const MAX_FIRE: u32 = 10;
    pub const SPROUT_PROBABILITY: f64 = 0.001;
    pub const SEEDING_PROBABILITY: f64 = 0.001;
    pub const LIGHTNING_PROBABILITY: f64 = 0.00001;
    /// Fire older than this may jump to a neighbor.
    pub const SPREAD_AGE: u32 = 3;

    pub fn set_on_fire(&mut self) {
        self.fire = 1;
    }

    pub fn is_burning(&self) -> bool {
        self.fire > 0
    }

    fn handle_growth(&mut self, ctx: &mut ProcessContext<'_>) {
        if self.prev_growth == 0 {
            if ctx.random01() < Self::SPROUT_PROBABILITY {
                self.growth = 1;
            }
        } else {
            self.growth += 1;
        }

        if self.prev_growth >= Self::MAX_GROWTH && ctx.random01() < Self::SEEDING_PROBABILITY {
            let bare = Self::candidates(ctx, |t| t.growth == 0);
            if let Some(o) = ctx.random().random_index(bare.len()).map(|i| bare[i]) {
                ctx.modify(ctx.x() + o.dx, ctx.y() + o.dy, |t: &mut Tree| t.growth = 1);
            }
        }

        if self.prev_growth > 0 && ctx.random01() < Self::LIGHTNING_PROBABILITY {
            self.set_on_fire();
        }
    }

    fn handle_fire(&mut self, ctx: &mut ProcessContext<'_>) {
        if self.prev_fire >= Self::MAX_FIRE {
            self.fire = 0;
            self.growth = 0;
            return;
        }

        self.fire += 1;
        let spread_chance = self.prev_fire as f64 / Self::MAX_FIRE as f64;
        if self.prev_fire > Self::SPREAD_AGE && ctx.random01() < spread_chance {
            let fuel = Self::candidates(ctx, |t| !t.is_burning() && t.growth > 0);
            if let Some(o) = ctx.random().random_index(fuel.len()).map(|i| fuel[i]) {
                ctx.modify(ctx.x() + o.dx, ctx.y() + o.dy, Tree::set_on_fire);
            }
        }
    }

    /// Offsets of neighboring trees satisfying `pred`, in neighborhood order.
    fn candidates(ctx: &ProcessContext<'_>, pred: impl Fn(&Tree) -> bool) -> Vec<Offset> {
        ctx.neighborhood()
            .iter()
            .zip(ctx.neighbors())
            .filter(|(_, cell)| {
                cell.and_then(|c| c.downcast_ref::<Tree>())
                    .is_some_and(&pred)
            })
            .map(|(offset, _)| offset)
            .collect()
    }
}

impl CellBehavior for Tree {
    fn initialize(&mut self, _ctx: &mut InitContext<'_>) {
        self.growth = 0;
        self.fire = 0;
    }

    fn pre_process(&mut self) {
        self.prev_growth = self.growth;
        self.prev_fire = self.fire;
    }

    fn process(&mut self, ctx: &mut ProcessContext<'_>) {
        if self.prev_fire > 0 {
            self.handle_fire(ctx);
        } else {
            self.handle_growth(ctx);
        }
    }

    fn attribute(&self, name: &str) -> Option<Attribute> {
        match name {
            "growth" => Some(self.growth.into()),
            "fire" => Some(self.fire.into()),
            "prev_growth" => Some(self.prev_growth.into()),
            "prev_fire" => Some(self.prev_fire.into()),
            _ => None,
        }
    }
}

/// Forest-fire model on a Moore neighborhood.
pub struct ForestFire {
    automaton: Automaton,
}

impl ForestFire {
    pub const CELL_TYPE: &'static str = "tree";

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
        automaton.register_cell_type(Self::CELL_TYPE, Tree::default);
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

    pub fn tree(&self, x: i64, y: i64) -> Option<&Tree> {
        self.automaton
            .cell_at(x, y)
            .and_then(|c| c.downcast_ref::<Tree>())
    }

    pub fn tree_mut(&mut self, x: i64, y: i64) -> Option<&mut Tree> {
        self.automaton
            .cell_at_mut(x, y)
            .and_then(|c| c.downcast_mut::<Tree>())
    }

    pub fn growth(&self, x: i64, y: i64) -> u32 {
        self.tree(x, y).map_or(0, |t| t.growth)
    }

    pub fn fire(&self, x: i64, y: i64) -> u32 {
        self.tree(x, y).map_or(0, |t| t.fire)
    }

    /// Resets the forest, then plants a tree of random age `[1, MAX_GROWTH)`
    /// with probability `threshold` at every position.
    pub fn randomize(&mut self, threshold: f64) {
        self.automaton.initialize();
        for y in 0..self.height() as i64 {
            for x in 0..self.width() as i64 {
                let growth = if self.automaton.random01() < threshold {
                    self.automaton.random_range(1., Tree::MAX_GROWTH as f64) as u32
                } else {
                    0
                };
                if let Some(tree) = self.tree_mut(x, y) {
                    tree.growth = growth;
                }
            }
        }
    }

    pub fn step(&mut self) {
        self.automaton.step();
    }
}
