use super::Config;
use crate::{
    demos::{Conway, ForestFire, Tree},
    Result,
};
use eframe::egui::Color32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Conway,
    ForestFire,
}

/// The automaton currently shown by the viewer.
pub enum Demo {
    Conway(Conway),
    ForestFire(ForestFire),
}

impl Demo {
    pub fn new(kind: DemoKind, side: u32, wrap: bool, threshold: f64) -> Result<Self> {
        let side = side as i64;
        let mut demo = match kind {
            DemoKind::Conway => Self::Conway(Conway::new(side, side, wrap, None)?),
            DemoKind::ForestFire => Self::ForestFire(ForestFire::new(side, side, wrap, None)?),
        };
        demo.randomize(threshold);
        Ok(demo)
    }

    pub fn kind(&self) -> DemoKind {
        match self {
            Self::Conway(_) => DemoKind::Conway,
            Self::ForestFire(_) => DemoKind::ForestFire,
        }
    }

    pub fn size(&self) -> [usize; 2] {
        match self {
            Self::Conway(life) => [life.width(), life.height()],
            Self::ForestFire(forest) => [forest.width(), forest.height()],
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            Self::Conway(life) => life.generation(),
            Self::ForestFire(forest) => forest.generation(),
        }
    }

    pub fn randomize(&mut self, threshold: f64) {
        match self {
            Self::Conway(life) => life.randomize(threshold),
            Self::ForestFire(forest) => forest.randomize(threshold),
        }
    }

    pub fn step(&mut self) {
        match self {
            Self::Conway(life) => life.step(),
            Self::ForestFire(forest) => forest.step(),
        }
    }

    /// Conway cells flip state; burning a forest patch sets it on fire.
    pub fn poke(&mut self, x: i64, y: i64) {
        match self {
            Self::Conway(life) => life.toggle(x, y),
            Self::ForestFire(forest) => {
                if let Some(tree) = forest.tree_mut(x, y) {
                    tree.set_on_fire();
                }
            }
        }
    }

    /// Row-major pixels, one per cell.
    pub fn pixels(&self) -> Vec<Color32> {
        let [w, h] = self.size();
        let mut pixels = Vec::with_capacity(w * h);
        for y in 0..h as i64 {
            for x in 0..w as i64 {
                let color = match self {
                    Self::Conway(life) => {
                        if life.is_alive(x, y) {
                            Config::ALIVE_COLOR
                        } else {
                            Config::DEAD_COLOR
                        }
                    }
                    Self::ForestFire(forest) => Self::tree_color(forest.tree(x, y)),
                };
                pixels.push(color);
            }
        }
        pixels
    }

    fn tree_color(tree: Option<&Tree>) -> Color32 {
        let Some(tree) = tree else {
            return Config::DEAD_COLOR;
        };
        if tree.is_burning() {
            let heat = 0xff - (tree.fire.min(Tree::MAX_FIRE) * 0x10) as u8;
            Color32::from_rgb(0xff, heat / 2, 0)
        } else if tree.growth > 0 {
            let green = 0x40 + (tree.growth.min(Tree::MAX_GROWTH) * 0x12) as u8;
            Color32::from_rgb(0, green, 0x10)
        } else {
            Config::BARE_COLOR
        }
    }
}
