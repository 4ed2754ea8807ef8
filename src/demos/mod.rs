//! Ready-made automata built on the engine.

mod conway;
mod forest_fire;

pub use conway::{Conway, LifeCell};
pub use forest_fire::{ForestFire, Tree};
