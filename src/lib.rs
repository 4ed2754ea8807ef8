#![warn(clippy::all)]

mod attribute;
mod cell;
mod config;
pub mod demos;
mod engine;
mod error;
mod grid;
mod gui;
mod neighborhood;
mod random;
mod registry;

pub use attribute::Attribute;
pub use cell::{AsAny, Cell, CellBehavior, CloneBehavior};
pub use config::AutomatonConfig;
pub use engine::{Automaton, ExportMapping, InitContext, ProcessContext, ValueMapping, World};
pub use error::{Error, Result};
pub use gui::App;
pub use grid::{Border, EdgePolicy, Grid, Location, Side};
pub use neighborhood::{Neighborhood, Offset};
pub use random::{ConstantRandom, RandomSource, SeededRandom, SequenceRandom};
pub use registry::CellTypeRegistry;
