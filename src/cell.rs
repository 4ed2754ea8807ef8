use crate::{Attribute, InitContext, ProcessContext};
use std::{any::Any, rc::Rc};

/// Gives trait objects access to their concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Clones a behavior behind a trait object.
pub trait CloneBehavior {
    fn clone_box(&self) -> Box<dyn CellBehavior>;
}

impl<T: CellBehavior + Clone> CloneBehavior for T {
    fn clone_box(&self) -> Box<dyn CellBehavior> {
        Box::new(self.clone())
    }
}

/// Per-cell logic of one cell type.
///
/// A generation calls [`pre_process`](Self::pre_process) on every cell, then
/// [`process`](Self::process) on every cell. Behaviors that copy their state
/// into snapshot fields in the first phase and only read neighbors' snapshots
/// in the second get a synchronous update regardless of visiting order.
///
/// While a cell's own callback runs, queries that land on its position see
/// a copy of the cell taken just before the call.
pub trait CellBehavior: AsAny + CloneBehavior {
    /// Establishes the starting state of the cell.
    fn initialize(&mut self, ctx: &mut InitContext<'_>);

    /// Snapshots the state of the previous generation.
    fn pre_process(&mut self) {}

    /// Computes the state of the current generation.
    fn process(&mut self, _ctx: &mut ProcessContext<'_>) {}

    /// Named field lookup used by the attribute-based neighbor queries.
    fn attribute(&self, _name: &str) -> Option<Attribute> {
        None
    }
}

/// A cell instance: a behavior tagged with the name of its cell type.
pub struct Cell {
    type_name: Rc<str>,
    behavior: Box<dyn CellBehavior>,
}

impl Cell {
    pub fn new(type_name: impl Into<Rc<str>>, behavior: impl CellBehavior) -> Self {
        Self::from_boxed(type_name.into(), Box::new(behavior))
    }

    pub(crate) fn from_boxed(type_name: Rc<str>, behavior: Box<dyn CellBehavior>) -> Self {
        Self {
            type_name,
            behavior,
        }
    }

    /// Name of the cell type this instance was created as.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn behavior(&self) -> &dyn CellBehavior {
        self.behavior.as_ref()
    }

    pub fn behavior_mut(&mut self) -> &mut dyn CellBehavior {
        self.behavior.as_mut()
    }

    pub fn attribute(&self, name: &str) -> Option<Attribute> {
        self.behavior.attribute(name)
    }

    pub fn is<T: CellBehavior>(&self) -> bool {
        self.behavior().as_any().is::<T>()
    }

    pub fn downcast_ref<T: CellBehavior>(&self) -> Option<&T> {
        self.behavior().as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: CellBehavior>(&mut self) -> Option<&mut T> {
        self.behavior_mut().as_any_mut().downcast_mut::<T>()
    }
}

impl Clone for Cell {
    fn clone(&self) -> Self {
        Self::from_boxed(Rc::clone(&self.type_name), self.behavior.clone_box())
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
