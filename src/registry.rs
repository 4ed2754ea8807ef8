use crate::{Cell, CellBehavior, Error, Result};
use ahash::AHashMap as HashMap;
use std::rc::Rc;
use tracing::debug;

type Factory = Box<dyn Fn() -> Box<dyn CellBehavior>>;

struct Entry {
    tag: Rc<str>,
    factory: Factory,
}

/// Maps cell type names to behavior factories.
///
/// Every instance is tagged with the name it was created under, which is what
/// [`classify`](Self::classify) reads back.
#[derive(Default)]
pub struct CellTypeRegistry {
    entries: HashMap<String, Entry>,
}

impl CellTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` under `name`, replacing any previous factory.
    pub fn register<B, F>(&mut self, name: impl Into<String>, factory: F)
    where
        B: CellBehavior,
        F: Fn() -> B + 'static,
    {
        let name = name.into();
        debug!(cell_type = %name, "registering cell type");
        let entry = Entry {
            tag: Rc::from(name.as_str()),
            factory: Box::new(move || Box::new(factory())),
        };
        self.entries.insert(name, entry);
    }

    /// Returns `false` if `name` was not registered.
    pub fn deregister(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn instantiate(&self, name: &str) -> Result<Cell> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| Error::UnknownType(name.to_string()))?;
        Ok(Cell::from_boxed(Rc::clone(&entry.tag), (entry.factory)()))
    }

    /// Registered name of the cell's type, `None` if that type is not (or no
    /// longer) registered.
    pub fn classify<'a>(&self, cell: &'a Cell) -> Option<&'a str> {
        let name = cell.type_name();
        self.entries.contains_key(name).then_some(name)
    }
}
