use super::Automaton;
use crate::{Cell, Error, Result};
use tracing::{debug, warn};

/// Import rule: positions holding `value` become `cell_type` instances.
pub struct ValueMapping<'a, V> {
    value: V,
    cell_type: &'a str,
    on_create: Option<Box<dyn FnMut(&mut Cell) + 'a>>,
}

impl<'a, V> ValueMapping<'a, V> {
    pub fn new(value: V, cell_type: &'a str) -> Self {
        Self {
            value,
            cell_type,
            on_create: None,
        }
    }

    /// Runs on every instance created through this rule.
    pub fn on_create(mut self, f: impl FnMut(&mut Cell) + 'a) -> Self {
        self.on_create = Some(Box::new(f));
        self
    }
}

/// Export rule: cells classified as `cell_type` are written as `extract(x, y, cell)`.
pub struct ExportMapping<'a, V> {
    cell_type: &'a str,
    extract: Box<dyn Fn(i64, i64, &Cell) -> V + 'a>,
}

impl<'a, V> ExportMapping<'a, V> {
    pub fn new(cell_type: &'a str, extract: impl Fn(i64, i64, &Cell) -> V + 'a) -> Self {
        Self {
            cell_type,
            extract: Box::new(extract),
        }
    }
}

impl Automaton {
    /// Fills every position with a type drawn from the weighted `entries`,
    /// then initializes all cells and resets the clock.
    ///
    /// Entries with non-positive weight are never drawn. A sample falling on a
    /// partition boundary goes to the earlier entry.
    pub fn populate_by_distribution(&mut self, entries: &[(&str, f64)]) -> Result<()> {
        let usable = entries
            .iter()
            .copied()
            .filter(|&(_, weight)| weight > 0.)
            .collect::<Vec<_>>();
        if usable.is_empty() {
            return Err(Error::EmptyDistribution);
        }
        if let Some(&(name, _)) = usable.iter().find(|(name, _)| !self.registry.contains(name)) {
            return Err(Error::UnknownType(name.to_string()));
        }

        let total = usable.iter().map(|&(_, weight)| weight).sum::<f64>();
        let mut bounds = Vec::with_capacity(usable.len());
        let mut acc = 0.;
        for &(name, weight) in &usable {
            acc += weight / total;
            bounds.push((name, acc));
        }
        // rounding must not leave the top of [0, 1) uncovered
        let last = bounds.len() - 1;
        bounds[last].1 = 1.;

        let mut cells = Vec::with_capacity(self.grid.len());
        for _ in 0..self.grid.len() {
            let sample = self.random.random01();
            let name = bounds
                .iter()
                .find(|&&(_, bound)| sample <= bound)
                .map_or(bounds[last].0, |&(name, _)| name);
            cells.push(Some(self.registry.instantiate(name)?));
        }
        self.grid.replace_all(cells);

        debug!(
            width = self.width(),
            height = self.height(),
            cell_types = bounds.len(),
            "populated by distribution"
        );
        self.initialize();
        Ok(())
    }

    /// Fills the grid from row-major `values` (`values[y][x]`).
    ///
    /// Each position takes the first rule whose value matches; positions
    /// without a match, or outside `values`, are left empty. Cells are not
    /// initialized and the clock is kept.
    pub fn populate_from_value_grid<'a, V, R>(
        &mut self,
        values: &[R],
        mapping: impl IntoIterator<Item = ValueMapping<'a, V>>,
    ) -> Result<()>
    where
        V: PartialEq,
        R: AsRef<[V]>,
    {
        let mut mapping = mapping.into_iter().collect::<Vec<_>>();
        if let Some(m) = mapping
            .iter()
            .find(|m| !self.registry.contains(m.cell_type))
        {
            return Err(Error::UnknownType(m.cell_type.to_string()));
        }

        let (w, h) = self.grid.size();
        if values.len() != h || values.iter().any(|row| row.as_ref().len() != w) {
            warn!(width = w, height = h, rows = values.len(), "value grid shape mismatch");
        }

        let mut cells = Vec::with_capacity(self.grid.len());
        for y in 0..h {
            for x in 0..w {
                let value = values.get(y).and_then(|row| row.as_ref().get(x));
                let rule = match value {
                    Some(v) => mapping.iter_mut().find(|m| m.value == *v),
                    None => None,
                };
                let cell = match rule {
                    Some(rule) => {
                        let mut cell = self.registry.instantiate(rule.cell_type)?;
                        if let Some(on_create) = rule.on_create.as_mut() {
                            on_create(&mut cell);
                        }
                        Some(cell)
                    }
                    None => None,
                };
                cells.push(cell);
            }
        }
        self.grid.replace_all(cells);
        debug!(width = w, height = h, "populated from value grid");
        Ok(())
    }

    /// Row-major grid (`result[y][x]`) of values extracted from the cells.
    ///
    /// Empty positions and cells whose type has no rule get `default`.
    pub fn export_value_grid<V: Clone>(
        &self,
        default: V,
        mapping: &[ExportMapping<'_, V>],
    ) -> Vec<Vec<V>> {
        let (w, h) = self.grid.size();
        (0..h)
            .map(|y| {
                (0..w)
                    .map(|x| {
                        let (x, y) = (x as i64, y as i64);
                        let Some(cell) = self.grid.resolve(x, y) else {
                            return default.clone();
                        };
                        let cell_type = self.registry.classify(cell);
                        mapping
                            .iter()
                            .find(|m| Some(m.cell_type) == cell_type)
                            .map_or_else(|| default.clone(), |m| (m.extract)(x, y, cell))
                    })
                    .collect()
            })
            .collect()
    }
}
