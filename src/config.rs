use crate::{Automaton, Border, EdgePolicy, Neighborhood, RandomSource, Result, SeededRandom};

/// Construction parameters of an [`Automaton`].
#[derive(Debug)]
pub struct AutomatonConfig {
    pub width: i64,
    pub height: i64,
    pub edge: EdgePolicy,
    pub neighborhood: Neighborhood,
    /// Seed of the default random source; entropy when `None`.
    pub seed: Option<u64>,
}

impl AutomatonConfig {
    /// Bordered grid with empty sentinels and a Moore neighborhood.
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            width,
            height,
            edge: EdgePolicy::default(),
            neighborhood: Neighborhood::default(),
            seed: None,
        }
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.edge = if wrap {
            EdgePolicy::Wrap
        } else {
            EdgePolicy::default()
        };
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.edge = EdgePolicy::Border(border);
        self
    }

    pub fn neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Automaton> {
        let random = Box::new(SeededRandom::new(self.seed));
        self.build_with(random)
    }

    pub fn build_with(self, random: Box<dyn RandomSource>) -> Result<Automaton> {
        Automaton::new(
            self.width,
            self.height,
            self.edge,
            self.neighborhood,
            random,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstantRandom, Error};

    #[test]
    fn test_defaults() {
        let a = AutomatonConfig::new(3, 2).build().unwrap();
        assert_eq!((a.width(), a.height()), (3, 2));
        assert!(!a.edge_policy().is_wrap());
        assert_eq!(a.neighborhood(), &Neighborhood::moore());
        assert_eq!(a.current_generation(), 0);
    }

    #[test]
    fn test_builder() {
        let a = AutomatonConfig::new(4, 4)
            .wrap(true)
            .neighborhood(Neighborhood::von_neumann_1())
            .build_with(Box::new(ConstantRandom(0.25)))
            .unwrap();
        assert!(a.edge_policy().is_wrap());
        assert_eq!(a.neighborhood().len(), 4);
    }

    #[test]
    fn test_dimensions() {
        let err = AutomatonConfig::new(-1, 5).build().unwrap_err();
        assert_eq!(err, Error::InvalidDimension { width: -1, height: 5 });
        let err = AutomatonConfig::new(i64::MAX, 2).build().unwrap_err();
        assert_eq!(err, Error::InvalidDimension { width: i64::MAX, height: 2 });
        let empty = AutomatonConfig::new(0, 0).seed(1).build().unwrap();
        assert!(empty.grid().is_empty());
    }
}
