/// Relative position of a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    pub const fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

impl From<(i64, i64)> for Offset {
    fn from((dx, dy): (i64, i64)) -> Self {
        Self { dx, dy }
    }
}

/// Ordered set of offsets that define which positions are adjacent to a cell.
///
/// The order is kept as given: queries return neighbors in this order, so
/// index `i` of [`crate::World::neighbors`] corresponds to `offsets()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    offsets: Vec<Offset>,
}

impl Neighborhood {
    #[rustfmt::skip]
    const MOORE: [(i64, i64); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0), (1, 0),
        (-1, 1), (0, 1), (1, 1),
    ];

    #[rustfmt::skip]
    const VON_NEUMANN_1: [(i64, i64); 4] = [
        (0, -1),
        (-1, 0), (1, 0),
        (0, 1),
    ];

    #[rustfmt::skip]
    const VON_NEUMANN_2: [(i64, i64); 12] = [
        (0, -2),
        (-1, -1), (0, -1), (1, -1),
        (-2, 0), (-1, 0), (1, 0), (2, 0),
        (-1, 1), (0, 1), (1, 1),
        (0, 2),
    ];

    /// The 8 surrounding cells.
    pub fn moore() -> Self {
        Self::custom(Self::MOORE)
    }

    /// The 4 orthogonally adjacent cells.
    pub fn von_neumann_1() -> Self {
        Self::custom(Self::VON_NEUMANN_1)
    }

    /// Cells within manhattan distance 2.
    pub fn von_neumann_2() -> Self {
        Self::custom(Self::VON_NEUMANN_2)
    }

    /// Builds a neighborhood from arbitrary offsets.
    ///
    /// Repeated offsets are dropped, the first occurrence keeps its place.
    pub fn custom<I, O>(offsets: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<Offset>,
    {
        let mut result = Vec::new();
        for offset in offsets.into_iter().map(Into::into) {
            if !result.contains(&offset) {
                result.push(offset);
            }
        }
        Self { offsets: result }
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Offset> + '_ {
        self.offsets.iter().copied()
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self::moore()
    }
}

#[cfg(test)]
mod tests {
    use super::{Neighborhood, Offset};

    #[test]
    fn test_standard_sizes() {
        assert_eq!(Neighborhood::moore().len(), 8);
        assert_eq!(Neighborhood::von_neumann_1().len(), 4);
        assert_eq!(Neighborhood::von_neumann_2().len(), 12);
        assert!(Neighborhood::custom(Vec::<Offset>::new()).is_empty());
    }

    #[test]
    fn test_moore_order() {
        let n = Neighborhood::moore();
        assert_eq!(n.offsets()[0], Offset::new(-1, -1));
        assert_eq!(n.offsets()[3], Offset::new(-1, 0));
        assert_eq!(n.offsets()[7], Offset::new(1, 1));
        assert!(!n.offsets().contains(&Offset::new(0, 0)));
    }

    #[test]
    fn test_custom_drops_duplicates() {
        let n = Neighborhood::custom([(1, 0), (0, 1), (1, 0), (-1, 0)]);
        let expected = [Offset::new(1, 0), Offset::new(0, 1), Offset::new(-1, 0)];
        assert_eq!(n.offsets(), &expected);
    }
}
