/// Scalar read from a cell by name, used by the attribute-based neighbor queries.
///
/// `Int` and `Float` compare by numeric value, so `Int(1) == Float(1.)`.
/// `Bool` only equals `Bool`.
#[derive(Debug, Clone, Copy)]
pub enum Attribute {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Attribute {
    /// Contribution to sums and averages; `true` counts as 1.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Bool(b) => b as u8 as f64,
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Bool(_), _) | (_, Self::Bool(_)) => false,
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Attribute {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Attribute {
    fn from(value: u32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
