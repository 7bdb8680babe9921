/// Reasons a weight specification cannot be turned into an alias table.
///
/// Only construction can fail; a built table never errors on draw.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    Empty,
    Negative { index: usize, value: f64 },
    NotFinite { index: usize, value: f64 },
    ZeroSum,
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::Empty => write!(f, "weight specification has no outcomes"),
            InvalidInput::Negative { index, value } => {
                write!(f, "weight at index {index} is negative: {value}")
            }
            InvalidInput::NotFinite { index, value } => {
                write!(f, "weight at index {index} is not finite: {value}")
            }
            InvalidInput::ZeroSum => write!(f, "sum of weights must be positive and finite"),
        }
    }
}

impl std::error::Error for InvalidInput {}
