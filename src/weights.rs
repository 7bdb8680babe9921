use std::collections::BTreeMap;

/// The two accepted shapes of a distribution.
///
/// Either form resolves once, at construction, into parallel
/// `outcomes`/`weights` vectors in a deterministic order.
#[derive(Debug, Clone)]
pub enum WeightSpec<L> {
    /// Ordered weights; outcome `i` is `label(i)`.
    Sequence {
        weights: Vec<f64>,
        label: fn(usize) -> L,
    },
    /// Labels paired with their weights, kept in the given order.
    Labeled(Vec<(L, f64)>),
}

impl WeightSpec<usize> {
    /// Positional weights whose outcomes are the indices `0..n`.
    pub fn sequence(weights: impl Into<Vec<f64>>) -> Self {
        WeightSpec::Sequence {
            weights: weights.into(),
            label: std::convert::identity,
        }
    }
}

impl<L> WeightSpec<L> {
    /// Number of outcomes described.
    pub fn len(&self) -> usize {
        match self {
            WeightSpec::Sequence { weights, .. } => weights.len(),
            WeightSpec::Labeled(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Split into index-aligned `(outcomes, weights)`.
    pub(crate) fn into_parts(self) -> (Vec<L>, Vec<f64>) {
        match self {
            WeightSpec::Sequence { weights, label } => {
                let outcomes = (0..weights.len()).map(label).collect();
                (outcomes, weights)
            }
            WeightSpec::Labeled(pairs) => pairs.into_iter().unzip(),
        }
    }
}

impl From<Vec<f64>> for WeightSpec<usize> {
    fn from(weights: Vec<f64>) -> Self {
        WeightSpec::sequence(weights)
    }
}

impl From<&[f64]> for WeightSpec<usize> {
    fn from(weights: &[f64]) -> Self {
        WeightSpec::sequence(weights)
    }
}

impl<const N: usize> From<[f64; N]> for WeightSpec<usize> {
    fn from(weights: [f64; N]) -> Self {
        WeightSpec::sequence(weights)
    }
}

impl<L> From<Vec<(L, f64)>> for WeightSpec<L> {
    fn from(pairs: Vec<(L, f64)>) -> Self {
        WeightSpec::Labeled(pairs)
    }
}

/// Outcomes come out in key order.
impl<L: Ord> From<BTreeMap<L, f64>> for WeightSpec<L> {
    fn from(map: BTreeMap<L, f64>) -> Self {
        WeightSpec::Labeled(map.into_iter().collect())
    }
}

impl<L> FromIterator<(L, f64)> for WeightSpec<L> {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        WeightSpec::Labeled(iter.into_iter().collect())
    }
}
