use rand::Rng;

use crate::{error::InvalidInput, vose::AliasIndex, weights::WeightSpec};

/// A labeled alias table: associates outcomes with weights and samples them
/// through an internal [`AliasIndex`].
///
/// Immutable once built. To change the distribution, build a new table.
#[derive(Debug, Clone)]
pub struct AliasTable<L> {
    index: AliasIndex,
    outcomes: Vec<L>,
}

impl AliasTable<usize> {
    /// Build from positional weights; outcomes are the indices `0..n`.
    ///
    /// # Errors
    /// See [`AliasTable::build`].
    pub fn from_weights(weights: &[f64]) -> Result<Self, InvalidInput> {
        Self::build(weights)
    }
}

impl<L> AliasTable<L> {
    /// Build from either shape of [`WeightSpec`].
    ///
    /// # Errors
    /// * [`InvalidInput::Empty`] if there are no outcomes.
    /// * [`InvalidInput::Negative`] if any weight is negative.
    /// * [`InvalidInput::NotFinite`] if any weight is NaN or infinite.
    /// * [`InvalidInput::ZeroSum`] if the sum of weights is not positive.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn build(spec: impl Into<WeightSpec<L>>) -> Result<Self, InvalidInput> {
        let (outcomes, weights) = spec.into().into_parts();
        let index = AliasIndex::new(&weights)?;
        Ok(Self { index, outcomes })
    }

    /// Build from any `(outcome, weight)` iterator, keeping its order.
    ///
    /// # Errors
    /// See [`AliasTable::build`].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        Self::build(pairs.into_iter().collect::<WeightSpec<L>>())
    }

    /// Draw one outcome **by reference**.
    ///
    /// # Examples
    /// ```rust
    /// # use vose::AliasTable;
    /// # let table = AliasTable::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
    /// let mut rng = rand::rng();
    /// let s = table.draw_one(&mut rng); // &&str
    /// assert!(["a", "b"].contains(s));
    /// ```
    #[inline]
    pub fn draw_one<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a L {
        &self.outcomes[self.index.sample_index(rng)]
    }

    /// Draw one outcome **by value** (clones the chosen element).
    ///
    /// Prefer [`draw_one`](Self::draw_one) if you don't need ownership.
    pub fn draw_one_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> L
    where
        L: Clone,
    {
        self.draw_one(rng).clone()
    }

    /// Draw exactly `count` independent outcomes.
    pub fn draw_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<L>
    where
        L: Clone,
    {
        self.draw_iter(rng).take(count).cloned().collect()
    }

    /// Endless stream of independent draws.
    pub fn draw_iter<'a, R: Rng + ?Sized>(
        &'a self,
        rng: &'a mut R,
    ) -> impl Iterator<Item = &'a L> + 'a {
        std::iter::repeat_with(move || self.draw_one(rng))
    }

    /// Outcomes in table order.
    pub fn outcomes(&self) -> &[L] {
        &self.outcomes
    }

    /// Coin-flip probability per outcome, aligned with [`outcomes`](Self::outcomes).
    pub fn probabilities(&self) -> &[f64] {
        self.index.probabilities()
    }

    /// Fallback index per outcome, aligned with [`outcomes`](Self::outcomes).
    pub fn aliases(&self) -> &[usize] {
        self.index.aliases()
    }

    /// The label-free index sampler backing this table.
    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    /// Number of outcomes in the table.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always `false` for a built table.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
