//! Vose's Alias Method for O(1) sampling from a discrete distribution.

use crate::error::InvalidInput;
use rand::Rng;
use rand::distr::Distribution;

/// Probability and alias tables over the indices `0..n`.
#[derive(Debug, Clone)]
pub struct AliasIndex {
    prob: Vec<f64>,
    alias: Vec<usize>,
}

impl AliasIndex {
    /// Construct the tables from non-negative weights. O(n).
    ///
    /// # Errors
    /// * [`InvalidInput::Empty`] if `weights` is empty.
    /// * [`InvalidInput::Negative`] if any weight is below zero.
    /// * [`InvalidInput::NotFinite`] if any weight is NaN or infinite.
    /// * [`InvalidInput::ZeroSum`] if the weights sum to zero or overflow.
    pub fn new(weights: &[f64]) -> Result<Self, InvalidInput> {
        let n = weights.len();
        if n == 0 {
            return Err(InvalidInput::Empty);
        }

        let mut total = 0.0f64;
        for (index, &value) in weights.iter().enumerate() {
            if value < 0.0 {
                return Err(InvalidInput::Negative { index, value });
            }
            if !value.is_finite() {
                return Err(InvalidInput::NotFinite { index, value });
            }
            total += value;
        }
        if total <= 0.0 || !total.is_finite() {
            return Err(InvalidInput::ZeroSum);
        }

        // Scale so the average is 1; multiply before dividing.
        #[allow(clippy::cast_precision_loss)]
        let mut prob: Vec<f64> = weights.iter().map(|&w| w * n as f64 / total).collect();
        let mut alias: Vec<usize> = (0..n).collect();

        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);
        for (i, &p) in prob.iter().enumerate() {
            if p < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        let mut pairings = 0usize;
        while let Some((s, l)) = pop_pair(&mut small, &mut large) {
            alias[s] = l;
            prob[l] = prob[l] + prob[s] - 1.0;

            if prob[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
            pairings += 1;
        }

        // Whatever is left over is full up to rounding error.
        if !small.is_empty() {
            log::trace!(
                "clamping {} residual small entries to probability 1",
                small.len()
            );
        }
        for i in small.into_iter().chain(large) {
            prob[i] = 1.0;
            alias[i] = i;
        }

        debug_assert!(prob.iter().all(|p| (0.0..=1.0).contains(p)));
        debug_assert!(alias.iter().all(|&a| a < n));
        log::debug!("built alias table over {n} outcomes with {pairings} pairings");

        Ok(Self { prob, alias })
    }

    /// Draw a single index in O(1).
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let i = rng.random_range(0..self.prob.len());
        let u: f64 = rng.random();
        if u < self.prob[i] { i } else { self.alias[i] }
    }

    /// Coin-flip probability per index, each in `[0, 1]`.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Fallback index per index, each in `0..len()`.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    /// Draw `draws` samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            counts[self.sample_index(rng)] += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}

impl Distribution<usize> for AliasIndex {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.sample_index(rng)
    }
}

/// Pops one index off each stack, or neither if either stack is empty.
fn pop_pair(small: &mut Vec<usize>, large: &mut Vec<usize>) -> Option<(usize, usize)> {
    if small.is_empty() || large.is_empty() {
        return None;
    }
    Some((small.pop()?, large.pop()?))
}
