//! # vose
//!
//! Weighted random selection in constant time.
//!
//! This crate implements
//! [Vose's Alias Method](https://en.wikipedia.org/wiki/Alias_method):
//! a fixed discrete distribution is preprocessed once into a probability
//! table and an alias table, after which every draw costs one random index,
//! one random coin flip and one branch.
//!
//! There are three ways to describe a distribution:
//!
//! 1. **Positional weights** with [`AliasTable::from_weights`]; outcomes are indices.
//! 2. **Labeled weights** with [`AliasTable::from_pairs`] or [`AliasTable::build`]
//!    over a [`WeightSpec`].
//! 3. **Enums** with the [`WeightedOutcomes`] derive (feature `derive`, on by default).
//!
//! ## Quick start (weights)
//!
//! ```rust
//! use vose::AliasTable;
//!
//! # fn main() -> Result<(), vose::InvalidInput> {
//! let table = AliasTable::from_weights(&[10.0, 30.0, 60.0])?;
//!
//! let mut rng = rand::rng();
//! let one = table.draw_one(&mut rng);       // &usize
//! let ten = table.draw_many(&mut rng, 10);  // Vec<usize>
//! assert!(*one < 3);
//! assert_eq!(ten.len(), 10);
//! # Ok(()) }
//! ```
//!
//! ## Quick start (labels)
//!
//! ```rust
//! use vose::AliasTable;
//!
//! # fn main() -> Result<(), vose::InvalidInput> {
//! let fruit = AliasTable::from_pairs([
//!     ("apple", 0.2),
//!     ("banana", 0.5),
//!     ("cherry", 0.3),
//! ])?;
//!
//! let mut rng = rand::rng();
//! println!("you got: {}", fruit.draw_one(&mut rng));
//! # Ok(()) }
//! ```
//!
//! ## Quick start (enum + macro)
//!
//! ```rust
//! # #[cfg(feature = "derive")]
//! # fn main() -> Result<(), vose::InvalidInput> {
//! use vose::WeightedOutcomes;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, WeightedOutcomes)]
//! enum Coin {
//!     #[weight(1/3)] Heads,
//!     #[weight(2/3)] Tails,
//! }
//!
//! let table = Coin::alias_table()?;
//! let side = table.draw_one_owned(&mut rand::rng());
//! assert!(side == Coin::Heads || side == Coin::Tails);
//! # Ok(()) }
//! # #[cfg(not(feature = "derive"))]
//! # fn main() {}
//! ```
//!
//! ## Performance
//! * **Build**: O(n).
//! * **Draw**: O(1) (2 random numbers, 1 branch).
//! * **Space**: 2 vectors of length `n` (f64 + usize) plus the outcomes.
//!
//! ## Gotchas
//! * Weights must be **non-negative**, finite and not all zero.
//! * Tables are immutable. If the weights change, build a new table.
//! * Randomness comes from the caller's [`rand::Rng`]; seed it for reproducible draws.
//!
//! Construction logs through the [`log`] facade (`debug` and `trace` only).

mod error;
mod table;
mod vose;
mod weights;

pub use error::InvalidInput;
pub use table::AliasTable;
pub use vose::AliasIndex;
pub use weights::WeightSpec;

/// Derive macro imported from `vose_macros`.
/// See the crate-level example for usage.
#[cfg(feature = "derive")]
pub use vose_macros::WeightedOutcomes;

/// Trait implemented by the `WeightedOutcomes` derive macro.
///
/// Each variant and its weight is exposed via [`WeightedOutcomes::WEIGHTS`],
/// which enables building a ready-to-sample [`AliasTable`].
pub trait WeightedOutcomes: Sized + 'static {
    /// All `(variant, weight)` pairs for the enum, in declaration order.
    const WEIGHTS: &'static [(Self, f64)];

    /// Builds an [`AliasTable`] over the enum's variants.
    ///
    /// # Errors
    /// See [`AliasTable::build`]: negative, non-finite or all-zero weights fail.
    fn alias_table() -> Result<AliasTable<Self>, InvalidInput>
    where
        Self: Copy,
    {
        AliasTable::from_pairs(Self::WEIGHTS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Side {
        Heads,
        Tails,
    }

    impl WeightedOutcomes for Side {
        const WEIGHTS: &'static [(Self, f64)] = &[(Side::Heads, 1.0), (Side::Tails, 0.0)];
    }

    #[test]
    fn smoke_pairs() {
        let table = AliasTable::from_pairs([("a", 1.0), ("b", 3.0)]).unwrap();
        let mut rng = rand::rng();
        let _ = table.draw_one(&mut rng);
    }

    #[test]
    fn trait_builds_table_in_declaration_order() {
        let table = Side::alias_table().unwrap();
        assert_eq!(table.outcomes(), &[Side::Heads, Side::Tails]);
        let mut rng = rand::rng();
        assert_eq!(table.draw_one_owned(&mut rng), Side::Heads);
    }
}
