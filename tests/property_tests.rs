use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vose::{AliasIndex, AliasTable, InvalidInput};

/// Plain rendition of the construction: scale by `w * n / total`, pair off
/// the small and large stacks from the top, fill what is left.
fn reference_tables(weights: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let n = weights.len();
    let total: f64 = weights.iter().fold(0.0, |acc, &w| acc + w);
    let mut prob: Vec<f64> = weights.iter().map(|&w| w * n as f64 / total).collect();
    let mut alias: Vec<usize> = (0..n).collect();
    let mut small: Vec<usize> = (0..n).filter(|&i| prob[i] < 1.0).collect();
    let mut large: Vec<usize> = (0..n).filter(|&i| prob[i] >= 1.0).collect();
    while !small.is_empty() && !large.is_empty() {
        let s = small.pop().unwrap();
        let l = large.pop().unwrap();
        alias[s] = l;
        prob[l] = prob[l] + prob[s] - 1.0;
        if prob[l] < 1.0 {
            small.push(l);
        } else {
            large.push(l);
        }
    }
    for i in small.into_iter().chain(large) {
        prob[i] = 1.0;
        alias[i] = i;
    }
    (prob, alias)
}

proptest! {
    #[test]
    fn prop_tables_stay_in_bounds(
        weights in prop::collection::vec(0.0f64..1e6, 1..64)
    ) {
        match AliasIndex::new(&weights) {
            Ok(table) => {
                let n = weights.len();
                prop_assert_eq!(table.len(), n);
                for (&p, &a) in table.probabilities().iter().zip(table.aliases()) {
                    prop_assert!((0.0..=1.0).contains(&p), "prob {}", p);
                    prop_assert!(a < n, "alias {}", a);
                }
            }
            Err(e) => {
                prop_assert_eq!(e, InvalidInput::ZeroSum);
                prop_assert!(weights.iter().all(|&w| w == 0.0));
            }
        }
    }

    #[test]
    fn prop_tables_match_plain_construction(
        weights in prop::collection::vec(0.01f64..10.0, 1..48)
    ) {
        let table = AliasIndex::new(&weights).unwrap();
        let (prob, alias) = reference_tables(&weights);
        prop_assert_eq!(table.probabilities(), prob.as_slice());
        prop_assert_eq!(table.aliases(), alias.as_slice());
    }

    #[test]
    fn prop_draws_have_positive_weight(
        weights in prop::collection::vec(prop_oneof![Just(0.0f64), 0.1f64..100.0], 1..32),
        seed in any::<u64>(),
    ) {
        prop_assume!(weights.iter().any(|&w| w > 0.0));
        let table = AliasTable::from_weights(&weights).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for i in table.draw_many(&mut rng, 256) {
            prop_assert!(weights[i] > 0.0, "drew index {} with zero weight", i);
        }
    }

    #[test]
    fn prop_draw_many_length(count in 0usize..500, seed in any::<u64>()) {
        let table = AliasTable::from_pairs([("x", 1.0), ("y", 2.0)]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        prop_assert_eq!(table.draw_many(&mut rng, count).len(), count);
    }

    #[test]
    fn prop_negative_weight_is_rejected(
        mut weights in prop::collection::vec(0.0f64..10.0, 1..16),
        at in any::<prop::sample::Index>(),
        neg in -10.0f64..-1e-9,
    ) {
        let i = at.index(weights.len());
        weights[i] = neg;
        prop_assert!(
            matches!(AliasIndex::new(&weights), Err(InvalidInput::Negative { .. })),
            "{:?}",
            weights
        );
    }
}
