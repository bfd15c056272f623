//! Integration tests for the alpha-beta tree search
use noughts::tree::{TreeSearch, N_LEAVES};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn sample_tree_has_optimal_value_five() {
    let values = [3, 5, 6, 9, 1, 2, 0, -1];
    assert_eq!(TreeSearch::new().optimal_value(&values), 5);
}

#[test]
fn pruning_skips_leaves_on_the_sample_tree() {
    let values = [3, 5, 6, 9, 1, 2, 0, -1];
    let mut pruned = TreeSearch::new();
    let mut exhaustive = TreeSearch::without_pruning();
    assert_eq!(
        pruned.optimal_value(&values),
        exhaustive.optimal_value(&values)
    );
    assert_eq!(exhaustive.n_leafs_evaluated, N_LEAVES);
    assert!(
        pruned.n_leafs_evaluated < N_LEAVES,
        "no cutoff fired: {} leaves evaluated",
        pruned.n_leafs_evaluated
    );
}

/// Pruning must not change the root value, whatever the leaves are.
#[test]
fn pruning_is_sound_for_random_leaf_values() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1000 {
        let mut values = [0i32; N_LEAVES];
        for v in values.iter_mut() {
            *v = rng.gen_range(-100..=100);
        }
        let with = TreeSearch::new().optimal_value(&values);
        let without = TreeSearch::without_pruning().optimal_value(&values);
        assert_eq!(with, without, "pruning changed the value for {values:?}");
    }
}

#[test]
fn pruning_never_evaluates_more_leaves_than_exhaustive_search() {
    let mut rng = StdRng::seed_from_u64(1729);
    for _ in 0..200 {
        let mut values = [0i32; N_LEAVES];
        for v in values.iter_mut() {
            *v = rng.gen_range(-10..=10);
        }
        let mut pruned = TreeSearch::new();
        pruned.optimal_value(&values);
        assert!(pruned.n_leafs_evaluated <= N_LEAVES);
    }
}
