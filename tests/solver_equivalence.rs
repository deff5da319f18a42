use chain_dp::solvers::{
    memoized::{self, MemoCache},
    recursive, tabulation,
};
use chain_dp::DimensionSequence;
use proptest::prelude::*;

fn seq(dims: &[i64]) -> DimensionSequence {
    DimensionSequence::new(dims).expect("generated dims are valid")
}

proptest! {
    #[test]
    fn three_solvers_agree_on_small_chains(
        dims in prop::collection::vec(1i64..=12, 3..=9),
    ) {
        let p = seq(&dims);
        let n = p.stages();
        let naive = recursive::solve(1, n, &p);
        let mut cache = MemoCache::new();
        let memo = memoized::solve(1, n, &p, &mut cache);
        let tab = tabulation::solve(&p);
        prop_assert_eq!(naive, memo);
        prop_assert_eq!(memo, tab);
    }

    #[test]
    fn scaling_dimensions_scales_cost_cubically(
        dims in prop::collection::vec(1i64..=8, 3..=7),
        c in 1i64..=4,
    ) {
        let scaled_dims: Vec<i64> = dims.iter().map(|&d| d * c).collect();
        let base_cost = tabulation::solve(&seq(&dims));
        let scaled_cost = tabulation::solve(&seq(&scaled_dims));
        prop_assert_eq!(scaled_cost, base_cost * (c as u64).pow(3));
    }
}

#[cfg(feature = "heavy")]
#[test]
fn heavy_large_chain_polynomial_agreement() {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let dims: Vec<i64> = (0..=300).map(|_| rng.gen_range(1..=50)).collect();
    let p = DimensionSequence::new(&dims).unwrap();
    let mut cache = MemoCache::new();
    let memo = memoized::solve(1, p.stages(), &p, &mut cache);
    assert_eq!(memo, tabulation::solve(&p));
}
