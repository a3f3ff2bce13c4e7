//! Fisher-Yates shuffle over an injected random source

use super::rng::RandomSource;

/// Return a uniformly permuted copy of `items`
///
/// For each `i` in order, swaps `i` with a uniform `j` in `[i, n)`. The input
/// slice is left untouched.
pub fn shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n {
        let j = rng.index_in(i, n);
        out.swap(i, j);
    }
    out
}
