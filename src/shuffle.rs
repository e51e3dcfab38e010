//! Random shuffling.

use rand::Rng;

/// Shuffles `v` in place using the "inside-out" Fisher-Yates algorithm.
///
/// Every permutation is equally likely given a uniform `rng`. Pass a seeded RNG for reproducible
/// results.
pub fn fisher_yates<T, R>(v: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in 0..v.len() {
        let j = rng.gen_range(0..=i);
        v.swap(i, j);
    }
}

/// [`fisher_yates`] using the thread local RNG.
pub fn fisher_yates_thread_rng<T>(v: &mut [T]) {
    fisher_yates(v, &mut rand::thread_rng());
}
