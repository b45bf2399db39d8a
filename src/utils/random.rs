use rand::Rng;

/// Uniformly random key in `[0, max)`.
///
/// # Panics
/// Panics if `max` is 0.
pub fn next_random(max: u64) -> u64 {
    rand::thread_rng().gen_range(0..max)
}

/// Uniformly random key in `[min, max)`.
///
/// # Panics
/// Panics if `min >= max`.
pub fn next_random_between(
    min: u64,
    max: u64,
) -> u64 {
    rand::thread_rng().gen_range(min..max)
}
