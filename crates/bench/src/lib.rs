use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const RNG_SEED: u64 = 0x5EED_2026;
const WORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn seeded_rng(salt: u64) -> StdRng {
    StdRng::seed_from_u64(mix_seed(RNG_SEED ^ salt))
}

pub fn random_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..=max)).collect()
}

/// Ascending `0..len` with roughly 1% of positions swapped at random.
pub fn nearly_sorted_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u64> {
    let mut data: Vec<u64> = (0..len as u64).collect();
    if len < 2 {
        return data;
    }
    let swaps = (len / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..len);
        let b = rng.random_range(0..len);
        data.swap(a, b);
    }
    data
}

pub fn random_words<R: Rng + ?Sized>(rng: &mut R, len: usize, max_word_len: usize) -> Vec<String> {
    (0..len)
        .map(|_| {
            let word_len = rng.random_range(1..=max_word_len.max(1));
            (0..word_len)
                .map(|_| WORD_ALPHABET[rng.random_range(0..WORD_ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
