use rand::seq::SliceRandom;
use rand::Rng;

/// Descriptive words the report draws from.
pub const WORDS: &[&str] = &[
    "rust",
    "cargo",
    "compiled",
    "executed",
    "optimized",
    "efficient",
    "powerful",
    "modern",
    "fast",
    "scalable",
    "reliable",
    "robust",
    "elegant",
    "sophisticated",
    "safe",
];

/// Picks a word uniformly at random, with replacement.
pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    // WORDS is a non-empty constant.
    WORDS.choose(rng).copied().unwrap_or(WORDS[0])
}

/// Uniform integer in `min..=max`. Swapped bounds are accepted.
pub fn random_number<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_word_is_always_from_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(WORDS.contains(&random_word(&mut rng)));
        }
    }

    #[test]
    fn random_number_stays_within_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let n = random_number(&mut rng, 100, 999);
            assert!((100..=999).contains(&n));
            seen_min |= n == 100;
            seen_max |= n == 999;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn random_number_handles_degenerate_and_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_number(&mut rng, 5, 5), 5);
        for _ in 0..100 {
            let n = random_number(&mut rng, 10, -10);
            assert!((-10..=10).contains(&n));
        }
    }
}
