use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(seeds
        .entry(key)
        .or_insert_with(|| {
            let seed = env::var(key)
                .ok()
                .and_then(|seed_var| seed_var.parse::<u64>().ok())
                .unwrap_or_else(random);
            println!("Using seed {} for {}", seed, key);
            seed
        })
        .to_owned())
}

fn build_rng(key: Option<&'static str>) -> Result<StdRng, Box<dyn Error>> {
    let seed = get_seed(key.unwrap_or(DEFAULT_TEST_SEED_ENV))?;
    Ok(StdRng::seed_from_u64(seed))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    build_rng(None)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    build_rng(Some(key))
}

/// Draws `len` observer identities in `0..max_id`, repetitions included.
pub fn random_identities(rng: &mut impl Rng, len: usize, max_id: u32) -> Vec<u32> {
    (0..len).map(|_| rng.gen_range(0..max_id.max(1))).collect()
}

/// Draws `len` colors, mixing the three known ones with arbitrary labels.
pub fn random_colors(rng: &mut impl Rng, len: usize) -> Vec<String> {
    const KNOWN: [&str; 3] = ["red", "green", "yellow"];
    (0..len)
        .map(|_| match rng.gen_range(0..4usize) {
            3 => format!("color-{}", rng.gen::<u16>()),
            index => KNOWN[index].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{
        get_seed, get_seeded_rng, get_seeded_rng_from_scope, get_seeds_lock, random_colors,
        random_identities,
    };

    #[test]
    fn test_get_seeded_rng_from_scope() {
        // Given
        let key = "test_get_seeded_rng_from_scope";
        let seed = 1u64;
        env::set_var(key, seed.to_string());

        // When
        get_seeded_rng_from_scope(key).unwrap();

        // Then
        assert!(get_seeds_lock().read().unwrap().contains_key(key));
        assert_eq!(seed, get_seed(key).unwrap())
    }

    #[test]
    fn test_random_identities() {
        // Given
        let mut rng = get_seeded_rng().unwrap();

        // When
        let result = random_identities(&mut rng, 32, 4);

        // Then
        assert_eq!(32, result.len());
        assert!(
            result.iter().all(|&id| id < 4),
            "Should stay below the given bound"
        );
    }

    #[test]
    fn test_random_colors() {
        // Given
        let mut rng = get_seeded_rng().unwrap();

        // When
        let result = random_colors(&mut rng, 16);

        // Then
        assert_eq!(16, result.len());
        assert!(result.iter().all(|color| !color.is_empty()));
    }
}
