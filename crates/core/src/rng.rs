//! RNG module - tile value and placement randomness
//!
//! The game is generic over any [`rand::Rng`], so tests can inject a fixed source.
//! Gameplay uses ChaCha8: fast, and the same seed replays the same game.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{BASE_TILE_VALUE, FOUR_TILE_ODDS};

/// The RNG used for real games
pub type GameRng = ChaCha8Rng;

/// Create a deterministic game RNG
pub fn seeded(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Create a game RNG seeded from OS entropy
pub fn from_entropy() -> GameRng {
    GameRng::from_entropy()
}

/// Value of a freshly spawned tile: 4 once in [`FOUR_TILE_ODDS`] draws, otherwise 2.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..FOUR_TILE_ODDS) == 0 {
        BASE_TILE_VALUE * 2
    } else {
        BASE_TILE_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = seeded(12345);
        let mut rng2 = seeded(12345);

        for _ in 0..100 {
            assert_eq!(random_tile_value(&mut rng1), random_tile_value(&mut rng2));
        }
    }

    #[test]
    fn test_tile_values_are_mostly_twos() {
        let mut rng = seeded(7);
        let draws: Vec<u32> = (0..1000).map(|_| random_tile_value(&mut rng)).collect();

        assert!(draws.iter().all(|&v| v == 2 || v == 4));
        let fours = draws.iter().filter(|&&v| v == 4).count();
        // Expected ~100; generous bounds keep this stable across rand versions.
        assert!((30..=200).contains(&fours), "unexpected count of fours: {fours}");
    }
}
