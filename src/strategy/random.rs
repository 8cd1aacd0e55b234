use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Throws uniformly at random.
#[derive(Debug, Clone)]
pub struct Random {
    rng: SmallRng,
}

impl Random {
    /// Reproducible sequence of throws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Strategy for Random {
    fn decide(&mut self, _: &Turn) -> Option<Move> {
        Move::all().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TURN: Turn = Turn {
        id: 1,
        max_rounds: 100,
        number: 0,
    };

    #[test]
    fn always_moves() {
        let ref mut random = Random::default();
        for _ in 0..64 {
            assert!(random.decide(&TURN).is_some());
        }
    }
    #[test]
    fn seeded_is_reproducible() {
        let ref mut a = Random::seeded(7);
        let ref mut b = Random::seeded(7);
        for _ in 0..32 {
            assert_eq!(a.decide(&TURN), b.decide(&TURN));
        }
    }
    #[test]
    fn covers_every_move() {
        let ref mut random = Random::seeded(42);
        let seen = (0..256)
            .filter_map(|_| random.decide(&TURN))
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), 3);
    }
}
