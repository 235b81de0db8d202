//! RNG module - uniform random piece generation
//!
//! Every spawn picks one of the seven kinds with equal probability. There is no
//! bag: repeats and droughts are possible, as in classic falling-block games.
//!
//! The generator is a small LCG so a seed fully determines the piece sequence.

use crate::piece::Piece;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would still cycle, but keep seed 0 distinct from "unset".
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces new pieces of uniformly random kind at the spawn position.
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: SimpleRng,
}

impl PieceSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Pick the next kind.
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Spawn a fresh piece at top-center. Legality is the caller's concern.
    pub fn spawn(&mut self) -> Piece {
        Piece::spawn(self.next_kind())
    }
}

impl Default for PieceSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_spawner_same_seed_same_sequence() {
        let mut a = PieceSpawner::new(99);
        let mut b = PieceSpawner::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_spawner_covers_every_kind() {
        let mut spawner = PieceSpawner::new(1);
        let mut seen = [false; 7];
        for _ in 0..700 {
            let kind = spawner.next_kind();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_spawned_piece_is_at_spawn_position() {
        let mut spawner = PieceSpawner::new(3);
        for _ in 0..20 {
            let piece = spawner.spawn();
            assert_eq!(piece, Piece::spawn(piece.kind));
        }
    }
}
