//! Deterministic pseudo-random numbers.

/// Linear congruential generator over `u32`.
///
/// There is no entropy source: the same seed always yields the same sequence.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    const MULTIPLIER: u32 = 134_253;
    const INCREMENT: u32 = 1_526_376_474;

    /// Creates a generator starting from `seed`.
    pub const fn new(seed: u32) -> Self {
        Lcg { state: seed }
    }

    /// Advances the state and returns it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(state: u32) -> u32 {
        ((u64::from(state) * 134_253 + 1_526_376_474) % (1u64 << 32)) as u32
    }

    #[test]
    fn test_seed_one_sequence() {
        let mut rng = Lcg::new(1);
        assert_eq!(rng.next(), 1_526_510_727);
        assert_eq!(rng.next(), 1_511_512_469);
        assert_eq!(rng.next(), 2_290_043_019);
    }

    #[test]
    fn test_matches_wide_arithmetic() {
        let mut rng = Lcg::new(1);
        let mut expected = 1;
        for _ in 0..1000 {
            expected = step(expected);
            assert_eq!(rng.next(), expected);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = Lcg::new(42);
        let mut b = Lcg::new(42);
        for _ in 0..16 {
            assert_eq!(a.next(), b.next());
        }
    }
}
