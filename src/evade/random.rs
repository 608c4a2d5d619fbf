use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform values in `[0, 1)`.
///
/// Any `FnMut() -> f32` closure is a source, so tests can feed fixed
/// sequences and assert exact coordinates.
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f32,
{
    fn next_unit(&mut self) -> f32 {
        self()
    }
}

/// Default source backed by `StdRng`
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }

    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.0.random::<f32>()
    }
}

/// Replay a fixed list of draws, repeating the last one when exhausted
#[cfg(test)]
pub fn sequence(values: Vec<f32>) -> impl FnMut() -> f32 + Send + Sync {
    let mut index = 0;
    move || {
        let value = values
            .get(index)
            .or_else(|| values.last())
            .copied()
            .unwrap_or(0.5);
        index += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_values_are_unit_range() {
        let mut rng = SeededRandom::from_seed(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        for _ in 0..16 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_sequence_repeats_last_value() {
        let mut seq = sequence(vec![0.1, 0.9]);
        assert_eq!(seq.next_unit(), 0.1);
        assert_eq!(seq.next_unit(), 0.9);
        assert_eq!(seq.next_unit(), 0.9);
    }
}
