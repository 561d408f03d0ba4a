//! Uniform random draws used by the track generators.

use rand::Rng;

/// The two kinds of draw the generators make.
///
/// Every [`rand::Rng`] is a source. Tests can script draws by implementing this
/// directly.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Picks one element of `items` uniformly, or `None` for an empty slice.
pub fn choose<'a, T, R: RandomSource + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_index(items.len()))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn seeded_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let unit = rng.next_unit();
            assert!((0.0..1.0).contains(&unit));
            assert!(rng.next_index(3) < 3);
        }
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose::<u8, _>(&[], &mut rng), None);
        assert_eq!(choose(&[5], &mut rng), Some(&5));
    }
}
