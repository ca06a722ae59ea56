use crate::domain::ports::RandomSource;
use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source backed by `rand`'s standard generator.
///
/// Seed it for reproducible simulations, or draw the seed from the OS for play.
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    rng: StdRng,
}

impl StdRandomSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for StdRandomSource {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f32 {
        self.rng.sample(Standard)
    }
}

/// Random source replaying fixed scripts, for tests.
///
/// Both scripts cycle when they run out. Indices are reduced modulo the
/// requested bound; an empty script yields 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandomSource {
    indices: Vec<usize>,
    units: Vec<f32>,
    index_cursor: usize,
    unit_cursor: usize,
}

impl ScriptedRandomSource {
    pub fn new(indices: Vec<usize>, units: Vec<f32>) -> Self {
        Self {
            indices,
            units,
            ..Self::default()
        }
    }

    pub fn with_indices(indices: Vec<usize>) -> Self {
        Self::new(indices, Vec::new())
    }

    pub fn with_units(units: Vec<f32>) -> Self {
        Self::new(Vec::new(), units)
    }

    /// Number of draws served so far, integers and floats combined.
    pub fn draws(&self) -> usize {
        self.index_cursor + self.unit_cursor
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = match self.indices.len() {
            0 => 0,
            len => self.indices[self.index_cursor % len] % bound,
        };
        self.index_cursor += 1;
        value
    }

    fn next_unit(&mut self) -> f32 {
        let value = match self.units.len() {
            0 => 0.0,
            len => self.units[self.unit_cursor % len],
        };
        self.unit_cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_source_is_repeatable() {
        let mut a = StdRandomSource::seeded(42);
        let mut b = StdRandomSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_index(17), b.next_index(17));
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_std_source_ranges() {
        let mut source = StdRandomSource::from_entropy();
        for _ in 0..1_000 {
            assert!(source.next_index(5) < 5);
            let unit = source.next_unit();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedRandomSource::new(vec![1, 7], vec![0.25]);
        assert_eq!(source.next_index(10), 1);
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(10), 1);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.next_unit(), 0.25);
        assert_eq!(source.draws(), 5);
    }

    #[test]
    fn test_empty_script_yields_zero() {
        let mut source = ScriptedRandomSource::default();
        assert_eq!(source.next_index(3), 0);
        assert_eq!(source.next_unit(), 0.0);
    }
}
