use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source de hasard uniforme utilisée par la simulation.
///
/// Injectable pour que les tests puissent imposer des trajectoires exactes.
pub trait RandomSource {
    /// Tire une valeur uniforme dans `[min, max)`.
    ///
    /// Un intervalle vide ou dégénéré (`min >= max`, NaN) renvoie `min`
    /// plutôt que de paniquer : une surface de taille nulle reste valide.
    fn range(&mut self, min: f32, max: f32) -> f32;
}

/// Adaptateur `rand::Rng` → `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Graine fixe si fournie, sinon entropie système.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn range(&mut self, min: f32, max: f32) -> f32 {
        // `random_range` panique sur un intervalle vide
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_stays_in_half_open_interval() {
        let mut rng = RngSource::seeded(7);
        for _ in 0..1000 {
            let v = rng.range(0.015, 0.06);
            assert!((0.015..0.06).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_degenerate_interval_returns_min() {
        let mut rng = RngSource::seeded(7);
        assert_eq!(rng.range(0.0, 0.0), 0.0);
        assert_eq!(rng.range(5.0, 2.0), 5.0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.range(0.0, 1.0), b.range(0.0, 1.0));
        }
    }
}
