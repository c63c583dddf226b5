use crate::physic_engine::random::RandomSource;

/// Planificateur de lancements, cadencé en frames.
///
/// Un compteur persiste d'une frame à l'autre ; il est comparé à un seuil
/// re-tiré à chaque frame, qu'un lancement ait eu lieu ou non.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnScheduler {
    pub tick_counter: u32,
    pub interval_target: u32,
    interval_min: f32,
    interval_max: f32,
}

impl SpawnScheduler {
    pub fn new(interval_min: f32, interval_max: f32, rng: &mut impl RandomSource) -> Self {
        let mut scheduler = Self {
            tick_counter: 0,
            interval_target: 0,
            interval_min,
            interval_max,
        };
        scheduler.interval_target = scheduler.draw_interval(rng);
        scheduler
    }

    /// Entier uniforme dans [min, max] (arrondi d'un tirage réel).
    fn draw_interval(&self, rng: &mut impl RandomSource) -> u32 {
        rng.range(self.interval_min, self.interval_max)
            .round()
            .max(0.0) as u32
    }

    pub fn set_interval_range(&mut self, interval_min: f32, interval_max: f32) {
        self.interval_min = interval_min;
        self.interval_max = interval_max;
    }

    /// Exécute la comparaison de la frame courante.
    ///
    /// Retourne `true` si une fusée doit partir : le compteur repart alors de 0,
    /// sinon il est incrémenté. Le seuil est re-tiré dans tous les cas.
    pub fn tick(&mut self, rng: &mut impl RandomSource) -> bool {
        let fire = self.tick_counter >= self.interval_target;
        if fire {
            self.tick_counter = 0;
        } else {
            self.tick_counter += 1;
        }
        self.interval_target = self.draw_interval(rng);
        fire
    }

    /// Force le prochain `tick` à déclencher un lancement.
    pub fn force_next(&mut self) {
        self.tick_counter = self.interval_target;
    }
}
