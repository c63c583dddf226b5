use log::{debug, info, warn};
use std::sync::atomic::Ordering;

use crate::physic_engine::{
    config::FireworksConfig,
    particle::Particle,
    pools::EntityPool,
    random::{RandomSource, RngSource},
    rocket::{Rocket, ROCKET_ID_COUNTER},
    spawn_scheduler::SpawnScheduler,
    types::{Color, ParticleOutcome, Point, RocketOutcome, UpdateResult},
    EntityVisitor, PhysicEngine,
};

/// Moteur de feux d'artifice : possède les deux pools, le planificateur de
/// lancements et la source de hasard.
#[derive(Debug)]
pub struct PhysicEngineFireworks<R: RandomSource = RngSource> {
    rockets: EntityPool<Rocket>,
    particles: EntityPool<Particle>,
    scheduler: SpawnScheduler,

    width: f32,
    height: f32,
    rng: R,

    config: FireworksConfig,
}

impl PhysicEngineFireworks<RngSource> {
    /// Moteur avec hasard système, ou rejouable si `config.seed` est fixé.
    pub fn new(config: &FireworksConfig, width: f32, height: f32) -> Self {
        Self::with_random(config, width, height, RngSource::from_seed_option(config.seed))
    }
}

impl<R: RandomSource> PhysicEngineFireworks<R> {
    pub fn with_random(config: &FireworksConfig, width: f32, height: f32, mut rng: R) -> Self {
        // reset counter for rocket
        ROCKET_ID_COUNTER.store(0, Ordering::Relaxed);

        let scheduler =
            SpawnScheduler::new(config.spawn_interval_min, config.spawn_interval_max, &mut rng);

        Self {
            rockets: EntityPool::with_capacity(config.max_rockets.min(64)),
            particles: EntityPool::with_capacity(config.particles_per_burst * 8),
            scheduler,
            width,
            height,
            rng,
            config: config.clone(),
        }
    }

    pub fn scheduler(&self) -> &SpawnScheduler {
        &self.scheduler
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Ajoute une fusée au pool (soumis au plafond `max_rockets`).
    pub fn push_rocket(&mut self, rocket: Rocket) -> bool {
        if self.rockets.len() >= self.config.max_rockets {
            debug!(
                "🚫 Rocket {} skipped: {} rockets in flight (max {})",
                rocket.id,
                self.rockets.len(),
                self.config.max_rockets
            );
            return false;
        }
        self.rockets.push(rocket);
        true
    }

    /// Ajoute une gerbe d'étincelles (soumise au plafond `max_particles`).
    /// Retourne le nombre d'étincelles perdues.
    pub fn push_burst(&mut self, position: Point, color: Color) -> usize {
        let sparks = Particle::burst(position, color, &mut self.rng, &self.config);
        self.particles.extend_bounded(
            sparks,
            self.config.max_particles,
            self.config.particle_overflow,
        )
    }

    pub fn update(&mut self, visitor: &mut dyn EntityVisitor) -> UpdateResult {
        let mut result = UpdateResult::default();

        // 1. Fusées : dessin puis pas ; explosion => retrait dans la même frame
        let mut bursts = Vec::new();
        self.rockets.advance_all(|rocket| {
            visitor.visit_rocket(rocket);
            match rocket.advance() {
                RocketOutcome::Continuing => true,
                RocketOutcome::Completed { position, color } => {
                    debug!(
                        "💥 Rocket {} burst at ({:.1}, {:.1})",
                        rocket.id, position.x, position.y
                    );
                    bursts.push((position, color));
                    false
                }
            }
        });

        for (position, color) in bursts {
            result.dropped_particles += self.push_burst(position, color);
            result.triggered_explosions.push(position);
        }

        // 2. Étincelles, y compris celles nées dans cette frame
        result.expired_particles = self.particles.advance_all(|particle| {
            visitor.visit_particle(particle);
            particle.advance() == ParticleOutcome::Alive
        });

        // 3. Planification des lancements
        if self.scheduler.tick(&mut self.rng) {
            let rocket = Rocket::launch(&mut self.rng, self.width, self.height, &self.config);
            let target = rocket.target_position;
            let id = rocket.id;
            if self.push_rocket(rocket) {
                debug!("🚀 Rocket {} launched toward ({:.1}, {:.1})", id, target.x, target.y);
                result.new_rocket = Some(target);
            } else {
                result.skipped_launches += 1;
            }
        }

        result.live_rockets = self.rockets.len();
        result.live_particles = self.particles.len();
        result
    }

    pub fn reload_config(&mut self, new_config: &FireworksConfig) -> bool {
        if let Err(err) = new_config.validate() {
            warn!("Fireworks config rejected: {err:#}");
            return false;
        }
        info!("Fireworks config reloaded");
        self.config = new_config.clone();
        self.scheduler
            .set_interval_range(new_config.spawn_interval_min, new_config.spawn_interval_max);
        true
    }
}

impl<R: RandomSource> PhysicEngine for PhysicEngineFireworks<R> {
    fn set_surface_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn update(&mut self, visitor: &mut dyn EntityVisitor) -> UpdateResult {
        self.update(visitor)
    }

    fn close(&mut self) {
        self.rockets.clear();
        self.particles.clear();
        debug!("PhysicEngineFireworks closed and reset.");
    }

    fn reload_config(&mut self, config: &FireworksConfig) -> bool {
        self.reload_config(config)
    }

    fn get_config(&self) -> &FireworksConfig {
        &self.config
    }

    fn rockets(&self) -> &[Rocket] {
        self.rockets.as_slice()
    }

    fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }
}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait PhysicEngineTestHelpers {
    fn force_next_launch(&mut self);
    fn rockets_count(&self) -> usize;
    fn particles_count(&self) -> usize;
}

#[cfg(any(test, feature = "test_helpers"))]
impl<R: RandomSource> PhysicEngineTestHelpers for PhysicEngineFireworks<R> {
    fn force_next_launch(&mut self) {
        self.scheduler.force_next();
    }

    fn rockets_count(&self) -> usize {
        self.rockets.len()
    }

    fn particles_count(&self) -> usize {
        self.particles.len()
    }
}
