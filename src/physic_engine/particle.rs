use std::f32::consts::TAU;

use crate::physic_engine::{
    config::FireworksConfig,
    random::RandomSource,
    trail::Trail,
    types::{Color, ParticleOutcome, Point},
};

/// Étincelle issue d'une explosion. Cycle de vie terminal : elle s'éteint,
/// ne se transforme jamais.
#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Point,
    pub trail: Trail,

    /// Direction fixe, uniforme dans [0, 2π).
    pub angle: f32,
    /// Vitesse scalaire, amortie par `friction` à chaque pas.
    pub velocity: f32,
    pub friction: f32,
    /// Biais vertical (neutre à 1).
    pub gravity_factor: f32,

    /// Héritée de la fusée : identique pour toute la gerbe.
    pub color: Color,
    pub alpha: f32,
    /// Décrément d'alpha par pas, tiré une fois à la création.
    pub decay: f32,
}

impl Particle {
    /// Construit une étincelle avec des paramètres explicites.
    pub fn new(
        position: Point,
        color: Color,
        angle: f32,
        velocity: f32,
        decay: f32,
        config: &FireworksConfig,
    ) -> Self {
        Self {
            position,
            trail: Trail::filled(position, config.particle_trail_length),
            angle,
            velocity,
            friction: config.particle_friction,
            gravity_factor: config.particle_gravity,
            color,
            alpha: 1.0,
            decay,
        }
    }

    /// Tire angle, vitesse et décroissance dans leurs plages configurées.
    pub fn spark(
        position: Point,
        color: Color,
        rng: &mut impl RandomSource,
        config: &FireworksConfig,
    ) -> Self {
        let angle = rng.range(0.0, TAU);
        let velocity = rng.range(config.particle_velocity_min, config.particle_velocity_max);
        let decay = rng.range(config.particle_decay_min, config.particle_decay_max);
        Self::new(position, color, angle, velocity, decay, config)
    }

    /// Gerbe complète : `config.particles_per_burst` étincelles.
    pub fn burst(
        position: Point,
        color: Color,
        rng: &mut impl RandomSource,
        config: &FireworksConfig,
    ) -> Vec<Particle> {
        (0..config.particles_per_burst)
            .map(|_| Self::spark(position, color, &mut *rng, config))
            .collect()
    }

    /// Avance l'étincelle d'une frame.
    ///
    /// `Expired` dès que `alpha <= decay` après décrément : la particule est
    /// retirée juste avant d'atteindre un alpha non positif.
    pub fn advance(&mut self) -> ParticleOutcome {
        self.trail.push_front(self.position);
        self.velocity *= self.friction;

        let (sin, cos) = self.angle.sin_cos();
        self.position += Point::new(
            cos * self.velocity,
            sin * self.velocity * self.gravity_factor,
        );

        self.alpha -= self.decay;

        if self.alpha <= self.decay {
            ParticleOutcome::Expired
        } else {
            ParticleOutcome::Alive
        }
    }

    /// Segment de rendu : point le plus ancien de la traînée → position.
    #[inline]
    pub fn segment(&self) -> (Point, Point) {
        (self.trail.oldest(), self.position)
    }
}
