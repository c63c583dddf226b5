use std::sync::atomic::{AtomicU64, Ordering};

use crate::physic_engine::{
    config::FireworksConfig,
    random::RandomSource,
    trail::Trail,
    types::{Color, Point, RocketOutcome},
};

/// Compteur global pour générer des ID uniques pour les rockets
pub static ROCKET_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Rayon cosmétique : croît de `TARGET_RADIUS_STEP` par frame dans [1, 8).
pub const TARGET_RADIUS_MIN: f32 = 1.0;
pub const TARGET_RADIUS_MAX: f32 = 8.0;
pub const TARGET_RADIUS_STEP: f32 = 0.3;

/// Représentation d’une fusée en vol, du point de lancement jusqu'à sa cible.
#[derive(Debug, Clone)]
pub struct Rocket {
    /// ID unique de la rocket
    pub id: u64,

    pub current_position: Point,
    pub start_position: Point,
    pub target_position: Point,

    /// Distance euclidienne départ → cible, calculée une fois.
    pub total_distance: f32,
    /// Distance départ → *prochaine* position projetée, recalculée à chaque pas.
    pub distance_traveled: f32,

    pub trail: Trail,

    /// Cap de lancement fixe (atan2 de cible − départ).
    pub angle: f32,
    pub velocity: f32,
    pub acceleration: f32,

    /// Purement visuel, n'intervient pas dans la physique.
    pub target_radius: f32,
    pub color: Color,
}

impl Rocket {
    pub fn new(start: Point, target: Point, color: Color, config: &FireworksConfig) -> Self {
        let delta = target - start;
        Self {
            id: ROCKET_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            current_position: start,
            start_position: start,
            target_position: target,
            total_distance: start.distance(target),
            distance_traveled: 0.0,
            trail: Trail::filled(start, config.rocket_trail_length),
            angle: delta.y.atan2(delta.x),
            velocity: config.rocket_initial_velocity,
            acceleration: config.rocket_acceleration,
            target_radius: TARGET_RADIUS_MIN,
            color,
        }
    }

    /// Lance une fusée depuis le bas-centre de la surface vers une cible
    /// aléatoire dans la moitié haute, avec une couleur aléatoire.
    pub fn launch(
        rng: &mut impl RandomSource,
        width: f32,
        height: f32,
        config: &FireworksConfig,
    ) -> Self {
        let start = Point::new(width / 2.0, height);
        let target = Point::new(rng.range(0.0, width), rng.range(0.0, height / 2.0));
        let color = Color::new(
            rng.range(0.0, 255.0),
            rng.range(0.0, 255.0),
            rng.range(0.0, 255.0),
        );
        Self::new(start, target, color, config)
    }

    /// Avance la fusée d'une frame.
    ///
    /// Sur `Completed`, la position courante n'est pas déplacée : l'appelant
    /// retire la fusée du pool dans la même frame.
    pub fn advance(&mut self) -> RocketOutcome {
        self.trail.push_front(self.current_position);

        if self.target_radius < TARGET_RADIUS_MAX {
            self.target_radius += TARGET_RADIUS_STEP;
        } else {
            self.target_radius = TARGET_RADIUS_MIN;
        }

        self.velocity *= self.acceleration;
        let velocity_vector = Point::from_angle(self.angle) * self.velocity;
        let projected = self.current_position + velocity_vector;

        self.distance_traveled = self.start_position.distance(projected);

        if self.distance_traveled >= self.total_distance {
            RocketOutcome::Completed {
                position: self.target_position,
                color: self.color,
            }
        } else {
            self.current_position = projected;
            RocketOutcome::Continuing
        }
    }

    /// Segment de rendu : point le plus ancien de la traînée → position courante.
    #[inline]
    pub fn segment(&self) -> (Point, Point) {
        (self.trail.oldest(), self.current_position)
    }
}
