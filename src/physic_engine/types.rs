pub use glam::Vec2;

/// Coordonnée 2D sur la surface de dessin (axe y orienté vers le bas).
pub type Point = Vec2;

/// Couleur RGB, chaque canal nominalement dans [0, 255).
///
/// Aucune validation : les canvas doivent tolérer des valeurs hors plage
/// (ils clampent au moment d'écrire dans leur propre format).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(255.0, 255.0, 255.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Canaux normalisés dans [0, 1] (clampés), pour les canvas.
    pub fn to_unit_rgb(self) -> [f32; 3] {
        [
            (self.r / 255.0).clamp(0.0, 1.0),
            (self.g / 255.0).clamp(0.0, 1.0),
            (self.b / 255.0).clamp(0.0, 1.0),
        ]
    }
}

/// Résultat d'un pas de simulation d'une fusée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RocketOutcome {
    Continuing,
    /// La fusée a atteint sa cible : explosion à `position` avec `color`.
    Completed { position: Point, color: Color },
}

/// Résultat d'un pas de simulation d'une étincelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleOutcome {
    Alive,
    Expired,
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'une frame de simulation (événements + compteurs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Cible de la fusée lancée pendant cette frame, s'il y en a une.
    pub new_rocket: Option<Point>,
    /// Positions des explosions déclenchées pendant cette frame.
    pub triggered_explosions: Vec<Point>,
    /// Étincelles retirées (alpha épuisé).
    pub expired_particles: usize,
    /// Étincelles abandonnées par le plafond `max_particles`.
    pub dropped_particles: usize,
    /// Lancements ignorés par le plafond `max_rockets`.
    pub skipped_launches: usize,
    pub live_rockets: usize,
    pub live_particles: usize,
}
