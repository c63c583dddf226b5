use crate::physic_engine::config::FireworksConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::UpdateResult;

/// Visiteur appelé sur chaque entité vivante *avant* qu'elle avance.
///
/// C'est le point d'accroche du rendu : le dessin d'une frame reflète l'état
/// d'avant le pas de simulation, et une entité retirée pendant ce pas n'est
/// plus jamais visitée ensuite.
pub trait EntityVisitor {
    fn visit_rocket(&mut self, _rocket: &Rocket) {}
    fn visit_particle(&mut self, _particle: &Particle) {}
}

/// Visiteur nul : simulation sans rendu (tests, benchs).
impl EntityVisitor for () {}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs de simulation pilotés frame par frame.
/// Le `Simulator` ne connaît que ce trait : il fournit la taille de la surface
/// et un visiteur de rendu, le moteur fait le reste (pas physiques, cycles de
/// vie, planification des lancements).
pub trait PhysicEngine {
    /// Ajuste la taille de la surface (lue au moment de chaque lancement).
    fn set_surface_size(&mut self, width: f32, height: f32);

    /// Exécute une frame : visite + avance chaque fusée, puis chaque
    /// étincelle, puis la planification des lancements.
    fn update(&mut self, visitor: &mut dyn EntityVisitor) -> UpdateResult;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    /// Applique une nouvelle configuration. Retourne `false` si elle est refusée.
    fn reload_config(&mut self, config: &FireworksConfig) -> bool;

    fn get_config(&self) -> &FireworksConfig;

    fn rockets(&self) -> &[Rocket];

    fn particles(&self) -> &[Particle];
}
