use crate::physic_engine::{EntityVisitor, FireworksConfig, Particle, Rocket};
use crate::renderer_engine::{Canvas, CompositeMode, Rgba};

/// Estompe la frame précédente : rectangle noir semi-transparent en mode
/// « gomme », puis bascule en mode additif pour le dessin des entités.
pub fn fade_canvas<C: Canvas + ?Sized>(canvas: &mut C, fade_alpha: f32) {
    let (width, height) = canvas.size();
    canvas.set_composite_mode(CompositeMode::DestinationOut);
    canvas.fill_rect(0.0, 0.0, width, height, Rgba::new(0.0, 0.0, 0.0, fade_alpha));
    canvas.set_composite_mode(CompositeMode::Lighter);
}

/// Visiteur de rendu : trace le segment de traînée de chaque entité.
///
/// Ne modifie aucun état de simulation.
pub struct CanvasPainter<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
    modulate_particle_alpha: bool,
    pub strokes: usize,
}

impl<'a, C: Canvas + ?Sized> CanvasPainter<'a, C> {
    pub fn new(canvas: &'a mut C, config: &FireworksConfig) -> Self {
        Self {
            canvas,
            modulate_particle_alpha: config.modulate_particle_alpha,
            strokes: 0,
        }
    }
}

impl<C: Canvas + ?Sized> EntityVisitor for CanvasPainter<'_, C> {
    fn visit_rocket(&mut self, rocket: &Rocket) {
        let (from, to) = rocket.segment();
        self.canvas.stroke_line(from, to, rocket.color, 1.0);
        self.strokes += 1;
    }

    fn visit_particle(&mut self, particle: &Particle) {
        let (from, to) = particle.segment();
        let alpha = if self.modulate_particle_alpha {
            particle.alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.canvas.stroke_line(from, to, particle.color, alpha);
        self.strokes += 1;
    }
}
