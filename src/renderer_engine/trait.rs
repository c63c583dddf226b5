use crate::physic_engine::{Color, Point};

/// Modes de composition supportés par une surface de dessin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Composition standard (la source recouvre la destination).
    #[default]
    SourceOver,
    /// « Gomme » : la destination est atténuée de l'alpha de la source.
    DestinationOut,
    /// Additif : les tracés qui se chevauchent s'éclaircissent.
    Lighter,
}

/// Couleur RGBA pour les remplissages ; canaux RGB dans [0, 255], alpha dans [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Color,
    pub alpha: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self {
            color: Color::new(r, g, b),
            alpha,
        }
    }
}

/// Surface de dessin 2D fournie par l'hôte (axe y vers le bas).
///
/// Le moteur n'a besoin que de trois primitives : le mode de composition,
/// le remplissage de rectangle et le tracé de segment.
pub trait Canvas {
    /// Dimensions courantes (largeur, hauteur) en pixels.
    fn size(&self) -> (f32, f32);

    /// Redimensionne la surface (le contenu peut être perdu).
    fn resize(&mut self, width: u32, height: u32);

    fn set_composite_mode(&mut self, mode: CompositeMode);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba);

    /// Trace un segment d'un pixel de large de `from` à `to`.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f32);

    /// Soumet le travail en attente à la fin de la frame.
    fn flush(&mut self) {}

    /// Libère les ressources de la surface.
    fn close(&mut self) {}
}
