/// Hôte de la boucle d'animation : fournit la cadence des frames et les
/// dimensions de la surface.
///
/// Le `Simulator` appelle, à chaque frame : `should_close` → `poll_events`
/// → (simulation + rendu) → `present`. C'est l'équivalent d'un
/// « exécute-moi avant le prochain rafraîchissement » ré-enregistré à chaque
/// frame.
pub trait WindowEngine {
    fn poll_events(&mut self);

    /// Termine la frame (échange de buffers, attente vsync...).
    fn present(&mut self);

    fn should_close(&self) -> bool;

    fn set_should_close(&mut self, value: bool);

    /// Taille de la surface de dessin en pixels.
    fn get_size(&self) -> (i32, i32);
}
