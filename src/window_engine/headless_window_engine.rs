use super::r#trait::WindowEngine;

/// Hôte sans fenêtre : un nombre fixe de frames sur une surface de taille fixe.
#[derive(Debug, Clone)]
pub struct HeadlessWindowEngine {
    size: (i32, i32),
    frames_left: u64,
    presented: u64,
    closed: bool,
}

impl HeadlessWindowEngine {
    pub fn new(width: i32, height: i32, frames: u64) -> Self {
        Self {
            size: (width, height),
            frames_left: frames,
            presented: 0,
            closed: false,
        }
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    /// Simule un redimensionnement par l'hôte.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.size = (width, height);
    }
}

impl WindowEngine for HeadlessWindowEngine {
    fn poll_events(&mut self) {}

    fn present(&mut self) {
        self.presented += 1;
        self.frames_left = self.frames_left.saturating_sub(1);
    }

    fn should_close(&self) -> bool {
        self.closed || self.frames_left == 0
    }

    fn set_should_close(&mut self, value: bool) {
        self.closed = value;
    }

    fn get_size(&self) -> (i32, i32) {
        self.size
    }
}
