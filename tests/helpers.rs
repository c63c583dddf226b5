#![allow(dead_code)]

use canvas_fireworks::physic_engine::{
    Color, EntityVisitor, FireworksConfig, Particle, Point, RandomSource, Rocket,
};
use canvas_fireworks::renderer_engine::{Canvas, CompositeMode, Rgba};
use canvas_fireworks::window_engine::WindowEngine;

// ==================================
// Canvas enregistreur
// ==================================

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Resize(u32, u32),
    Mode(CompositeMode),
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Rgba,
    },
    Stroke {
        from: Point,
        to: Point,
        color: Color,
        alpha: f32,
    },
    Flush,
    Close,
}

/// Canvas qui n'affiche rien et garde la trace de chaque appel.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// Opérations regroupées par frame (chaque frame se termine par `Flush`).
    pub fn frames(&self) -> Vec<&[CanvasOp]> {
        self.ops
            .split_inclusive(|op| *op == CanvasOp::Flush)
            .filter(|frame| frame.last() == Some(&CanvasOp::Flush))
            .collect()
    }

    pub fn strokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Stroke { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(CanvasOp::Resize(width, height));
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.ops.push(CanvasOp::Mode(mode));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) {
        self.ops.push(CanvasOp::FillRect {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f32) {
        self.ops.push(CanvasOp::Stroke {
            from,
            to,
            color,
            alpha,
        });
    }

    fn flush(&mut self) {
        self.ops.push(CanvasOp::Flush);
    }

    fn close(&mut self) {
        self.ops.push(CanvasOp::Close);
    }
}

// ==================================
// Fenêtre simulée
// ==================================

/// Hôte factice : budget de frames, taille modifiable, journal des appels.
#[derive(Debug)]
pub struct MockWindow {
    pub size: (i32, i32),
    pub frames_left: u32,
    pub closed: bool,
    pub log: Vec<&'static str>,
}

impl MockWindow {
    pub fn new(width: i32, height: i32, frames: u32) -> Self {
        Self {
            size: (width, height),
            frames_left: frames,
            closed: false,
            log: Vec::new(),
        }
    }

    pub fn presented(&self) -> usize {
        self.log.iter().filter(|call| **call == "present").count()
    }
}

impl WindowEngine for MockWindow {
    fn poll_events(&mut self) {
        self.log.push("poll_events");
    }

    fn present(&mut self) {
        self.log.push("present");
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

// ==================================
// Sources de hasard scriptées
// ==================================

/// Rejoue une suite de valeurs en boucle, sans tenir compte de l'intervalle.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<f32>,
    cursor: usize,
    pub calls: Vec<(f32, f32)>,
}

impl ScriptedRandom {
    pub fn new(script: Vec<f32>) -> Self {
        Self {
            script,
            cursor: 0,
            calls: Vec::new(),
        }
    }

    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        self.calls.push((min, max));
        if self.script.is_empty() {
            return min;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value
    }
}

/// Renvoie toujours le milieu de l'intervalle : trajectoires entièrement prévisibles.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointRandom;

impl RandomSource for MidpointRandom {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            (min + max) / 2.0
        } else {
            min
        }
    }
}

// ==================================
// Visiteur espion
// ==================================

/// Garde la trace de chaque entité visitée (donc dessinée) pendant une frame.
#[derive(Debug, Default)]
pub struct SpyVisitor {
    pub rockets: Vec<(u64, Point)>,
    pub particles: Vec<(Point, f32)>,
}

impl EntityVisitor for SpyVisitor {
    fn visit_rocket(&mut self, rocket: &Rocket) {
        self.rockets.push((rocket.id, rocket.current_position));
    }

    fn visit_particle(&mut self, particle: &Particle) {
        self.particles.push((particle.position, particle.alpha));
    }
}

/// Configuration sans lancement automatique (le planificateur n'atteint jamais son seuil).
pub fn config_without_launches() -> FireworksConfig {
    FireworksConfig {
        spawn_interval_min: 1_000_000.0,
        spawn_interval_max: 1_000_000.0,
        ..FireworksConfig::default()
    }
}

/// Nombre de pas jusqu'à l'explosion (`None` si rien après `limit` pas).
pub fn steps_to_completion(rocket: &mut Rocket, limit: usize) -> Option<usize> {
    use canvas_fireworks::physic_engine::RocketOutcome;
    (1..=limit).find(|_| matches!(rocket.advance(), RocketOutcome::Completed { .. }))
}
