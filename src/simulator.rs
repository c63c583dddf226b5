use crate::physic_engine::{PhysicEngine, UpdateResult};
use crate::renderer_engine::{fade_canvas, Canvas, CanvasPainter};
use crate::window_engine::WindowEngine;
use crate::{log_metrics_and_fps, profiler::Profiler};
use log::{debug, info};
use std::time::{Duration, Instant};

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Pilote de frames : relie la surface de dessin, le moteur physique et
/// l'hôte qui cadence l'animation.
pub struct Simulator<C, P, W>
where
    C: Canvas,
    P: PhysicEngine,
    W: WindowEngine,
{
    canvas: C,
    physic_engine: P,
    window_engine: W,

    frames: u64,
    window_size: (i32, i32),

    profiler: Profiler,
    last_log: Instant,
    first_frame: bool,
}

impl<C, P, W> Simulator<C, P, W>
where
    C: Canvas,
    P: PhysicEngine,
    W: WindowEngine,
{
    pub fn new(mut canvas: C, mut physic_engine: P, window_engine: W) -> Self {
        let window_size = window_engine.get_size();
        let (width, height) = clamp_size(window_size);
        canvas.resize(width, height);
        physic_engine.set_surface_size(width as f32, height as f32);

        Self {
            canvas,
            physic_engine,
            window_engine,
            frames: 0,
            window_size,
            profiler: Profiler::new(200),
            last_log: Instant::now(),
            first_frame: true,
        }
    }

    /// Boucle auto-entretenue : une frame par tour jusqu'à la fermeture de l'hôte.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step() {}
        info!("🏁 Simulation stopped after {} frames", self.frames);
        Ok(())
    }

    /// Exécute une frame complète. Retourne `false` si l'hôte est fermé.
    pub fn step(&mut self) -> bool {
        if self.window_engine.should_close() {
            return false;
        }

        self.window_engine.poll_events();
        self.sync_surface_size();

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame();
        self.frames += 1;

        let fade_alpha = self.physic_engine.get_config().fade_alpha;
        self.profiler
            .profile_block("render - fade", || fade_canvas(&mut self.canvas, fade_alpha));

        let update_result = self.profiler.profile_block("physic - update", || {
            let config = self.physic_engine.get_config().clone();
            let mut painter = CanvasPainter::new(&mut self.canvas, &config);
            let result = self.physic_engine.update(&mut painter);
            self.profiler.record_metric("segments drawn", painter.strokes);
            result
        });
        self.record_frame_metrics(&update_result);

        self.profiler.profile_block("render - flush", || self.canvas.flush());
        self.window_engine.present();

        if self.last_log.elapsed() >= LOG_INTERVAL {
            log_metrics_and_fps!(&self.profiler);
            self.last_log = Instant::now();
        }

        if self.first_frame {
            info!("🚀 First frame rendered");
            self.first_frame = false;
        }

        true
    }

    fn sync_surface_size(&mut self) {
        let size = self.window_engine.get_size();
        if size == self.window_size {
            return;
        }
        self.window_size = size;
        let (width, height) = clamp_size(size);
        debug!("Surface resized to {} x {}", width, height);
        self.canvas.resize(width, height);
        self.physic_engine
            .set_surface_size(width as f32, height as f32);
    }

    fn record_frame_metrics(&self, update_result: &UpdateResult) {
        if let Some(target) = update_result.new_rocket {
            debug!("🚀 Rocket spawned toward ({:.1}, {:.1})", target.x, target.y);
        }
        for (i, burst) in update_result.triggered_explosions.iter().enumerate() {
            debug!("💥 Burst {} at ({:.1}, {:.1})", i, burst.x, burst.y);
        }
        if update_result.dropped_particles > 0 || update_result.skipped_launches > 0 {
            debug!(
                "🚫 Soft cap reached: {} particles dropped, {} launches skipped",
                update_result.dropped_particles, update_result.skipped_launches
            );
        }

        self.profiler
            .record_metric("live rockets", update_result.live_rockets);
        self.profiler
            .record_metric("live particles", update_result.live_particles);
        self.profiler
            .record_metric("bursts", update_result.triggered_explosions.len());
        self.profiler
            .record_metric("dropped particles", update_result.dropped_particles);
    }

    pub fn close(&mut self) {
        self.canvas.close();
        self.physic_engine.close();
        // la fenêtre est libérée au drop
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn physic_engine_mut(&mut self) -> &mut P {
        &mut self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn window_engine_mut(&mut self) -> &mut W {
        &mut self.window_engine
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }
}

fn clamp_size((width, height): (i32, i32)) -> (u32, u32) {
    (width.max(0) as u32, height.max(0) as u32)
}
