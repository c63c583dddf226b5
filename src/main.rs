// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::info;
use std::{env, path::PathBuf};

use canvas_fireworks::physic_engine::{FireworksConfig, PhysicEngineFireworks};
use canvas_fireworks::renderer_engine::{GlCanvas, SoftwareCanvas};
use canvas_fireworks::utils::show_rust_core_dependencies;
use canvas_fireworks::window_engine::{GlfwWindowEngine, HeadlessWindowEngine};
use canvas_fireworks::Simulator;

const CONFIG_PATH: &str = "assets/config/fireworks.toml";
const DEFAULT_HEADLESS_FRAMES: u64 = 240;

/// Main entry point for the Fireworks application.
fn main() -> Result<()> {
    env_logger::init();

    info!("🚀 Starting Canvas Fireworks...");

    show_rust_core_dependencies();

    let config = FireworksConfig::from_file(CONFIG_PATH).unwrap_or_default();
    info!("Fireworks config loaded:\n{:#?}", config);

    // --------------------------
    // Chemin d'export PNG => mode sans fenêtre
    // --------------------------
    let export_path = env::args()
        .nth(1) // priorité à l'argument CLI
        .map(PathBuf::from)
        .or_else(|| env::var("FIREWORKS_EXPORT").ok().map(PathBuf::from));

    let window_width = 1024;
    let window_height = 800;

    match export_path {
        Some(path) => run_headless(&config, window_width, window_height, &path),
        None => run_windowed(&config, window_width, window_height),
    }
}

fn run_windowed(config: &FireworksConfig, width: u32, height: u32) -> Result<()> {
    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(width, height, "Canvas Fireworks")?;

    // 2. Init Canvas (now that GL context is ready)
    let canvas = GlCanvas::new(width, height)?;

    let physic_engine = PhysicEngineFireworks::new(config, width as f32, height as f32);

    // 3. Init Simulator
    let mut simulator = Simulator::new(canvas, physic_engine, window_engine);
    simulator.run()?;
    simulator.close();

    Ok(())
}

fn run_headless(
    config: &FireworksConfig,
    width: u32,
    height: u32,
    export_path: &std::path::Path,
) -> Result<()> {
    let frames = env::var("FIREWORKS_HEADLESS_FRAMES")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(DEFAULT_HEADLESS_FRAMES);
    info!(
        "Headless run: {} frames, export to {}",
        frames,
        export_path.display()
    );

    let window_engine = HeadlessWindowEngine::new(width as i32, height as i32, frames);
    let canvas = SoftwareCanvas::new(width, height);
    let physic_engine = PhysicEngineFireworks::new(config, width as f32, height as f32);

    let mut simulator = Simulator::new(canvas, physic_engine, window_engine);
    simulator.run()?;

    simulator.canvas().save_png(export_path)?;
    simulator.close();

    Ok(())
}
