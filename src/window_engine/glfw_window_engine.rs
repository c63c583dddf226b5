use anyhow::{anyhow, Result};
use glfw::Context;
use log::{info, warn};

use super::r#trait::WindowEngine;
use crate::renderer_engine::tools::{setup_opengl_debug, show_opengl_context_info};

pub type WindowEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

/// Fenêtre GLFW + contexte OpenGL 3.3 core, synchronisée sur le vsync.
pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: WindowEvents,
}

impl GlfwWindowEngine {
    pub fn init(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|err| anyhow!("Impossible d'initialiser GLFW: {err:?}"))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or_else(|| anyhow!("Erreur création fenêtre GLFW"))?;

        window.make_current();
        window.set_framebuffer_size_polling(true);
        // une frame par rafraîchissement écran
        glfw.set_swap_interval(glfw::SwapInterval::Sync(1));

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        unsafe {
            show_opengl_context_info();
            if gl::DebugMessageCallback::is_loaded() {
                setup_opengl_debug();
            } else {
                warn!("glDebugMessageCallback unavailable, OpenGL debug output disabled");
            }
        }

        Ok(Self {
            glfw,
            window,
            events,
        })
    }
}

impl WindowEngine for GlfwWindowEngine {
    fn poll_events(&mut self) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::FramebufferSize(w, h) = event {
                info!("🖥️ Window resized: {} x {}", w, h);
            }
        }
    }

    fn present(&mut self) {
        self.window.swap_buffers();
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn get_size(&self) -> (i32, i32) {
        self.window.get_framebuffer_size()
    }
}
