pub mod r#trait;
pub use r#trait::WindowEngine;

pub mod glfw_window_engine;
pub use self::glfw_window_engine::GlfwWindowEngine;

pub mod headless_window_engine;
pub use self::headless_window_engine::HeadlessWindowEngine;
