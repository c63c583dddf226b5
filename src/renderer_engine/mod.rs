pub mod r#trait;
pub use r#trait::{Canvas, CompositeMode, Rgba};

pub mod painter;
pub use self::painter::{fade_canvas, CanvasPainter};

pub mod software_canvas;
pub use self::software_canvas::SoftwareCanvas;

pub mod gl_canvas;
pub use self::gl_canvas::GlCanvas;

pub mod shader;

pub mod tools;
pub use self::tools::{setup_opengl_debug, show_opengl_context_info};
