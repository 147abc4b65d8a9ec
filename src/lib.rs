//! Open a window and draw a small, time-animated shape with raw OpenGL.

pub mod config;
pub mod error;
#[macro_use]
pub mod gl_wrappers;
pub mod logging;
pub mod render;
pub mod render_vec;
pub mod scene;
pub mod shaders;
pub mod time;
pub mod vertex;
pub mod window;

pub use config::Config;
pub use error::{Error, Result};
pub use render::Renderer;
pub use scene::SceneKind;
pub use vertex::Vertex;
