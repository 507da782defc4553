//! Shared glue for the chapter programs: application and context setup,
//! shader and mesh management, settings, and logging.

pub mod app;
pub mod config;
pub mod logging;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use config::*;
pub use mesh::*;
pub use shader::*;
