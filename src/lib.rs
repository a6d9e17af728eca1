pub mod config;
pub mod engine;
pub mod environment;
pub mod render;
pub mod segments;
pub mod utils;

pub use config::*;
pub use engine::*;
pub use environment::*;
pub use render::*;
pub use segments::*;
pub use utils::*;
