pub mod config;
pub mod particles;
pub mod physics;
pub mod viewport;

pub use config::*;
pub use particles::*;
pub use viewport::*;
