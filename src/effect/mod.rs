pub mod config;
pub mod particle;
pub mod sampler;
pub mod system;

pub use config::*;
pub use particle::*;
pub use sampler::*;
pub use system::*;
