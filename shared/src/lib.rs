mod burst;
mod celebration;
mod color;
mod config;
mod evade;
mod fireworks;
mod hearts;
mod particle;
mod surface;

pub use burst::*;
pub use celebration::*;
pub use color::*;
pub use config::*;
pub use evade::*;
pub use fireworks::*;
pub use hearts::*;
pub use particle::*;
pub use surface::*;
