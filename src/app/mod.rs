mod app;
mod audio;
mod hearts;
mod stage;

pub use app::*;
pub use audio::*;
pub use hearts::*;
pub use stage::*;
