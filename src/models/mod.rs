mod hero;
mod hero_power;
mod power;

pub use hero::*;
pub use hero_power::*;
pub use power::*;
