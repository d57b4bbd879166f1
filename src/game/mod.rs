//! Core game module containing shared components, resources, events, configuration and constants.

mod components;
mod config;
mod constants;
mod events;
mod resources;
mod sets;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use resources::*;
pub use sets::*;
