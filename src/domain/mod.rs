//! Domain layer - voice command vocabulary and the fitness records it touches.

pub mod fitness;
pub mod foundation;
pub mod voice;
