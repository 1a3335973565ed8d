//! Particle motes
//!
//! Motes are tiny, world-lit particles. Simulation and batching are the host
//! engine's job; motes only keep their own state and emit vertices.

pub mod mote;
pub mod render;

pub use mote::{MoteState, ParticleMote};
pub use render::{Camera, VertexConsumer};
