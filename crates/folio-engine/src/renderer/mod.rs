pub mod instance;

pub use instance::{FrameBuffer, LinkInstance, ParticleInstance};
