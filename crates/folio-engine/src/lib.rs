pub mod api;
pub mod core;
pub mod field;
pub mod input;
pub mod renderer;
pub mod extensions;
#[cfg(feature = "chat")]
pub mod chat;

// Re-export key types at crate root for convenience
pub use api::config::{FieldConfig, FieldParams, FolioConfig, RevealConfig, MAX_PARTICLES};
pub use api::error::ConfigError;
pub use api::types::{Bounds, FolioEvent, ProximityLink};
pub use crate::core::rng::Rng;
pub use crate::core::time::FixedTimestep;
pub use field::{create_field, Field, Particle};
pub use input::pointer::{PointerState, SharedPointer};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{FrameBuffer, LinkInstance, ParticleInstance};
pub use extensions::{
    Easing, ease, lerp,
    ElementId, RevealInstance, RevealState, RevealStyle,
    CardTilt, hero_parallax,
};

#[cfg(feature = "chat")]
pub use chat::{FaqEntry, KnowledgeBase, MatchResult, match_query, FALLBACK_RESPONSE};
