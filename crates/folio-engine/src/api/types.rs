use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Viewport-sized rectangle anchored at the origin, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Finite and strictly positive in both dimensions.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Two particles close enough to be drawn joined. Always `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityLink {
    pub i: u32,
    pub j: u32,
    pub opacity: f32,
}

/// An event communicated from Rust to the page's script.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct FolioEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl FolioEvent {
    pub const FLOATS: usize = 4;

    /// An element finished its reveal animation. `a` = element id.
    pub const REVEAL_DONE: f32 = 1.0;

    pub fn reveal_done(id: u32) -> Self {
        Self {
            kind: Self::REVEAL_DONE,
            a: id as f32,
            ..Self::default()
        }
    }
}
