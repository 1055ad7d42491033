use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;

/// Where the pointer is, if it is over the page at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

impl PointerState {
    pub const ABSENT: Self = Self { position: None };

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Vec2::new(x, y)),
        }
    }

    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }
}

/// Single-word pointer handoff for hosts that write pointer state on one
/// thread and step the field on another. Both coordinates live in one
/// `AtomicU64`, so a reader sees either the old or the new pair, never a mix.
pub struct SharedPointer {
    bits: AtomicU64,
}

/// Quiet NaN in both halves marks "absent". A present pointer with NaN
/// coordinates is stored as absent too.
const ABSENT_BITS: u64 = 0x7fc0_0000_7fc0_0000;

fn pack(state: PointerState) -> u64 {
    match state.position {
        Some(p) if p.is_finite() => ((p.x.to_bits() as u64) << 32) | p.y.to_bits() as u64,
        _ => ABSENT_BITS,
    }
}

fn unpack(bits: u64) -> PointerState {
    if bits == ABSENT_BITS {
        return PointerState::ABSENT;
    }
    let x = f32::from_bits((bits >> 32) as u32);
    let y = f32::from_bits(bits as u32);
    PointerState::at(x, y)
}

impl SharedPointer {
    pub fn new(state: PointerState) -> Self {
        Self {
            bits: AtomicU64::new(pack(state)),
        }
    }

    pub fn store(&self, state: PointerState) {
        self.bits.store(pack(state), Ordering::Release);
    }

    pub fn load(&self) -> PointerState {
        unpack(self.bits.load(Ordering::Acquire))
    }

    pub fn clear(&self) {
        self.store(PointerState::ABSENT);
    }
}

impl Default for SharedPointer {
    fn default() -> Self {
        Self::new(PointerState::ABSENT)
    }
}
