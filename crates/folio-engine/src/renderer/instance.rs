use bytemuck::{Pod, Zeroable};

/// Per-particle render data read by the page's canvas renderer.
/// Wire format: 4 floats = 16 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl ParticleInstance {
    pub const FLOATS: usize = 4;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One line segment between two linked particles.
/// Wire format: 5 floats = 20 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LinkInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub opacity: f32,
}

impl LinkInstance {
    pub const FLOATS: usize = 5;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Everything the renderer needs for one frame of the particle field.
/// Rebuilt in place every frame; capacity is kept across frames.
pub struct FrameBuffer {
    pub particles: Vec<ParticleInstance>,
    pub links: Vec<LinkInstance>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(particles),
            links: Vec::with_capacity(particles * 4),
        }
    }

    pub fn clear(&mut self) {
        self.particles.clear();
        self.links.clear();
    }

    pub fn particle_count(&self) -> u32 {
        self.particles.len() as u32
    }

    pub fn link_count(&self) -> u32 {
        self.links.len() as u32
    }

    /// Raw pointer to particle data for direct reads from WASM memory.
    pub fn particles_ptr(&self) -> *const f32 {
        self.particles.as_ptr() as *const f32
    }

    /// Raw pointer to link data for direct reads from WASM memory.
    pub fn links_ptr(&self) -> *const f32 {
        self.links.as_ptr() as *const f32
    }

    /// Flat float view of the particle section.
    pub fn particle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.particles)
    }

    /// Flat float view of the link section.
    pub fn link_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.links)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
