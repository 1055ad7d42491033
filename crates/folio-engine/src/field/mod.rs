//! Decorative particle network: nodes drift home, flee the cursor, and are
//! joined by faint lines when close together.

mod links;
mod particle;

pub use links::{compute_links, for_each_link, link_opacity};
pub use particle::{repulsion_force, Particle};

use glam::Vec2;

use crate::api::config::{FieldConfig, FieldParams, MAX_PARTICLES};
use crate::api::error::{ConfigError, Result};
use crate::api::types::{Bounds, ProximityLink};
use crate::core::rng::Rng;
use crate::input::pointer::PointerState;
use crate::renderer::instance::{FrameBuffer, LinkInstance, ParticleInstance};

/// Radius range used by [`Field::new`].
pub const DEFAULT_RADIUS: (f32, f32) = (1.0, 2.5);

/// A fixed-size set of particles plus the bounds they were seeded in.
pub struct Field {
    particles: Vec<Particle>,
    bounds: Bounds,
    params: FieldParams,
    radius: (f32, f32),
    rng: Rng,
}

impl Field {
    /// Create `count` particles with homes uniformly spread over `bounds`.
    pub fn new(count: usize, bounds: Bounds, seed: u64) -> Result<Self> {
        Self::build(count, bounds, seed, DEFAULT_RADIUS, FieldParams::default())
    }

    /// Create a field from a full configuration.
    pub fn from_config(config: &FieldConfig) -> Result<Self> {
        config.validate()?;
        Self::build(
            config.count,
            config.bounds(),
            config.seed,
            (config.radius_min, config.radius_max),
            config.params,
        )
    }

    /// Wrap hand-placed particles. Mostly useful for tests and scripted scenes.
    pub fn from_particles(particles: Vec<Particle>, bounds: Bounds, params: FieldParams) -> Result<Self> {
        if particles.is_empty() || particles.len() > MAX_PARTICLES {
            return Err(ConfigError::InvalidCount(particles.len()));
        }
        check_bounds(bounds)?;
        params.validate()?;
        Ok(Self {
            particles,
            bounds,
            params,
            radius: DEFAULT_RADIUS,
            rng: Rng::new(0),
        })
    }

    fn build(count: usize, bounds: Bounds, seed: u64, radius: (f32, f32), params: FieldParams) -> Result<Self> {
        if count == 0 || count > MAX_PARTICLES {
            return Err(ConfigError::InvalidCount(count));
        }
        check_bounds(bounds)?;
        params.validate()?;

        let mut field = Self {
            particles: Vec::with_capacity(count),
            bounds,
            params,
            radius,
            rng: Rng::new(seed),
        };
        field.seed_particles(count);
        log::debug!(
            "field: {} particles in {}x{}",
            count,
            bounds.width,
            bounds.height
        );
        Ok(field)
    }

    fn seed_particles(&mut self, count: usize) {
        self.particles.clear();
        let size = self.bounds.size();
        let (r_lo, r_hi) = self.radius;
        for _ in 0..count {
            let home = self.rng.point_in(size);
            let radius = self.rng.range(r_lo, r_hi);
            self.particles.push(Particle::at_home(home, radius));
        }
    }

    /// Advance every particle by one fixed tick.
    /// Particles are independent, so update order has no effect.
    pub fn step(&mut self, pointer: &PointerState) {
        let params = self.params;
        let pointer = pointer.position;
        for p in &mut self.particles {
            p.tick(pointer, &params);
        }
    }

    /// All pairs closer than the connection distance, each once with `i < j`.
    pub fn links(&self) -> Vec<ProximityLink> {
        compute_links(&self.particles, &self.params)
    }

    /// Record new bounds for future reseeding. Existing particles keep their
    /// homes and positions; call [`Field::reseed`] to spread them over the
    /// new area.
    pub fn resize(&mut self, bounds: Bounds) -> Result<()> {
        check_bounds(bounds)?;
        self.bounds = bounds;
        Ok(())
    }

    /// Recreate the particle set with fresh homes inside the current bounds.
    /// The count is unchanged; the RNG continues from where it was.
    pub fn reseed(&mut self) {
        let count = self.particles.len();
        self.seed_particles(count);
        log::debug!(
            "field: reseeded {} particles in {}x{}",
            count,
            self.bounds.width,
            self.bounds.height
        );
    }

    /// Pack positions and links into flat instance arrays for the renderer.
    pub fn write_frame(&self, frame: &mut FrameBuffer) {
        frame.clear();
        frame.particles.extend(self.particles.iter().map(|p| ParticleInstance {
            x: p.position.x,
            y: p.position.y,
            radius: p.radius,
            alpha: 1.0,
        }));
        let particles = &self.particles;
        for_each_link(particles, &self.params, |link| {
            let a = particles[link.i as usize].position;
            let b = particles[link.j as usize].position;
            frame.links.push(LinkInstance {
                x0: a.x,
                y0: a.y,
                x1: b.x,
                y1: b.y,
                opacity: link.opacity,
            });
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// True when every particle has come to rest on its home.
    pub fn is_settled(&self) -> bool {
        self.particles.iter().all(Particle::is_settled)
    }

    /// Mean distance from home, useful for deciding when to stop redrawing.
    pub fn mean_displacement(&self) -> f32 {
        let total: f32 = self
            .particles
            .iter()
            .map(|p| p.position.distance(p.home))
            .sum();
        total / self.particles.len() as f32
    }
}

/// Short alias matching the host-facing vocabulary.
pub fn create_field(count: usize, bounds: Bounds, seed: u64) -> Result<Field> {
    Field::new(count, bounds, seed)
}

fn check_bounds(bounds: Bounds) -> Result<()> {
    if bounds.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidBounds {
            width: bounds.width,
            height: bounds.height,
        })
    }
}
