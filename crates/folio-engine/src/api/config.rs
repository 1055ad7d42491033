use serde::{Deserialize, Serialize};

use crate::api::error::{ConfigError, Result};
use crate::api::types::Bounds;
use crate::extensions::easing::Easing;

/// Largest particle count a field accepts. Links are O(n²) per frame, and a
/// page background needs a few hundred at most.
pub const MAX_PARTICLES: usize = 4096;

/// Tuning constants for particle motion and link rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    /// Pointer influence radius.
    pub repel_distance: f32,
    /// Peak push applied at zero distance.
    pub repel_force: f32,
    /// Fraction of the home offset added to velocity each tick.
    pub return_speed: f32,
    /// Velocity multiplier for pointer-influenced particles.
    pub pointer_damping: f32,
    /// Velocity multiplier while returning home.
    pub return_damping: f32,
    /// Below this distance from home a particle snaps and stops.
    pub snap_distance: f32,
    /// Pairs closer than this are linked.
    pub connection_distance: f32,
    /// Opacity of a link between coincident particles.
    pub link_opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            repel_distance: 130.0,
            repel_force: 2.5,
            return_speed: 0.02,
            pointer_damping: 0.80,
            return_damping: 0.35,
            snap_distance: 0.1,
            connection_distance: 150.0,
            link_opacity: 0.30,
        }
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<()> {
        positive("repel_distance", self.repel_distance)?;
        positive("connection_distance", self.connection_distance)?;
        non_negative("repel_force", self.repel_force)?;
        non_negative("return_speed", self.return_speed)?;
        non_negative("snap_distance", self.snap_distance)?;
        non_negative("link_opacity", self.link_opacity)?;
        unit("pointer_damping", self.pointer_damping)?;
        unit("return_damping", self.return_damping)?;
        Ok(())
    }
}

/// How the particle field is seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    pub width: f32,
    pub height: f32,
    /// Seed for home positions and radii (0 is remapped internally).
    pub seed: u64,
    pub radius_min: f32,
    pub radius_max: f32,
    /// Recreate the particle set with fresh homes after a viewport resize.
    /// When false, existing homes stay where they were.
    pub reseed_on_resize: bool,
    pub params: FieldParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            width: 800.0,
            height: 600.0,
            seed: 42,
            radius_min: 1.0,
            radius_max: 2.5,
            reseed_on_resize: false,
            params: FieldParams::default(),
        }
    }
}

impl FieldConfig {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > MAX_PARTICLES {
            return Err(ConfigError::InvalidCount(self.count));
        }
        if !self.bounds().is_valid() {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        positive("radius_min", self.radius_min)?;
        if !(self.radius_max >= self.radius_min) || !self.radius_max.is_finite() {
            return Err(ConfigError::InvalidParam {
                name: "radius_max",
                value: self.radius_max,
            });
        }
        self.params.validate()
    }
}

/// Scroll-reveal animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Delay between consecutive elements of one intersection batch, seconds.
    pub stagger: f32,
    /// Fade/rise duration, seconds.
    pub duration: f32,
    /// Initial downward offset in pixels.
    pub rise: f32,
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger: 0.1,
            duration: 0.6,
            rise: 30.0,
            easing: Easing::Ease,
        }
    }
}

impl RevealConfig {
    pub fn validate(&self) -> Result<()> {
        non_negative("stagger", self.stagger)?;
        non_negative("duration", self.duration)?;
        if !self.rise.is_finite() {
            return Err(ConfigError::InvalidParam { name: "rise", value: self.rise });
        }
        Ok(())
    }
}

/// Top-level configuration handed over by the page at init.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Fixed timestep in seconds (default: 1/60). One simulation tick per step.
    pub fixed_dt: f32,
    /// Cap on simulation ticks per frame after a stall (default: 10).
    pub max_steps_per_frame: u32,
    pub field: FieldConfig,
    pub reveal: RevealConfig,
    /// Optional replacement FAQ table (JSON array of `{triggers, response}`).
    /// When absent the embedded site table is used.
    pub faq: Option<serde_json::Value>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            field: FieldConfig::default(),
            reveal: RevealConfig::default(),
            faq: None,
        }
    }
}

impl FolioConfig {
    /// Parse and validate a config. Missing fields take their defaults;
    /// an empty or whitespace-only string yields the full default config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = if json.trim().is_empty() {
            Self::default()
        } else {
            serde_json::from_str(json)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        positive("fixed_dt", self.fixed_dt)?;
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::InvalidParam { name: "max_steps_per_frame", value: 0.0 });
        }
        self.field.validate()?;
        self.reveal.validate()
    }
}

fn positive(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParam { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParam { name, value })
    }
}

fn unit(name: &'static str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidParam { name, value })
    }
}
