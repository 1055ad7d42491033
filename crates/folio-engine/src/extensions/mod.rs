// extensions/mod.rs
//
// Animation helpers that sit beside the particle field.
// They never touch field state; the runner ticks them on the same clock.
// `parallax` and `tilt` are stateless and called straight from the page.

pub mod easing;
pub mod parallax;
pub mod reveal;
pub mod tilt;

pub use easing::{ease, lerp, Easing};
pub use parallax::{hero_parallax, PARALLAX_SPEED};
pub use reveal::{ElementId, RevealInstance, RevealState, RevealStyle};
pub use tilt::{CardTilt, HOVER_SCALE, TILT_PERSPECTIVE};
