// extensions/parallax.rs
//
// Hero background drift while the hero is still on screen.

/// Background offset per pixel scrolled.
pub const PARALLAX_SPEED: f32 = 0.3;

/// Background-position offset for the hero at `scroll_y`.
///
/// Returns `None` once the hero has scrolled out of view; the page then
/// leaves the last offset in place.
#[inline]
pub fn hero_parallax(scroll_y: f32, hero_height: f32) -> Option<f32> {
    if scroll_y < hero_height {
        Some(scroll_y * PARALLAX_SPEED)
    } else {
        None
    }
}
