//! Browser bindings for the portfolio page.
//!
//! The page calls `folio_init` once, then `folio_tick` from its
//! `requestAnimationFrame` loop, and reads particle, link and reveal data
//! straight out of WASM memory through the `get_*_ptr` accessors. Every
//! export is a no-op until `folio_init` has succeeded.

pub mod runner;

pub use runner::FolioRunner;

use std::cell::RefCell;

use folio_engine::{CardTilt, InputEvent};
#[cfg(feature = "chat")]
use folio_engine::FALLBACK_RESPONSE;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<FolioRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut FolioRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

/// Build the runner from a JSON config ("" for defaults).
/// Returns false and logs the reason when the config is rejected.
#[wasm_bindgen]
pub fn folio_init(config_json: &str) -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match FolioRunner::from_json(config_json) {
        Ok(runner) => {
            let count = runner.particle_count();
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("folio: initialized with {count} particles");
            true
        }
        Err(e) => {
            log::error!("folio: init failed: {e}");
            false
        }
    }
}

#[wasm_bindgen]
pub fn folio_tick(frame_dt: f32) {
    with_runner(|r| r.tick(frame_dt));
}

#[wasm_bindgen]
pub fn folio_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn folio_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn folio_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// Elements that entered the viewport in one IntersectionObserver callback.
#[wasm_bindgen]
pub fn folio_reveal(ids: &[u32]) {
    with_runner(|r| r.observe(ids));
}

// ---- Hover and scroll effects (stateless, usable before init) ----

/// Hero background offset in pixels, or NaN once the hero has scrolled
/// past (the page keeps its last value).
#[wasm_bindgen]
pub fn folio_parallax_offset(scroll_y: f32, hero_height: f32) -> f32 {
    folio_engine::hero_parallax(scroll_y, hero_height).unwrap_or(f32::NAN)
}

/// `[rotate_x_deg, rotate_y_deg, scale]` for a pointer at (`x`, `y`) inside
/// a `width` x `height` card.
#[wasm_bindgen]
pub fn folio_card_tilt(x: f32, y: f32, width: f32, height: f32) -> Vec<f32> {
    CardTilt::hover(x, y, width, height).as_array().to_vec()
}

/// `[rotate_x_deg, rotate_y_deg, scale]` once the pointer leaves a card.
#[wasm_bindgen]
pub fn folio_card_tilt_rest() -> Vec<f32> {
    CardTilt::REST.as_array().to_vec()
}

// ---- Chat ----

#[cfg(feature = "chat")]
#[wasm_bindgen]
pub fn folio_ask(query: &str) -> String {
    with_runner(|r| r.ask(query).response.to_owned())
        .unwrap_or_else(|| FALLBACK_RESPONSE.to_owned())
}

/// Score of the best match for `query` (0 means the fallback was used).
#[cfg(feature = "chat")]
#[wasm_bindgen]
pub fn folio_ask_score(query: &str) -> u32 {
    with_runner(|r| r.ask(query).score).unwrap_or(0)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_particles_ptr() -> *const f32 {
    with_runner(|r| r.particles_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_particle_count() -> u32 {
    with_runner(|r| r.particle_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_links_ptr() -> *const f32 {
    with_runner(|r| r.links_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_link_count() -> u32 {
    with_runner(|r| r.link_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_reveal_ptr() -> *const f32 {
    with_runner(|r| r.reveal_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_reveal_count() -> u32 {
    with_runner(|r| r.reveal_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height()).unwrap_or(0.0)
}
