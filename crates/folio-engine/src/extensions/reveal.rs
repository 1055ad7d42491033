// extensions/reveal.rs
//
// Scroll-reveal timeline. The page reports which elements just scrolled into
// view; each one fades in and rises into place once, staggered within its batch.
// Pure timing math: the page applies the resulting styles.
//
// Usage:
//   let mut reveals = RevealState::new(RevealConfig::default());
//   reveals.observe(&[ElementId(3), ElementId(4)]);
//   reveals.tick(dt);
//   let style = reveals.style(ElementId(3));

use std::collections::HashSet;

use bytemuck::{Pod, Zeroable};

use super::easing::ease;
use crate::api::config::RevealConfig;

/// Page-assigned identifier for an animated element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

/// Visual state of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    /// Downward offset in pixels (CSS `translateY`).
    pub offset_y: f32,
}

impl RevealStyle {
    pub const VISIBLE: Self = Self { opacity: 1.0, offset_y: 0.0 };

    pub fn hidden(rise: f32) -> Self {
        Self { opacity: 0.0, offset_y: rise }
    }
}

/// Per-element reveal data for the page: id, opacity, offset_y, pad.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RevealInstance {
    pub id: f32,
    pub opacity: f32,
    pub offset_y: f32,
    pub _pad: f32,
}

impl RevealInstance {
    pub const FLOATS: usize = 4;
}

/// One element's pending or running animation.
#[derive(Debug, Clone)]
struct Reveal {
    id: ElementId,
    /// Wait before the animation starts, seconds.
    delay: f32,
    /// Time since the element was observed, including the delay.
    elapsed: f32,
}

impl Reveal {
    fn progress(&self, duration: f32) -> f32 {
        let running = self.elapsed - self.delay;
        if running <= 0.0 {
            0.0
        } else if duration <= 0.0 {
            1.0
        } else {
            (running / duration).min(1.0)
        }
    }

    fn is_complete(&self, duration: f32) -> bool {
        self.elapsed >= self.delay + duration
    }
}

/// Tracks which elements have been revealed and animates the ones in flight.
#[derive(Debug)]
pub struct RevealState {
    config: RevealConfig,
    active: Vec<Reveal>,
    /// Every element ever observed. Elements reveal at most once.
    seen: HashSet<ElementId>,
    /// Elements that finished since the last drain.
    completed: Vec<ElementId>,
}

impl RevealState {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            active: Vec::new(),
            seen: HashSet::new(),
            completed: Vec::new(),
        }
    }

    /// Start revealing a batch of elements that entered the viewport together.
    /// The k-th element of the batch waits `k * stagger` before animating.
    /// Elements already observed keep their slot in the stagger but are not
    /// restarted. Returns the number of newly started reveals.
    pub fn observe(&mut self, batch: &[ElementId]) -> usize {
        let mut started = 0;
        for (index, &id) in batch.iter().enumerate() {
            if !self.seen.insert(id) {
                continue;
            }
            self.active.push(Reveal {
                id,
                delay: index as f32 * self.config.stagger,
                elapsed: 0.0,
            });
            started += 1;
        }
        started
    }

    /// Advance all running reveals. Returns how many finished this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        if !(dt.is_finite() && dt > 0.0) {
            return 0;
        }
        let duration = self.config.duration;
        let before = self.completed.len();
        let completed = &mut self.completed;
        self.active.retain_mut(|reveal| {
            reveal.elapsed += dt;
            if reveal.is_complete(duration) {
                completed.push(reveal.id);
                false
            } else {
                true
            }
        });
        self.completed.len() - before
    }

    /// Current style of an element. Unobserved elements are hidden, finished
    /// ones fully visible.
    pub fn style(&self, id: ElementId) -> RevealStyle {
        match self.active.iter().find(|r| r.id == id) {
            Some(reveal) => self.style_of(reveal),
            None if self.seen.contains(&id) => RevealStyle::VISIBLE,
            None => RevealStyle::hidden(self.config.rise),
        }
    }

    fn style_of(&self, reveal: &Reveal) -> RevealStyle {
        let t = reveal.progress(self.config.duration);
        RevealStyle {
            opacity: ease(0.0, 1.0, t, self.config.easing),
            offset_y: ease(self.config.rise, 0.0, t, self.config.easing),
        }
    }

    /// Write styles of all in-flight reveals, in observation order.
    pub fn write_instances(&self, out: &mut Vec<RevealInstance>) {
        out.clear();
        out.extend(self.active.iter().map(|reveal| {
            let style = self.style_of(reveal);
            RevealInstance {
                id: reveal.id.0 as f32,
                opacity: style.opacity,
                offset_y: style.offset_y,
                _pad: 0.0,
            }
        }));
    }

    /// Drain elements that finished since the last call.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = ElementId> + '_ {
        self.completed.drain(..)
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.seen.contains(&id) && !self.active.iter().any(|r| r.id == id)
    }

    /// Number of reveals still animating or waiting on their stagger.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::easing::Easing;

    fn linear() -> RevealState {
        RevealState::new(RevealConfig {
            easing: Easing::Linear,
            ..RevealConfig::default()
        })
    }

    #[test]
    fn unseen_elements_are_hidden() {
        let reveals = linear();
        assert_eq!(reveals.style(ElementId(1)), RevealStyle::hidden(30.0));
    }

    #[test]
    fn reveal_runs_to_visible() {
        let mut reveals = linear();
        reveals.observe(&[ElementId(1)]);

        reveals.tick(0.3);
        let mid = reveals.style(ElementId(1));
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.offset_y - 15.0).abs() < 1e-3);

        assert_eq!(reveals.tick(0.3), 1);
        assert_eq!(reveals.style(ElementId(1)), RevealStyle::VISIBLE);
        assert!(reveals.is_revealed(ElementId(1)));
        assert!(reveals.is_empty());
        assert_eq!(reveals.drain_completed().collect::<Vec<_>>(), vec![ElementId(1)]);
    }

    #[test]
    fn batch_is_staggered() {
        let mut reveals = linear();
        reveals.observe(&[ElementId(1), ElementId(2), ElementId(3)]);
        reveals.tick(0.15);

        assert!(reveals.style(ElementId(1)).opacity > 0.0);
        assert!(reveals.style(ElementId(2)).opacity > 0.0);
        assert_eq!(reveals.style(ElementId(3)), RevealStyle::hidden(30.0));

        // Third element starts at 0.2 s and ends at 0.8 s.
        reveals.tick(0.6);
        assert_eq!(reveals.len(), 1);
        reveals.tick(0.1);
        assert!(reveals.is_empty());
    }

    #[test]
    fn elements_reveal_once() {
        let mut reveals = linear();
        assert_eq!(reveals.observe(&[ElementId(7)]), 1);
        reveals.tick(1.0);
        assert_eq!(reveals.observe(&[ElementId(7), ElementId(8)]), 1);
        assert_eq!(reveals.style(ElementId(7)), RevealStyle::VISIBLE);
    }

    #[test]
    fn instances_follow_observation_order() {
        let mut reveals = linear();
        reveals.observe(&[ElementId(5), ElementId(2)]);
        reveals.tick(0.05);
        let mut out = Vec::new();
        reveals.write_instances(&mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 5.0);
        assert_eq!(out[1].id, 2.0);
        assert_eq!(out[1].opacity, 0.0);
        assert_eq!(std::mem::size_of::<RevealInstance>(), RevealInstance::FLOATS * 4);
    }

    #[test]
    fn bad_dt_is_ignored() {
        let mut reveals = linear();
        reveals.observe(&[ElementId(1)]);
        assert_eq!(reveals.tick(f32::NAN), 0);
        assert_eq!(reveals.tick(-1.0), 0);
        assert_eq!(reveals.style(ElementId(1)).opacity, 0.0);
    }
}
